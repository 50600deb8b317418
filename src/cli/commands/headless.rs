//! Headless compile-and-run for scripting

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;

use crate::cli::args::{Cli, OutputFormat};
use crate::clipboard::read_clipboard;
use crate::config::AppConfig;
use crate::models::{AppEvent, CycleReport, OutputStream, Phase};
use crate::runner::compile_and_run;

/// Run one cycle and return the exit code the process should end with
pub async fn execute_headless(cli: &Cli, config: &AppConfig) -> Result<i32> {
    let options = cli.compile_options(config);
    let source = load_source(cli, config).await?;

    log::info!(
        "Compiling {} bytes as {} with {}",
        source.len(),
        options.language.name(),
        options.compiler
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let printer = match cli.format {
        OutputFormat::Text => Some(tokio::spawn(print_live(rx))),
        _ => None,
    };

    // tx is moved in, so the printer sees the channel close when the cycle ends
    let result = compile_and_run(&source, &options, tx).await;
    if let Some(printer) = printer {
        printer.await.context("Output printer task failed")?;
    }
    let report = result.context("Compile-and-run cycle failed")?;

    match cli.format {
        OutputFormat::Text => {}
        OutputFormat::Html => println!("{}", render_html(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    log::info!(
        "Compile exit: {}, run exit: {}",
        exit_field(report.compile_exit),
        exit_field(report.run_exit)
    );
    Ok(report.final_exit_code())
}

async fn load_source(cli: &Cli, config: &AppConfig) -> Result<String> {
    match cli.source.as_deref() {
        None if cli.xclip => {
            let command = cli.clipboard_command(config);
            Ok(read_clipboard(&command)
                .await
                .context("Failed to read clipboard")?)
        }
        None => read_stdin().await,
        Some(path) if path == Path::new("-") => read_stdin().await,
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read source file {}", path.display())),
    }
}

async fn read_stdin() -> Result<String> {
    let mut source = String::new();
    tokio::io::stdin()
        .read_to_string(&mut source)
        .await
        .context("Failed to read source from stdin")?;
    Ok(source)
}

async fn print_live(mut rx: mpsc::UnboundedReceiver<AppEvent>) {
    while let Some(event) = rx.recv().await {
        if let AppEvent::Output(_, line) = event {
            match line.stream {
                OutputStream::Stdout => {
                    let mut out = std::io::stdout().lock();
                    let _ = writeln!(out, "{}", line.text);
                    let _ = out.flush();
                }
                OutputStream::Stderr => {
                    let _ = writeln!(std::io::stderr().lock(), "{}", line.text);
                }
            }
        }
    }
}

fn exit_field(code: Option<i32>) -> String {
    code.map(|c| c.to_string()).unwrap_or_default()
}

/// HTML page body with one section per phase that ran
pub fn render_html(report: &CycleReport) -> String {
    let mut html = String::new();
    for phase in [Phase::Compile, Phase::Run] {
        let exit = match phase {
            Phase::Compile => report.compile_exit,
            Phase::Run => report.run_exit,
        };
        let Some(code) = exit else { continue };
        html.push_str(&format!(
            "<h3>{} (exit {})</h3>\n<div>{}</div>\n",
            phase.name(),
            code,
            report.output(phase).to_html()
        ));
    }
    html
}
