//! The compile-and-run handler

use tokio::process::Command;
use tokio::sync::mpsc;

use crate::errors::Result;
use crate::models::{AppEvent, CompileOptions, CycleReport, Phase};
use crate::runner::command::build_compile_command;
use crate::runner::process::stream_process;
use crate::runner::workspace::Workspace;

/// Compile `source` with `options` and, if the compiler exits with status
/// zero, run the produced binary.
///
/// Progress is reported on `tx` as it happens. The workspace is removed
/// before this returns, on success and on error alike.
pub async fn compile_and_run(
    source: &str,
    options: &CompileOptions,
    tx: mpsc::UnboundedSender<AppEvent>,
) -> Result<CycleReport> {
    let result = run_cycle(source, options, &tx).await;

    match &result {
        Ok(report) => {
            let _ = tx.send(AppEvent::CycleFinished(Box::new(report.clone())));
        }
        Err(e) => {
            log::error!("Compile-and-run cycle failed: {}", e);
            let _ = tx.send(AppEvent::CycleFailed(e.to_string()));
        }
    }

    result
}

async fn run_cycle(
    source: &str,
    options: &CompileOptions,
    tx: &mpsc::UnboundedSender<AppEvent>,
) -> Result<CycleReport> {
    let workspace = Workspace::new()?;
    let mut report = CycleReport {
        workspace: workspace.path().to_path_buf(),
        ..Default::default()
    };

    let phases = run_phases(&workspace, source, options, tx, &mut report).await;
    let cleanup = workspace.close();

    phases?;
    if let Err(e) = cleanup {
        log::warn!("Failed to remove workspace {}: {}", report.workspace.display(), e);
    }
    Ok(report)
}

async fn run_phases(
    workspace: &Workspace,
    source: &str,
    options: &CompileOptions,
    tx: &mpsc::UnboundedSender<AppEvent>,
    report: &mut CycleReport,
) -> Result<()> {
    let source_path = workspace.write_source(options.language, source)?;
    let argv = build_compile_command(options, &source_path);
    report.command = argv.clone();

    log::info!("Compiling: {}", argv.join(" "));
    let _ = tx.send(AppEvent::CycleStarted(argv.clone()));

    let mut compile = Command::new(&argv[0]);
    compile.args(&argv[1..]).current_dir(workspace.path());

    let outcome = stream_process(compile, Phase::Compile, tx).await?;
    report.compile_exit = Some(outcome.exit_code);
    report.compile_output = outcome.output;
    let _ = tx.send(AppEvent::PhaseFinished(Phase::Compile, outcome.exit_code));

    if outcome.exit_code != 0 {
        return Ok(());
    }

    let binary = workspace.binary_path();
    log::info!("Running {}", binary.display());

    let mut run = Command::new(&binary);
    run.current_dir(workspace.path());

    let outcome = stream_process(run, Phase::Run, tx).await?;
    report.run_exit = Some(outcome.exit_code);
    report.run_output = outcome.output;
    let _ = tx.send(AppEvent::PhaseFinished(Phase::Run, outcome.exit_code));

    Ok(())
}
