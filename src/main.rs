//! cppexec binary entry point

use anyhow::Result;
use std::time::Duration;

fn main() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(cppexec::cli::run());

    // process::exit skips destructors, so leftover tasks (and the children
    // and workspaces they own) must be dropped with the runtime first
    runtime.shutdown_timeout(Duration::from_secs(2));

    std::process::exit(result?);
}
