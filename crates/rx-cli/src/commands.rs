use anyhow::Result;
use tracing::info_span;

use rx_cli::cli::Command;
use rx_cli::pipeline::{RunConfig, run};
use rx_cli::types::RunResult;

pub fn run_command(command: &Command) -> Result<RunResult> {
    let args = command.report_args();
    let config = RunConfig {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        kinds: command.report_kinds(),
        top_chains: command.top_chains(),
        dry_run: args.dry_run,
    };
    let span = info_span!("run", reports = ?config.kinds, dry_run = config.dry_run);
    let _guard = span.enter();
    run(&config)
}
