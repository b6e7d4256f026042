use std::process::ExitCode;

use clap::Parser;
use janitor_reset::app::context::AppContext;
use janitor_reset::cli::Cli;
use janitor_reset::logging::init::init_tracing;
use janitor_reset::report::report_error;
use janitor_reset::run;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = AppContext::from_cli(&cli);

    if let Err(err) = init_tracing(ctx.verbosity).and_then(|()| run(&ctx)) {
        report_error(&err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
