pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod report;
pub mod style;

use anyhow::{Context, Result, anyhow};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::{
    app::context::AppContext,
    core::{Outcome, ResetRequest, Resolver, Ticker},
};

/// Entry point: resolve the resource group, refresh its tags, report.
///
/// # Errors
/// Returns an error if no resource group can be resolved, the config file is
/// unusable, `az` cannot be started, or `az` exits unsuccessfully.
pub fn run(ctx: &AppContext) -> Result<()> {
    let resolved = Resolver::from_context(ctx).resolve()?;
    debug!("resource group {} taken from {}", resolved.group, resolved.source);
    info!("Resetting Janitor for group {}", resolved.group);

    let now = OffsetDateTime::now_utc();
    let request = ResetRequest::new(&resolved.group, ctx.subscription.as_deref(), now)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    match rt.block_on(reset(&request))? {
        Outcome::Succeeded { .. } => {
            let exe = report::schedule_exe(std::env::current_exe());
            report::report_success(request.group(), ctx.subscription.as_deref(), &exe, now);
            Ok(())
        }
        Outcome::Failed { status, output } => {
            report::report_failure(status, &output);
            Err(anyhow!("failed to reset janitor tags on {}", request.group()))
        }
    }
}

/// Run `request` while a progress ticker prints to stdout.
///
/// The ticker is stopped and its line terminated before this returns,
/// whether or not `az` could be run.
///
/// # Errors
/// Returns an error if `az` could not be started or the ticker task failed.
pub async fn reset(request: &ResetRequest) -> Result<Outcome> {
    let ticker = Ticker::start();
    let result = request.run().await;
    ticker.stop().await?;
    result
}
