use std::{
    ffi::OsString,
    io::{self, Read},
    process::{ExitStatus, Stdio},
};

use anyhow::{Context, Result};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tokio::process::Command;
use tracing::debug;

/// Azure CLI executable, looked up on `PATH`.
pub const AZ_PROGRAM: &str = "az";
/// Tag telling the janitor how often the group is expected to be refreshed.
pub const CADENCE_TAG: &str = "CleanupFrequency=Weekly";

/// Result of an `az` invocation that actually ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded { output: String },
    Failed { status: ExitStatus, output: String },
}

/// One `az group update` call refreshing the janitor tags.
#[derive(Debug, Clone)]
pub struct ResetRequest {
    program: OsString,
    group: String,
    subscription: Option<String>,
    created: String,
}

/// `Created` tag value: UTC, whole seconds, `Z` suffix.
///
/// # Errors
/// Returns an error if the time cannot be formatted.
pub fn timestamp(now: OffsetDateTime) -> Result<String> {
    let now = now
        .to_offset(time::UtcOffset::UTC)
        .replace_nanosecond(0)
        .context("failed to truncate timestamp")?;
    now.format(&Rfc3339).context("failed to format timestamp")
}

impl ResetRequest {
    /// # Errors
    /// Returns an error if `now` cannot be turned into a tag value.
    pub fn new(group: &str, subscription: Option<&str>, now: OffsetDateTime) -> Result<Self> {
        Ok(Self {
            program: OsString::from(AZ_PROGRAM),
            group: group.to_string(),
            subscription: subscription.map(String::from),
            created: timestamp(now)?,
        })
    }

    /// Run a different executable with the same arguments.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// Arguments passed to `az`, program name excluded.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "group".to_string(),
            "update".to_string(),
            "--name".to_string(),
            self.group.clone(),
        ];
        if let Some(sub) = &self.subscription {
            args.push("--subscription".to_string());
            args.push(sub.clone());
        }
        args.extend([
            "--tags".to_string(),
            CADENCE_TAG.to_string(),
            format!("Created={}", self.created),
            "--only-show-errors".to_string(),
            "--output".to_string(),
            "none".to_string(),
        ]);
        args
    }

    /// Run the command to completion, capturing stdout and stderr through one
    /// pipe so the output keeps the order it was written in.
    ///
    /// # Errors
    /// Returns an error only if the program could not be started or waited on.
    /// A non-zero exit is reported as [`Outcome::Failed`].
    pub async fn run(&self) -> Result<Outcome> {
        let args = self.args();
        debug!(
            "running command: {} {}",
            self.program.to_string_lossy(),
            args.join(" ")
        );

        let (mut reader, writer) = io::pipe().context("failed to create output pipe")?;
        let writer_err = writer
            .try_clone()
            .context("failed to duplicate output pipe")?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_err);
        let mut child = cmd.spawn().with_context(|| {
            format!(
                "failed to run `{}`; is the Azure CLI installed and on PATH?",
                self.program.to_string_lossy()
            )
        })?;
        // Our copies of the write end must close, or the reader never sees EOF.
        drop(cmd);

        let collect = tokio::task::spawn_blocking(move || {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).map(|_| buf)
        });

        let status = child.wait().await.with_context(|| {
            format!("failed to wait for `{}`", self.program.to_string_lossy())
        })?;
        let bytes = collect
            .await
            .context("output reader task failed")?
            .context("failed to read command output")?;
        let output = String::from_utf8_lossy(&bytes).into_owned();

        if status.success() {
            Ok(Outcome::Succeeded { output })
        } else {
            Ok(Outcome::Failed { status, output })
        }
    }
}
