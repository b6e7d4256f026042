use std::{
    io,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use time::{Date, Duration, OffsetDateTime, UtcOffset};
use tracing::warn;

use crate::style::{Tone, paint, paint_err};

pub const SUCCESS_MESSAGE: &str = "😊  Finished resetting Janitor!";
/// Margin applied to captured `az` output.
pub const INDENT: usize = 4;
/// How long the janitor waits before a group tagged `Weekly` is fair game.
pub const RERUN_AFTER: Duration = Duration::days(7);

/// Prefix every line of `text` with `n` spaces.
pub fn indented(text: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Captured output, trimmed and indented for the failure report.
pub fn failure_block(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return indented("(no output)", INDENT);
    }
    indented(trimmed, INDENT)
}

/// Last day the reset is good for.
pub fn rerun_by(now: OffsetDateTime) -> Date {
    (now.to_offset(UtcOffset::UTC) + RERUN_AFTER).date()
}

/// Executable to put in the crontab line, falling back to the bare binary name.
pub fn schedule_exe(current: io::Result<PathBuf>) -> PathBuf {
    current.unwrap_or_else(|err| {
        warn!("failed to get current executable: {err}");
        PathBuf::from(env!("CARGO_PKG_NAME"))
    })
}

/// Crontab entry rerunning this executable weekly, on the weekday of `now`.
pub fn schedule_line(
    exe: &Path,
    group: &str,
    subscription: Option<&str>,
    now: OffsetDateTime,
) -> String {
    let weekday = now
        .to_offset(UtcOffset::UTC)
        .weekday()
        .number_days_from_sunday();
    let mut line = format!(
        "0 9 * * {weekday} {} --group {}",
        shell_word(&exe.to_string_lossy()),
        shell_word(group)
    );
    if let Some(sub) = subscription {
        line.push_str(" --subscription ");
        line.push_str(&shell_word(sub));
    }
    line
}

/// Unstyled lines printed after a successful reset.
pub fn success_lines(
    group: &str,
    subscription: Option<&str>,
    exe: &Path,
    now: OffsetDateTime,
) -> Vec<String> {
    vec![
        SUCCESS_MESSAGE.to_string(),
        format!("Run again by {}", rerun_by(now)),
        "To keep it fresh automatically, add this to your crontab (crontab -e):".to_string(),
        indented(&schedule_line(exe, group, subscription, now), INDENT),
    ]
}

pub fn report_success(group: &str, subscription: Option<&str>, exe: &Path, now: OffsetDateTime) {
    let lines = success_lines(group, subscription, exe, now);
    println!("{}", paint(Tone::Success, &lines[0]));
    println!("{}", lines[1]);
    println!("{}", paint(Tone::Hint, &lines[2]));
    println!("{}", lines[3]);
}

pub fn report_failure(status: ExitStatus, output: &str) {
    eprintln!("{}", paint_err(Tone::Attention, &format!("az failed ({status}):")));
    eprintln!("{}", paint_err(Tone::Attention, &failure_block(output)));
}

pub fn report_error(err: &anyhow::Error) {
    eprintln!("{}", paint_err(Tone::Attention, &format!("error: {err:#}")));
}

/// Quote `word` for a POSIX shell when it holds anything beyond a safe set.
fn shell_word(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '='));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
