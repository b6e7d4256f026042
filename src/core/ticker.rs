use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use tokio::{
    sync::oneshot,
    task::JoinHandle,
    time::{Duration, Instant, interval_at},
};

/// Interval between progress dots.
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Background task printing a `.` per tick until stopped.
///
/// `stop` takes the ticker by value, so the stop signal is sent exactly once.
/// Dropping a ticker without stopping it also ends the task, but leaves the
/// line unterminated.
#[derive(Debug)]
pub struct Ticker<W> {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<W>,
}

impl Ticker<Stdout> {
    /// Tick on stdout at [`TICK_INTERVAL`]. Must be called inside a tokio runtime.
    pub fn start() -> Self {
        Self::start_with(io::stdout(), TICK_INTERVAL)
    }
}

impl<W> Ticker<W>
where
    W: Write + Send + 'static,
{
    pub fn start_with(mut out: W, period: Duration) -> Self {
        let (stop, mut stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            // First dot after one full period, not immediately.
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    biased;
                    _ = &mut stopped => break,
                    _ = ticks.tick() => {
                        let _ = out.write_all(b".");
                        let _ = out.flush();
                    }
                }
            }
            out
        });
        Self { stop, handle }
    }

    /// Stop ticking and terminate the progress line with a newline.
    ///
    /// # Errors
    /// Returns an error if the ticking task panicked.
    pub async fn stop(self) -> Result<W> {
        // The receiver only goes away once the task has finished.
        let _ = self.stop.send(());
        let mut out = self.handle.await.context("progress ticker task failed")?;
        let _ = out.write_all(b"\n");
        let _ = out.flush();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn immediate_stop_prints_only_newline() {
        let ticker = Ticker::start_with(Vec::new(), Duration::from_secs(60));
        let out = ticker.stop().await.unwrap();
        assert_eq!(out, b"\n");
    }

    #[tokio::test]
    async fn ticks_then_single_newline() {
        let ticker = Ticker::start_with(Vec::new(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(60)).await;
        let out = ticker.stop().await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
        let dots = text.trim_end_matches('\n');
        assert!(!dots.is_empty());
        assert!(dots.chars().all(|c| c == '.'));
    }
}
