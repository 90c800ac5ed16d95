//! Repeating one-second tick behind an explicit start/stop handle

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Drives the countdown recompute. While running, a background task
/// sends one message per second into the channel the main loop
/// selects on. `start` and `stop` are idempotent so callers can
/// invoke them on every mutation without tracking emptiness
/// transitions themselves.
pub struct TickScheduler {
    tx: mpsc::Sender<()>,
    task: Option<JoinHandle<()>>,
    period: Duration,
}

impl TickScheduler {
    pub fn new(tx: mpsc::Sender<()>) -> Self {
        Self {
            tx,
            task: None,
            period: TICK_PERIOD,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Spawn the tick task. No-op while a schedule is already live,
    /// so duplicate schedules cannot pile up.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let tx = self.tx.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            // The first interval fire is immediate; the mutation that
            // started the schedule already rendered, so skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        }));
    }

    /// Cancel the schedule. No further ticks fire until `start` is
    /// called again. No-op while stopped.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
