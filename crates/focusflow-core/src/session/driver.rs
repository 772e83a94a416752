//! Periodic tick source for a running session.

use std::time::Duration;

use log::debug;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

use super::engine::SessionToken;

/// Default tick period: one countdown second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Emits the armed session's token once per period.
///
/// At most one timer task exists at a time. Arming for a new session aborts
/// the previous task first, and tokens still queued from it are rejected by
/// the engine because they carry the old session's identity.
pub struct TickDriver {
    period: Duration,
    task: Option<JoinHandle<()>>,
    sender: mpsc::UnboundedSender<SessionToken>,
    receiver: mpsc::UnboundedReceiver<SessionToken>,
}

impl TickDriver {
    pub fn new(period: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            period,
            task: None,
            sender,
            receiver,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a timer task is currently armed.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Starts ticking for `token`, cancelling any previous timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, token: SessionToken) {
        self.disarm();

        let period = self.period;
        let sender = self.sender.clone();
        self.task = Some(tokio::spawn(async move {
            let mut cadence = interval(period);
            cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately
            cadence.tick().await;

            loop {
                cadence.tick().await;
                if sender.send(token).is_err() {
                    break;
                }
            }
        }));
        debug!("Tick driver armed for {:?} every {:?}", token, period);
    }

    /// Cancels the pending timer, if any.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Tick driver disarmed");
        }
    }

    /// Waits for the next delivered tick.
    pub async fn next_tick(&mut self) -> Option<SessionToken> {
        self.receiver.recv().await
    }
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.disarm();
    }
}
