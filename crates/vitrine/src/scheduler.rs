//! Scheduler — deferred, cancellable one-shot timers for Vitrine.
//!
//! The page has exactly three kinds of deferred work: the simulated
//! submission latency, the toast auto-hide, and the post-open focus
//! transfer into the modal. Each lives in a named slot; arming a slot
//! that already holds a pending timer cancels the old one first, so a
//! slot never has more than one timer outstanding.
//!
//! Integration: the app creates a `SchedulerHandle` and keeps the
//! cloneable sender; fired timers come back to the UI as ordinary
//! `Action`s on the app channel. Cancellation is `JoinHandle::abort()`.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::Display;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

use crate::action::Action;

/// Named timer slots. One pending timer per slot at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TimerSlot {
    SubscribeSubmit,
    LeadSubmit,
    ToastHide,
    ModalFocus,
}

/// Commands sent to the scheduler control loop.
#[derive(Debug)]
pub enum TimerCommand {
    /// Arm `slot` to deliver `action` after `delay`, replacing any timer
    /// already pending in that slot.
    Arm {
        slot: TimerSlot,
        delay: Duration,
        action: Action,
    },
    /// Cancel the pending timer in `slot`, if any.
    Cancel { slot: TimerSlot },
    /// Stop the scheduler and abort all pending timers.
    Shutdown,
}

/// Cloneable handle for issuing timer commands.
#[derive(Clone)]
pub struct SchedulerHandle {
    tx: mpsc::UnboundedSender<TimerCommand>,
}

impl SchedulerHandle {
    pub fn arm(
        &self,
        slot: TimerSlot,
        delay: Duration,
        action: Action,
    ) -> Result<(), mpsc::error::SendError<TimerCommand>> {
        self.tx.send(TimerCommand::Arm {
            slot,
            delay,
            action,
        })
    }

    pub fn cancel(&self, slot: TimerSlot) -> Result<(), mpsc::error::SendError<TimerCommand>> {
        self.tx.send(TimerCommand::Cancel { slot })
    }

    pub fn shutdown(&self) -> Result<(), mpsc::error::SendError<TimerCommand>> {
        self.tx.send(TimerCommand::Shutdown)
    }
}

/// Scheduler state and control loop.
pub struct Scheduler {
    action_tx: mpsc::UnboundedSender<Action>,
    cmd_rx: mpsc::UnboundedReceiver<TimerCommand>,
    pending: HashMap<TimerSlot, JoinHandle<()>>,
}

impl Scheduler {
    /// Create and spawn the scheduler loop, returning the command handle
    /// and the loop's own `JoinHandle`.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> (SchedulerHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler {
            action_tx,
            cmd_rx: rx,
            pending: HashMap::new(),
        };
        let join = tokio::spawn(async move { scheduler.run().await });
        (SchedulerHandle { tx }, join)
    }

    async fn run(&mut self) {
        debug!("Scheduler loop started");
        while let Some(cmd) = self.cmd_rx.recv().await {
            match cmd {
                TimerCommand::Arm {
                    slot,
                    delay,
                    action,
                } => self.arm(slot, delay, action),
                TimerCommand::Cancel { slot } => self.cancel(slot),
                TimerCommand::Shutdown => {
                    warn!(
                        "Scheduler shutdown requested; aborting {} pending timer(s)",
                        self.pending.len()
                    );
                    for (_, handle) in self.pending.drain() {
                        handle.abort();
                    }
                    break;
                }
            }
        }
        debug!("Scheduler loop terminating");
    }

    fn arm(&mut self, slot: TimerSlot, delay: Duration, action: Action) {
        // Replacing keeps the at-most-one-pending-per-slot invariant.
        if let Some(prev) = self.pending.remove(&slot) {
            debug!("Replacing pending timer in slot {}", slot);
            prev.abort();
        }
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(action);
        });
        self.pending.insert(slot, handle);
    }

    fn cancel(&mut self, slot: TimerSlot) {
        if let Some(handle) = self.pending.remove(&slot) {
            debug!("Cancelling timer in slot {}", slot);
            handle.abort();
        }
    }
}
