//! Cancellable scheduled tasks and a virtual clock to drive them.
//!
//! The core allocates [`TaskId`]s with [`TaskIds`] and emits
//! [`Effect::Schedule`] / [`Effect::Cancel`]. In the browser those become
//! `setTimeout` handles. Natively, [`VirtualClock`] absorbs the same effects
//! and releases due tasks as virtual time advances, so a two-second form reset
//! runs instantly and deterministically under test.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use crate::effect::{Deferred, Effect, TaskId};

/// Monotonic task id allocator.
#[derive(Debug, Default)]
pub struct TaskIds {
    next: u64,
}

impl TaskIds {
    pub fn next_id(&mut self) -> TaskId {
        self.next += 1;
        TaskId(self.next)
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TaskId,
    due_ms: u64,
    seq: u64,
    task: Deferred,
}

/// Virtual time source for scheduled tasks.
///
/// Tasks fire in due-time order; ties fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Record every schedule and cancel in `effects`; other effects are ignored.
    pub fn absorb(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::Schedule { id, delay_ms, task } => self.schedule(id, delay_ms, task),
                Effect::Cancel { id } => {
                    self.cancel(id);
                }
                _ => {}
            }
        }
    }

    pub fn schedule(&mut self, id: TaskId, delay_ms: u32, task: Deferred) {
        self.seq += 1;
        self.pending.push(Pending { id, due_ms: self.now_ms + u64::from(delay_ms), seq: self.seq, task });
    }

    /// Withdraw a task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        before != self.pending.len()
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Deferred> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        let next = self.pending.remove(index);
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next.task)
    }

    /// Advance by `ms`, returning every task that came due, in firing order.
    ///
    /// Tasks scheduled in response to the returned ones are not seen here; use
    /// [`Self::pop_due`] to interleave firing with new scheduling.
    pub fn advance(&mut self, ms: u64) -> Vec<Deferred> {
        let until = self.now_ms + ms;
        let mut fired = Vec::new();
        while let Some(task) = self.pop_due(until) {
            fired.push(task);
        }
        self.now_ms = until;
        fired
    }

    /// Move the clock forward without firing anything past `until_ms`.
    pub fn settle_at(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}
