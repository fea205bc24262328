//! Browser timers behind the core's task ids.
//!
//! Each scheduled task owns a `gloo_timers` [`Timeout`]; dropping it clears
//! the browser timer. A timeout cannot drop itself while its callback runs, so
//! fired ids are parked and pruned on the next schedule.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use interactions::effect::TaskId;

#[derive(Default)]
pub struct Timers {
    pending: HashMap<TaskId, Timeout>,
    fired: Vec<TaskId>,
}

impl Timers {
    pub fn schedule(&mut self, id: TaskId, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.prune();
        self.pending.insert(id, Timeout::new(delay_ms, callback));
    }

    /// Withdraw a pending task. Returns `false` if it already ran or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if self.fired.contains(&id) {
            return false;
        }
        self.pending.remove(&id).is_some()
    }

    /// Record that `id`'s callback is running.
    pub fn mark_fired(&mut self, id: TaskId) {
        self.fired.push(id);
    }

    fn prune(&mut self) {
        for id in self.fired.drain(..) {
            self.pending.remove(&id);
        }
    }
}
