//! One-shot timer scheduling.
//!
//! DESIGN
//! ======
//! Scheduled tasks are fire-and-forget: there is no handle and no
//! cancellation, matching `setTimeout` calls whose ids are never kept. The
//! manual scheduler runs tasks on a virtual clock so lifecycle timing can be
//! asserted without waiting.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::cell::RefCell;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce() + 'static>;

pub trait Scheduler: Clone + 'static {
    /// Run `task` once, `delay_ms` from now.
    fn schedule(&self, delay_ms: u32, task: Task);
}

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Virtual-clock scheduler. Tasks due at the same instant run in the order
/// they were scheduled.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward by `ms`, running every task that comes due,
    /// including tasks scheduled by tasks along the way.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms.saturating_add(ms);
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.clock.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<Task> {
        let mut clock = self.clock.borrow_mut();
        let idx = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= target)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(idx, _)| idx)?;
        let next = clock.pending.swap_remove(idx);
        clock.now_ms = next.due_ms;
        Some(next.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms.saturating_add(u64::from(delay_ms));
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(Pending { due_ms, seq, task });
    }
}
