//! Timer-backed [`Scheduler`] for the browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo::timers::callback::Timeout;
use pri_core::{Scheduler, TimerId};
use pri_core::schedule::Task;

/// Runs tasks through `setTimeout`. Dropping a pending [`Timeout`] clears it,
/// so cancelling is just removing the handle.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    timers: Rc<RefCell<HashMap<TimerId, Timeout>>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timers = Rc::clone(&self.timers);
        let timeout = Timeout::new(millis, move || {
            // Unregistered first so a cancel from inside the task is a no-op.
            let fired = timers.borrow_mut().remove(&id);
            task();
            drop(fired);
        });
        self.timers.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        self.timers.borrow_mut().remove(&id);
    }
}
