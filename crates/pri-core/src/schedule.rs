//! Timer scheduling.
//!
//! Everything time-based in the coordinator (debounce, stagger settle,
//! typewriter steps, feedback auto-hide) goes through [`Scheduler`]. The
//! browser crate backs it with `gloo` timeouts; [`ManualScheduler`] is a
//! virtual clock that only moves when told to.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;
use std::time::Duration;

/// A one-shot callback.
pub type Task = Box<dyn FnOnce()>;

/// Identifier of a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Something that can run a task after a delay.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Task) -> TimerId;

    /// Cancel a pending task. Cancelling a task that already ran is a no-op.
    fn cancel(&self, id: TimerId);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn after(&self, delay: Duration, task: Task) -> TimerId {
        (**self).after(delay, task)
    }

    fn cancel(&self, id: TimerId) {
        (**self).cancel(id)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Due {
    run_at: Duration,
    id: TimerId,
}

impl PartialOrd for Due {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Due {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Due>,
    tasks: HashMap<TimerId, Task>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Cloning yields another handle onto the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Move the clock forward, running every task that falls due in order.
    ///
    /// Tasks scheduled by a running task are honored within the same call if
    /// they fall due before the target time.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            let task = {
                let mut inner = self.inner.borrow_mut();
                let due = match inner.queue.peek() {
                    Some(due) if due.run_at <= target => inner.queue.pop(),
                    _ => None,
                };
                match due {
                    Some(due) => {
                        inner.now = due.run_at;
                        inner.tasks.remove(&due.id)
                    }
                    None => {
                        inner.now = target;
                        break;
                    }
                }
            };
            // Cancelled entries stay in the heap without a task.
            if let Some(task) = task {
                task();
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Task) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let run_at = inner.now + delay;
        inner.queue.push(Due { run_at, id });
        inner.tasks.insert(id, task);
        id
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().tasks.remove(&id);
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.tasks.len())
            .finish()
    }
}
