//! Trailing-edge debounce over a [`Scheduler`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::{Scheduler, TimerId};

/// Default quiet period.
pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(15);

struct Shared<A> {
    action: RefCell<Box<dyn FnMut(A)>>,
    pending: Cell<Option<TimerId>>,
}

/// A debounced callable produced by [`debounce`].
///
/// Each [`call`](Debounced::call) cancels the pending run and reschedules the
/// action `wait` after the latest call, forwarding that call's arguments.
pub struct Debounced<S: Scheduler, A> {
    scheduler: S,
    wait: Duration,
    shared: Rc<Shared<A>>,
}

/// Wrap `action` so it runs at most once per quiet period of length `wait`.
pub fn debounce<S, A, F>(scheduler: S, wait: Duration, action: F) -> Debounced<S, A>
where
    S: Scheduler,
    F: FnMut(A) + 'static,
{
    Debounced {
        scheduler,
        wait,
        shared: Rc::new(Shared {
            action: RefCell::new(Box::new(action)),
            pending: Cell::new(None),
        }),
    }
}

impl<S: Scheduler, A: 'static> Debounced<S, A> {
    pub fn call(&self, args: A) {
        if let Some(id) = self.shared.pending.take() {
            self.scheduler.cancel(id);
        }
        let shared = Rc::clone(&self.shared);
        let id = self.scheduler.after(
            self.wait,
            Box::new(move || {
                shared.pending.set(None);
                (shared.action.borrow_mut())(args);
            }),
        );
        self.shared.pending.set(Some(id));
    }

    /// Whether a trailing call is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.shared.pending.get().is_some()
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<S: Scheduler + Clone, A> Clone for Debounced<S, A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            wait: self.wait,
            shared: Rc::clone(&self.shared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    #[test]
    fn burst_collapses_to_last_call() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let debounced = debounce(scheduler.clone(), DEFAULT_DEBOUNCE_WAIT, move |y: u32| {
            sink.borrow_mut().push(y)
        });

        for y in [10, 40, 90, 130] {
            debounced.call(y);
            scheduler.advance(Duration::from_millis(5));
        }
        assert!(calls.borrow().is_empty());
        assert!(debounced.is_pending());

        scheduler.advance(Duration::from_millis(15));
        assert_eq!(*calls.borrow(), vec![130]);
        assert!(!debounced.is_pending());
    }

    #[test]
    fn separated_calls_each_run() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let debounced = debounce(scheduler.clone(), Duration::from_millis(15), move |y: u32| {
            sink.borrow_mut().push(y)
        });

        debounced.call(1);
        scheduler.advance(Duration::from_millis(20));
        debounced.call(2);
        scheduler.advance(Duration::from_millis(20));

        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn clones_share_the_pending_call() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let debounced = debounce(scheduler.clone(), DEFAULT_DEBOUNCE_WAIT, move |_: ()| {
            counter.set(counter.get() + 1)
        });
        let other = debounced.clone();

        debounced.call(());
        other.call(());
        scheduler.advance(Duration::from_millis(50));

        assert_eq!(count.get(), 1);
    }
}
