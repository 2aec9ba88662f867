// Single-slot task holder for debounced work

/// Holds at most one pending task handle. Scheduling a new one drops the
/// previous handle, which cancels it for `gloo` timers.
pub struct TaskCell<H> {
    pending: Option<H>,
}

impl<H> TaskCell<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, handle: H) {
        let previous = self.pending.replace(handle);
        drop(previous);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// A fired timer keeps its handle here until the next `schedule` or `cancel`;
    /// it must not drop itself from inside its own callback.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H> Default for TaskCell<H> {
    fn default() -> Self {
        Self::new()
    }
}

pub type TimeoutCell = TaskCell<gloo::timers::callback::Timeout>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn scheduling_replaces_pending_task() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut cell = TaskCell::new();
        for id in 1..=3 {
            cell.schedule(Probe {
                id,
                cancelled: cancelled.clone(),
            });
        }
        assert_eq!(*cancelled.borrow(), [1, 2]);
        assert!(cell.is_pending());
        cell.cancel();
        assert_eq!(*cancelled.borrow(), [1, 2, 3]);
        assert!(!cell.is_pending());
    }
}
