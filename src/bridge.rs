//! Outlets connect features mounted under different anchors.
//!
//! The menu grid and the modal are separate Yew roots. A receiving component
//! connects its callback on mount; senders emit through the outlet and get a
//! no-op while nothing is connected.

use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

pub struct Outlet<T: 'static> {
    slot: Rc<RefCell<Option<Callback<T>>>>,
}

impl<T: 'static> Outlet<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn connect(&self, cb: Callback<T>) {
        *self.slot.borrow_mut() = Some(cb);
    }

    pub fn disconnect(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_connected(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Returns whether a receiver got the value.
    pub fn emit(&self, value: T) -> bool {
        // Clone out so the receiver may reconnect while handling the value.
        let cb = self.slot.borrow().clone();
        match cb {
            Some(cb) => {
                cb.emit(value);
                true
            }
            None => false,
        }
    }
}

impl<T: 'static> Default for Outlet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Clone for Outlet<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T: 'static> PartialEq for Outlet<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}
