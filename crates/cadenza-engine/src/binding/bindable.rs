/// Change notification passed to [`Bindable`] handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange<T> {
    pub old: T,
    pub new: T,
}

/// An observable value with change-only notification.
///
/// Handlers run synchronously on the mutating thread, in registration order.
/// Repeated assignment of an equal value fires nothing. There is no
/// reentrancy guard: a handler must not mutate the bindable it observes.
pub struct Bindable<T> {
    value: T,
    handlers: Vec<Box<dyn FnMut(&ValueChange<T>)>>,
}

impl<T: Clone + PartialEq> Bindable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            handlers: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value` and notifies handlers if it differs from the current
    /// value. Returns whether a change occurred.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }

        let change = ValueChange {
            old: std::mem::replace(&mut self.value, value.clone()),
            new: value,
        };
        for handler in &mut self.handlers {
            handler(&change);
        }
        true
    }

    /// Registers a handler invoked on every subsequent change.
    pub fn on_change(&mut self, f: impl FnMut(&ValueChange<T>) + 'static) {
        self.handlers.push(Box::new(f));
    }

    /// Like [`on_change`], but also invokes the handler immediately with the
    /// current value (`old == new`). This is the registration used when a
    /// consumer needs to populate itself from the value it starts with.
    ///
    /// [`on_change`]: Bindable::on_change
    pub fn on_change_now(&mut self, mut f: impl FnMut(&ValueChange<T>) + 'static) {
        let now = ValueChange {
            old: self.value.clone(),
            new: self.value.clone(),
        };
        f(&now);
        self.handlers.push(Box::new(f));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Bindable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindable")
            .field("value", &self.value)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording_bindable(initial: bool) -> (Bindable<bool>, Rc<RefCell<Vec<(bool, bool)>>>) {
        let mut b = Bindable::new(initial);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        b.on_change(move |c| sink.borrow_mut().push((c.old, c.new)));
        (b, seen)
    }

    // ── change notification ───────────────────────────────────────────────

    #[test]
    fn set_fires_on_change_only() {
        let (mut b, seen) = recording_bindable(false);

        assert!(b.set(true));
        assert!(!b.set(true));
        assert!(!b.set(true));
        assert!(b.set(false));

        assert_eq!(*seen.borrow(), vec![(false, true), (true, false)]);
    }

    #[test]
    fn set_reports_old_and_new() {
        let mut b = Bindable::new(5u32);
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        b.on_change(move |c| *sink.borrow_mut() = Some(c.clone()));

        b.set(9);
        assert_eq!(*seen.borrow(), Some(ValueChange { old: 5, new: 9 }));
        assert_eq!(*b.get(), 9);
    }

    // ── immediate registration ────────────────────────────────────────────

    #[test]
    fn on_change_now_fires_with_current_value() {
        let mut b = Bindable::new(3u32);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        b.on_change_now(move |c| sink.borrow_mut().push((c.old, c.new)));

        // Immediate invocation with old == new, then normal change tracking.
        b.set(4);
        assert_eq!(*seen.borrow(), vec![(3, 3), (3, 4)]);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let mut b = Bindable::new(0u32);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let sink = Rc::clone(&order);
            b.on_change(move |_| sink.borrow_mut().push(tag));
        }

        b.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
