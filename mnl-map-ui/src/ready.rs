//! Queue-then-fire callback gate for one-shot data loads.
//!
//! The bulk data sources load exactly once per session. UI actions that
//! depend on them (populating the county dropdown, rendering fish detail)
//! register through a [`LoadGate`]: callbacks registered before the load
//! completes are queued and run in registration order when [`resolve`]
//! is called; callbacks registered afterwards run immediately and
//! synchronously. `resolve` is idempotent.
//!
//! [`resolve`]: LoadGate::resolve

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct GateInner {
    resolved: bool,
    queued: Vec<Callback>,
}

/// Single-threaded, cheaply cloneable load gate.
#[derive(Clone, Default)]
pub struct LoadGate {
    inner: Rc<RefCell<GateInner>>,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the underlying load has completed.
    pub fn is_resolved(&self) -> bool {
        self.inner.borrow().resolved
    }

    /// Register a callback.
    ///
    /// Runs immediately (synchronously) if the gate is already resolved,
    /// otherwise queues it to run at resolution, in registration order.
    pub fn on_ready(&self, callback: impl FnOnce() + 'static) {
        let already_resolved = self.inner.borrow().resolved;
        if already_resolved {
            callback();
        } else {
            self.inner.borrow_mut().queued.push(Box::new(callback));
        }
    }

    /// Mark the load complete and drain the queue in registration order.
    ///
    /// Callbacks may themselves register further callbacks; those run in
    /// the same drain. Calling `resolve` again is a no-op.
    pub fn resolve(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.resolved {
                return;
            }
            inner.resolved = true;
        }
        // Drain without holding the borrow: a callback may call on_ready,
        // which after `resolved = true` runs it immediately.
        loop {
            let batch = std::mem::take(&mut self.inner.borrow_mut().queued);
            if batch.is_empty() {
                break;
            }
            for callback in batch {
                callback();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_callbacks_fire_in_registration_order() {
        let gate = LoadGate::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = order.clone();
            gate.on_ready(move || order.borrow_mut().push(i));
        }
        assert!(order.borrow().is_empty(), "nothing fires before resolve");
        gate.resolve();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn late_registration_fires_immediately() {
        let gate = LoadGate::new();
        gate.resolve();
        let fired = Rc::new(RefCell::new(false));
        {
            let fired = fired.clone();
            gate.on_ready(move || *fired.borrow_mut() = true);
        }
        assert!(*fired.borrow(), "post-resolution callbacks are synchronous");
    }

    #[test]
    fn resolve_is_idempotent() {
        let gate = LoadGate::new();
        let count = Rc::new(RefCell::new(0));
        {
            let count = count.clone();
            gate.on_ready(move || *count.borrow_mut() += 1);
        }
        gate.resolve();
        gate.resolve();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn reentrant_registration_during_resolve() {
        let gate = LoadGate::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        {
            let gate2 = gate.clone();
            let order = order.clone();
            gate.on_ready(move || {
                order.borrow_mut().push("outer");
                let order = order.clone();
                gate2.on_ready(move || order.borrow_mut().push("inner"));
            });
        }
        gate.resolve();
        assert_eq!(*order.borrow(), vec!["outer", "inner"]);
    }
}
