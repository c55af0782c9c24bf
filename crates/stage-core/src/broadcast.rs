//! Subscriber registry: section renderers and the background stack each
//! register a `(progress, active_index)` callback; the frame loop publishes
//! to all of them once per frame.
//!
//! Everything runs on one thread, but a callback may register or dispose
//! subscriptions while a publish is in flight (a section mounting during
//! the first frame does exactly that), so `publish` works on a snapshot
//! and reconciles afterwards.

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn FnMut(f32, usize)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
    // Ids disposed while a publish had the entries checked out.
    dead: Vec<u64>,
}

#[derive(Clone, Default)]
pub struct Broadcaster {
    registry: Rc<RefCell<Registry>>,
}

/// Handle returned by [`Broadcaster::register`]. Disposing (or dropping)
/// it removes exactly that callback; double-dispose is a no-op.
pub struct Subscription {
    registry: Rc<RefCell<Registry>>,
    id: u64,
    live: bool,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, callback: impl FnMut(f32, usize) + 'static) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.entries.push((id, Box::new(callback)));
        Subscription {
            registry: self.registry.clone(),
            id,
            live: true,
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every live subscriber once. Order among subscribers is not
    /// part of the contract.
    pub fn publish(&self, progress: f32, active_index: usize) {
        // Check the entries out so callbacks can touch the registry.
        let mut snapshot = std::mem::take(&mut self.registry.borrow_mut().entries);
        for (id, cb) in snapshot.iter_mut() {
            let disposed = self.registry.borrow().dead.contains(id);
            if !disposed {
                cb(progress, active_index);
            }
        }
        let mut reg = self.registry.borrow_mut();
        // Anything registered mid-publish landed in the fresh vec.
        let registered_during = std::mem::take(&mut reg.entries);
        snapshot.extend(registered_during);
        if !reg.dead.is_empty() {
            let dead = std::mem::take(&mut reg.dead);
            snapshot.retain(|(id, _)| !dead.contains(id));
        }
        reg.entries = snapshot;
    }
}

impl Subscription {
    pub fn dispose(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        let mut reg = self.registry.borrow_mut();
        let before = reg.entries.len();
        let id = self.id;
        reg.entries.retain(|(entry_id, _)| *entry_id != id);
        if reg.entries.len() == before {
            // Entries are checked out by an in-flight publish; tombstone it.
            reg.dead.push(id);
        }
    }

    pub fn is_disposed(&self) -> bool {
        !self.live
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}
