//! Observable values.
//!
//! A [`MutableProperty`] owns a value and notifies its observers on every
//! write. A [`Property`] is a read-only view, either of a mutable property
//! or of a value derived from other properties with [`Observable::map`],
//! [`Property::combine_latest`] and friends.
//!
//! # Propagation
//!
//! - Observers run synchronously on the writer's thread, after the new
//!   value is stored and outside every internal lock, so an observer may
//!   read or write other properties.
//! - Concurrent writers race; the last write wins, for the stored value,
//!   for `watch` receivers and for every derived property.
//! - A derived property keeps its sources alive and unregisters from them
//!   when dropped.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_property::prelude::*;
//!
//! let name = MutableProperty::new(String::from("ada"));
//! let length = name.map(String::len);
//! name.set("grace".into());
//! assert_eq!(length.value(), 5);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;

static NEXT_OBSERVER: AtomicU64 = AtomicU64::new(1);

/// Identifies an observer registered with [`Observable::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    fn next() -> Self {
        Self(NEXT_OBSERVER.fetch_add(1, Ordering::Relaxed))
    }
}

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

// ============================================================================
// CELL
// ============================================================================

trait Detach: Send + Sync {
    fn detach(&self, id: ObserverId) -> bool;
}

/// An observer registered on some cell. Holding it keeps that cell alive;
/// dropping it unregisters the observer.
pub(crate) struct Link {
    source: Arc<dyn Detach>,
    id: ObserverId,
}

impl Drop for Link {
    fn drop(&mut self) {
        self.source.detach(self.id);
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link").field("id", &self.id).finish_non_exhaustive()
    }
}

struct Cell<T> {
    value: RwLock<T>,
    observers: Mutex<Vec<(ObserverId, Callback<T>)>>,
    sender: watch::Sender<T>,
    links: Mutex<Vec<Link>>,
}

impl<T: Clone + Send + Sync + 'static> Cell<T> {
    fn new(value: T) -> Arc<Self> {
        let (sender, _) = watch::channel(value.clone());
        Arc::new(Self {
            value: RwLock::new(value),
            observers: Mutex::new(Vec::new()),
            sender,
            links: Mutex::new(Vec::new()),
        })
    }

    fn get(&self) -> T {
        self.value.read().clone()
    }

    fn set(&self, value: T) {
        self.modify(|current| *current = value);
    }

    /// Stores and publishes to `watch` under the write lock, so the stored
    /// and watched values always agree on the last write. Observers run
    /// after the lock is released.
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, value) = {
            let mut guard = self.value.write();
            let result = f(&mut *guard);
            self.sender.send_replace(guard.clone());
            (result, guard.clone())
        };
        self.notify(&value);
        result
    }

    fn notify(&self, value: &T) {
        let observers: Vec<Callback<T>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(value);
        }
    }

    fn observe(&self, observer: Callback<T>) -> ObserverId {
        let id = ObserverId::next();
        self.observers.lock().push((id, observer));
        id
    }

    fn remove(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }
}

impl<T: Clone + Send + Sync + 'static> Detach for Cell<T> {
    fn detach(&self, id: ObserverId) -> bool {
        self.remove(id)
    }
}

// ============================================================================
// OBSERVABLE
// ============================================================================

/// A value that can be read, observed and derived from.
///
/// Derived properties recompute from the source's current value under
/// their own lock rather than from the value handed to the observer, so a
/// notification delivered late by a slower writer cannot leave them stale.
pub trait Observable {
    /// The observed value.
    type Value: Clone + Send + Sync + 'static;

    /// A read-only handle sharing this value.
    fn as_property(&self) -> Property<Self::Value>;

    /// The current value.
    fn value(&self) -> Self::Value {
        self.as_property().cell.get()
    }

    /// Calls `f` with every new value until [`unobserve`](Self::unobserve).
    fn observe<F>(&self, f: F) -> ObserverId
    where
        F: Fn(&Self::Value) + Send + Sync + 'static,
        Self: Sized,
    {
        self.as_property().cell.observe(Arc::new(f))
    }

    /// Removes an observer. Returns `false` if it was not registered.
    fn unobserve(&self, id: ObserverId) -> bool {
        self.as_property().cell.remove(id)
    }

    /// An async subscription that always holds the latest value.
    fn watch(&self) -> watch::Receiver<Self::Value> {
        self.as_property().cell.sender.subscribe()
    }

    /// A property holding `f` of the current value, updated on every change.
    fn map<U, F>(&self, f: F) -> Property<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&Self::Value) -> U + Send + Sync + 'static,
        Self: Sized,
    {
        let source = self.as_property();
        let f = Arc::new(f);
        let cell = Cell::new(f(&source.cell.get()));

        let link = {
            let weak = Arc::downgrade(&cell);
            let from = Arc::downgrade(&source.cell);
            let f = Arc::clone(&f);
            source.link(move |_| {
                if let (Some(cell), Some(from)) = (weak.upgrade(), from.upgrade()) {
                    cell.modify(|current| *current = f(&from.get()));
                }
            })
        };
        // A write may have landed between the first read and the subscription.
        cell.set(f(&source.cell.get()));
        cell.links.lock().push(link);

        Property { cell }
    }
}

// ============================================================================
// PROPERTY
// ============================================================================

/// A read-only observable value.
///
/// Cloning shares the underlying value.
pub struct Property<T> {
    cell: Arc<Cell<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// A property that never changes.
    pub fn constant(value: T) -> Self {
        Self {
            cell: Cell::new(value),
        }
    }

    /// A read-only view of `source`.
    pub fn capturing<O>(source: &O) -> Self
    where
        O: Observable<Value = T>,
    {
        source.as_property()
    }

    /// Starts at `initial` and follows `source` from its next change on.
    ///
    /// The current value of `source` is skipped.
    pub fn initial_then<O>(initial: T, source: &O) -> Self
    where
        O: Observable<Value = T>,
    {
        let cell = Cell::new(initial);
        let source = source.as_property();
        let link = {
            let weak = Arc::downgrade(&cell);
            let from = Arc::downgrade(&source.cell);
            source.link(move |_: &T| {
                if let (Some(cell), Some(from)) = (weak.upgrade(), from.upgrade()) {
                    cell.modify(|current| *current = from.get());
                }
            })
        };
        cell.links.lock().push(link);
        Self { cell }
    }

    /// Pairs the latest values of `a` and `b`, updated when either changes.
    pub fn combine_latest<A, B>(a: &A, b: &B) -> Property<(A::Value, T)>
    where
        A: Observable,
        B: Observable<Value = T>,
    {
        let a = a.as_property();
        let b = b.as_property();
        let cell = Cell::new((a.cell.get(), b.cell.get()));

        let link_a = {
            let weak = Arc::downgrade(&cell);
            let from = Arc::downgrade(&a.cell);
            a.link(move |_: &A::Value| {
                if let (Some(cell), Some(from)) = (weak.upgrade(), from.upgrade()) {
                    cell.modify(|pair| pair.0 = from.get());
                }
            })
        };
        let link_b = {
            let weak = Arc::downgrade(&cell);
            let from = Arc::downgrade(&b.cell);
            b.link(move |_: &T| {
                if let (Some(cell), Some(from)) = (weak.upgrade(), from.upgrade()) {
                    cell.modify(|pair| pair.1 = from.get());
                }
            })
        };
        cell.set((a.cell.get(), b.cell.get()));
        cell.links.lock().extend([link_a, link_b]);

        Property { cell }
    }

    /// Registers `f` for as long as the returned link lives.
    pub(crate) fn link<F>(&self, f: F) -> Link
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.cell.observe(Arc::new(f));
        Link {
            source: self.cell.clone(),
            id,
        }
    }
}

impl Property<bool> {
    /// `true` while both `self` and `other` are `true`.
    pub fn and<O>(&self, other: &O) -> Self
    where
        O: Observable<Value = bool>,
    {
        Property::<bool>::combine_latest(self, other).map(|(a, b)| *a && *b)
    }
}

impl<T: Clone + Send + Sync + 'static> Observable for Property<T> {
    type Value = T;

    fn as_property(&self) -> Property<T> {
        self.clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.cell.value.read())
            .finish()
    }
}

// ============================================================================
// MUTABLE PROPERTY
// ============================================================================

/// A writable observable value.
///
/// Cloning shares the underlying value: a write through any clone is seen
/// by all of them.
pub struct MutableProperty<T> {
    cell: Arc<Cell<T>>,
}

impl<T> Clone for MutableProperty<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> MutableProperty<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Cell::new(value),
        }
    }

    /// Stores `value` and notifies observers.
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }

    /// Edits the value in place, then notifies observers.
    pub fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.cell.modify(f)
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for MutableProperty<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + 'static> Observable for MutableProperty<T> {
    type Value = T;

    fn as_property(&self) -> Property<T> {
        Property {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableProperty")
            .field("value", &*self.cell.value.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clones_share_the_value() {
        let a = MutableProperty::new(1);
        let b = a.clone();
        b.set(2);
        assert_eq!(a.value(), 2);
        assert_eq!(a.as_property().value(), 2);
    }

    #[test]
    fn observers_see_every_write() {
        let property = MutableProperty::new(0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let id = {
            let seen = Arc::clone(&seen);
            property.observe(move |v| seen.lock().push(*v))
        };

        property.set(1);
        property.modify(|v| *v += 10);
        assert!(property.unobserve(id));
        property.set(99);

        assert_eq!(*seen.lock(), vec![1, 11]);
        assert!(!property.unobserve(id));
    }

    #[test]
    fn map_follows_source() {
        let name = MutableProperty::new(String::from("ada"));
        let length = name.map(String::len);
        assert_eq!(length.value(), 3);
        name.set("grace".into());
        assert_eq!(length.value(), 5);
    }

    #[test]
    fn derived_property_keeps_source_alive() {
        let length = MutableProperty::new(String::from("abc")).map(String::len);
        assert_eq!(length.value(), 3);
    }

    #[test]
    fn dropping_derived_unregisters_observer() {
        let source = MutableProperty::new(1);
        let doubled = source.map(|v| v * 2);
        assert_eq!(source.cell.observers.lock().len(), 1);
        drop(doubled);
        assert_eq!(source.cell.observers.lock().len(), 0);
    }

    #[test]
    fn combine_latest_tracks_both_sides() {
        let a = MutableProperty::new(1);
        let b = MutableProperty::new("x");
        let both = Property::combine_latest(&a, &b);
        assert_eq!(both.value(), (1, "x"));
        a.set(2);
        b.set("y");
        assert_eq!(both.value(), (2, "y"));
    }

    #[test]
    fn and_of_bools() {
        let a = MutableProperty::new(true);
        let b = MutableProperty::new(false);
        let both = a.as_property().and(&b);
        assert!(!both.value());
        b.set(true);
        assert!(both.value());
        a.set(false);
        assert!(!both.value());
    }

    #[test]
    fn initial_then_skips_current_value() {
        let source = MutableProperty::new(42);
        let follower = Property::initial_then(0, &source);
        assert_eq!(follower.value(), 0);
        source.set(7);
        assert_eq!(follower.value(), 7);
    }

    #[test]
    fn observer_may_write_another_property() {
        let a = MutableProperty::new(0);
        let b = MutableProperty::new(0);
        {
            let b = b.clone();
            a.observe(move |v| b.set(v + 1));
        }
        a.set(5);
        assert_eq!(b.value(), 6);
    }

    #[test]
    fn late_notification_does_not_revert_derived_values() {
        use std::sync::mpsc;
        use std::thread;

        let source = MutableProperty::new(0);
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = Mutex::new(release_rx);
        source.observe(move |value: &i32| {
            if *value == 1 {
                let _ = entered_tx.send(());
                let _ = release_rx.lock().recv();
            }
        });

        let mapped = source.map(|value| value * 10);
        let follower = Property::initial_then(0, &source);
        let paired = Property::combine_latest(&source, &Property::constant("x"));
        let watch = source.watch();

        let slow = {
            let source = source.clone();
            thread::spawn(move || source.set(1))
        };
        entered_rx.recv().unwrap();
        source.set(2);
        release_tx.send(()).unwrap();
        slow.join().unwrap();

        assert_eq!(source.value(), 2);
        assert_eq!(mapped.value(), source.value() * 10);
        assert_eq!(follower.value(), 2);
        assert_eq!(paired.value(), (2, "x"));
        assert_eq!(*watch.borrow(), 2);
    }

    #[test]
    fn constant_never_changes() {
        let constant = Property::constant("fixed");
        let captured = Property::capturing(&constant);
        assert_eq!(captured.value(), "fixed");
    }
}
