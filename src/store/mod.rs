//! Observable state container.
//!
//! A [`Store`] owns a single state record. Changes arrive as merge patches
//! through [`Store::update`]; after each committed patch every subscribed
//! [`Observer`] is notified synchronously, in subscription order.

pub type SubscriptionId = usize;
pub type Revision = u64;

/// State that can absorb a partial update.
pub trait Merge {
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

/// Receives every committed state.
pub trait Observer<S> {
    fn notify(&mut self, state: &S);
}

impl<S, F> Observer<S> for F
where
    F: FnMut(&S),
{
    fn notify(&mut self, state: &S) {
        self(state)
    }
}

/// Read accessor plus update function, the view layer's handle on a store.
pub trait Cell<S: Merge> {
    fn get_state(&self) -> &S;
    fn update(&mut self, patch: S::Patch);
}

pub struct Store<S> {
    state: S,
    observers: Vec<(SubscriptionId, Box<dyn Observer<S>>)>,
    next_id: SubscriptionId,
    revision: Revision,
}

impl<S: Merge> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            next_id: 0,
            revision: 0,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    /// Number of updates committed so far.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Merge `patch` into the current state and notify observers.
    pub fn update(&mut self, patch: S::Patch) -> Revision {
        self.state.merge(patch);
        self.revision += 1;
        tracing::trace!(revision = self.revision, "state committed");
        for (_, observer) in self.observers.iter_mut() {
            observer.notify(&self.state);
        }
        self.revision
    }

    /// Register an observer. It is handed the current state right away and
    /// every committed state afterwards.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer<S> + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        let mut observer: Box<dyn Observer<S>> = Box::new(observer);
        observer.notify(&self.state);
        self.observers.push((id, observer));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }
}

impl<S: Merge> Cell<S> for Store<S> {
    fn get_state(&self) -> &S {
        Store::get_state(self)
    }

    fn update(&mut self, patch: S::Patch) {
        Store::update(self, patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        count: i32,
        label: String,
    }

    #[derive(Default)]
    struct CounterPatch {
        count: Option<i32>,
        label: Option<String>,
    }

    impl Merge for Counter {
        type Patch = CounterPatch;

        fn merge(&mut self, patch: CounterPatch) {
            if let Some(count) = patch.count {
                self.count = count;
            }
            if let Some(label) = patch.label {
                self.label = label;
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<Counter>>>, impl FnMut(&Counter)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |s: &Counter| sink.borrow_mut().push(s.clone()))
    }

    #[test]
    fn test_patch_only_overwrites_present_fields() {
        let mut store = Store::new(Counter {
            count: 1,
            label: "one".into(),
        });
        store.update(CounterPatch {
            count: Some(2),
            label: None,
        });
        assert_eq!(store.get_state().count, 2);
        assert_eq!(store.get_state().label, "one");
    }

    #[test]
    fn test_subscribe_delivers_current_state_then_updates() {
        let mut store = Store::new(Counter::default());
        let (seen, observer) = recorder();
        store.subscribe(observer);
        store.update(CounterPatch {
            count: Some(5),
            ..Default::default()
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].count, 0);
        assert_eq!(seen[1], *store.get_state());
    }

    #[test]
    fn test_observers_notified_in_subscription_order() {
        let mut store = Store::new(Counter::default());
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let order = order.clone();
            store.subscribe(move |_: &Counter| order.borrow_mut().push(name));
        }
        order.borrow_mut().clear();

        store.update(CounterPatch::default());
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = Store::new(Counter::default());
        let (seen, observer) = recorder();
        let id = store.subscribe(observer);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.subscriber_count(), 0);

        store.update(CounterPatch {
            count: Some(9),
            ..Default::default()
        });
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_empty_patch_still_commits() {
        let mut store = Store::new(Counter::default());
        let (seen, observer) = recorder();
        store.subscribe(observer);
        assert_eq!(store.revision(), 0);
        assert_eq!(store.update(CounterPatch::default()), 1);
        assert_eq!(store.revision(), 1);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_struct_observer() {
        struct Tally(Rc<RefCell<usize>>);
        impl Observer<Counter> for Tally {
            fn notify(&mut self, _: &Counter) {
                *self.0.borrow_mut() += 1;
            }
        }

        let count = Rc::new(RefCell::new(0));
        let mut store = Store::new(Counter::default());
        store.subscribe(Tally(count.clone()));
        store.update(CounterPatch::default());
        store.update(CounterPatch::default());
        assert_eq!(*count.borrow(), 3);
    }
}
