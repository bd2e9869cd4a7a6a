use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::{Rc, Weak};

/// Snapshot of one fetch call site.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    /// Last successfully decoded payload. Never cleared by a later failure.
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

type Listener<T> = Rc<dyn Fn(&FetchState<T>)>;

struct Inner<T, D> {
    state: FetchState<T>,
    deps: Option<D>,
    generation: u64,
    alive: bool,
    listeners: Vec<(u64, Listener<T>)>,
    next_listener_id: u64,
}

/// Observable `{data, loading, error}` store fed by one endpoint function.
///
/// Requests are tagged with a generation number; only the most recently
/// started request may write its result, and nothing is written once the
/// cell has been unmounted.
pub struct FetchCell<T, D = ()> {
    inner: Rc<RefCell<Inner<T, D>>>,
}

impl<T, D> Clone for FetchCell<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static, D: 'static> Default for FetchCell<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static, D: 'static> FetchCell<T, D> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: FetchState::default(),
                deps: None,
                generation: 0,
                alive: true,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    pub fn state(&self) -> FetchState<T> {
        self.inner.borrow().state.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.inner.borrow().alive
    }

    /// Registers `listener` for every state change. Dropping the returned
    /// subscription unregisters it.
    pub fn subscribe(&self, listener: impl Fn(&FetchState<T>) + 'static) -> Subscription<T, D> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            cell: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Starts a request when `deps` differs from the last synced value (or on
    /// the first call). Returns the task to drive, or `None` when nothing
    /// changed or the cell is already unmounted.
    pub fn sync<F, Fut, E>(&self, deps: D, api_call: F) -> Option<impl Future<Output = ()> + 'static>
    where
        D: PartialEq,
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.alive || inner.deps.as_ref() == Some(&deps) {
                return None;
            }
            inner.deps = Some(deps);
        }
        Some(self.load(api_call))
    }

    /// Unconditionally starts a new request, superseding any in flight.
    ///
    /// `api_call` is invoked right away; the returned future only waits for
    /// its result and applies it.
    pub fn load<F, Fut, E>(&self, api_call: F) -> impl Future<Output = ()> + 'static
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.state.loading = true;
            inner.state.error = None;
            inner.generation
        };
        self.notify();

        let request = api_call();
        let cell = Rc::downgrade(&self.inner);
        async move {
            let result = request.await;
            if let Some(inner) = cell.upgrade() {
                FetchCell { inner }.settle(generation, result);
            }
        }
    }

    /// Marks the owner as gone. Pending requests still resolve but their
    /// results are dropped, and no listener is called again.
    pub fn unmount(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.alive = false;
        inner.listeners.clear();
    }

    fn settle<E: Display>(&self, generation: u64, result: Result<T, E>) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.alive {
                log::debug!("dropping fetch result for unmounted cell");
                return;
            }
            if inner.generation != generation {
                log::debug!(
                    "dropping superseded fetch result (generation {} < {})",
                    generation,
                    inner.generation
                );
                return;
            }
            match result {
                Ok(data) => inner.state.data = Some(data),
                Err(e) => inner.state.error = Some(e.to_string()),
            }
            inner.state.loading = false;
        }
        self.notify();
    }

    fn notify(&self) {
        // Listeners run outside the borrow so they may use the cell again.
        let (state, listeners) = {
            let inner = self.inner.borrow();
            if !inner.alive || inner.listeners.is_empty() {
                return;
            }
            let listeners: Vec<Listener<T>> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.state.clone(), listeners)
        };
        for listener in listeners {
            listener(&state);
        }
    }
}

/// Keeps a listener registered on a [`FetchCell`] until dropped.
pub struct Subscription<T, D> {
    cell: Weak<RefCell<Inner<T, D>>>,
    id: u64,
}

impl<T, D> Drop for Subscription<T, D> {
    fn drop(&mut self) {
        if let Some(inner) = self.cell.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    type Reply = Result<String, String>;

    /// An endpoint whose answer the test decides later.
    fn deferred() -> (oneshot::Sender<Reply>, impl Future<Output = Reply>) {
        let (tx, rx) = oneshot::channel::<Reply>();
        (tx, async move { rx.await.unwrap_or_else(|_| Err("dropped".to_string())) })
    }

    #[test]
    fn starts_loading_and_applies_first_success() {
        let cell: FetchCell<String> = FetchCell::new();
        assert_eq!(cell.state(), FetchState { data: None, loading: true, error: None });

        let (tx, reply) = deferred();
        let task = cell.sync((), move || reply).unwrap();
        assert_eq!(cell.state(), FetchState { data: None, loading: true, error: None });

        tx.send(Ok("X".into())).unwrap();
        block_on(task);
        assert_eq!(
            cell.state(),
            FetchState { data: Some("X".to_string()), loading: false, error: None }
        );
    }

    #[test]
    fn first_failure_reports_message_without_data() {
        let cell: FetchCell<String> = FetchCell::new();
        let task = cell.sync((), || async { Err::<String, _>("500".to_string()) }).unwrap();
        block_on(task);
        assert_eq!(
            cell.state(),
            FetchState { data: None, loading: false, error: Some("500".to_string()) }
        );
    }

    #[test]
    fn failure_keeps_previous_data() {
        let cell: FetchCell<String, u32> = FetchCell::new();
        block_on(cell.sync(1, || async { Ok::<_, String>("X".to_string()) }).unwrap());

        let (tx, reply) = deferred();
        let task = cell.sync(2, move || reply).unwrap();
        let during = cell.state();
        assert!(during.loading);
        assert_eq!(during.error, None);
        assert_eq!(during.data.as_deref(), Some("X"));

        tx.send(Err("boom".into())).unwrap();
        block_on(task);
        assert_eq!(
            cell.state(),
            FetchState { data: Some("X".to_string()), loading: false, error: Some("boom".to_string()) }
        );
    }

    #[test]
    fn slower_superseded_request_never_overwrites() {
        let cell: FetchCell<String, u32> = FetchCell::new();
        let (first_tx, first) = deferred();
        let (second_tx, second) = deferred();

        let first_task = cell.sync(1, move || first).unwrap();
        let second_task = cell.sync(2, move || second).unwrap();

        second_tx.send(Ok("second".into())).unwrap();
        block_on(second_task);
        assert_eq!(cell.state().data.as_deref(), Some("second"));

        first_tx.send(Ok("first".into())).unwrap();
        block_on(first_task);
        let state = cell.state();
        assert_eq!(state.data.as_deref(), Some("second"));
        assert!(!state.loading);
    }

    #[test]
    fn superseded_request_resolving_first_is_ignored() {
        let cell: FetchCell<String, u32> = FetchCell::new();
        let (first_tx, first) = deferred();
        let (second_tx, second) = deferred();

        let first_task = cell.sync(1, move || first).unwrap();
        let second_task = cell.sync(2, move || second).unwrap();

        first_tx.send(Ok("first".into())).unwrap();
        block_on(first_task);
        assert_eq!(cell.state(), FetchState { data: None, loading: true, error: None });

        second_tx.send(Err("late failure".into())).unwrap();
        block_on(second_task);
        assert_eq!(cell.state().data, None);
        assert_eq!(cell.state().error.as_deref(), Some("late failure"));
    }

    #[test]
    fn no_listener_call_or_write_after_unmount() {
        let cell: FetchCell<String> = FetchCell::new();
        let unmounted = Rc::new(Cell::new(false));
        let guard = Rc::clone(&unmounted);
        let _subscription = cell.subscribe(move |_| {
            if guard.get() {
                panic!("state written after unmount");
            }
        });

        let (tx, reply) = deferred();
        let task = cell.sync((), move || reply).unwrap();
        unmounted.set(true);
        cell.unmount();

        tx.send(Ok("late".into())).unwrap();
        block_on(task);
        assert_eq!(cell.state(), FetchState { data: None, loading: true, error: None });
        assert!(!cell.is_alive());
        assert!(cell.sync((), || async { Ok::<_, String>("again".to_string()) }).is_none());
    }

    #[test]
    fn same_deps_do_not_refetch() {
        let cell: FetchCell<u32, &'static str> = FetchCell::new();
        let calls = Rc::new(Cell::new(0));
        for deps in ["a", "a", "b", "b", "a"] {
            let calls = Rc::clone(&calls);
            if let Some(task) = cell.sync(deps, move || {
                calls.set(calls.get() + 1);
                async { Ok::<_, String>(1) }
            }) {
                block_on(task);
            }
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn listeners_see_every_transition_until_dropped() {
        let cell: FetchCell<u32> = FetchCell::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = cell.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        block_on(cell.load(|| async { Ok::<_, String>(5) }));
        assert_eq!(
            *seen.borrow(),
            vec![
                FetchState { data: None, loading: true, error: None },
                FetchState { data: Some(5), loading: false, error: None },
            ]
        );

        drop(subscription);
        block_on(cell.load(|| async { Ok::<_, String>(6) }));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(cell.state().data, Some(6));
    }
}
