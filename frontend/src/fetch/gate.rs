use std::cell::Cell;
use std::fmt::Display;
use std::future::Future;

use super::cell::{FetchCell, FetchState, Subscription};

/// Readiness flag that flips once, after the app is known to be running
/// interactively in a browser.
#[derive(Debug, Default)]
pub struct ClientGate {
    open: Cell<bool>,
}

impl ClientGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Returns `true` only for the call that actually opened the gate.
    pub fn open(&self) -> bool {
        !self.open.replace(true)
    }
}

/// A [`FetchCell`] that refuses to call its endpoint until the client gate is
/// open, and reports `loading` until then.
pub struct ClientGatedCell<T, D = ()> {
    cell: FetchCell<T, D>,
    gate: ClientGate,
}

impl<T: Clone + 'static, D: 'static> Default for ClientGatedCell<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static, D: 'static> ClientGatedCell<T, D> {
    pub fn new() -> Self {
        Self {
            cell: FetchCell::new(),
            gate: ClientGate::new(),
        }
    }

    pub fn is_client(&self) -> bool {
        self.gate.is_open()
    }

    pub fn open(&self) -> bool {
        let opened = self.gate.open();
        if opened {
            log::debug!("client gate opened");
        }
        opened
    }

    pub fn state(&self) -> FetchState<T> {
        self.present(self.cell.state())
    }

    /// Applies the gate to a raw cell snapshot.
    pub fn present(&self, mut state: FetchState<T>) -> FetchState<T> {
        state.loading = state.loading || !self.gate.is_open();
        state
    }

    pub fn subscribe(&self, listener: impl Fn(&FetchState<T>) + 'static) -> Subscription<T, D> {
        self.cell.subscribe(listener)
    }

    /// Like [`FetchCell::sync`], but a no-op while the gate is closed. The
    /// deps are not recorded then, so the first sync after opening fetches.
    pub fn sync<F, Fut, E>(&self, deps: D, api_call: F) -> Option<impl Future<Output = ()> + 'static>
    where
        D: PartialEq,
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        if !self.gate.is_open() {
            return None;
        }
        self.cell.sync(deps, api_call)
    }

    pub fn unmount(&self) {
        self.cell.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn counting_call(
        calls: &Rc<Cell<u32>>,
    ) -> impl FnOnce() -> futures::future::Ready<Result<u32, String>> + 'static {
        let calls = Rc::clone(calls);
        move || {
            calls.set(calls.get() + 1);
            futures::future::ready(Ok(calls.get()))
        }
    }

    #[test]
    fn gate_opens_exactly_once() {
        let gate = ClientGate::new();
        assert!(!gate.is_open());
        assert!(gate.open());
        assert!(!gate.open());
        assert!(gate.is_open());
    }

    #[test]
    fn closed_gate_reports_loading_and_never_calls() {
        let cell: ClientGatedCell<u32> = ClientGatedCell::new();
        let calls = Rc::new(Cell::new(0));

        for _ in 0..3 {
            assert!(cell.sync((), counting_call(&calls)).is_none());
        }
        assert_eq!(calls.get(), 0);
        assert!(cell.state().loading);
        assert!(!cell.is_client());
    }

    #[test]
    fn opening_gate_leads_to_exactly_one_call() {
        let cell: ClientGatedCell<u32> = ClientGatedCell::new();
        let calls = Rc::new(Cell::new(0));
        assert!(cell.sync((), counting_call(&calls)).is_none());

        assert!(cell.open());
        let task = cell.sync((), counting_call(&calls)).expect("gate is open");
        // Re-running the effect after the readiness re-render must not refetch.
        assert!(cell.sync((), counting_call(&calls)).is_none());
        block_on(task);

        assert_eq!(calls.get(), 1);
        assert_eq!(
            cell.state(),
            FetchState { data: Some(1), loading: false, error: None }
        );
    }

    #[test]
    fn closed_gate_masks_settled_state() {
        let cell: ClientGatedCell<u32> = ClientGatedCell::new();
        let settled = FetchState { data: Some(3), loading: false, error: None };
        assert!(cell.present(settled.clone()).loading);
        cell.open();
        assert_eq!(cell.present(settled.clone()), settled);
    }
}
