use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_mount;

use super::cell::{FetchCell, FetchState};
use super::gate::ClientGatedCell;
use super::shared::{self, CacheKey};
use crate::api::ApiError;
use crate::config;

/// Fetches through `api_call` on mount and whenever `deps` changes.
///
/// The returned snapshot keeps the last good `data` across failures.
#[hook]
pub fn use_fetch<T, D, F, Fut, E>(deps: D, api_call: F) -> FetchState<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display + 'static,
{
    use_fetch_cell(deps, api_call).1
}

#[hook]
fn use_fetch_cell<T, D, F, Fut, E>(deps: D, api_call: F) -> (Rc<FetchCell<T, D>>, FetchState<T>)
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display + 'static,
{
    let cell = use_memo(|_| FetchCell::<T, D>::new(), ());
    let snapshot = use_state(FetchState::<T>::default);

    {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = cell.subscribe(move |state| snapshot.set(state.clone()));
                move || {
                    drop(subscription);
                    cell.unmount();
                }
            },
            (),
        );
    }

    {
        let cell = cell.clone();
        use_effect_with_deps(
            move |deps: &D| {
                if let Some(task) = cell.sync(deps.clone(), api_call) {
                    spawn_local(task);
                }
                || ()
            },
            deps,
        );
    }

    (cell, (*snapshot).clone())
}

/// Same contract as [`use_fetch`], but nothing is requested before the
/// component has mounted in the browser; `loading` stays true until then.
#[hook]
pub fn use_client_fetch<T, D, F, Fut, E>(deps: D, api_call: F) -> FetchState<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display + 'static,
{
    let cell = use_memo(|_| ClientGatedCell::<T, D>::new(), ());
    let snapshot = use_state(FetchState::<T>::default);
    let is_client = use_state(|| false);

    {
        let cell = cell.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = cell.subscribe(move |state| snapshot.set(state.clone()));
                move || {
                    drop(subscription);
                    cell.unmount();
                }
            },
            (),
        );
    }

    {
        let cell = cell.clone();
        let is_client = is_client.clone();
        use_mount(move || {
            cell.open();
            is_client.set(true);
        });
    }

    {
        let cell = cell.clone();
        use_effect_with_deps(
            move |(_, deps): &(bool, D)| {
                if let Some(task) = cell.sync(deps.clone(), api_call) {
                    spawn_local(task);
                }
                || ()
            },
            (*is_client, deps),
        );
    }

    cell.present((*snapshot).clone())
}

/// [`use_fetch`] routed through the page-wide shared cache.
///
/// While mounted, the key is re-read whenever its refresh interval has
/// passed, so long-lived sections pick up backend edits.
#[hook]
pub fn use_cached<T, F, Fut>(key: CacheKey, fetch: F) -> FetchState<Rc<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch = Rc::new(fetch);
    let (cell, state) = {
        let fetch = fetch.clone();
        use_fetch_cell(key, move || shared::global().fetch(key, move || fetch()))
    };

    use_effect_with_deps(
        move |key: &CacheKey| {
            let key = *key;
            let interval = Interval::new(config::CACHE_REFRESH_CHECK_MS, move || {
                if !cell.is_alive() || !shared::global().refresh_due(key, Utc::now()) {
                    return;
                }
                log::debug!("refreshing {}", key.as_str());
                let fetch = fetch.clone();
                spawn_local(cell.load(move || shared::global().fetch(key, move || fetch())));
            });
            move || drop(interval)
        },
        key,
    );

    state
}
