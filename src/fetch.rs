//! One-shot fetch lifecycle shared by the GitHub widgets.

use std::future::Future;
use std::rc::Rc;

use futures::future::abortable;
use gloo::console::{log, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T> {
    Start,
    Resolve(T),
    Reject(&'static str),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    /// Returns the state after `action`, or `None` when the action does not
    /// apply. `Success` and `Failure` are terminal.
    pub fn next(&self, action: FetchAction<T>) -> Option<Self> {
        match (self, action) {
            (Self::Idle, FetchAction::Start) => Some(Self::Loading),
            (Self::Loading, FetchAction::Resolve(data)) => Some(Self::Success(data)),
            (Self::Loading, FetchAction::Reject(message)) => Some(Self::Failure(message)),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}

impl<T: Clone + 'static> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.next(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// Runs `fetch` once, when the calling component mounts.
///
/// The request is aborted when the component unmounts, and a response that
/// lands after that is dropped instead of being dispatched. Any error is
/// logged with its full chain and surfaced only as `failure_message`.
#[hook]
pub fn use_fetch_once<T, F, Fut>(
    label: &'static str,
    failure_message: &'static str,
    fetch: F,
) -> UseReducerHandle<FetchState<T>>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = anyhow::Result<T>> + 'static,
{
    let state = use_reducer(FetchState::<T>::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(FetchAction::Start);
            log!(format!("{label}: fetching"));

            let (task, handle) = abortable(fetch());
            let guard = handle.clone();
            spawn_local(async move {
                let Ok(result) = task.await else {
                    log!(format!("{label}: aborted before completion"));
                    return;
                };
                if guard.is_aborted() {
                    log!(format!("{label}: response dropped after unmount"));
                    return;
                }
                match result {
                    Ok(data) => {
                        log!(format!("{label}: loaded"));
                        dispatcher.dispatch(FetchAction::Resolve(data));
                    }
                    Err(e) => {
                        warn!(format!("{label}: {e:#}"));
                        dispatcher.dispatch(FetchAction::Reject(failure_message));
                    }
                }
            });

            move || handle.abort()
        });
    }

    state
}
