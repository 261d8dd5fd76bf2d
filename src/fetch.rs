//! Generic async-fetch resource.
//!
//! The one wrapper every data provider hydrates through: run a loader,
//! expose `{data, loading, error}`, and offer a manual refresh that does not
//! block the view. The host calls [`AsyncResource::load`] whenever its
//! inputs change (there is no render loop to observe dependencies here) and
//! [`AsyncResource::refresh`] for background updates.
//!
//! There is no cancellation or de-duplication: overlapping calls race and
//! the last one to settle wins. Callers that need generation counters build
//! them on top.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use log::error;

use crate::constants::GENERIC_FETCH_ERROR;

type Loader<T> =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = anyhow::Result<T>> + Send>> + Send + Sync>;

/// Observable state of a fetch resource.
#[derive(Clone, Debug)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

/// A shareable handle around a zero-argument async loader.
pub struct AsyncResource<T> {
    state: Arc<Mutex<FetchState<T>>>,
    loader: Loader<T>,
}

impl<T> Clone for AsyncResource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            loader: Arc::clone(&self.loader),
        }
    }
}

impl<T: Clone + Send + 'static> AsyncResource<T> {
    /// Wrap a loader. The resource starts in `loading` state with no data,
    /// matching a view that mounts before its first fetch settles.
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(FetchState {
                data: None,
                loading: true,
                error: None,
            })),
            loader: Arc::new(move || {
                Box::pin(loader()) as Pin<Box<dyn Future<Output = anyhow::Result<T>> + Send>>
            }),
        }
    }

    /// Run the loader with the blocking semantics of the mount/input-change
    /// path: `loading` is raised for the duration and lowered when the call
    /// settles, whatever the outcome.
    pub async fn load(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.loading = true;
        }
        self.settle(true).await;
    }

    /// Re-run the loader without touching `loading`. Used for non-blocking
    /// background updates, e.g. after an upload lands in a visible
    /// directory.
    pub async fn refresh(&self) {
        self.settle(false).await;
    }

    async fn settle(&self, clear_loading: bool) {
        let result = (self.loader)().await;

        if let Ok(mut state) = self.state.lock() {
            match result {
                Ok(data) => {
                    state.data = Some(data);
                    state.error = None;
                }
                Err(err) => {
                    let message = err.to_string();
                    let message = if message.trim().is_empty() {
                        GENERIC_FETCH_ERROR.to_string()
                    } else {
                        message
                    };
                    error!("Fetch failed: {message}");
                    state.error = Some(message);
                }
            }
            if clear_loading {
                state.loading = false;
            }
        }
    }

    /// Current state, observable mid-flight.
    pub fn snapshot(&self) -> FetchState<T> {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|_| FetchState {
                data: None,
                loading: false,
                error: Some(GENERIC_FETCH_ERROR.to_string()),
            })
    }

    pub fn data(&self) -> Option<T> {
        self.snapshot().data
    }

    pub fn loading(&self) -> bool {
        self.snapshot().loading
    }

    pub fn error(&self) -> Option<String> {
        self.snapshot().error
    }
}
