//! Trailing-edge debouncing on the tokio runtime.
//!
//! A [`Debounced`] wrapper defers its function by a fixed wait. Each new call
//! aborts the deferred call scheduled by the previous one, so only the last
//! call in a burst runs, once the burst has been quiet for the full wait.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//! use tacklebox_core::functions::debounce;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> tacklebox_core::Result<()> {
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let save = debounce(move |query: String| sink.lock().unwrap().push(query), Duration::from_millis(20))?;
//!
//! save.call("r".to_string());
//! save.call("ru".to_string());
//! save.call("rust".to_string());
//! tokio::time::sleep(Duration::from_millis(60)).await;
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["rust".to_string()]);
//! # Ok(())
//! # }
//! ```

use crate::{Error, Result};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync + 'static>;

/// A debounced function; see [`debounce`].
pub struct Debounced<A> {
    func: Callback<A>,
    wait: Duration,
    handle: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Wrap `func` so that it runs `wait` after the most recent
/// [`call`](Debounced::call), with that call's argument.
///
/// The deferred calls run on the tokio runtime that is current when
/// `debounce` is called.
///
/// # Errors
///
/// Returns [`Error::Runtime`] when called outside a tokio runtime.
pub fn debounce<A, F>(func: F, wait: Duration) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let handle = Handle::try_current()
        .map_err(|e| Error::Runtime(format!("debounce requires a tokio runtime: {e}")))?;
    Ok(Debounced {
        func: Arc::new(func),
        wait,
        handle,
        pending: Mutex::new(None),
    })
}

impl<A: Send + 'static> Debounced<A> {
    /// Schedule the function with `args`, superseding any call still waiting.
    pub fn call(&self, args: A) {
        let func = Arc::clone(&self.func);
        let wait = self.wait;

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                trace!("superseding pending debounced call");
            }
            previous.abort();
        }
        *pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(wait).await;
            func(args);
        }));
        trace!(wait_ms = wait.as_millis(), "scheduled debounced call");
    }

    /// Drop the pending call, if any, without running it.
    pub fn cancel(&self) {
        if let Some(previous) = self.lock_pending().take() {
            previous.abort();
            trace!("cancelled pending debounced call");
        }
    }

    /// Whether a call is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.lock_pending().as_ref().is_some_and(|task| !task.is_finished())
    }

    /// The configured wait.
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced").field("wait", &self.wait).finish_non_exhaustive()
    }
}
