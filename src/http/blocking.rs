//! Runtime that drives the blocking request variants.

use std::future::Future;

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

use crate::error::{Error, Result};

static RUNTIME: OnceCell<Runtime> = OnceCell::new();

fn runtime() -> Result<&'static Runtime> {
    RUNTIME.get_or_try_init(|| {
        Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("riot-requester-blocking")
            .enable_all()
            .build()
            .map_err(Error::Runtime)
    })
}

/// Runs an async request path to completion on the calling thread.
///
/// Panics if called from within an async context, like any tokio `block_on`.
pub(crate) fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    runtime()?.block_on(future)
}
