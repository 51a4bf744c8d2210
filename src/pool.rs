//! Shared thread pool backing every server's accept loop and connection
//! handlers.
//!
//! Listeners can't be shared since each server owns its own port, but the
//! threads behind them can be: a test suite that starts one mock per test
//! then pays one parked thread per accept loop instead of a thread per
//! connection on top of it.

use once_cell::sync::Lazy;
use threadfin::ThreadPool;

/// Get access to the shared thread pool.
///
/// Accept loops never finish and so pin their thread for the process
/// lifetime; the ceiling effectively bounds how many connections are handled
/// at once on top of the running servers.
pub(crate) fn pool() -> &'static ThreadPool {
    static POOL: Lazy<ThreadPool> = Lazy::new(|| ThreadPool::builder().size(..100).build());

    &POOL
}
