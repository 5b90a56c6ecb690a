//! Global fork-join worker pool lifecycle (E2).
//!
//! The pool is a process-wide shared resource with an explicit
//! `set`/`clear` lifecycle, exactly as spec.md §5/§9 describe it. A cleared
//! (or never-set) pool makes the parallel entry points behave identically to
//! their sequential counterparts: no thread is ever spawned.

#![cfg(feature = "parallel")]

use std::sync::{Arc, Mutex, OnceLock};

static GLOBAL_POOL: OnceLock<Mutex<Option<Arc<rayon::ThreadPool>>>> = OnceLock::new();

fn slot() -> &'static Mutex<Option<Arc<rayon::ThreadPool>>> {
    GLOBAL_POOL.get_or_init(|| Mutex::new(None))
}

/// Installs `pool` as the process-wide fork-join pool used by
/// `parallel_multiply_karatsuba`/`parallel_pow` when no explicit pool is
/// passed to them.
pub fn set_pool(pool: Arc<rayon::ThreadPool>) {
    *slot().lock().unwrap() = Some(pool);
}

/// Clears the process-wide pool; subsequent parallel entry points that rely
/// on it fall back to the sequential path.
pub fn clear_pool() {
    *slot().lock().unwrap() = None;
}

/// Runs `f` with a reference to the currently installed global pool, if
/// any.
pub fn with_global_pool<R>(f: impl FnOnce(Option<&rayon::ThreadPool>) -> R) -> R {
    let guard = slot().lock().unwrap();
    f(guard.as_deref())
}
