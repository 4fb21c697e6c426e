//! Process-wide mutual exclusion per log path.
//!
//! Every append and every wrap check on a path runs under the same lock, no
//! matter which sink or logger issued it. The lock guards no data, so a
//! poisoned lock is simply taken over.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

type LockTable = Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>;

static LOCKS: OnceLock<LockTable> = OnceLock::new();

fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    let table = LOCKS.get_or_init(Default::default);
    let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);
    table.entry(path.to_path_buf()).or_default().clone()
}

/// Run `f` while holding the lock for `path`.
pub(crate) fn with_path_lock<R>(path: &Path, f: impl FnOnce() -> R) -> R {
    let lock = path_lock(path);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_shares_one_lock() {
        let a = path_lock(Path::new("/tmp/wraplog-lock-test.log"));
        let b = path_lock(Path::new("/tmp/wraplog-lock-test.log"));
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn distinct_paths_get_distinct_locks() {
        let a = path_lock(Path::new("/tmp/wraplog-lock-a.log"));
        let b = path_lock(Path::new("/tmp/wraplog-lock-b.log"));
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let path = Path::new("/tmp/wraplog-lock-poison.log");
        let _ = std::panic::catch_unwind(|| {
            with_path_lock(path, || panic!("boom"));
        });
        assert_eq!(with_path_lock(path, || 7), 7);
    }
}
