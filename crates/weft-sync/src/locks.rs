use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-(contact, agent) mutual exclusion for thread creation.
///
/// Two concurrent first-time syncs for the same pair would otherwise both
/// observe "no thread" and each create a remote context plus a thread row.
/// Serializing only the creation path keeps unrelated pairs fully parallel.
#[derive(Default)]
pub struct CreationLocks {
    locks: Mutex<HashMap<(i64, i64), Arc<Mutex<()>>>>,
}

impl CreationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, key: (i64, i64)) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(key).or_insert_with(|| Arc::new(Mutex::new(()))))
        };
        lock.lock_owned().await
    }

    /// Drop the map entry once nobody is waiting on it. Callers release
    /// after their guard is gone; a pair only ever creates one thread, so
    /// entries are short-lived.
    pub async fn release(&self, key: (i64, i64)) {
        let mut locks = self.locks.lock().await;
        if let Some(lock) = locks.get(&key) {
            if Arc::strong_count(lock) == 1 {
                locks.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serializes_same_key() {
        let locks = Arc::new(CreationLocks::new());
        let counter = Arc::new(Mutex::new(0u32));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = Arc::clone(&locks);
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move {
                let guard = locks.acquire((1, 2)).await;
                let mut count = counter.lock().await;
                *count += 1;
                drop(count);
                drop(guard);
                locks.release((1, 2)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*counter.lock().await, 8);
        // All waiters done, entry is gone.
        assert!(locks.locks.lock().await.is_empty());
    }

    #[tokio::test]
    async fn release_keeps_contended_entries() {
        let locks = CreationLocks::new();
        let guard = locks.acquire((1, 2)).await;

        // Another clone of the lock is alive (held by the guard), so
        // release must not remove the entry.
        locks.release((1, 2)).await;
        assert_eq!(locks.locks.lock().await.len(), 1);

        drop(guard);
        locks.release((1, 2)).await;
        assert!(locks.locks.lock().await.is_empty());
    }
}
