use arc_swap::ArcSwap;
use hostwatch_domain::HostsTable;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The currently published hosts table.
///
/// Readers never lock: `load` hands out the `Arc` that was current when it was
/// called, and a concurrent `store` swaps the pointer without touching tables
/// that readers still hold. A table is freed when its last reader drops it.
///
/// Intended for a single writer (the file watcher).
pub struct HostsSnapshot {
    current: ArcSwap<HostsTable>,
    generation: AtomicU64,
}

impl HostsSnapshot {
    pub fn new(initial: HostsTable) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
            generation: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn load(&self) -> Arc<HostsTable> {
        self.current.load_full()
    }

    /// Runs `f` against the current table without bumping its reference count.
    #[inline]
    pub fn with_current<R>(&self, f: impl FnOnce(&HostsTable) -> R) -> R {
        let guard = self.current.load();
        f(&guard)
    }

    /// Publishes `table` and returns the new generation.
    pub fn store(&self, table: HostsTable) -> u64 {
        self.current.store(Arc::new(table));
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn has_changed_since(&self, generation: u64) -> bool {
        self.generation() != generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostwatch_domain::HostEntry;
    use std::sync::atomic::AtomicBool;
    use std::thread;

    fn uniform_table(ip: &str, hosts: usize) -> HostsTable {
        (0..hosts)
            .map(|i| HostEntry::new(ip, &format!("host{}.example", i)))
            .collect()
    }

    #[test]
    fn test_initial_generation_is_one() {
        let snapshot = HostsSnapshot::new(HostsTable::empty());

        assert_eq!(snapshot.generation(), 1);
        assert!(snapshot.load().is_empty());
    }

    #[test]
    fn test_store_replaces_table_and_bumps_generation() {
        let snapshot = HostsSnapshot::new(uniform_table("1.1.1.1", 2));
        let before = snapshot.generation();

        let generation = snapshot.store(uniform_table("2.2.2.2", 3));

        assert_eq!(generation, before + 1);
        assert!(snapshot.has_changed_since(before));
        assert_eq!(snapshot.load().len(), 3);
        assert_eq!(snapshot.load().lookup("host0.example"), Some("2.2.2.2"));
    }

    #[test]
    fn test_reader_keeps_old_table_after_store() {
        let snapshot = HostsSnapshot::new(uniform_table("1.1.1.1", 1));
        let held = snapshot.load();

        snapshot.store(uniform_table("2.2.2.2", 1));

        assert_eq!(held.lookup("host0.example"), Some("1.1.1.1"));
        assert_eq!(
            snapshot.with_current(|t| t.lookup("host0.example").map(str::to_string)),
            Some("2.2.2.2".to_string())
        );
    }

    #[test]
    fn test_concurrent_readers_never_see_mixed_table() {
        let snapshot = Arc::new(HostsSnapshot::new(uniform_table("1.1.1.1", 64)));
        let stop = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let snapshot = Arc::clone(&snapshot);
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    let mut reads = 0u64;
                    loop {
                        let table = snapshot.load();
                        let first = table.lookup("host0.example").map(str::to_string);
                        assert_eq!(table.len(), 64);
                        for (_, ip) in table.iter() {
                            assert_eq!(Some(ip), first.as_deref());
                        }
                        reads += 1;
                        if stop.load(Ordering::Relaxed) {
                            return reads;
                        }
                    }
                })
            })
            .collect();

        for i in 0..200 {
            let ip = if i % 2 == 0 { "2.2.2.2" } else { "1.1.1.1" };
            snapshot.store(uniform_table(ip, 64));
        }
        stop.store(true, Ordering::Relaxed);

        for reader in readers {
            assert!(reader.join().unwrap() > 0);
        }
        assert_eq!(snapshot.generation(), 201);
    }
}
