use std::num::NonZeroUsize;

use lru::LruCache;

/// Per-session cache of creature ids the client has already been told
/// about.
pub const KNOWN_SET_CAP: usize = 250;

pub struct KnownCreatureSet {
    cache: LruCache<u32, ()>,
}

impl Default for KnownCreatureSet {
    fn default() -> Self {
        Self::new()
    }
}

impl KnownCreatureSet {
    pub fn new() -> Self {
        KnownCreatureSet {
            cache: LruCache::new(NonZeroUsize::new(KNOWN_SET_CAP).expect("cap is nonzero")),
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.cache.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Marks `id` as touched, bumping its recency without changing
    /// membership. No-op if `id` isn't known.
    pub fn touch(&mut self, id: u32) {
        self.cache.promote(&id);
    }

    /// Registers `new_id` as known. If the set is already at capacity,
    /// evicts a victim first: the oldest entry `is_visible` reports as no
    /// longer visible, or — if every entry is still visible — the true
    /// least-recently-used entry. The id being inserted is never a
    /// candidate since it can't already be a cache member when this is
    /// called.
    pub fn insert(&mut self, new_id: u32, mut is_visible: impl FnMut(u32) -> bool) -> Option<u32> {
        if self.cache.contains(&new_id) {
            self.cache.promote(&new_id);
            return None;
        }

        let evicted = if self.cache.len() >= KNOWN_SET_CAP {
            let victim = self
                .cache
                .iter()
                .map(|(k, _)| *k)
                .find(|&k| !is_visible(k))
                .or_else(|| self.cache.peek_lru().map(|(k, _)| *k));

            if let Some(v) = victim {
                self.cache.pop(&v);
            }

            victim
        } else {
            None
        };

        self.cache.put(new_id, ());
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_without_eviction_below_cap() {
        let mut set = KnownCreatureSet::new();
        let evicted = set.insert(1, |_| true);
        assert_eq!(evicted, None);
        assert!(set.contains(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn prefers_evicting_no_longer_visible_entry() {
        let mut set = KnownCreatureSet::new();
        for id in 0..KNOWN_SET_CAP as u32 {
            set.insert(id, |_| true);
        }
        // every id stays visible except id 42
        let evicted = set.insert(KNOWN_SET_CAP as u32, |id| id != 42);
        assert_eq!(evicted, Some(42));
        assert!(!set.contains(42));
        assert!(set.contains(KNOWN_SET_CAP as u32));
        assert_eq!(set.len(), KNOWN_SET_CAP);
    }

    #[test]
    fn falls_back_to_lru_tail_when_all_visible() {
        let mut set = KnownCreatureSet::new();
        for id in 0..KNOWN_SET_CAP as u32 {
            set.insert(id, |_| true);
        }
        let evicted = set.insert(KNOWN_SET_CAP as u32, |_| true);
        // id 0 was inserted first and never touched again, so it's the LRU tail
        assert_eq!(evicted, Some(0));
    }

    #[test]
    fn reinserting_a_known_id_does_not_evict() {
        let mut set = KnownCreatureSet::new();
        for id in 0..KNOWN_SET_CAP as u32 {
            set.insert(id, |_| true);
        }
        let evicted = set.insert(5, |_| true);
        assert_eq!(evicted, None);
        assert_eq!(set.len(), KNOWN_SET_CAP);
    }
}
