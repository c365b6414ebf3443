#![forbid(unsafe_code)]

//! Per-key cache of weakly held values.
//!
//! `WeakCache` stores a [`Weak`] for each key. It hands out [`Arc`]s, and a
//! value lives exactly as long as some caller holds one: the cache itself
//! never keeps a value alive. When a value has been dropped the next lookup
//! misses and the caller recomputes it.
//!
//! # Concurrency
//!
//! The map sits behind one mutex that is only held for map operations, never
//! while a value is being computed. Two threads that miss on the same key may
//! both compute; [`WeakCache::insert`] keeps whichever value landed first and
//! hands it to the late caller too, so every caller ends up sharing one `Arc`.
//!
//! # Sweeping
//!
//! Dead slots are removed when they are looked up, and in bulk whenever the
//! map grows past twice the number of slots that were live at the last sweep.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use dusk_res::WeakCache;
//!
//! let cache = WeakCache::new();
//! let value = cache.insert("k", Arc::new(7));
//! assert_eq!(cache.get(&"k").as_deref(), Some(&7));
//!
//! drop(value);
//! assert!(cache.get(&"k").is_none());
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use ahash::AHashMap;

/// Slot count below which bulk sweeps are skipped.
const MIN_SWEEP_AT: usize = 32;

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups that returned a live value.
    pub hits: u64,
    /// Lookups that found nothing live.
    pub misses: u64,
    /// Slots found dead and removed.
    pub reclaimed: u64,
    /// Computations that failed and were not cached.
    pub fallbacks: u64,
    /// Current slot count, live or not.
    pub slots: usize,
}

struct Slots<K, V> {
    map: AHashMap<K, Weak<V>>,
    sweep_at: usize,
    stats: CacheStats,
}

impl<K: Hash + Eq, V> Slots<K, V> {
    fn sweep(&mut self) -> usize {
        let before = self.map.len();
        self.map.retain(|_, slot| slot.strong_count() > 0);
        let removed = before - self.map.len();
        self.stats.reclaimed += removed as u64;
        self.sweep_at = (self.map.len() * 2).max(MIN_SWEEP_AT);
        removed
    }
}

/// Weakly held per-key cache.
pub struct WeakCache<K, V> {
    slots: Mutex<Slots<K, V>>,
}

impl<K: Hash + Eq, V> WeakCache<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Slots {
                map: AHashMap::new(),
                sweep_at: MIN_SWEEP_AT,
                stats: CacheStats::default(),
            }),
        }
    }

    // Every operation leaves the map consistent, so a panic elsewhere while
    // the lock was held does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, Slots<K, V>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a live value.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut slots = self.lock();
        let live = slots.map.get(key).map(Weak::upgrade);
        match live {
            Some(Some(value)) => {
                slots.stats.hits += 1;
                Some(value)
            }
            Some(None) => {
                slots.map.remove(key);
                slots.stats.reclaimed += 1;
                slots.stats.misses += 1;
                None
            }
            None => {
                slots.stats.misses += 1;
                None
            }
        }
    }

    /// Store `value` under `key` unless a live value is already there.
    ///
    /// Returns the value now associated with `key`: the existing one if it was
    /// still alive, `value` otherwise.
    pub fn insert(&self, key: K, value: Arc<V>) -> Arc<V> {
        let mut slots = self.lock();
        if let Some(existing) = slots.map.get(&key).and_then(Weak::upgrade) {
            return existing;
        }
        slots.map.insert(key, Arc::downgrade(&value));
        if slots.map.len() >= slots.sweep_at {
            slots.sweep();
        }
        value
    }

    /// Count a computation whose result was not cached.
    pub fn record_fallback(&self) {
        self.lock().stats.fallbacks += 1;
    }

    /// Remove every dead slot. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.lock().sweep()
    }

    /// Number of values still alive.
    pub fn live_len(&self) -> usize {
        self.lock()
            .map
            .values()
            .filter(|slot| slot.strong_count() > 0)
            .count()
    }

    pub fn stats(&self) -> CacheStats {
        let slots = self.lock();
        CacheStats {
            slots: slots.map.len(),
            ..slots.stats
        }
    }
}

impl<K: Hash + Eq, V> Default for WeakCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for WeakCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("WeakCache")
            .field("slots", &slots.map.len())
            .field("stats", &slots.stats)
            .finish()
    }
}
