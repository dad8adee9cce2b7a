use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// Сколько готовых результатов держим по умолчанию
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

type SharedFetch<V, E> = Shared<LocalBoxFuture<'static, Result<V, E>>>;

enum CacheEntry<V, E> {
    InFlight { generation: u64, fetch: SharedFetch<V, E> },
    /// `used` - тик последнего обращения, по нему вытесняем
    Ready { value: V, used: u64 },
}

/// Однопоточный кэш запросов с single-flight.
///
/// Every caller asking for a key that is already being fetched joins the
/// same shared future. Successful results stay cached up to `capacity`
/// entries, least recently used first out; failures are dropped so the next
/// request for the key goes to the source again. In-flight fetches never
/// count against the bound.
pub struct QueryCache<K, V, E> {
    entries: Rc<RefCell<HashMap<K, CacheEntry<V, E>>>>,
    ticks: Rc<Cell<u64>>,
    capacity: usize,
}

impl<K, V, E> Clone for QueryCache<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            ticks: Rc::clone(&self.ticks),
            capacity: self.capacity,
        }
    }
}

impl<K, V, E> Default for QueryCache<K, V, E> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl<K, V, E> QueryCache<K, V, E> {
    /// `capacity` не меньше одной записи
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            ticks: Rc::new(Cell::new(0)),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn tick(&self) -> u64 {
        let tick = self.ticks.get();
        self.ticks.set(tick + 1);
        tick
    }
}

impl<K, V, E> QueryCache<K, V, E>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
    E: Clone + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `key` from the cache, joining an in-flight fetch if there is
    /// one, otherwise start a new fetch with `make`.
    pub fn fetch<F>(&self, key: K, make: F) -> LocalBoxFuture<'static, Result<V, E>>
    where
        F: FnOnce() -> LocalBoxFuture<'static, Result<V, E>>,
    {
        let now = self.tick();
        match self.entries.borrow_mut().get_mut(&key) {
            Some(CacheEntry::Ready { value, used }) => {
                *used = now;
                return futures::future::ready(Ok(value.clone())).boxed_local();
            }
            Some(CacheEntry::InFlight { fetch, .. }) => return fetch.clone().boxed_local(),
            None => {}
        }

        let generation = now;
        let entries = Rc::clone(&self.entries);
        let ticks = Rc::clone(&self.ticks);
        let capacity = self.capacity;
        let settle_key = key.clone();
        let request = make();
        let fetch = async move {
            let result = request.await;
            let mut entries = entries.borrow_mut();
            // Запись могли заменить через invalidate + новый запрос
            let current = matches!(
                entries.get(&settle_key),
                Some(CacheEntry::InFlight { generation: g, .. }) if *g == generation
            );
            if current {
                match &result {
                    Ok(value) => {
                        let used = ticks.get();
                        ticks.set(used + 1);
                        entries.insert(settle_key, CacheEntry::Ready { value: value.clone(), used });
                        evict_least_recent(&mut entries, capacity);
                    }
                    Err(_) => {
                        entries.remove(&settle_key);
                    }
                }
            }
            result
        }
        .boxed_local()
        .shared();

        self.entries
            .borrow_mut()
            .insert(key, CacheEntry::InFlight { generation, fetch: fetch.clone() });
        fetch.boxed_local()
    }

    /// Cached successful value, without touching the source. A hit counts
    /// as a use for eviction.
    pub fn peek(&self, key: &K) -> Option<V> {
        let now = self.tick();
        match self.entries.borrow_mut().get_mut(key) {
            Some(CacheEntry::Ready { value, used }) => {
                *used = now;
                Some(value.clone())
            }
            _ => None,
        }
    }

    pub fn is_in_flight(&self, key: &K) -> bool {
        matches!(self.entries.borrow().get(key), Some(CacheEntry::InFlight { .. }))
    }

    pub fn in_flight(&self) -> usize {
        self.entries
            .borrow()
            .values()
            .filter(|entry| matches!(entry, CacheEntry::InFlight { .. }))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn invalidate(&self, key: &K) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Удаляет давно не использованные готовые записи, пока их больше `capacity`
fn evict_least_recent<K, V, E>(entries: &mut HashMap<K, CacheEntry<V, E>>, capacity: usize)
where
    K: Eq + Hash + Clone,
{
    loop {
        let mut ready = 0;
        let mut oldest: Option<(&K, u64)> = None;
        for (key, entry) in entries.iter() {
            if let CacheEntry::Ready { used, .. } = entry {
                ready += 1;
                if oldest.is_none_or(|(_, oldest_used)| *used < oldest_used) {
                    oldest = Some((key, *used));
                }
            }
        }
        match oldest {
            Some((key, _)) if ready > capacity => {
                let key = key.clone();
                entries.remove(&key);
            }
            _ => break,
        }
    }
}
