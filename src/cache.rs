//! Append-only coefficient caches.
//!
//! Every kernel works from sequences of precomputed coefficients that depend
//! only on the order. A [`CoefTable`] holds one such sequence, extended on
//! demand; an [`OrderMap`] holds one table per distinct order. Both are
//! guarded by a mutex so an engine can be shared across threads.
//!
//! Published values never change: a table only grows, so a prefix handed out
//! earlier stays valid. That is also why a poisoned lock is simply recovered.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::machine::{BesselFloat, OrderKey};
use crate::utils::{cospi, sinpi};

type Generator<T> = Box<dyn FnMut(usize) -> T + Send>;

#[inline]
fn lock<X>(m: &Mutex<X>) -> MutexGuard<'_, X> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

struct TableState<T> {
    generator: Generator<T>,
    values: Vec<T>,
}

/// Lazily extended coefficient sequence c₀, c₁, c₂, …
///
/// The generator is called exactly once per index, in increasing order, so
/// it may carry a running product or any other recurrence state.
pub(crate) struct CoefTable<T> {
    state: Mutex<TableState<T>>,
}

impl<T: Copy> CoefTable<T> {
    pub(crate) fn new(generator: impl FnMut(usize) -> T + Send + 'static) -> Self {
        CoefTable {
            state: Mutex::new(TableState {
                generator: Box::new(generator),
                values: Vec::new(),
            }),
        }
    }

    /// Coefficient at index `k`, extending the table if needed.
    pub(crate) fn get(&self, k: usize) -> T {
        let mut state = lock(&self.state);
        let TableState { generator, values } = &mut *state;
        while values.len() <= k {
            let i = values.len();
            values.push(generator(i));
        }
        values[k]
    }

    /// Copy of the first `len` coefficients.
    ///
    /// Kernels take one snapshot per evaluation instead of locking on every
    /// term.
    pub(crate) fn prefix(&self, len: usize) -> Vec<T> {
        if len == 0 {
            return Vec::new();
        }
        let mut state = lock(&self.state);
        let TableState { generator, values } = &mut *state;
        while values.len() < len {
            let i = values.len();
            values.push(generator(i));
        }
        values[..len].to_vec()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        lock(&self.state).values.len()
    }
}

/// One shared value per order, created on first use and never dropped.
pub(crate) struct OrderMap<V> {
    entries: Mutex<HashMap<OrderKey, Arc<V>>>,
}

impl<V> OrderMap<V> {
    pub(crate) fn new() -> Self {
        OrderMap {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Value cached under `key`, building it with `init` on first use.
    ///
    /// `init` runs under this map's lock; it must not touch the same map.
    pub(crate) fn get_or_insert_with(&self, key: OrderKey, init: impl FnOnce() -> V) -> Arc<V> {
        let mut entries = lock(&self.entries);
        Arc::clone(entries.entry(key).or_insert_with(|| {
            log::debug!("coefficient cache: new entry for order key {key:?}");
            Arc::new(init())
        }))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        lock(&self.entries).len()
    }
}

impl<V> Default for OrderMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoized sin(πx) and cos(πx) for the phase factors of the
/// continuation formulas.
pub(crate) struct SinCosPiCache<T> {
    table: OrderMap<(T, T)>,
}

impl<T: BesselFloat> SinCosPiCache<T> {
    pub(crate) fn new() -> Self {
        SinCosPiCache {
            table: OrderMap::new(),
        }
    }

    /// `(sin(πx), cos(πx))`.
    pub(crate) fn sin_cos(&self, x: T) -> (T, T) {
        *self
            .table
            .get_or_insert_with(x.order_key(), || (sinpi(x), cospi(x)))
    }

    pub(crate) fn sinpi(&self, x: T) -> T {
        self.sin_cos(x).0
    }
}
