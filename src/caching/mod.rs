//! # Caching Module
//!
//! Memoizing wrappers around an [`Evaluator`]. Offspring produced by
//! crossover between similar parents, or passed through without change, often
//! repeat gene vectors that were already scored; a cache keyed on the full
//! gene vector returns those scores without walking the constraints again.
//!
//! Two flavours are provided:
//!
//! - [`CachedEvaluator`]: one mutex-guarded map shared by all threads.
//! - [`ThreadLocalCachedEvaluator`]: one map per worker thread, no locking.
//!
//! ## Example
//!
//! ```rust
//! use genassign::caching::{CacheType, CachingEvaluator};
//! use genassign::evaluation::{Evaluator, PenaltyEvaluator, PenaltyWeights};
//! use genassign::problem::{Problem, Resource, Task};
//!
//! let problem = Problem::new(
//!     vec![Task::new("A", 1.0)],
//!     vec![Resource::new(["A"], 1.0)],
//! )
//! .unwrap();
//!
//! let evaluator = PenaltyEvaluator::new(&problem, PenaltyWeights::default())
//!     .unwrap()
//!     .with_cache(CacheType::Global);
//!
//! assert_eq!(evaluator.evaluate(&[0]), 0.0);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thread_local::ThreadLocal;

use crate::evaluation::Evaluator;

type ScoreMap = HashMap<Vec<usize>, f64>;

/// Which cache, if any, to put in front of an evaluator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheType {
    /// Evaluate every time.
    #[default]
    None,
    /// A single cache shared across threads.
    Global,
    /// A separate cache per thread.
    ThreadLocal,
}

/// A wrapper around an evaluator that caches scores in a shared map.
///
/// By default the map grows with every distinct gene vector scored, which is
/// at most `population_size * (num_generations + 1)` entries per run. Use
/// [`CachedEvaluator::with_limit`] to bound it; a full map is cleared before
/// the next insert.
#[derive(Debug, Clone)]
pub struct CachedEvaluator<E>
where
    E: Evaluator,
{
    /// The wrapped evaluator
    evaluator: E,
    /// Scores keyed by gene vector
    cache: Arc<Mutex<ScoreMap>>,
    /// Entry count at which the map is cleared
    max_entries: Option<usize>,
}

impl<E> CachedEvaluator<E>
where
    E: Evaluator,
{
    /// Creates a new cached evaluator wrapping the given evaluator.
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            cache: Arc::new(Mutex::new(HashMap::new())),
            max_entries: None,
        }
    }

    /// Creates a cached evaluator holding at most `max_entries` scores (at
    /// least one).
    pub fn with_limit(evaluator: E, max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries.max(1)),
            ..Self::new(evaluator)
        }
    }

    /// Returns a reference to the wrapped evaluator.
    pub fn inner(&self) -> &E {
        &self.evaluator
    }

    /// Returns the number of cached scores.
    pub fn cache_size(&self) -> usize {
        self.lock().len()
    }

    /// Clears the cache.
    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    // Entries are inserted whole, so a poisoned map is still consistent
    fn lock(&self) -> MutexGuard<'_, ScoreMap> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> Evaluator for CachedEvaluator<E>
where
    E: Evaluator,
{
    fn gene_count(&self) -> usize {
        self.evaluator.gene_count()
    }

    fn allele_count(&self) -> usize {
        self.evaluator.allele_count()
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        if let Some(score) = self.lock().get(genes) {
            return *score;
        }

        // The lock is not held while scoring
        let score = self.evaluator.evaluate(genes);

        let mut cache = self.lock();
        if self.max_entries.is_some_and(|max| cache.len() >= max) {
            cache.clear();
        }
        cache.insert(genes.to_vec(), score);

        score
    }
}

/// A per-thread score cache.
///
/// Each thread only ever sees the entries it inserted itself. Like the
/// unbounded [`CachedEvaluator`], each thread's map grows with every distinct
/// gene vector it scores.
#[derive(Debug, Default)]
pub struct ThreadLocalCache {
    cache: ThreadLocal<RefCell<ScoreMap>>,
}

impl ThreadLocalCache {
    /// Creates a new empty thread-local cache.
    pub fn new() -> Self {
        Self {
            cache: ThreadLocal::new(),
        }
    }

    /// Gets a cached score for the current thread, if available.
    pub fn get(&self, genes: &[usize]) -> Option<f64> {
        self.cache
            .get()
            .and_then(|cell| cell.borrow().get(genes).copied())
    }

    /// Inserts a score into the current thread's cache.
    pub fn insert(&self, genes: Vec<usize>, score: f64) {
        self.cache.get_or_default().borrow_mut().insert(genes, score);
    }

    /// Clears the cache for the current thread.
    pub fn clear(&self) {
        if let Some(cell) = self.cache.get() {
            cell.borrow_mut().clear();
        }
    }

    /// Returns the number of cached scores for the current thread.
    pub fn len(&self) -> usize {
        self.cache.get().map_or(0, |cell| cell.borrow().len())
    }

    /// Returns `true` if the cache for the current thread is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A wrapper around an evaluator that uses a thread-local cache.
#[derive(Debug, Clone)]
pub struct ThreadLocalCachedEvaluator<E>
where
    E: Evaluator,
{
    /// The wrapped evaluator
    evaluator: E,
    /// The thread-local cache of scores
    cache: Arc<ThreadLocalCache>,
}

impl<E> ThreadLocalCachedEvaluator<E>
where
    E: Evaluator,
{
    /// Creates a new thread-local cached evaluator wrapping the given evaluator.
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            cache: Arc::new(ThreadLocalCache::new()),
        }
    }

    /// Returns a reference to the wrapped evaluator.
    pub fn inner(&self) -> &E {
        &self.evaluator
    }

    /// Clears the cache for the current thread.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Returns the number of cached scores for the current thread.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<E> Evaluator for ThreadLocalCachedEvaluator<E>
where
    E: Evaluator,
{
    fn gene_count(&self) -> usize {
        self.evaluator.gene_count()
    }

    fn allele_count(&self) -> usize {
        self.evaluator.allele_count()
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        if let Some(score) = self.cache.get(genes) {
            return score;
        }

        let score = self.evaluator.evaluate(genes);
        self.cache.insert(genes.to_vec(), score);

        score
    }
}

/// Extension trait for putting a cache in front of any evaluator.
pub trait CachingEvaluator: Evaluator + Sized {
    /// Wraps this evaluator in a [`CachedEvaluator`].
    fn with_global_cache(self) -> CachedEvaluator<Self> {
        CachedEvaluator::new(self)
    }

    /// Wraps this evaluator in a [`ThreadLocalCachedEvaluator`].
    fn with_thread_local_cache(self) -> ThreadLocalCachedEvaluator<Self> {
        ThreadLocalCachedEvaluator::new(self)
    }

    /// Wraps this evaluator in the cache selected by `cache_type`.
    fn with_cache<'a>(self, cache_type: CacheType) -> Box<dyn Evaluator + 'a>
    where
        Self: 'a,
    {
        match cache_type {
            CacheType::None => Box::new(self),
            CacheType::Global => Box::new(self.with_global_cache()),
            CacheType::ThreadLocal => Box::new(self.with_thread_local_cache()),
        }
    }
}

impl<E: Evaluator> CachingEvaluator for E {}
