//! Anti-repetition content selection.
//!
//! `fresh = candidates - recently served`. When every candidate has been
//! served recently, the buffer is reset (fully, or only for the identifiers
//! of one pool when several pools share a buffer) and the whole candidate set
//! becomes fresh again. Choice among fresh items is uniform.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::session::RecencyBuffer;
use crate::content::ContentItem;
use crate::error::AppError;

/// Source of uniform indices, swappable for deterministic tests.
pub trait RandomSource: Send + Sync {
    /// Index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&self, len: usize) -> usize;
}

/// Unseeded thread-local randomness
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible randomness from a fixed seed
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, len: usize) -> usize {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..len)
    }
}

/// Replays a fixed sequence of raw values, cycling, each reduced modulo `len`.
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always picks the first candidate
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[position] % len
    }
}

/// Which entries are dropped from the buffer when no candidate is fresh.
#[derive(Debug, Clone, Copy)]
pub enum ResetScope<'a> {
    /// The buffer serves a single pool: clear it.
    Whole,
    /// The buffer is shared: forget only the identifiers of this pool.
    Pool(&'a [ContentItem]),
}

/// Picks content and canned lines through a shared random source.
#[derive(Clone)]
pub struct Selector {
    random: Arc<dyn RandomSource>,
}

impl Selector {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Uniform choice with no repetition tracking.
    pub fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.random.next_index(items.len()))
    }

    /// Pick a candidate not served recently and record it in `buffer`.
    pub fn pick<'a>(
        &self,
        candidates: &'a [ContentItem],
        buffer: &mut RecencyBuffer,
        scope: ResetScope<'_>,
    ) -> Result<&'a ContentItem, AppError> {
        if candidates.is_empty() {
            return Err(AppError::Internal("Cannot select from an empty pool".to_string()));
        }

        let mut fresh: Vec<&ContentItem> = candidates
            .iter()
            .filter(|item| !buffer.contains(item.identity()))
            .collect();

        if fresh.is_empty() {
            match scope {
                ResetScope::Whole => buffer.clear(),
                ResetScope::Pool(pool) => {
                    let keys: HashSet<&str> = pool.iter().map(ContentItem::identity).collect();
                    buffer.forget_where(|k| keys.contains(k));
                }
            }
            fresh = candidates.iter().collect();
        }

        let index = self.random.next_index(fresh.len());
        let chosen = *fresh.get(index).ok_or_else(|| {
            AppError::Internal(format!("Random index {} out of range for {} candidates", index, fresh.len()))
        })?;
        buffer.push(chosen.identity());
        Ok(chosen)
    }
}
