use crate::bounded_heap::BoundedMinHeap;
use crate::types::WordEntry;
use crate::word_pool::{CountRecord, RecordId, WordPool};
use tracing::trace;

/// Heap handle to a tracked record.
///
/// `count` is a snapshot taken at admission. A tracked record is pulled out
/// of the heap before its count changes, so the snapshot is never stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedSlot {
    pub id: RecordId,
    pub count: u64,
}

type SlotScorer = fn(&TrackedSlot) -> u64;

fn slot_count(slot: &TrackedSlot) -> u64 {
    slot.count
}

/// Incremental top-K word counter.
///
/// Every word seen in the window gets a `CountRecord` in the pool. The K
/// records with the highest counts are kept in a bounded min-heap, so the
/// smallest of the top K is always at hand and the full vocabulary is never
/// sorted.
///
/// Not synchronized: one writer at a time. `ChatBot` wraps it in a mutex.
pub struct WordCounter {
    pool: WordPool,
    heap: BoundedMinHeap<TrackedSlot, SlotScorer>,
    top_k: usize,
    total_words: u64,
}

impl WordCounter {
    /// Creates a counter that tracks the `top_k` most frequent words.
    ///
    /// # Panics
    /// If `top_k` is zero. Validate user input with `ChatBotConfig::new`.
    pub fn new(top_k: usize) -> Self {
        assert!(top_k > 0, "top_k must be at least 1");

        Self {
            pool: WordPool::new(),
            heap: BoundedMinHeap::new(top_k, slot_count as SlotScorer),
            top_k,
            total_words: 0,
        }
    }

    /// Count one occurrence of `word` and fix up heap membership.
    pub fn add_word(&mut self, word: &str) {
        self.total_words += 1;

        let id = match self.pool.lookup(word) {
            Some(id) => {
                let record = self.pool.get_mut(id);
                record.count += 1;

                if record.tracked {
                    // Re-admit with the new count instead of re-heapifying in place
                    self.heap.remove_by(|slot| slot.id == id);
                    record.tracked = false;
                }
                id
            }
            None => self.pool.intern(word),
        };

        self.admit(id);
    }

    fn admit(&mut self, id: RecordId) {
        let count = self.pool.get(id).count;

        if !self.heap.is_full() {
            self.track(id, count);
            return;
        }

        let beats_min = match self.heap.peek_min() {
            Some(min) => min.count < count,
            None => false,
        };

        if beats_min {
            if let Some(evicted) = self.heap.pop_min() {
                let record = self.pool.get_mut(evicted.id);
                record.tracked = false;
                trace!(evicted = %record.word, count = record.count, "evicted from top words");
            }
            self.track(id, count);
        }
    }

    fn track(&mut self, id: RecordId, count: u64) {
        self.pool.get_mut(id).tracked = true;
        self.heap.push(TrackedSlot { id, count });
    }

    /// Remove the lowest-count tracked word and return it.
    pub fn pop_min(&mut self) -> Option<WordEntry> {
        let slot = self.heap.pop_min()?;
        let record = self.pool.get_mut(slot.id);
        record.tracked = false;

        Some(WordEntry {
            word: record.word.clone(),
            count: record.count,
        })
    }

    /// Forget every word and start a new window.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.heap.clear();
        self.total_words = 0;
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Number of words currently in the top-K heap.
    pub fn tracked_len(&self) -> usize {
        self.heap.len()
    }

    pub fn distinct_words(&self) -> usize {
        self.pool.len()
    }

    /// Tokens added since the last reset.
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn count(&self, word: &str) -> Option<u64> {
        self.pool.find(word).map(|record| record.count)
    }

    pub fn record(&self, word: &str) -> Option<&CountRecord> {
        self.pool.find(word)
    }

    pub fn records(&self) -> impl Iterator<Item = &CountRecord> {
        self.pool.iter().map(|(_, record)| record)
    }

    /// Tracked words in heap storage order (not sorted).
    pub fn tracked(&self) -> impl Iterator<Item = &CountRecord> {
        self.heap.iter().map(|slot| self.pool.get(slot.id))
    }
}
