use std::collections::HashMap;

/// Stable handle to a `CountRecord` for the lifetime of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(u32);

impl RecordId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-word count for the current window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRecord {
    pub word: String,
    pub count: u64,
    /// True iff a handle to this record sits in the counter's heap.
    pub tracked: bool,
}

/// Word interning pool that stores each distinct word once and hands out
/// `RecordId`s. The pool owns every record; heaps and reports refer to them
/// by id.
pub struct WordPool {
    records: Vec<CountRecord>,
    index: HashMap<String, RecordId>,
}

impl WordPool {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Look up the id of a word seen earlier in this window.
    pub fn lookup(&self, word: &str) -> Option<RecordId> {
        self.index.get(word).copied()
    }

    /// Intern a word and return its id.
    /// A new word starts with a count of 1 and untracked.
    pub fn intern(&mut self, word: &str) -> RecordId {
        if let Some(id) = self.lookup(word) {
            return id;
        }

        let id = RecordId(self.records.len() as u32);
        self.records.push(CountRecord {
            word: word.to_string(),
            count: 1,
            tracked: false,
        });
        self.index.insert(word.to_string(), id);
        id
    }

    pub fn get(&self, id: RecordId) -> &CountRecord {
        &self.records[id.index()]
    }

    pub fn get_mut(&mut self, id: RecordId) -> &mut CountRecord {
        &mut self.records[id.index()]
    }

    pub fn find(&self, word: &str) -> Option<&CountRecord> {
        self.lookup(word).map(|id| self.get(id))
    }

    /// Iterate over all records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &CountRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (RecordId(i as u32), record))
    }

    /// Get the number of distinct words stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget every word. Ids handed out before are invalid afterwards.
    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pool_basic() {
        let mut pool = WordPool::new();

        let hello = pool.intern("hello");
        let bye = pool.intern("bye");

        assert_eq!(hello.index(), 0);
        assert_eq!(bye.index(), 1);
        assert_eq!(pool.len(), 2);

        assert_eq!(pool.get(hello).word, "hello");
        assert_eq!(pool.get(hello).count, 1);
        assert!(!pool.get(bye).tracked);
    }

    #[test]
    fn test_word_pool_deduplication() {
        let mut pool = WordPool::new();

        let first = pool.intern("pirate");
        let second = pool.intern("pirate");

        // Same word should get same ID and keep its record
        assert_eq!(first, second);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.lookup("pirate"), Some(first));
    }

    #[test]
    fn test_word_pool_is_case_sensitive() {
        let mut pool = WordPool::new();

        let lower = pool.intern("hello");
        let upper = pool.intern("Hello");

        assert_ne!(lower, upper);
        assert_eq!(pool.find("HELLO"), None);
    }

    #[test]
    fn test_word_pool_clear() {
        let mut pool = WordPool::new();
        pool.intern("a");
        pool.intern("b");
        pool.get_mut(RecordId(0)).count = 7;

        pool.clear();

        assert!(pool.is_empty());
        assert_eq!(pool.lookup("a"), None);
        let id = pool.intern("a");
        assert_eq!(pool.get(id).count, 1);
    }
}
