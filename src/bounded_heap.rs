/// An array-backed binary min-heap ordered by a caller-supplied scorer.
///
/// The heap is sized for the top N items of a stream, but admission is the
/// caller's job: `push` never evicts. Use `is_full` and `peek_min` to decide
/// whether an item deserves a slot, then `pop_min` to make room for it.
///
/// Unlike `std::collections::BinaryHeap`, any element can be removed in place
/// by identity with `remove_by`. That lets a caller re-score a tracked item by
/// removing it and pushing it again.
///
/// Complexity:
/// - `push`, `pop_min`: O(log N)
/// - `remove_by`: O(N) scan plus O(log N) repair
/// - Memory: O(N)
pub struct BoundedMinHeap<E, F> {
    values: Vec<E>,
    scorer: F,
    capacity: usize,
}

impl<E, F, K> BoundedMinHeap<E, F>
where
    F: Fn(&E) -> K,
    K: Ord,
{
    /// Creates an empty heap sized for `capacity` elements.
    pub fn new(capacity: usize, scorer: F) -> Self {
        Self {
            values: Vec::with_capacity(capacity + 1),
            scorer,
            capacity,
        }
    }

    /// Returns the number of elements currently in the heap.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true once the heap holds `capacity` elements or more.
    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    /// Appends an element and bubbles it toward the root.
    ///
    /// An element only moves past a parent with a strictly greater score, so
    /// equal scores keep their insertion position.
    pub fn push(&mut self, elem: E) {
        self.values.push(elem);
        self.bubble_up(self.values.len() - 1);
    }

    /// Returns the minimum-score element, or `None` if the heap is empty.
    pub fn peek_min(&self) -> Option<&E> {
        self.values.first()
    }

    /// Removes and returns the minimum-score element.
    pub fn pop_min(&mut self) -> Option<E> {
        if self.values.is_empty() {
            return None;
        }

        // swap_remove moves the last element into the root slot
        let min = self.values.swap_remove(0);
        if !self.values.is_empty() {
            self.sink_down(0);
        }
        Some(min)
    }

    /// Removes the first element matching `is_target`, wherever it sits.
    ///
    /// Matching is by identity, not by score: two elements with equal scores
    /// are different elements. The last element fills the hole, then gets
    /// both bubbled up and sunk down since it may belong on either side.
    pub fn remove_by<P>(&mut self, mut is_target: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        let index = self.values.iter().position(|e| is_target(e))?;

        if index == self.values.len() - 1 {
            return self.values.pop();
        }

        let removed = self.values.swap_remove(index);
        self.bubble_up(index);
        self.sink_down(index);
        Some(removed)
    }

    /// Drops every element, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over elements in backing-storage order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.values.iter()
    }

    fn score(&self, index: usize) -> K {
        (self.scorer)(&self.values[index])
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent_index(index);

            if self.score(parent) <= self.score(index) {
                break;
            }

            self.values.swap(parent, index);
            index = parent;
        }
    }

    fn sink_down(&mut self, mut index: usize) {
        let len = self.values.len();

        loop {
            let (first, second) = child_indices(index);
            let mut swap = None;

            if first < len && self.score(first) < self.score(index) {
                swap = Some(first);
            }

            if second < len {
                // Beat the first child if it already won, otherwise the element
                let against = swap.unwrap_or(index);
                if self.score(second) < self.score(against) {
                    swap = Some(second);
                }
            }

            match swap {
                Some(child) => {
                    self.values.swap(index, child);
                    index = child;
                }
                None => break,
            }
        }
    }
}

fn parent_index(index: usize) -> usize {
    (index + 1) / 2 - 1
}

fn child_indices(index: usize) -> (usize, usize) {
    let second = (index + 1) * 2;
    (second - 1, second)
}

#[cfg(test)]
impl<E, F, K> BoundedMinHeap<E, F>
where
    F: Fn(&E) -> K,
    K: Ord,
{
    /// Checks the heap property for every non-root slot.
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.values.len()).all(|i| self.score(parent_index(i)) <= self.score(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn by_value(v: &i32) -> i32 {
        *v
    }

    fn int_heap(capacity: usize) -> BoundedMinHeap<i32, fn(&i32) -> i32> {
        BoundedMinHeap::new(capacity, by_value as fn(&i32) -> i32)
    }

    fn drain(heap: &mut BoundedMinHeap<i32, fn(&i32) -> i32>) -> Vec<i32> {
        std::iter::from_fn(|| heap.pop_min()).collect()
    }

    #[test]
    fn test_bounded_heap_basic() {
        let mut heap = int_heap(3);

        heap.push(5);
        heap.push(2);
        heap.push(8);

        assert_eq!(heap.peek_min(), Some(&2));
        assert_eq!(drain(&mut heap), vec![2, 5, 8]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_bounded_heap_push_does_not_evict() {
        let mut heap = int_heap(2);

        heap.push(3);
        heap.push(1);
        assert!(heap.is_full());

        // Capacity is advisory; the caller decides admission
        heap.push(7);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.capacity(), 2);
    }

    #[test]
    fn test_bounded_heap_empty() {
        let mut heap = int_heap(10);
        assert!(heap.is_empty());
        assert!(!heap.is_full());
        assert_eq!(heap.peek_min(), None);
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.remove_by(|v| *v == 1), None);
    }

    #[test]
    fn test_bounded_heap_single_item() {
        let mut heap = int_heap(5);
        heap.push(42);

        assert_eq!(heap.len(), 1);
        assert_eq!(heap.pop_min(), Some(42));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_sink_down_prefers_smaller_child() {
        let mut heap = int_heap(8);
        for v in [1, 5, 3, 9, 6, 4] {
            heap.push(v);
        }

        assert_eq!(heap.pop_min(), Some(1));
        assert_eq!(heap.peek_min(), Some(&3));
        assert!(heap.is_valid());
    }

    #[test]
    fn test_remove_last_slot() {
        let mut heap = int_heap(4);
        heap.push(1);
        heap.push(2);
        heap.push(3);

        assert_eq!(heap.remove_by(|v| *v == 3), Some(3));
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_remove_replacement_bubbles_up() {
        // [1, 10, 2, 11, 12, 3, 4]: removing 11 brings 4 under 10
        let mut heap = int_heap(8);
        for v in [1, 10, 2, 11, 12, 3, 4] {
            heap.push(v);
        }

        assert_eq!(heap.remove_by(|v| *v == 11), Some(11));
        assert!(heap.is_valid());
        assert_eq!(drain(&mut heap), vec![1, 2, 3, 4, 10, 12]);
    }

    #[test]
    fn test_remove_replacement_sinks_down() {
        let mut heap = int_heap(8);
        for v in [1, 2, 3, 4, 5, 6, 7] {
            heap.push(v);
        }

        assert_eq!(heap.remove_by(|v| *v == 2), Some(2));
        assert!(heap.is_valid());
        assert_eq!(drain(&mut heap), vec![1, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_remove_matches_identity_not_score() {
        // Same score, different identities
        let mut heap = BoundedMinHeap::new(4, |e: &(u32, u64)| e.1);
        heap.push((1, 5));
        heap.push((2, 5));
        heap.push((3, 5));

        assert_eq!(heap.remove_by(|e| e.0 == 2), Some((2, 5)));
        let ids: Vec<u32> = heap.iter().map(|e| e.0).collect();
        assert!(ids.contains(&1));
        assert!(ids.contains(&3));
        assert!(!ids.contains(&2));
    }

    #[test]
    fn test_equal_scores_keep_insertion_position() {
        let mut heap = BoundedMinHeap::new(4, |e: &(char, u64)| e.1);
        heap.push(('a', 2));
        heap.push(('b', 2));

        assert_eq!(heap.peek_min(), Some(&('a', 2)));
    }

    #[test]
    fn test_clear() {
        let mut heap = int_heap(3);
        heap.push(4);
        heap.push(2);
        heap.clear();

        assert!(heap.is_empty());
        heap.push(9);
        assert_eq!(heap.peek_min(), Some(&9));
    }

    #[test]
    fn test_heap_property_after_every_operation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut heap = BoundedMinHeap::new(16, |e: &(u32, u32)| e.1);
        let mut next_id = 0u32;
        let mut live: Vec<u32> = Vec::new();

        for _ in 0..5_000 {
            match rng.gen_range(0..3) {
                0 => {
                    heap.push((next_id, rng.gen_range(0..20)));
                    live.push(next_id);
                    next_id += 1;
                }
                1 => {
                    if let Some((id, _)) = heap.pop_min() {
                        live.retain(|l| *l != id);
                    }
                }
                _ => {
                    if !live.is_empty() {
                        let id = live.swap_remove(rng.gen_range(0..live.len()));
                        assert!(heap.remove_by(|e| e.0 == id).is_some());
                    }
                }
            }

            assert!(heap.is_valid());
            assert_eq!(heap.len(), live.len());
        }
    }

    #[test]
    fn test_pop_order_is_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap = int_heap(64);
        for _ in 0..64 {
            heap.push(rng.gen_range(-50..50));
        }

        let popped = drain(&mut heap);
        assert_eq!(popped.len(), 64);
        assert!(popped.windows(2).all(|w| w[0] <= w[1]));
    }
}
