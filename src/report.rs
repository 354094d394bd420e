use crate::counter::WordCounter;
use crate::types::Report;
use tracing::debug;

/// Turns a window's tracked words into a `Report`.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Drain up to K words from the counter's heap.
    ///
    /// Entries come out ascending by count, lowest first. Equal counts keep
    /// heap order, which favours the word admitted earlier at that count.
    /// The heap is empty afterwards; the word pool is left for `reset`.
    pub fn build(counter: &mut WordCounter) -> Report {
        let total_words = counter.total_words();
        let distinct_words = counter.distinct_words();

        let mut entries = Vec::with_capacity(counter.tracked_len());
        for _ in 0..counter.top_k() {
            match counter.pop_min() {
                Some(entry) => entries.push(entry),
                None => break,
            }
        }

        debug!(
            entries = entries.len(),
            total_words, distinct_words, "built top words report"
        );

        Report {
            entries,
            total_words,
            distinct_words,
        }
    }
}
