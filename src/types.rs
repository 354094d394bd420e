use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub count: u64,
}

/// One window's worth of top words, ascending by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub entries: Vec<WordEntry>,
    /// Tokens added during the window.
    pub total_words: u64,
    pub distinct_words: usize,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders `word: count` pairs separated by single spaces, e.g.
/// `"good: 2 jim: 2 hello: 3"`. An empty report renders as `""`.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {}", entry.word, entry.count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, count: u64) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            entries: vec![entry("good", 2), entry("jim", 2), entry("hello", 3)],
            total_words: 8,
            distinct_words: 4,
        };

        assert_eq!(report.to_string(), "good: 2 jim: 2 hello: 3");
    }

    #[test]
    fn test_empty_report_display() {
        let report = Report {
            entries: Vec::new(),
            total_words: 0,
            distinct_words: 0,
        };

        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }
}
