//! Streaming top-K word counts for chat rooms.
//!
//! Feed `"sender:message"` lines to a [`ChatBot`]; on every flush it
//! publishes the K most frequent words of the window to a [`ReportSink`]
//! and starts over.
//!
//! The counting core is [`WordCounter`]: a word pool plus a
//! [`BoundedMinHeap`] of the K current leaders, updated per word in
//! O(log K) without ever sorting the vocabulary.

pub mod bounded_heap;
pub mod chatbot;
pub mod config;
pub mod counter;
pub mod error;
pub mod output;
pub mod report;
pub mod timer;
pub mod tokenize;
pub mod types;
pub mod word_pool;

pub use bounded_heap::BoundedMinHeap;
pub use chatbot::ChatBot;
pub use config::{ChatBotConfig, ConfigError, ConfigFile};
pub use counter::WordCounter;
pub use error::ChatBotError;
pub use output::{ChannelSink, JsonSink, ReportSink, TerminalSink};
pub use report::ReportFormatter;
pub use types::{Report, WordEntry};
