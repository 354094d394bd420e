use crate::config::ChatBotConfig;
use crate::counter::WordCounter;
use crate::error::ChatBotError;
use crate::output::ReportSink;
use crate::report::ReportFormatter;
use crate::timer::FlushTimer;
use crate::tokenize::ChatMessage;
use crate::types::Report;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

struct Shared {
    counter: Mutex<WordCounter>,
    sink: Box<dyn ReportSink>,
}

impl Shared {
    fn flush(&self) -> Report {
        // Build and reset under one lock so no message lands between them
        let report = {
            let mut counter = self.counter.lock();
            let report = ReportFormatter::build(&mut counter);
            counter.reset();
            report
        };

        info!(
            words = report.entries.len(),
            total_words = report.total_words,
            "publishing top words"
        );
        self.sink.send(&report);
        report
    }
}

/// Chat room bot that posts the most frequent words once per interval.
///
/// Messages may arrive from any thread; the counter sits behind a single
/// mutex, held for all the words of one message and for each
/// report-and-reset cycle.
pub struct ChatBot {
    shared: Arc<Shared>,
    timer: Option<FlushTimer>,
}

impl ChatBot {
    /// Creates the bot and starts its flush timer.
    pub fn new(config: &ChatBotConfig, sink: Box<dyn ReportSink>) -> Result<Self, ChatBotError> {
        let shared = Arc::new(Shared {
            counter: Mutex::new(WordCounter::new(config.top_words)),
            sink,
        });

        let ticker = Arc::clone(&shared);
        let timer = FlushTimer::start(config.flush_interval, move || {
            ticker.flush();
        })?;

        info!(
            top_words = config.top_words,
            interval_ms = config.flush_interval.as_millis() as u64,
            "chat bot started"
        );

        Ok(Self {
            shared,
            timer: Some(timer),
        })
    }

    /// Count the words of one `"sender:message"` line.
    ///
    /// Returns how many words were added. Lines without a `:` are ignored.
    pub fn process_message(&self, raw: &str) -> usize {
        let message = match ChatMessage::parse(raw) {
            Some(message) => message,
            None => {
                debug!("ignoring message without sender prefix");
                return 0;
            }
        };

        let mut counter = self.shared.counter.lock();
        let mut added = 0;
        for word in message.words() {
            counter.add_word(word);
            added += 1;
        }
        added
    }

    /// Publish the current report to the sink and start a new window.
    pub fn flush(&self) -> Report {
        self.shared.flush()
    }

    /// Run `f` against the live counter, e.g. to inspect counts.
    pub fn with_counter<R>(&self, f: impl FnOnce(&WordCounter) -> R) -> R {
        f(&self.shared.counter.lock())
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().map_or(false, FlushTimer::is_running)
    }

    /// Stop the flush timer. Pending words are kept until the next `flush`.
    pub fn shutdown(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
            info!("chat bot stopped");
        }
    }
}

impl Drop for ChatBot {
    fn drop(&mut self) {
        self.shutdown();
    }
}
