use crate::types::Report;
use colored::*;
use std::io::{self, Write};
use std::sync::mpsc::Sender;
use tracing::warn;

/// Outbound channel for finished reports.
///
/// Sinks are fire-and-forget: the bot never learns whether a report was
/// delivered, so implementations log their own failures.
pub trait ReportSink: Send + Sync {
    fn send(&self, report: &Report);
}

/// Prints reports to stdout as one `word: count` line, optionally colored.
pub struct TerminalSink {
    use_color: bool,
    verbose: bool,
}

impl TerminalSink {
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    pub fn render(&self, report: &Report) -> String {
        let mut line = String::new();

        for (i, entry) in report.entries.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&self.colorize(&entry.word, "cyan", true));
            line.push_str(&self.colorize(":", "bright_black", false));
            line.push(' ');
            line.push_str(&self.colorize(&entry.count.to_string(), "green", false));
        }

        if self.verbose {
            let summary = format!(
                "({} words, {} distinct)",
                report.total_words, report.distinct_words
            );
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&self.colorize(&summary, "bright_black", false));
        }

        line
    }

    fn colorize(&self, text: &str, color: &str, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let colored = match color {
            "green" => text.green(),
            "cyan" => text.cyan(),
            "bright_black" => text.bright_black(),
            _ => text.normal(),
        };

        if bold {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }
}

impl ReportSink for TerminalSink {
    fn send(&self, report: &Report) {
        let line = self.render(report);
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            warn!("failed to write report: {}", e);
        }
    }
}

/// Writes each report as a single-line JSON object.
pub struct JsonSink<W: Write + Send> {
    writer: parking_lot::Mutex<W>,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: parking_lot::Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_report(&self, report: &Report) -> io::Result<()> {
        let json = serde_json::to_string(report)?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

impl<W: Write + Send> ReportSink for JsonSink<W> {
    fn send(&self, report: &Report) {
        if let Err(e) = self.write_report(report) {
            warn!("failed to write JSON report: {}", e);
        }
    }
}

/// Forwards reports into an mpsc channel, for embedding the bot in a host
/// that owns its own delivery loop.
pub struct ChannelSink {
    tx: parking_lot::Mutex<Sender<Report>>,
}

impl ChannelSink {
    pub fn new(tx: Sender<Report>) -> Self {
        Self {
            tx: parking_lot::Mutex::new(tx),
        }
    }
}

impl ReportSink for ChannelSink {
    fn send(&self, report: &Report) {
        if self.tx.lock().send(report.clone()).is_err() {
            warn!("report receiver dropped; discarding report");
        }
    }
}
