mod cli;

use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, IsTerminal};
use topwords::{ChatBot, ConfigFile, JsonSink, ReportSink, TerminalSink};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let file = match ConfigFile::load(cli.config.as_ref()) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let config = match file.resolve(cli.top, cli.interval_ms) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let sink: Box<dyn ReportSink> = if cli.json || file.display.json {
        Box::new(JsonSink::stdout())
    } else {
        let use_color = !cli.no_color && file.display.color && io::stdout().is_terminal();
        Box::new(TerminalSink::new(use_color, cli.verbose))
    };

    let mut bot = match ChatBot::new(&config, sink) {
        Ok(bot) => bot,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                bot.process_message(&line);
            }
            Err(e) => {
                error!("failed to read stdin: {}", e);
                break;
            }
        }
    }

    // Publish whatever the last partial window collected
    bot.shutdown();
    bot.flush();
}
