use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::io::{AsyncBufReadExt, BufReader};

mod application;
mod components;
mod message;
mod pages;

use taskman::api::RestTaskService;
use taskman::config::AppConfig;

use application::{Action, TaskApp};
use message::Message;

/// Log to the systemd user journal (`journalctl --user -t taskman -f`).
/// This crate logs at info/debug (per config), everything else at warn.
fn init_logging(config: &AppConfig) {
    struct FilteredJournal {
        inner: systemd_journal_logger::JournalLog,
    }

    impl log::Log for FilteredJournal {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            if metadata.target().starts_with("taskman") {
                let max = if taskman::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                metadata.level() <= max
            } else {
                metadata.level() <= log::LevelFilter::Warn
            }
        }
        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.inner.log(record);
            }
        }
        fn flush(&self) {
            self.inner.flush();
        }
    }

    taskman::set_debug_logging(config.debug_logging);

    let journal = match systemd_journal_logger::JournalLog::new() {
        Ok(journal) => journal.with_syslog_identifier("taskman".to_string()),
        Err(e) => {
            eprintln!("warning: journal unavailable, logging disabled: {}", e);
            return;
        }
    };

    if log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).is_ok() {
        // Global max must be Debug so debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }
}

fn print(app: &mut TaskApp<RestTaskService>) {
    for line in app.take_output() {
        println!("{}", line);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();
    init_logging(&config);
    let service = RestTaskService::new(&config.api_url)?;
    log::info!("Using task service at {}", service.base_url());
    let mut app = TaskApp::new(service);

    let mut inflight = FuturesUnordered::new();
    inflight.push(app.load());
    println!("{}", app.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let message = tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => Message::parse(&line),
                Ok(None) => break,
                Err(e) => {
                    log::error!("Failed to read input: {}", e);
                    break;
                }
            },
            Some(message) = inflight.next(), if !inflight.is_empty() => message,
        };

        match app.update(message) {
            Action::Perform(operation) => inflight.push(operation),
            Action::Quit => break,
            Action::None => {}
        }
        print(&mut app);
    }

    // Issued operations run to completion.
    while let Some(message) = inflight.next().await {
        app.update(message);
        print(&mut app);
    }

    Ok(())
}
