//! Terminal shim and entry point.
//!
//! This is the thin integration layer between the spamlens library and the
//! terminal: it owns the threads, the channels, and the event loop, and
//! delegates every decision to the library layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │      Main Thread        │
//! │  ┌──────────────────┐   │
//! │  │ AppState + loop  │   │  ← event handling, rendering
//! │  └──────────────────┘   │
//! │     ▲            │      │
//! │     │ channel    │ channel
//! │     │            ▼      │
//! │  ┌────────┐ ┌─────────┐ │
//! │  │ stdin  │ │ worker  │ │  ← blocking reads / HTTP calls
//! │  │ thread │ │ thread  │ │
//! │  └────────┘ └─────────┘ │
//! └─────────────────────────┘
//! ```
//!
//! Both the stdin reader and the worker feed the same inbound channel, so the
//! main loop sees one ordered stream of events.
//!
//! # Commands
//!
//! Input lines starting with `:` are commands; anything else is a message to
//! classify:
//!
//! - `:q`, `:quit`: exit
//! - `:dashboard`, `:analytics`, `:api`, `:settings`: switch view
//! - `:y` / `:n`: feedback on the displayed verdict
//! - `:regen`: provision a fresh API key
//! - `:clear-logs`: delete all server-side history
//!
//! Unknown `:` commands are ignored rather than classified, so a typo never
//! leaks into the service's logs.

#![allow(clippy::multiple_crate_versions)]

use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use spamlens::app::modes::View;
use spamlens::credential::CredentialStore;
use spamlens::domain::record::FeedbackChoice;
use spamlens::gateway::HttpGateway;
use spamlens::infrastructure;
use spamlens::observability;
use spamlens::ui;
use spamlens::worker::{GatewayWorker, WorkerMessage, WorkerResponse};
use spamlens::{handle_event, initialize, Action, Config, Event};

/// One event arriving at the main loop, from either source thread.
enum Inbound {
    /// A line the user typed.
    Input(String),
    /// A response from the worker thread.
    Worker(WorkerResponse),
}

/// Parses one input line into an event.
///
/// Returns `None` for blank lines and unknown `:` commands.
fn parse_command(line: &str) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(command) = line.strip_prefix(':') {
        return match command {
            "q" | "quit" => Some(Event::Quit),
            "dashboard" => Some(Event::SwitchView(View::Dashboard)),
            "analytics" => Some(Event::SwitchView(View::Analytics)),
            "api" => Some(Event::SwitchView(View::ApiAccess)),
            "settings" => Some(Event::SwitchView(View::Settings)),
            "y" | "correct" => Some(Event::Feedback(FeedbackChoice::Correct)),
            "n" | "incorrect" => Some(Event::Feedback(FeedbackChoice::Incorrect)),
            "regen" => Some(Event::RegenerateKey),
            "clear-logs" => Some(Event::ClearLogs),
            _ => {
                tracing::debug!(command = %command, "ignoring unknown command");
                None
            }
        };
    }

    Some(Event::SubmitText(line.to_string()))
}

fn main() -> spamlens::Result<()> {
    let config = Config::load()?;
    let _guard = observability::init_tracing(&config);
    let mut state = initialize(&config);

    let (inbound_tx, inbound_rx) = mpsc::channel::<Inbound>();
    let (worker_tx, worker_rx) = mpsc::channel::<WorkerMessage>();

    let gateway = HttpGateway::new(&config.base_url);
    let store = CredentialStore::open(infrastructure::credential_file())?;
    let worker_inbound = inbound_tx.clone();
    thread::spawn(move || {
        let mut worker = GatewayWorker::new(Box::new(gateway), store);
        for message in worker_rx {
            let response = worker.handle(message);
            if worker_inbound.send(Inbound::Worker(response)).is_err() {
                break;
            }
        }
    });

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if inbound_tx.send(Inbound::Input(line)).is_err() {
                break;
            }
        }
        // EOF: treat a closed stdin as a quit request.
        let _ = inbound_tx.send(Inbound::Input(":q".to_string()));
    });

    // The credential must exist before the first submission, and the
    // dashboard should populate without waiting for one.
    let _ = worker_tx.send(WorkerMessage::EnsureKey);
    let _ = worker_tx.send(WorkerMessage::RefreshSummary);

    ui::render(&state);

    for inbound in inbound_rx {
        let event = match inbound {
            Inbound::Input(line) => match parse_command(&line) {
                Some(event) => event,
                None => continue,
            },
            Inbound::Worker(response) => Event::WorkerResponse(response),
        };

        match handle_event(&mut state, &event) {
            Ok((should_render, actions)) => {
                let mut quit = false;
                for action in actions {
                    match action {
                        Action::PostToWorker(message) => {
                            // A dead worker thread only matters if we keep
                            // running; the quit path below handles the rest.
                            let _ = worker_tx.send(message);
                        }
                        Action::Quit => quit = true,
                    }
                }
                if quit {
                    break;
                }
                if should_render {
                    ui::render(&state);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "event handling failed");
            }
        }
    }

    Ok(())
}
