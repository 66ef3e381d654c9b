//! CourseDesk
//!
//! Terminal driver: reads one command per line from stdin, runs it through
//! the application and prints the resulting frame.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::{info, warn};

use CourseDesk::{
    config::Settings,
    handlers::{
        commands::{parse_command, Command, HELP},
        Confirm,
    },
    utils::logging,
    views::Frame,
    App,
};

type InputLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

/// Asks on the terminal; anything but y/yes declines
struct TerminalConfirm {
    input: InputLines,
}

#[async_trait]
impl Confirm for TerminalConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        let prompt = format!("{} [y/N] ", message);
        if stdout.write_all(prompt.as_bytes()).await.is_err() || stdout.flush().await.is_err() {
            return false;
        }

        let mut input = self.input.lock().await;
        match input.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

fn print_frame(frame: &Frame) {
    println!("== {} | {} ==", frame.path, frame.view.title);
    if let Some(welcome) = &frame.chrome.welcome {
        println!("{}", welcome);
    }
    for alert in &frame.alerts {
        println!("[{:?}] {}", alert.kind, alert.message);
    }
    if let Some(modal) = &frame.modal {
        println!("(form open: {})", modal.title);
    }
    println!("{}", frame.to_document());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate().context("validating settings")?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(version = CourseDesk::VERSION, backend = %settings.api.base_url, "Starting {}", CourseDesk::info());

    let input: InputLines = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
    let confirm = Arc::new(TerminalConfirm { input: Arc::clone(&input) });

    let mut app = App::from_settings(settings, confirm)?;
    let mut frame = app.start().await;
    print_frame(&frame);

    loop {
        let line = {
            let mut input = input.lock().await;
            input.next_line().await?
        };
        let Some(line) = line else {
            break;
        };

        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{}", HELP),
            Ok(Some(Command::Links)) => {
                for link in frame.links() {
                    println!("{}", link);
                }
            }
            Ok(Some(Command::Action(action))) => {
                frame = app.dispatch(action).await;
                print_frame(&frame);
            }
            Err(e) => {
                warn!(error = %e, "Unreadable command");
                println!("{}", e);
            }
        }
    }

    info!("CourseDesk stopped");
    Ok(())
}
