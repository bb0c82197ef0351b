//! deckhand - chat-driven slide generation
//!
//! A terminal front end over the conversation state machine: prompts stream
//! through the agent channel into a transcript and a compiled deck, which can
//! be previewed and exported as a markdown artifact.

mod agent;
mod compiler;
mod export;
mod runtime;
mod session;

use agent::MockAgentChannel;
use export::{Exporter, MarkdownExportSink};
use runtime::{SessionRuntime, SurfaceFocus};
use session::Role;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckhand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Configuration
    let export_dir = std::env::var("DECKHAND_EXPORT_DIR").unwrap_or_else(|_| ".".to_string());
    let chunk_delay_ms: u64 = std::env::var("DECKHAND_CHUNK_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);

    let channel = Arc::new(MockAgentChannel::new(Duration::from_millis(chunk_delay_ms)));
    let mut runtime = SessionRuntime::new(channel);
    let exporter = Exporter::new(Arc::new(MarkdownExportSink));

    println!("deckhand - describe the deck you want; /transcript, /slides, /export, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt_marker()?;
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "/quit" => break,
            "/transcript" => {
                let session = runtime.session();
                if session.transcript().is_empty() {
                    println!("no messages yet");
                } else {
                    println!("{} messages", session.transcript().len());
                    for message in session.transcript().iter() {
                        let marker = match message.role {
                            Role::User => ">",
                            Role::Assistant => "<",
                        };
                        println!("{marker} {}", message.content);
                    }
                }
                if let Some(status) = session.status() {
                    println!("[status] {status}");
                }
            }
            "/slides" => {
                let deck = runtime.deck();
                if deck.is_empty() {
                    println!("no slides yet - ask for a deck first");
                } else {
                    println!("{} slides", deck.len());
                    for slide in deck.slides() {
                        println!("  [{}] {} bytes of markup", slide.index + 1, slide.markup.len());
                    }
                }
            }
            "/export" if exporter.is_busy() => {
                println!("an export is already in progress");
            }
            "/export" => {
                let document = runtime.session().current_document().unwrap_or_default();
                match exporter.export(document).await {
                    Ok(artifact) => {
                        let path = artifact.write_to(Path::new(&export_dir))?;
                        println!("wrote {} ({})", path.display(), artifact.mime_type);
                    }
                    Err(e) => println!("{e}"),
                }
            }
            prompt => match runtime.submit(prompt).await {
                Ok(()) => {
                    if let Some(reply) = runtime.session().transcript().last() {
                        println!("{}", reply.content);
                    }
                    if runtime.focus() == SurfaceFocus::Deck {
                        println!("[preview] {} slides compiled", runtime.deck().len());
                        runtime.focus_chat();
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
        prompt_marker()?;
    }

    Ok(())
}

fn prompt_marker() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
