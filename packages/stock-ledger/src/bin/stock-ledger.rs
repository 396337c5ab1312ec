//! Stock Ledger CLI - interactive session over the holdings ledger.
//!
//! Reads one command per line from stdin. Session output goes to stdout,
//! logs go to stderr.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use stock_ledger::{ApiResponse, Ledger, PriceTable, Reply, Session, SessionConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "stock-ledger")]
#[command(about = "Record stock holdings and export a valued summary to CSV")]
#[command(version)]
struct Cli {
    /// Print each reply as a JSON envelope
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = SessionConfig::default();

    tracing::info!("Starting session, export path {}", config.export_path.display());
    let mut session = Session::new(Ledger::new(PriceTable::builtin()), config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !cli.json {
        writeln!(stdout, "Stock Ledger - type 'help' for commands")?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        let reply = session.handle_line(&line);
        if reply.exit {
            break;
        }
        print_reply(&mut stdout, &reply, cli.json)?;
    }

    tracing::info!("Session ended with {} holdings", session.ledger().len());
    Ok(())
}

fn print_reply(out: &mut impl Write, reply: &Reply, json: bool) -> Result<()> {
    if json {
        let body = match reply.error_message() {
            None => serde_json::to_string(&ApiResponse::ok(reply))?,
            Some(message) => serde_json::to_string(&ApiResponse::<()>::err(message))?,
        };
        writeln!(out, "{}", body)?;
    } else {
        write!(out, "{}", reply.to_text())?;
    }
    out.flush()?;
    Ok(())
}
