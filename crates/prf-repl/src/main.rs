//! `prf`: interactive evaluator for the standard library of primitive
//! recursive functions.
//!
//! Reads one command per line from stdin. Logging goes to stderr and is
//! controlled by `RUST_LOG`; see [`config::ReplConfig`] for `PRF_*`
//! variables.

mod config;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ReplConfig;
use prf_stdlib::Library;
use session::{decode_line, Reply, Session};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ReplConfig::load()?;
    if !config.color {
        colored::control::set_override(false);
    }
    info!(?config, "starting prf repl v{}", env!("CARGO_PKG_VERSION"));

    let library = Library::standard().context("failed to build the standard library")?;
    let mut session = Session::new(library, config.gas_limit);
    info!(gas_limit = ?session.gas_limit(), "standard library loaded");

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = Vec::new();

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        line.clear();
        if stdin.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        match decode_line(&line).and_then(|text| session.run_line(text)) {
            Ok(None) => {}
            Ok(Some(Reply::Quit)) => break,
            Ok(Some(reply)) => writeln!(stdout, "{} {reply}", "ok".green())?,
            Err(err) => writeln!(stdout, "{} {err}", "error".red())?,
        }
    }

    info!("bye");
    Ok(())
}
