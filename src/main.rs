mod cli;
mod config;
mod domain;
mod error;
mod journal;
mod render;
mod session;
mod storage;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::journal::{FileJournal, Journal};
use crate::session::console::{Console, ConsoleOptions};
use crate::session::state::Session;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref());
    cli.apply(&mut config);
    log::debug!("Using config {:?}", config);

    let mut journal = FileJournal::open(&config.log_file);
    if journal.is_open() {
        log::info!("Journal at {:?}", journal.path());
    }

    // Failures are reported, never turned into a non-zero exit
    if let Err(err) = run(&config, &mut journal) {
        report_fatal(&err, &mut journal, &mut std::io::stderr());
    }
}

fn report_fatal(err: &anyhow::Error, journal: &mut impl Journal, err_out: &mut impl Write) {
    if let Err(write_err) = writeln!(err_out, "Fatal error: {:#}", err) {
        log::warn!("Could not report fatal error: {}", write_err);
    }
    journal.record(&format!("Fatal: {:#}", err));
}

fn run(config: &AppConfig, journal: &mut FileJournal) -> Result<()> {
    let mut session = Session::new(config.shapes_file.clone(), journal);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(stdin.lock(), stdout.lock(), ConsoleOptions::from(config)).run(&mut session)
}
