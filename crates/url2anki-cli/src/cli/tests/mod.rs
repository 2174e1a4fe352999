//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::sync::{Mutex, MutexGuard};

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

/// Serializes tests that read or set `URL2ANKI_*` variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

pub(super) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

mod scrape_args;
