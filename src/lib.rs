mod error;
mod models;
mod services;

use std::path::Path;

use services::{dedupe_service, purge_service, record_service, scan_service};

pub use error::AppError;
pub use services::purge_service::{Confirmer, ConsoleConfirmer};

// The scraper always writes into this directory next to where the tool runs.
pub const BATCH_OUTPUT_DIR: &str = "batch_output";

#[derive(Debug, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub loaded: usize,
    pub load_failures: usize,
    pub duplicate_groups: usize,
    pub pending_deletes: usize,
    pub deleted: usize,
    pub cancelled: bool,
}

pub fn run(root: &Path, confirmer: &mut dyn Confirmer) -> RunSummary {
    println!("scanning {}...", root.display());
    let paths = scan_service::scan_record_files(root);
    println!("scanned {} files", paths.len());

    let (records, failures) = record_service::load_records(&paths);
    for failure in &failures {
        eprintln!("failed to load {}: {}", failure.path.display(), failure.error);
    }
    let loaded = records.len();

    let decisions = dedupe_service::plan_purge(records);
    println!("found {} duplicate place ids", decisions.len());

    let pending_deletes: usize = decisions.iter().map(|d| d.delete.len()).sum();
    let outcome = purge_service::execute_purge(&decisions, confirmer);

    RunSummary {
        scanned: paths.len(),
        loaded,
        load_failures: failures.len(),
        duplicate_groups: decisions.len(),
        pending_deletes,
        deleted: outcome.deleted,
        cancelled: outcome.cancelled,
    }
}
