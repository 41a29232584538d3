use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::decision::GroupDecision;
use crate::models::record::PlaceRecord;

// Injected so the deletion logic stays deterministic under test; the only
// interactive moment of a run goes through here.
pub trait Confirmer {
    fn confirm_deletion(&mut self, pending: usize) -> bool;
}

pub struct ConsoleConfirmer;

impl Confirmer for ConsoleConfirmer {
    fn confirm_deletion(&mut self, pending: usize) -> bool {
        print!("Delete these {pending} files? (y/N): ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            // Anything other than an explicit yes declines, EOF included.
            Ok(_) => line.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct PurgeOutcome {
    pub deleted: usize,
    pub failures: Vec<(PathBuf, AppError)>,
    pub cancelled: bool,
}

fn record_line(record: &PlaceRecord) -> String {
    format!(
        "{} (final_success: {}, scrape_success: {}, size: {})",
        record.file_name(),
        record.final_success,
        record.scrape_success,
        record.size_bytes
    )
}

pub fn report_decision(decision: &GroupDecision) {
    println!();
    if decision.keep.display_name.is_empty() {
        println!("Place ID: {}", decision.place_id);
    } else {
        println!("Place ID: {} ({})", decision.place_id, decision.keep.display_name);
    }
    println!("  keep: {}", record_line(&decision.keep));
    for doomed in &decision.delete {
        println!("  delete: {}", record_line(doomed));
    }
}

pub fn execute_purge(decisions: &[GroupDecision], confirmer: &mut dyn Confirmer) -> PurgeOutcome {
    for decision in decisions {
        report_decision(decision);
    }

    let doomed: Vec<&PathBuf> = decisions
        .iter()
        .flat_map(|d| d.delete.iter().map(|r| &r.path))
        .collect();

    println!();
    println!("{} files scheduled for deletion", doomed.len());

    let mut outcome = PurgeOutcome::default();
    if doomed.is_empty() {
        return outcome;
    }

    if !confirmer.confirm_deletion(doomed.len()) {
        println!("deletion cancelled");
        outcome.cancelled = true;
        return outcome;
    }

    for path in doomed {
        match fs::remove_file(path) {
            Ok(()) => {
                println!("deleted {}", path.display());
                outcome.deleted += 1;
            }
            Err(error) => {
                // A failed removal never stops the rest of the queue.
                eprintln!("failed to delete {}: {}", path.display(), error);
                outcome.failures.push((path.clone(), AppError::Io(error)));
            }
        }
    }

    println!("deleted {} files", outcome.deleted);
    outcome
}
