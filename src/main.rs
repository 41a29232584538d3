use std::path::Path;

use scrape_dedupe::{run, ConsoleConfirmer, BATCH_OUTPUT_DIR};

fn main() {
    run(Path::new(BATCH_OUTPUT_DIR), &mut ConsoleConfirmer);
}
