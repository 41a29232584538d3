use std::path::{Path, PathBuf};

// Batch bookkeeping files that live alongside the records but are not
// records themselves.
const EXCLUDED_FILES: &[&str] = &[
    "progress.json",
    "summary_report.json",
    "errors.jsonl",
    "batch_config.json",
];

fn is_record_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if EXCLUDED_FILES.contains(&name) {
        return false;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext == "json",
        None => false,
    }
}

pub fn scan_record_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_record_file(p))
        .collect()
}
