pub mod dedupe_service;
pub mod purge_service;
pub mod record_service;
pub mod scan_service;
