pub mod decision;
pub mod record;
