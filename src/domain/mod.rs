pub mod candidate;
pub mod classification;
pub mod page_snapshot;
