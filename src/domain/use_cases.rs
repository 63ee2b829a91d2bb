pub mod extractors;
pub mod jobs;
