use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const DEFAULT_JOBS_COLLECTION: &str = "jobs";

pub const VALIDATION_MESSAGE: &str = "Please fill out all fields before submitting.";
pub const CREATE_FAILED_MESSAGE: &str = "Error creating the job. Please try again.";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching the jobs. Please try again.";
