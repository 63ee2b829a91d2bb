pub mod home;
pub mod job_page;
pub mod jobs;
pub mod json_error;
pub mod system;
