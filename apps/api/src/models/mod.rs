pub mod job_match;
pub mod resume;
pub mod template;
