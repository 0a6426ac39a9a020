pub mod handlers;
pub mod scoring;
pub mod store;

use uuid::Uuid;

use crate::models::job_match::JobMatchRequest;

use self::scoring::JobMatchReport;

/// A scored posting, ready to persist.
#[derive(Debug, Clone)]
pub struct NewJobMatch {
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub request: JobMatchRequest,
    pub report: JobMatchReport,
}
