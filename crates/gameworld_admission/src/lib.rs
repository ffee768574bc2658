//! Two-tier admission queue (priority accounts drained before standard)
//! with expiring slots and retry guidance, used to gate login when the
//! world is at or over its configured player cap.

mod queue;
mod retry;

pub use queue::{AdmissionOutcome, AdmissionQueue, AdmissionRequest, Guid};
pub use retry::{expiry_timeout, retry_wait_seconds};
