pub mod submission_controller;

pub use submission_controller::{FormEvent, PendingSubmission, SubmissionController};
