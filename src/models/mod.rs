pub mod review;
pub mod state;

pub use review::{AnalysisResult, ApiError, HealthStatus, PredictRequest, Sentiment};
pub use state::{AttemptId, SubmissionState};
