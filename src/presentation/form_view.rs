//! 表单视图模型
//!
//! 由控制器状态和当前输入推导，不持有任何可变状态。

use crate::error::ValidationError;
use crate::models::{AnalysisResult, SubmissionState};
use crate::services::validate_review;
use crate::workflow::SubmissionController;

pub const PLACEHOLDER: &str = "Enter your film review here (10-256 words)";
pub const SUBMIT_LABEL: &str = "Analyze Review";
pub const SUBMITTING_LABEL: &str = "Analyzing...";

/// 表单快照
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub review: String,
    pub loading: bool,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub placeholder: &'static str,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
}

impl FormView {
    pub fn from_parts(review: &str, state: &SubmissionState) -> Self {
        let loading = state.is_submitting();
        Self {
            review: review.to_string(),
            loading,
            input_enabled: !loading,
            submit_enabled: !loading && !review.trim().is_empty(),
            submit_label: if loading { SUBMITTING_LABEL } else { SUBMIT_LABEL },
            placeholder: PLACEHOLDER,
            error: state.error_message().map(str::to_string),
            result: state.result().cloned(),
        }
    }

    pub fn of(controller: &SubmissionController) -> Self {
        Self::from_parts(controller.review(), controller.state())
    }

    /// 输入过程中的即时校验提示，不影响状态
    pub fn inline_feedback(text: &str) -> Option<ValidationError> {
        validate_review(text).err()
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::from_parts("", &SubmissionState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttemptId, Sentiment};

    #[test]
    fn test_idle_view() {
        let view = FormView::default();
        assert!(!view.loading);
        assert!(view.input_enabled);
        assert!(!view.submit_enabled, "空输入时不可提交");
        assert_eq!(view.submit_label, SUBMIT_LABEL);
        assert_eq!(view.placeholder, PLACEHOLDER);
    }

    #[test]
    fn test_submitting_view_disables_everything() {
        let view = FormView::from_parts("some review text", &SubmissionState::Submitting(AttemptId(1)));
        assert!(view.loading);
        assert!(!view.input_enabled);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, SUBMITTING_LABEL);
    }

    #[test]
    fn test_whitespace_only_cannot_submit() {
        let view = FormView::from_parts("   \n", &SubmissionState::Idle);
        assert!(!view.submit_enabled);
    }

    #[test]
    fn test_failed_and_succeeded_views() {
        let failed = FormView::from_parts("x", &SubmissionState::Failed("nope".to_string()));
        assert_eq!(failed.error.as_deref(), Some("nope"));
        assert!(failed.result.is_none());

        let result = AnalysisResult {
            sentiment: Sentiment::Negative,
            confidence: 0.6,
            rating: 3.0,
        };
        let ok = FormView::from_parts("x", &SubmissionState::Succeeded(result.clone()));
        assert_eq!(ok.result, Some(result));
        assert!(ok.error.is_none());
    }

    #[test]
    fn test_inline_feedback() {
        assert_eq!(FormView::inline_feedback(""), Some(ValidationError::Empty));
        assert_eq!(FormView::inline_feedback("one two three"), Some(ValidationError::TooFewWords));
        assert_eq!(
            FormView::inline_feedback("one two three four five six seven eight nine ten"),
            None
        );
    }
}
