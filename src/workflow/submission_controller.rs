//! 提交控制器 - 流程层
//!
//! 核心职责：持有唯一的 [`SubmissionState`]，定义"一次提交"的完整流程
//!
//! 流程顺序：
//! 1. 校验（失败 → `Failed(reason)`，不访问网络）
//! 2. `Submitting(attempt)`，交给网关
//! 3. 网关返回 → `Succeeded(result)` 或 `Failed(message)`
//!
//! 控制器本身是同步的，不持有网关；网络调用由调用方执行后再通过
//! [`SubmissionController::complete`] 回填结果。

use tracing::{debug, info, warn};

use crate::clients::ReviewGateway;
use crate::error::GatewayError;
use crate::models::{AnalysisResult, AttemptId, SubmissionState};
use crate::services::validate_review;
use crate::utils::logging::truncate_text;

/// 来自展示层的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// 输入框内容变化（整段替换）
    TextChanged(String),
    /// 用户点击提交
    Submit,
}

/// 已通过校验、等待发送的提交
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub attempt: AttemptId,
    /// 已去掉首尾空白
    pub text: String,
}

/// 提交控制器
#[derive(Debug, Default)]
pub struct SubmissionController {
    review: String,
    state: SubmissionState,
    last_attempt: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// 当前输入框内容（未裁剪）
    pub fn review(&self) -> &str {
        &self.review
    }

    /// 处理一个展示层事件
    ///
    /// 只有被接受的 `Submit` 会返回 [`PendingSubmission`]，调用方需要据此发起请求。
    pub fn dispatch(&mut self, event: FormEvent) -> Option<PendingSubmission> {
        match event {
            FormEvent::TextChanged(text) => {
                self.edit(text);
                None
            }
            FormEvent::Submit => self.begin_submit(),
        }
    }

    /// 修改评论内容
    ///
    /// 提交中忽略修改；`Failed` 状态下修改会清除错误提示回到 `Idle`。
    /// 返回修改是否生效。
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        if let SubmissionState::Submitting(attempt) = self.state {
            debug!("提交 {} 进行中，忽略输入修改", attempt);
            return false;
        }

        self.review = text.into();
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Idle;
        }
        true
    }

    /// 开始一次提交
    ///
    /// 已有请求在途时直接拒绝，保证同一时刻最多一个请求。
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if let SubmissionState::Submitting(attempt) = self.state {
            warn!("⚠️ 提交 {} 尚未完成，忽略重复提交", attempt);
            return None;
        }

        self.state = SubmissionState::Validating;

        if let Err(reason) = validate_review(&self.review) {
            info!("评论未通过校验: {}", reason);
            self.state = SubmissionState::Failed(reason.to_string());
            return None;
        }

        self.last_attempt += 1;
        let attempt = AttemptId(self.last_attempt);
        let text = self.review.trim().to_string();

        info!("📤 提交 {}: {}", attempt, truncate_text(&text, 80));
        self.state = SubmissionState::Submitting(attempt);

        Some(PendingSubmission { attempt, text })
    }

    /// 回填网关结果
    ///
    /// 只有当前仍处于同一个 `Submitting(attempt)` 时才生效，否则丢弃并返回 `false`。
    pub fn complete(
        &mut self,
        attempt: AttemptId,
        outcome: Result<AnalysisResult, GatewayError>,
    ) -> bool {
        if self.state != SubmissionState::Submitting(attempt) {
            debug!("丢弃过期的提交结果 {} (当前状态: {:?})", attempt, self.state);
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                info!("✓ 提交 {} 成功: {}", attempt, result.sentiment);
                SubmissionState::Succeeded(result)
            }
            Err(err) => {
                match &err {
                    GatewayError::Application { status, .. } => {
                        warn!("提交 {} 被服务端拒绝 (HTTP {})", attempt, status)
                    }
                    GatewayError::Transport { .. } => {
                        warn!("提交 {} 传输失败: {}", attempt, err)
                    }
                }
                SubmissionState::Failed(err.user_message())
            }
        };
        true
    }

    /// 顺序执行一次完整提交：校验 → 请求 → 回填
    pub async fn submit<G: ReviewGateway>(&mut self, gateway: &G) -> &SubmissionState {
        if let Some(pending) = self.begin_submit() {
            let outcome = gateway.submit_review(&pending.text).await;
            self.complete(pending.attempt, outcome);
        }
        &self.state
    }
}
