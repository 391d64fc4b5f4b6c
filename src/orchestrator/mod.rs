//! 编排层（Orchestration Layer）
//!
//! 持有表单会话的事件循环，负责把展示层事件、网络回调串行地交给控制器。
//!
//! ```text
//! orchestrator::FormSession (事件循环 / 状态发布)
//!     ↓
//! workflow::SubmissionController (一次提交的状态机)
//!     ↓
//! services (校验) / clients (情感分析服务)
//! ```

pub mod form_session;

pub use form_session::FormSession;
