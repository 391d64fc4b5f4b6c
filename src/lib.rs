//! # Film Review Form
//!
//! 影评情感分析表单：本地校验评论文本，提交到情感分析服务，展示情感 / 置信度 / 评分
//!
//! ## 架构设计
//!
//! ### ① 能力层（Services / Clients）
//! - `services/` - 评论校验，纯函数
//! - `clients/` - `SentimentClient`，唯一访问网络的地方；`ReviewGateway` 是它对上层暴露的能力
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - `SubmissionController`，一次提交的状态机（校验 → 提交 → 成功/失败）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - `FormSession`，事件循环 + 状态发布，保证同一时刻最多一个请求在途
//!
//! ### ④ 展示层（Presentation）
//! - `presentation/` - `FormView` / `ResultDisplay`，与 UI 工具无关的视图模型
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod presentation;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ReviewGateway, SentimentClient};
pub use config::Config;
pub use error::{AppError, AppResult, GatewayError, ValidationError};
pub use models::{AnalysisResult, Sentiment, SubmissionState};
pub use orchestrator::FormSession;
pub use services::validate_review;
pub use workflow::{FormEvent, SubmissionController};
