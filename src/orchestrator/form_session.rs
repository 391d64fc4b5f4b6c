//! 表单会话 - 编排层
//!
//! ## 职责
//!
//! 1. **事件循环**：在独立的 tokio 任务中持有唯一的 `SubmissionController`
//! 2. **网络调用**：被接受的提交在单独任务中访问网关，完成后带着提交编号回到事件循环
//! 3. **状态发布**：每处理完一个事件，通过 `watch` 通道发布 `FormView` 快照
//!
//! 控制器只在事件循环中被修改，所以状态转换天然按事件顺序串行。
//! 会话句柄被丢弃时事件循环退出，在途请求随之中止。

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::clients::ReviewGateway;
use crate::error::{AppError, AppResult, GatewayError};
use crate::models::{AnalysisResult, AttemptId};
use crate::presentation::FormView;
use crate::workflow::{FormEvent, SubmissionController};

/// 事件通道容量
const EVENT_BUFFER: usize = 64;

/// 发往事件循环的命令，处理并发布视图后回执
struct Command {
    event: FormEvent,
    ack: oneshot::Sender<Option<AttemptId>>,
}

type Completion = (AttemptId, Result<AnalysisResult, GatewayError>);

/// 表单会话句柄
pub struct FormSession {
    commands: mpsc::Sender<Command>,
    views: watch::Receiver<FormView>,
    task: JoinHandle<()>,
}

impl FormSession {
    /// 启动会话
    pub fn spawn<G: ReviewGateway>(gateway: Arc<G>) -> Self {
        let (commands, command_rx) = mpsc::channel(EVENT_BUFFER);
        let (view_tx, views) = watch::channel(FormView::default());
        let task = tokio::spawn(run_event_loop(gateway, command_rx, view_tx));

        Self {
            commands,
            views,
            task,
        }
    }

    /// 当前视图快照
    pub fn view(&self) -> FormView {
        self.views.borrow().clone()
    }

    /// 订阅视图变化
    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.views.clone()
    }

    /// 修改输入内容
    pub async fn edit(&self, text: impl Into<String>) -> AppResult<()> {
        self.send(FormEvent::TextChanged(text.into())).await?;
        Ok(())
    }

    /// 触发提交，返回被接受的提交编号（未通过校验或已有请求在途时为 `None`）
    pub async fn submit(&self) -> AppResult<Option<AttemptId>> {
        self.send(FormEvent::Submit).await
    }

    /// 触发提交并等待本次提交结束
    pub async fn submit_and_wait(&self) -> AppResult<FormView> {
        let accepted = self.submit().await?;
        let mut views = self.views.clone();

        let view = if accepted.is_some() {
            views
                .wait_for(|view| !view.loading)
                .await
                .map_err(|_| AppError::SessionClosed)?
                .clone()
        } else {
            views.borrow().clone()
        };
        Ok(view)
    }

    /// 结束会话并等待事件循环退出
    pub async fn close(self) {
        let FormSession { commands, task, .. } = self;
        drop(commands);
        let _ = task.await;
    }

    async fn send(&self, event: FormEvent) -> AppResult<Option<AttemptId>> {
        let (ack, ack_rx) = oneshot::channel();
        self.commands
            .send(Command { event, ack })
            .await
            .map_err(|_| AppError::SessionClosed)?;
        ack_rx.await.map_err(|_| AppError::SessionClosed)
    }
}

async fn run_event_loop<G: ReviewGateway>(
    gateway: Arc<G>,
    mut commands: mpsc::Receiver<Command>,
    views: watch::Sender<FormView>,
) {
    let mut controller = SubmissionController::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
    let mut in_flight: Option<JoinHandle<()>> = None;

    debug!("表单会话已启动");

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(Command { event, ack }) = command else {
                    break;
                };

                let pending = controller.dispatch(event);
                let accepted = pending.as_ref().map(|p| p.attempt);

                if let Some(pending) = pending {
                    let gateway = Arc::clone(&gateway);
                    let done_tx = done_tx.clone();
                    in_flight = Some(tokio::spawn(async move {
                        let outcome = gateway.submit_review(&pending.text).await;
                        let _ = done_tx.send((pending.attempt, outcome));
                    }));
                }

                views.send_replace(FormView::of(&controller));
                let _ = ack.send(accepted);
            }
            Some((attempt, outcome)) = done_rx.recv() => {
                controller.complete(attempt, outcome);
                in_flight = None;
                views.send_replace(FormView::of(&controller));
            }
        }
    }

    if let Some(handle) = in_flight {
        info!("会话结束，放弃在途请求");
        handle.abort();
    }
    debug!("表单会话已结束");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    const VALID_REVIEW: &str =
        "A slow start but the final act is gripping and the score is lovely";

    /// 收到放行信号后才返回的假网关
    struct GatedGateway {
        calls: AtomicUsize,
        release: Notify,
    }

    impl GatedGateway {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                release: Notify::new(),
            })
        }
    }

    impl ReviewGateway for GatedGateway {
        async fn submit_review(&self, _text: &str) -> Result<AnalysisResult, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(AnalysisResult {
                sentiment: Sentiment::Negative,
                confidence: 0.61,
                rating: 4.2,
            })
        }
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_makes_no_request() {
        let gateway = GatedGateway::new();
        let session = FormSession::spawn(Arc::clone(&gateway));

        session.edit(VALID_REVIEW).await.unwrap();
        let first = session.submit().await.unwrap();
        assert!(first.is_some());
        assert!(session.view().loading);

        let second = session.submit().await.unwrap();
        assert!(second.is_none());

        // 等待第一次请求真正进入网关
        while gateway.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        gateway.release.notify_one();

        let mut views = session.subscribe();
        let view = views.wait_for(|v| !v.loading).await.unwrap().clone();
        assert_eq!(view.result.map(|r| r.sentiment), Some(Sentiment::Negative));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

        session.close().await;
    }

    #[tokio::test]
    async fn test_invalid_submit_publishes_error_without_request() {
        let gateway = GatedGateway::new();
        let session = FormSession::spawn(Arc::clone(&gateway));

        session.edit("Bad movie").await.unwrap();
        let view = session.submit_and_wait().await.unwrap();

        assert_eq!(
            view.error.as_deref(),
            Some("The review must contain at least 10 words.")
        );
        assert!(!view.loading);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);

        session.edit("Bad movie, really").await.unwrap();
        assert!(session.view().error.is_none());

        session.close().await;
    }

    #[tokio::test]
    async fn test_edit_while_submitting_is_ignored() {
        let gateway = GatedGateway::new();
        let session = FormSession::spawn(Arc::clone(&gateway));

        session.edit(VALID_REVIEW).await.unwrap();
        session.submit().await.unwrap();
        session.edit("changed mid-flight").await.unwrap();

        assert_eq!(session.view().review, VALID_REVIEW);
        assert!(!session.view().input_enabled);

        session.close().await;
    }
}
