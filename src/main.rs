use std::sync::Arc;

use anyhow::Result;
use film_review_form::presentation::{form_view::PLACEHOLDER, FormView, ResultDisplay};
use film_review_form::utils::logging;
use film_review_form::{AppResult, Config, FormSession, SentimentClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    run().await?;
    Ok(())
}

async fn run() -> AppResult<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    let client = SentimentClient::new(&config)?;

    // 服务不可用时表单照常工作，只给出提示
    match client.health().await {
        Ok(status) if status.is_healthy() => info!("✓ 情感分析服务可用"),
        Ok(status) => warn!("⚠️ 情感分析服务状态异常: {}", status.status),
        Err(e) => warn!("⚠️ 无法连接情感分析服务: {}", e),
    }

    let session = FormSession::spawn(Arc::new(client));

    println!("{}", PLACEHOLDER);
    println!("(one review per line, Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.edit(line).await?;
        let view = session.submit_and_wait().await?;
        render(&view);
    }

    session.close().await;
    Ok(())
}

fn render(view: &FormView) {
    if let Some(error) = &view.error {
        println!("✗ {}", error);
    } else if let Some(result) = &view.result {
        println!("{}", ResultDisplay::new(result));
    }
    println!();
}
