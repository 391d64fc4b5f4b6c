//! 分析结果的文本展示

use crate::models::{AnalysisResult, Sentiment};
use std::fmt;

/// 置信度条的格子数
const BAR_WIDTH: usize = 20;

/// 分析结果展示
pub struct ResultDisplay<'a> {
    result: &'a AnalysisResult,
}

impl<'a> ResultDisplay<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    /// 样式用的情感基调
    pub fn tone(&self) -> Sentiment {
        self.result.sentiment
    }

    /// 置信度百分比，保留两位小数，如 `87.00%`
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.result.confidence * 100.0)
    }

    /// 按置信度填充的进度条
    pub fn confidence_bar(&self) -> String {
        let ratio = self.result.confidence.clamp(0.0, 1.0);
        let filled = (ratio * BAR_WIDTH as f64).round() as usize;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
    }

    /// 评分，保留一位小数，如 `8.5 / 10`
    pub fn rating(&self) -> String {
        format!("{:.1} / 10", self.result.rating)
    }
}

impl fmt::Display for ResultDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Result")?;
        writeln!(f, "  Sentiment:  {}", self.result.sentiment)?;
        writeln!(
            f,
            "  Confidence: {} {}",
            self.confidence_bar(),
            self.confidence_percent()
        )?;
        write!(f, "  Rating:     {}", self.rating())
    }
}
