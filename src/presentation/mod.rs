//! 展示层模型
//!
//! 与具体 UI 工具无关，终端前端和测试都直接使用。

pub mod form_view;
pub mod result_display;

pub use form_view::FormView;
pub use result_display::ResultDisplay;
