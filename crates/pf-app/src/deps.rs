//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for App construction.
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden
//! logic, just parameter grouping.

use std::sync::Arc;

use pf_core::ports::{ClockPort, MailDeliveryPort, ProjectCatalogPort, ViewportPort};

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
pub struct AppDeps {
    // Content / 内容
    pub catalog: Arc<dyn ProjectCatalogPort>,

    // Contact form / 联系表单
    pub mail: Arc<dyn MailDeliveryPort>,

    // Presentation host / 展示宿主
    pub viewport: Arc<dyn ViewportPort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,
}
