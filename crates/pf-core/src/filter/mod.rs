//! Project gallery filtering.
//!
//! 项目列表过滤：类别谓词以数据表形式声明，过滤结果保持目录原有顺序。

pub mod category;
pub mod engine;
pub mod view;

pub use category::{CategoryPredicate, FilterCategory, InvalidFilterCategory, CATEGORY_RULES};
pub use engine::ProjectFilterEngine;
pub use view::{InvalidViewMode, ProjectCard, ViewMode};
