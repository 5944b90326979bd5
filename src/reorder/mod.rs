//! 排序核心
//!
//! - `plan` - 纯函数：拖拽手势 → 本地新顺序 + 交换序列
//! - `executor` - 副作用：按顺序调用后端交换接口

pub mod executor;
pub mod plan;

pub use executor::{execute_swaps, SwapFailure};
pub use plan::{apply_swaps, plan_move, PendingReorder, ReorderPlan, SwapStep};
