//! # TOEIC Admin
//!
//! TOEIC 试卷管理后台的核心库：七个 Part 的拖拽排序、多选批量删除，
//! 以及试卷、用户、词汇、提交记录的管理接口
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有 HTTP 连接，只暴露接口能力
//! - `ElearningClient` - 鉴权、URL 拼接、响应信封解析
//!
//! ### ② 业务能力层（Services / Reorder）
//! - `services/` - `PartBackend`（对有序集合的交换 / 删除 / 新增 / 修改）与 `Notifier`（用户提示）
//! - `reorder/` - 拖拽手势 → 相邻交换序列（纯函数），以及按顺序执行交换
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一张试卷的编辑流程
//! - `TestBoard` - 七个显示列表 + 七份多选状态，失败时整体重新拉取
//! - `Selection` / `delete_many` - 多选与并发删除
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/admin_app` - 把命令行子命令分派到流程层或客户端
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod reorder;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::ElearningClient;
pub use config::Config;
pub use error::{AppError, AppResult, BoardError};
pub use models::{DisplayList, ItemId, PartItem, PartKey, TestDetail};
pub use orchestrator::App;
pub use reorder::{plan_move, PendingReorder, ReorderPlan, SwapStep};
pub use services::{Notifier, PartBackend, TracingNotifier};
pub use workflow::{BulkDeleteOutcome, MutationOutcome, ReorderOutcome, Selection, TestBoard};
