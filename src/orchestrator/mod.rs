//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层持有客户端和通知器，把命令行子命令分派到流程层或客户端接口。
//!
//! ## 层次关系
//!
//! ```text
//! admin_app (处理一条 Command)
//!     ↓
//! workflow::TestBoard (单张试卷的七个 Part)
//!     ↓
//! reorder / services (能力层：交换计划、PartBackend、Notifier)
//!     ↓
//! clients::ElearningClient (HTTP + 响应信封)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源所有者**：只有编排层创建 `ElearningClient`
//! 2. **向下依赖**：编排层 → workflow → services → clients
//! 3. **结果映射**：流程层不返回错误，编排层把失败结果映射为退出码

pub mod admin_app;

pub use admin_app::App;
