//! 交换序列执行器
//!
//! 每次交换都会改变服务端题号，后一次交换依赖前一次的结果，
//! 因此严格按顺序逐个等待，不能并发。

use crate::error::AppError;
use crate::models::PartKey;
use crate::reorder::plan::SwapStep;
use crate::services::PartBackend;
use tracing::{debug, info, warn};

/// 执行中断的位置
#[derive(Debug)]
pub struct SwapFailure {
    /// 失败步骤的下标（之前的步骤已在服务端生效）
    pub step: usize,
    pub swap: SwapStep,
    pub error: AppError,
}

/// 依次执行交换序列，遇到第一个失败即停止
///
/// # 返回
/// 成功执行的交换次数
pub async fn execute_swaps(
    backend: &dyn PartBackend,
    part: PartKey,
    swaps: &[SwapStep],
) -> Result<usize, SwapFailure> {
    for (step, swap) in swaps.iter().enumerate() {
        debug!(
            "[{}] 交换 {}/{}: {} ↔ {}",
            part.route(),
            step + 1,
            swaps.len(),
            swap.moved,
            swap.passed
        );

        if let Err(error) = backend.swap_adjacent(part, &swap.moved, &swap.passed).await {
            warn!(
                "[{}] 第 {}/{} 次交换失败 ({} ↔ {}): {}",
                part.route(),
                step + 1,
                swaps.len(),
                swap.moved,
                swap.passed,
                error
            );
            return Err(SwapFailure {
                step,
                swap: swap.clone(),
                error,
            });
        }
    }

    info!("[{}] ✓ {} 次交换全部完成", part.route(), swaps.len());
    Ok(swaps.len())
}
