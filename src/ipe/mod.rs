//! 烈度预测方程（IPE）
//!
//! 每个方程都是纯函数：输入矩震级 M（Mw）和震源到场点的距离 R（km），
//! 返回未取整的修正麦卡利烈度（MMI）估计值，不做范围限制。
//!
//! 各模型对非正距离的处理方式不同（代入 0.1 或截断为 0），
//! 这里按模型分别保留，不做统一。

mod allen_wald;
mod atkinson_wald;
mod bakun_wentworth;

pub use allen_wald::allen_wald_2012;
pub use atkinson_wald::atkinson_wald_2007;
pub use bakun_wentworth::bakun_wentworth_1997;

/// 取对数前代入的最小距离 (km)
pub(crate) const MIN_LOG_DISTANCE_KM: f64 = 0.1;

/// R ≤ 0 时代入 0.1 km，避免 log10(0) 或负数取对数
#[inline]
pub(crate) fn log_safe_distance(distance_km: f64) -> f64 {
    if distance_km <= 0.0 {
        MIN_LOG_DISTANCE_KM
    } else {
        distance_km
    }
}

/// R < 0 时截断为 0（R = 0 保持不变）
#[inline]
pub(crate) fn non_negative_distance(distance_km: f64) -> f64 {
    if distance_km < 0.0 { 0.0 } else { distance_km }
}
