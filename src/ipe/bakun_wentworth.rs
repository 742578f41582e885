use super::log_safe_distance;

/// Bakun & Wentworth (1997) 加州烈度衰减公式
///
/// MMI = 3.67 + 1.17·M − 3.19·log10(R)
///
/// 出处：Bakun & Wentworth (1997), Bull. Seismol. Soc. Am. 87, 1502-1521，式 (4)。
/// 原文适用于 R > 20 km，函数本身不限制距离。
pub fn bakun_wentworth_1997(magnitude: f64, distance_km: f64) -> f64 {
    let r = log_safe_distance(distance_km);
    3.67 + 1.17 * magnitude - 3.19 * r.log10()
}
