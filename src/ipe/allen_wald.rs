use super::non_negative_distance;

/// Allen & Wald (2012) 全球活动地壳烈度预测方程
///
/// d* = √(R² + [1 + 0.72·e^(M−5)]²)
/// MMI = 3.15 + 1.03·M − 1.11·ln(d*)
///
/// 出处：Allen & Wald (2012), J. Seismol. 16, 409-433（全球活动地壳）。
/// 适用于所有距离，选择器在两个区域模型重叠的范围内使用它。
pub fn allen_wald_2012(magnitude: f64, distance_km: f64) -> f64 {
    let distance = non_negative_distance(distance_km);
    let near_source_term = 1.0 + 0.72 * (magnitude - 5.0).exp();
    let d_star = distance.hypot(near_source_term);
    3.15 + 1.03 * magnitude - 1.11 * d_star.ln()
}
