use super::log_safe_distance;

/// 等效震源深度项 h (km)
const DEPTH_TERM_KM: f64 = 14.0;
/// 远场修正起始距离 (km)
const FAR_FIELD_ONSET_KM: f64 = 30.0;
/// 参考震级
const REFERENCE_MAGNITUDE: f64 = 6.0;

// 加州系数
const C1: f64 = 12.27;
const C2: f64 = 2.270;
const C3: f64 = 0.1304;
const C4: f64 = -1.30;
const C5: f64 = -0.0007070;
const C6: f64 = 1.95;
const C7: f64 = -0.577;

/// Atkinson & Wald (2007) 烈度预测方程（加州系数）
///
/// 计算步骤：
/// - r = √(R² + h²)，h = 14 km
/// - p = log10(r / 30)（r > 30 km 时），否则为 0
/// - ΔM = M − 6
///
/// MMI = c1 + c2·ΔM + c3·ΔM² + c4·log10(r) + c5·r + c6·p + c7·M·log10(r)
///
/// 出处：Atkinson & Wald (2007), Seismol. Res. Lett. 78, 362-372，式 (1)。
/// 原文推荐 R ≤ 30 km，函数本身不限制距离。
pub fn atkinson_wald_2007(magnitude: f64, distance_km: f64) -> f64 {
    let distance = log_safe_distance(distance_km);
    let r = distance.hypot(DEPTH_TERM_KM);
    let log_r = r.log10();

    let p = if r > FAR_FIELD_ONSET_KM {
        (r / FAR_FIELD_ONSET_KM).log10()
    } else {
        0.0
    };
    let dm = magnitude - REFERENCE_MAGNITUDE;

    C1 + C2 * dm + C3 * dm * dm + C4 * log_r + C5 * r + C6 * p + C7 * magnitude * log_r
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_known_values() {
        let i1 = atkinson_wald_2007(6.0, 10.0);
        assert!((i1 - 6.373690748041067).abs() < TOLERANCE, "got {}", i1);

        let i2 = atkinson_wald_2007(5.0, 5.0);
        assert!((i2 - 5.214248856709551).abs() < TOLERANCE, "got {}", i2);
    }

    #[test]
    fn test_zero_distance_uses_substitute() {
        for m in [2.0, 5.0, 6.0, 8.0] {
            assert_eq!(atkinson_wald_2007(m, 0.0), atkinson_wald_2007(m, 0.1));
            assert_eq!(atkinson_wald_2007(m, -3.0), atkinson_wald_2007(m, 0.1));
        }
    }

    #[test]
    fn test_far_field_term() {
        // r ≤ 30 km 时 p = 0：R = 20 → r ≈ 24.4
        let r: f64 = 20.0_f64.hypot(DEPTH_TERM_KM);
        assert!(r < FAR_FIELD_ONSET_KM);
        let expected = C1 + C4 * r.log10() + C5 * r + C7 * 6.0 * r.log10();
        assert!((atkinson_wald_2007(6.0, 20.0) - expected).abs() < TOLERANCE);

        // r > 30 km 时加入 c6·log10(r/30)
        let r: f64 = 100.0_f64.hypot(DEPTH_TERM_KM);
        let expected = C1
            + C4 * r.log10()
            + C5 * r
            + C6 * (r / FAR_FIELD_ONSET_KM).log10()
            + C7 * 6.0 * r.log10();
        assert!((atkinson_wald_2007(6.0, 100.0) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_near_source_saturation() {
        // 深度项使近场烈度趋于饱和
        let at_1km = atkinson_wald_2007(6.0, 1.0);
        let at_01km = atkinson_wald_2007(6.0, 0.1);
        assert!((at_1km - at_01km).abs() < 0.01);
    }

    #[test]
    fn test_decreases_with_distance() {
        for m in [3.0, 5.0, 7.0] {
            let mut previous = atkinson_wald_2007(m, 1.0);
            for r in [10.0, 20.0, 30.0, 50.0, 100.0, 200.0] {
                let current = atkinson_wald_2007(m, r);
                assert!(current < previous, "M{} R{}: {} >= {}", m, r, current, previous);
                previous = current;
            }
        }
    }
}
