//! 修正麦卡利烈度等级（I - XII）
//!
//! 烈度模型返回未取整的小数，这里提供给调用方按需换算为整数等级。

pub const MIN_MMI_CLASS: u8 = 1;
pub const MAX_MMI_CLASS: u8 = 12;

const ROMAN: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// 四舍五入并限制在 1-12 范围内（NaN 视为 1）
pub fn mmi_class(intensity: f64) -> u8 {
    if intensity.is_nan() {
        return MIN_MMI_CLASS;
    }
    intensity
        .round()
        .clamp(MIN_MMI_CLASS as f64, MAX_MMI_CLASS as f64) as u8
}

/// 等级对应的罗马数字，超出范围时取最近的端点
pub fn roman_numeral(class: u8) -> &'static str {
    let class = class.clamp(MIN_MMI_CLASS, MAX_MMI_CLASS);
    ROMAN[(class - 1) as usize]
}

/// 验证烈度等级是否有效
pub fn validate_mmi_class(class: u8) -> bool {
    (MIN_MMI_CLASS..=MAX_MMI_CLASS).contains(&class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipe::bakun_wentworth_1997;

    #[test]
    fn test_mmi_class() {
        assert_eq!(mmi_class(7.5), 8);
        assert_eq!(mmi_class(7.49), 7);
        assert_eq!(mmi_class(4.375), 4);
        assert_eq!(mmi_class(0.2), 1);
        assert_eq!(mmi_class(-3.0), 1);
        assert_eq!(mmi_class(13.7), 12);
        assert_eq!(mmi_class(f64::NAN), 1);
        assert_eq!(mmi_class(f64::INFINITY), 12);
    }

    #[test]
    fn test_roman_numeral() {
        assert_eq!(roman_numeral(1), "I");
        assert_eq!(roman_numeral(4), "IV");
        assert_eq!(roman_numeral(9), "IX");
        assert_eq!(roman_numeral(12), "XII");
        assert_eq!(roman_numeral(0), "I");
        assert_eq!(roman_numeral(200), "XII");
    }

    #[test]
    fn test_validate_mmi_class() {
        assert!(!validate_mmi_class(0));
        assert!(validate_mmi_class(1));
        assert!(validate_mmi_class(12));
        assert!(!validate_mmi_class(13));
    }

    #[test]
    fn test_model_output_to_class() {
        // M7.0, 25km: 约 7.40 → VII
        let intensity = bakun_wentworth_1997(7.0, 25.0);
        assert_eq!(roman_numeral(mmi_class(intensity)), "VII");
    }
}
