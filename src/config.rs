use crate::error::MmiError;
use std::env;

pub const NEAR_FIELD_MAX_KM_ENV: &str = "MMI_NEAR_FIELD_MAX_KM";
pub const FAR_FIELD_MIN_KM_ENV: &str = "MMI_FAR_FIELD_MIN_KM";

/// 默认近场上限 (km)，R ≤ 该值时使用 Atkinson-Wald
pub const DEFAULT_NEAR_FIELD_MAX_KM: f64 = 20.0;
/// 默认远场下限 (km)，R ≥ 该值时使用 Bakun-Wentworth
pub const DEFAULT_FAR_FIELD_MIN_KM: f64 = 30.0;

/// 模型选择器配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    pub near_field_max_km: f64,
    pub far_field_min_km: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            near_field_max_km: DEFAULT_NEAR_FIELD_MAX_KM,
            far_field_min_km: DEFAULT_FAR_FIELD_MIN_KM,
        }
    }
}

impl SelectorConfig {
    /// 从环境变量加载配置，未设置、无法解析或非有限值时使用默认值
    ///
    /// 不检查两个阈值的先后关系，结果需经 `Selector::new` 校验。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从环境变量加载配置，无法解析或非有限的值返回错误
    pub fn try_from_env() -> Result<Self, MmiError> {
        Self::try_from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            near_field_max_km: lenient(&lookup, NEAR_FIELD_MAX_KM_ENV, DEFAULT_NEAR_FIELD_MAX_KM),
            far_field_min_km: lenient(&lookup, FAR_FIELD_MIN_KM_ENV, DEFAULT_FAR_FIELD_MIN_KM),
        }
    }

    pub(crate) fn try_from_lookup<F>(lookup: F) -> Result<Self, MmiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            near_field_max_km: strict(&lookup, NEAR_FIELD_MAX_KM_ENV, DEFAULT_NEAR_FIELD_MAX_KM)?,
            far_field_min_km: strict(&lookup, FAR_FIELD_MIN_KM_ENV, DEFAULT_FAR_FIELD_MIN_KM)?,
        })
    }
}

/// 解析为有限的 f64，"NaN"、"inf" 等视为无效
fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn lenient<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => parse_finite(&value).unwrap_or_else(|| {
            tracing::warn!("环境变量 {} 的值无法解析: {:?}，使用默认值 {}", key, value, default);
            default
        }),
        None => default,
    }
}

fn strict<F>(lookup: &F, key: &str, default: f64) -> Result<f64, MmiError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => parse_finite(&value).ok_or_else(|| MmiError::InvalidEnvValue {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
