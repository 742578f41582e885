use crate::config::SelectorConfig;
use crate::error::MmiError;
use crate::models::{IntensityEstimate, IpeModel};

/// 按距离选择烈度模型
///
/// 距离划分参考 Cua et al. (2010), GEM Tech. Rep. 2010-4。
///
/// 判定顺序固定：
/// - R ≤ 近场上限：Atkinson-Wald (2007)
/// - R ≥ 远场下限：Bakun-Wentworth (1997)
/// - 两者之间：Allen-Wald (2012)
///
/// 边界处不做插值，结果在阈值处不连续。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// 创建选择器，阈值必须有限且近场上限不大于远场下限
    pub fn new(config: SelectorConfig) -> Result<Self, MmiError> {
        let near = config.near_field_max_km;
        let far = config.far_field_min_km;

        if !near.is_finite() || !far.is_finite() || near > far {
            tracing::debug!("拒绝选择器阈值: 近场 {} km, 远场 {} km", near, far);
            return Err(MmiError::InvalidThresholds { near, far });
        }

        tracing::debug!("选择器阈值: 近场 ≤ {} km, 远场 ≥ {} km", near, far);
        Ok(Self { config })
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// 根据距离选择模型（NaN 落入重叠区），不输出日志
    pub fn select(&self, distance_km: f64) -> IpeModel {
        if distance_km <= self.config.near_field_max_km {
            IpeModel::AtkinsonWald2007
        } else if distance_km >= self.config.far_field_min_km {
            IpeModel::BakunWentworth1997
        } else {
            IpeModel::AllenWald2012
        }
    }

    /// 选择模型并计算烈度
    pub fn estimate(&self, magnitude: f64, distance_km: f64) -> IntensityEstimate {
        IntensityEstimate::new(self.select(distance_km), magnitude, distance_km)
    }
}

/// 使用默认阈值（20 km / 30 km）的最佳烈度估计
pub fn best_estimate(magnitude: f64, distance_km: f64) -> f64 {
    Selector::default().estimate(magnitude, distance_km).mmi
}
