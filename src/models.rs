use crate::error::MmiError;
use crate::ipe::{allen_wald_2012, atkinson_wald_2007, bakun_wentworth_1997};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 烈度预测模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpeModel {
    #[serde(rename = "bakun_wentworth_1997")]
    BakunWentworth1997,
    #[serde(rename = "atkinson_wald_2007")]
    AtkinsonWald2007,
    #[serde(rename = "allen_wald_2012")]
    AllenWald2012,
}

impl IpeModel {
    pub const ALL: [IpeModel; 3] = [
        IpeModel::BakunWentworth1997,
        IpeModel::AtkinsonWald2007,
        IpeModel::AllenWald2012,
    ];

    /// 用该模型计算烈度
    pub fn evaluate(self, magnitude: f64, distance_km: f64) -> f64 {
        match self {
            IpeModel::BakunWentworth1997 => bakun_wentworth_1997(magnitude, distance_km),
            IpeModel::AtkinsonWald2007 => atkinson_wald_2007(magnitude, distance_km),
            IpeModel::AllenWald2012 => allen_wald_2012(magnitude, distance_km),
        }
    }

    /// 显示名称
    pub fn name(self) -> &'static str {
        match self {
            IpeModel::BakunWentworth1997 => "Bakun-Wentworth (1997)",
            IpeModel::AtkinsonWald2007 => "Atkinson-Wald (2007)",
            IpeModel::AllenWald2012 => "Allen-Wald (2012)",
        }
    }

    /// 标识符（与 serde 名称一致）
    pub fn id(self) -> &'static str {
        match self {
            IpeModel::BakunWentworth1997 => "bakun_wentworth_1997",
            IpeModel::AtkinsonWald2007 => "atkinson_wald_2007",
            IpeModel::AllenWald2012 => "allen_wald_2012",
        }
    }
}

impl fmt::Display for IpeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IpeModel {
    type Err = MmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 同时接受 id() 与 name() 两种写法，如 "Allen-Wald (2012)"
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, '(' | ')'))
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        match normalized.as_str() {
            "bakun_wentworth_1997" | "bw97" => Ok(IpeModel::BakunWentworth1997),
            "atkinson_wald_2007" | "aw07" => Ok(IpeModel::AtkinsonWald2007),
            "allen_wald_2012" | "aw12" => Ok(IpeModel::AllenWald2012),
            _ => Err(MmiError::UnknownModel(s.to_string())),
        }
    }
}

/// 单个模型的烈度估计结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityEstimate {
    pub model: IpeModel,
    /// 未取整的 MMI 估计值
    pub mmi: f64,
}

impl IntensityEstimate {
    pub fn new(model: IpeModel, magnitude: f64, distance_km: f64) -> Self {
        Self {
            model,
            mmi: model.evaluate(magnitude, distance_km),
        }
    }
}

/// 用全部模型计算同一事件在同一距离上的烈度（按 `IpeModel::ALL` 顺序）
pub fn estimate_all(magnitude: f64, distance_km: f64) -> Vec<IntensityEstimate> {
    IpeModel::ALL
        .iter()
        .map(|&model| IntensityEstimate::new(model, magnitude, distance_km))
        .collect()
}
