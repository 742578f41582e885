use thiserror::Error;

/// 配置与解析错误（数值计算本身不会出错）
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MmiError {
    #[error("未知的烈度模型: {0}")]
    UnknownModel(String),

    #[error("无效的距离阈值: 近场上限 {near} km, 远场下限 {far} km")]
    InvalidThresholds { near: f64, far: f64 },

    #[error("环境变量 {key} 的值无效: {value}")]
    InvalidEnvValue { key: String, value: String },
}
