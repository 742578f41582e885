//! 地震烈度估计
//!
//! 根据矩震级和震源距离，用多个经验烈度预测方程（IPE）估算修正麦卡利烈度（MMI），
//! 并按距离选择最合适的模型。

pub mod config;
pub mod error;
pub mod ipe;
pub mod models;
pub mod scale;
pub mod selector;

pub use config::SelectorConfig;
pub use error::MmiError;
pub use ipe::{allen_wald_2012, atkinson_wald_2007, bakun_wentworth_1997};
pub use models::{IntensityEstimate, IpeModel, estimate_all};
pub use scale::{mmi_class, roman_numeral, validate_mmi_class};
pub use selector::{Selector, best_estimate};
