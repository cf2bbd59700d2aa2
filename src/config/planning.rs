// ==========================================
// 分拣机选型决策支持系统 - 规划参数
// ==========================================
// 用途:
// - 产能规划与评分所需的可调参数, 默认值 = 基准配置;
// - 引擎内不得硬编码这些数值, 全部经由本结构注入。
// ==========================================

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

// ==========================================
// PlanningParams - 产能规划参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningParams {
    // 目标周转次数 (次/小时, 基准 2.5);
    // 机型未配置基准格口数时, 单格口设计能力按此折算 (额定能力 / 周转数)
    pub target_turnover_per_hour: f64,
    pub chutes_per_block: u32,   // 每区块格口数 (基准 8)
    pub max_alternatives: usize, // 备选方案上限 (基准 5)
}

impl Default for PlanningParams {
    fn default() -> Self {
        Self {
            target_turnover_per_hour: 2.5,
            chutes_per_block: 8,
            max_alternatives: 5,
        }
    }
}

impl PlanningParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_turnover_per_hour <= 0.0 {
            return Err(ConfigError::InvalidPlanningParams {
                message: format!(
                    "target_turnover_per_hour 必须为正数: {}",
                    self.target_turnover_per_hour
                ),
            });
        }
        if self.chutes_per_block == 0 {
            return Err(ConfigError::InvalidPlanningParams {
                message: "chutes_per_block 必须 >= 1".to_string(),
            });
        }
        Ok(())
    }
}

// ==========================================
// ScoreWeights - 子分权重
// ==========================================
// 综合分 = Σ (子分 × 权重), 权重之和须为 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub base_priority: f64,
    pub container_fit: f64,
    pub capacity_fit: f64,
    pub size_efficiency: f64,
    pub volume_tier: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base_priority: 0.15,
            container_fit: 0.20,
            capacity_fit: 0.30,
            size_efficiency: 0.15,
            volume_tier: 0.20,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.base_priority
            + self.container_fit
            + self.capacity_fit
            + self.size_efficiency
            + self.volume_tier
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights { sum });
        }
        Ok(())
    }
}

// ==========================================
// CapacityFitCurve - 产能适配曲线
// ==========================================
// 最优区间内满分, 区间外单调线性衰减;
// 利用率 > 100% 取子分最低值 (软惩罚, 硬淘汰由可行性过滤负责)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityFitCurve {
    pub band_low: f64,        // 最优区间下限 (基准 0.60)
    pub band_high: f64,       // 最优区间上限 (基准 0.90)
    pub over_band_floor: f64, // 利用率趋近 100% 时的分数下限 (基准 25.0)
}

impl Default for CapacityFitCurve {
    fn default() -> Self {
        Self {
            band_low: 0.60,
            band_high: 0.90,
            over_band_floor: 25.0,
        }
    }
}

impl CapacityFitCurve {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.band_low > 0.0 && self.band_low < self.band_high && self.band_high <= 1.0) {
            return Err(ConfigError::InvalidCapacityCurve {
                message: format!(
                    "最优区间非法: band_low={}, band_high={}",
                    self.band_low, self.band_high
                ),
            });
        }
        if !(0.0..=100.0).contains(&self.over_band_floor) {
            return Err(ConfigError::InvalidCapacityCurve {
                message: format!("over_band_floor 超出 [0, 100]: {}", self.over_band_floor),
            });
        }
        Ok(())
    }
}
