// ==========================================
// 分拣机选型决策支持系统 - 评分引擎
// ==========================================
// 职责: 对可行机型计算五项子分与加权综合分
// 子分刻度: 统一 0-100
// 红线: 评分参数 (权重/曲线) 来自配置注入, 引擎内不硬编码
// ==========================================

use crate::config::planning::{CapacityFitCurve, ScoreWeights};
use crate::domain::evaluation::{CapacityPlan, ScoreBreakdown};
use crate::domain::machine::{SorterModel, VolumeBand};
use crate::domain::product::ProductSpec;
use crate::domain::types::ContainerSupport;
use crate::error::ConfigError;

// ==========================================
// ScoringEngine - 评分引擎
// ==========================================
#[derive(Debug)]
pub struct ScoringEngine {
    weights: ScoreWeights,
    curve: CapacityFitCurve,
}

impl ScoringEngine {
    /// 构造函数
    ///
    /// # 参数
    /// - weights: 子分权重, 构造时校验和为 1.0 (保证综合分 0-100 刻度)
    /// - curve: 产能适配曲线参数, 构造时校验区间合法
    ///
    /// # 错误
    /// - InvalidWeights / InvalidCapacityCurve: 非法参数到不了评分阶段
    pub fn new(weights: ScoreWeights, curve: CapacityFitCurve) -> Result<Self, ConfigError> {
        weights.validate()?;
        curve.validate()?;
        Ok(Self { weights, curve })
    }

    // ==========================================
    // 子分纯函数
    // ==========================================

    /// 容器适配度子分
    ///
    /// # 规则
    /// - Recommended → 100 (推荐搭配)
    /// - Supported → 40 (可用但非首选)
    /// - NotSupported 不会到达此处 (可行性过滤已淘汰)
    pub fn container_fit_score(support: ContainerSupport) -> f64 {
        match support {
            ContainerSupport::Recommended => 100.0,
            ContainerSupport::Supported => 40.0,
            ContainerSupport::NotSupported => 0.0,
        }
    }

    /// 产能适配度子分
    ///
    /// # 规则 (单调分段线性, 曲线形状可调)
    /// - 利用率 ∈ [band_low, band_high] → 100 (最优区间)
    /// - 利用率 < band_low → 100 × u / band_low (低稼动线性衰减)
    /// - band_high < 利用率 ≤ 1.0 → 100 线性衰减至 over_band_floor
    /// - 利用率 > 1.0 → 0 (单台不足, 子分最低; 是否多台由规划方案表达)
    pub fn capacity_fit_score(utilization: f64, curve: &CapacityFitCurve) -> f64 {
        if utilization > 1.0 {
            return 0.0;
        }
        if utilization < curve.band_low {
            return 100.0 * (utilization / curve.band_low).max(0.0);
        }
        if utilization <= curve.band_high {
            return 100.0;
        }
        // (band_high, 1.0]: 100 → over_band_floor 线性衰减
        let over_ratio = (utilization - curve.band_high) / (1.0 - curve.band_high);
        100.0 - over_ratio * (100.0 - curve.over_band_floor)
    }

    /// 尺寸效率子分
    ///
    /// # 规则
    /// - score = 100 × min(1, 商品体积 / 机型包络体积)
    /// - 小商品配大机 → 比值小 → 低分 (避免过度配置)
    pub fn size_efficiency_score(product: &ProductSpec, model: &SorterModel) -> f64 {
        let envelope = model.max_product.envelope_volume_mm3();
        if envelope <= 0.0 {
            return 0.0;
        }
        100.0 * (product.volume_mm3() / envelope).min(1.0)
    }

    /// 处理量档位适配度子分
    ///
    /// # 规则
    /// - 日总件数落在机型适合区间 → 100
    /// - 低于下限 → 100 × pieces / min (下限为 0 时恒为区间内)
    /// - 高于上限 → 100 × max / pieces
    /// - 两侧均为单调比例衰减
    pub fn volume_tier_score(total_daily_pieces: f64, band: &VolumeBand) -> f64 {
        if band.contains(total_daily_pieces) {
            return 100.0;
        }
        if total_daily_pieces < band.min_daily_pieces {
            if band.min_daily_pieces <= 0.0 {
                return 100.0;
            }
            return 100.0 * (total_daily_pieces / band.min_daily_pieces).max(0.0);
        }
        if total_daily_pieces <= 0.0 {
            return 0.0;
        }
        100.0 * (band.max_daily_pieces / total_daily_pieces)
    }

    // ==========================================
    // 综合评分
    // ==========================================

    /// 计算评分明细与综合分
    ///
    /// # 参数
    /// - plan: 产能规划方案 (产能适配度使用规划后利用率, 即已计入格口/区块扩展)
    /// - support: 请求容器的适配档位
    ///
    /// # 返回
    /// - (ScoreBreakdown, f64): 子分明细 + 加权综合分 (0-100)
    pub fn score(
        &self,
        model: &SorterModel,
        product: &ProductSpec,
        total_daily_pieces: f64,
        plan: &CapacityPlan,
        support: ContainerSupport,
    ) -> (ScoreBreakdown, f64) {
        let breakdown = ScoreBreakdown {
            base_priority: model.base_priority,
            container_fit: Self::container_fit_score(support),
            capacity_fit: Self::capacity_fit_score(plan.utilization, &self.curve),
            size_efficiency: Self::size_efficiency_score(product, model),
            volume_tier: Self::volume_tier_score(total_daily_pieces, &model.volume_band),
        };

        let composite = self.weights.base_priority * breakdown.base_priority
            + self.weights.container_fit * breakdown.container_fit
            + self.weights.capacity_fit * breakdown.capacity_fit
            + self.weights.size_efficiency * breakdown.size_efficiency
            + self.weights.volume_tier * breakdown.volume_tier;

        (breakdown, composite)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        // 基准权重/曲线恒满足校验, 直接构造
        Self {
            weights: ScoreWeights::default(),
            curve: CapacityFitCurve::default(),
        }
    }
}
