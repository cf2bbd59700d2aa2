// ==========================================
// 分拣机选型决策支持系统 - 产能规划引擎
// ==========================================
// 职责: 由必要处理能力推导格口数/区块数/利用率
// 红线: 格口需求超出单台上限时必须以 MultiUnitRequired 标签表达,
//       绝不静默按下限配置交差
// ==========================================

use crate::config::planning::PlanningParams;
use crate::domain::evaluation::CapacityPlan;
use crate::domain::machine::SorterModel;
use crate::domain::types::PlanOutcome;

// ==========================================
// CapacityPlanner - 产能规划引擎
// ==========================================
pub struct CapacityPlanner {
    params: PlanningParams,
}

impl CapacityPlanner {
    /// 构造函数
    ///
    /// # 参数
    /// - params: 规划参数 (每区块格口数等, 来自配置)
    pub fn new(params: PlanningParams) -> Self {
        Self { params }
    }

    /// 推导格口/区块配置方案
    ///
    /// # 规则
    /// 1. 原始格口需求 = ceil(必要能力 / 单格口设计能力);
    ///    单格口设计能力 = 额定能力 / 基准格口数, 机型未配置基准格口数时
    ///    按目标周转数折算 (额定能力 / 周转数)
    /// 2. 格口数夹取到 [1, 机型格口上限]; 原始需求超上限 → 多台部署
    /// 3. 区块数 = ceil(格口数 / 每区块格口数), 夹取到机型区块上限;
    ///    区块封顶时格口数同步回落到 区块上限 × 每区块格口数 → 多台部署
    /// 4. 利用率 = 必要能力 / (格口数 × 单格口设计能力);
    ///    多台场景按拉满的单台能力计算, 合法地 > 1.0
    ///
    /// # 边界
    /// - 必要能力为 0 → 最小配置 1 格口 / 1 区块, 利用率 0, 无除零
    pub fn plan(&self, model: &SorterModel, required_throughput_pph: f64) -> CapacityPlan {
        let per_chute = model.per_chute_throughput_pph(self.params.target_turnover_per_hour);
        let chutes_per_block = self.params.chutes_per_block;

        // 步骤1: 原始格口需求
        let raw_chutes = (required_throughput_pph / per_chute).ceil() as u32;

        // 步骤2: 格口数夹取
        let mut chute_count = raw_chutes.clamp(1, model.max_chutes);
        let mut multi_unit = raw_chutes > model.max_chutes;

        // 步骤3: 区块分组与封顶
        let mut block_count = chute_count.div_ceil(chutes_per_block);
        if block_count > model.max_blocks {
            block_count = model.max_blocks;
            chute_count = chute_count.min(model.max_blocks * chutes_per_block);
            multi_unit = true;
        }

        // 步骤4: 利用率与有效能力
        let effective_throughput_pph = chute_count as f64 * per_chute;
        let utilization = required_throughput_pph / effective_throughput_pph;

        let outcome = if multi_unit {
            // 按拉满的单台能力估算建议台数
            let suggested_units =
                (required_throughput_pph / effective_throughput_pph).ceil() as u32;
            PlanOutcome::MultiUnitRequired {
                suggested_units: suggested_units.max(2),
            }
        } else {
            PlanOutcome::SingleUnit
        };

        CapacityPlan {
            chute_count,
            block_count,
            utilization,
            effective_throughput_pph,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::machine::{InstallationDimensions, ProductLimits, VolumeBand};
    use crate::domain::types::ContainerType;

    // 单格口设计能力 = 1200 / 8 = 150 件/小时
    fn standard_model() -> SorterModel {
        SorterModel {
            model_id: "OS-S".to_string(),
            name: "标准型".to_string(),
            rated_capacity_pph: 1200.0,
            max_product: ProductLimits {
                max_length_mm: 500.0,
                max_width_mm: 400.0,
                max_height_mm: 200.0,
                max_weight_kg: 5.0,
            },
            installation: InstallationDimensions {
                length_mm: 4000.0,
                width_mm: 2000.0,
                height_mm: 2000.0,
            },
            design_chute_count: Some(8),
            max_chutes: 16,
            max_blocks: 2,
            base_priority: 80.0,
            volume_band: VolumeBand {
                min_daily_pieces: 1000.0,
                max_daily_pieces: 8000.0,
            },
            supported_containers: vec![ContainerType::StandardTote],
        }
    }

    fn planner() -> CapacityPlanner {
        CapacityPlanner::new(PlanningParams::default())
    }

    #[test]
    fn test_zero_demand_minimum_plan() {
        let plan = planner().plan(&standard_model(), 0.0);
        assert_eq!(plan.chute_count, 1);
        assert_eq!(plan.block_count, 1);
        assert_eq!(plan.utilization, 0.0);
        assert_eq!(plan.outcome, PlanOutcome::SingleUnit);
    }

    #[test]
    fn test_low_demand_single_chute() {
        // 31.25 件/h ÷ 150 件/h → 1 格口, 利用率 ≈ 20.8%
        let plan = planner().plan(&standard_model(), 31.25);
        assert_eq!(plan.chute_count, 1);
        assert_eq!(plan.block_count, 1);
        assert!((plan.utilization - 31.25 / 150.0).abs() < 1e-9);
        assert_eq!(plan.outcome, PlanOutcome::SingleUnit);
    }

    #[test]
    fn test_turnover_fallback_derivation() {
        // 未配置基准格口数: 单格口能力 = 1200 / 2.5 = 480 件/h
        // 1250 件/h → ceil(1250/480) = 3 格口
        let mut model = standard_model();
        model.design_chute_count = None;
        let plan = planner().plan(&model, 1250.0);
        assert_eq!(plan.chute_count, 3);
        assert_eq!(plan.block_count, 1);
        assert!((plan.effective_throughput_pph - 1440.0).abs() < 1e-9);
        assert_eq!(plan.outcome, PlanOutcome::SingleUnit);
    }

    #[test]
    fn test_multi_block_demand() {
        // 1250 件/h ÷ 150 → 9 格口 → 2 区块
        let plan = planner().plan(&standard_model(), 1250.0);
        assert_eq!(plan.chute_count, 9);
        assert_eq!(plan.block_count, 2);
        assert!(plan.utilization <= 1.0);
        assert_eq!(plan.outcome, PlanOutcome::SingleUnit);
    }

    #[test]
    fn test_chute_limit_triggers_multi_unit() {
        // 5000 件/h ÷ 150 → 34 格口 > 上限 16 → 多台
        let plan = planner().plan(&standard_model(), 5000.0);
        assert_eq!(plan.chute_count, 16);
        assert_eq!(plan.block_count, 2);
        assert!(plan.utilization > 1.0);
        // 拉满单台能力 16×150=2400, 建议台数 = ceil(5000/2400) = 3
        assert_eq!(
            plan.outcome,
            PlanOutcome::MultiUnitRequired { suggested_units: 3 }
        );
    }

    #[test]
    fn test_block_limit_triggers_multi_unit() {
        // 格口上限宽松但区块上限收紧的机型: 区块封顶路径
        let mut model = standard_model();
        model.max_chutes = 30;
        model.max_blocks = 2; // 2 区块 × 8 格口 = 16 格口封顶

        // 3000 件/h ÷ 150 → 20 格口 ≤ 30, 但 3 区块 > 2
        let plan = planner().plan(&model, 3000.0);
        assert_eq!(plan.block_count, 2);
        assert_eq!(plan.chute_count, 16);
        assert!(plan.outcome.is_multi_unit());
        assert!(plan.utilization > 1.0);
    }

    #[test]
    fn test_bounds_hold_for_any_demand() {
        let model = standard_model();
        let planner = planner();
        for demand in [0.0, 1.0, 149.9, 150.0, 150.1, 600.0, 2400.0, 99999.0] {
            let plan = planner.plan(&model, demand);
            assert!(plan.chute_count >= 1);
            assert!(plan.block_count >= 1);
            assert!(plan.chute_count <= model.max_chutes);
            assert!(plan.block_count <= model.max_blocks);
            assert!(plan.effective_throughput_pph > 0.0);
        }
    }

    #[test]
    fn test_utilization_monotone_within_fixed_chute_count() {
        // 格口数不变的区间内, 利用率随需求单调不减
        let model = standard_model();
        let planner = planner();
        let mut last = -1.0;
        for demand in [0.0, 30.0, 60.0, 90.0, 120.0, 150.0] {
            let plan = planner.plan(&model, demand);
            assert_eq!(plan.chute_count, 1);
            assert!(plan.utilization >= last);
            last = plan.utilization;
        }
    }

    #[test]
    fn test_effective_capacity_monotone() {
        // 配置能力随需求单调不减 (格口数只会增加)
        let model = standard_model();
        let planner = planner();
        let mut last = 0.0;
        for demand in [0.0, 100.0, 200.0, 500.0, 1000.0, 2000.0, 4000.0] {
            let plan = planner.plan(&model, demand);
            assert!(plan.effective_throughput_pph >= last);
            last = plan.effective_throughput_pph;
        }
    }
}
