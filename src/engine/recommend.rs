// ==========================================
// 分拣机选型决策支持系统 - 推荐汇总引擎
// ==========================================
// 用途: 协调 过滤 → 规划 → 评分 → 排序 的执行顺序
// 红线: 入口统一校验输入; 相同输入必须产出字节一致的排序结果
// ==========================================

use crate::config::SorterCatalog;
use crate::domain::evaluation::{
    CandidateEvaluation, RecommendationOutcome, RecommendationResult,
};
use crate::domain::product::{OperatingParameters, ProductSpec};
use crate::engine::{CapacityPlanner, FeasibilityEngine, ScoringEngine};
use crate::error::EngineError;
use chrono::Utc;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// RecommendationEngine - 推荐汇总引擎
// ==========================================
pub struct RecommendationEngine {
    catalog: Arc<SorterCatalog>,
    feasibility: FeasibilityEngine,
    scoring: ScoringEngine,
    planner: CapacityPlanner,
}

impl RecommendationEngine {
    /// 创建新的推荐引擎实例
    ///
    /// # 参数
    /// - catalog: 已通过结构校验的机型目录 (进程生命周期内只读)
    pub fn new(catalog: Arc<SorterCatalog>) -> Self {
        let planner = CapacityPlanner::new(*catalog.planning());
        Self {
            feasibility: FeasibilityEngine::new(),
            scoring: ScoringEngine::default(),
            planner,
            catalog,
        }
    }

    /// 带自定义评分引擎的构造 (权重/曲线调优入口)
    pub fn with_scoring(catalog: Arc<SorterCatalog>, scoring: ScoringEngine) -> Self {
        let planner = CapacityPlanner::new(*catalog.planning());
        Self {
            feasibility: FeasibilityEngine::new(),
            scoring,
            planner,
            catalog,
        }
    }

    /// 执行完整推荐流程
    ///
    /// # 步骤
    /// 1. 输入校验 (失败立即返回, 内部计算假定已校验)
    /// 2. 派生指标: 日总件数 / 必要处理能力
    /// 3. 可行性过滤
    /// 4. 逐机型: 产能规划 → 评分 (产能适配度消费规划后利用率)
    /// 5. 确定性降序排序 (综合分 → 优先度 → 区块数 → 机型ID)
    /// 6. Top-1 为首选, 其余按上限截取为备选
    ///
    /// # 返回
    /// - Ok(RecommendationResult): 含推荐或 "无可行机型" 结论
    /// - Err(EngineError): 仅输入校验失败
    pub fn recommend(
        &self,
        product: &ProductSpec,
        ops: &OperatingParameters,
    ) -> Result<RecommendationResult, EngineError> {
        // ==========================================
        // 步骤1: 输入校验
        // ==========================================
        product.validate()?;
        ops.validate()?;

        // ==========================================
        // 步骤2: 派生指标
        // ==========================================
        let total_daily_pieces = ops.total_daily_pieces();
        let required_throughput_pph = ops.required_throughput_pph();

        info!(
            container = %product.container_type,
            total_daily_pieces,
            required_throughput_pph,
            "开始执行机型推荐流程"
        );

        // ==========================================
        // 步骤3: 可行性过滤
        // ==========================================
        debug!("步骤3: 执行可行性过滤");
        let (feasible, rejected) =
            self.feasibility
                .filter(self.catalog.models(), product, self.catalog.matrix());

        info!(
            feasible_count = feasible.len(),
            rejected_count = rejected.len(),
            "可行性过滤完成"
        );

        if feasible.is_empty() {
            // 无可行机型是正常结论, 原因随结果返回
            return Ok(RecommendationResult {
                request_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                total_daily_pieces,
                required_throughput_pph,
                outcome: RecommendationOutcome::NoFeasibleModel {
                    rejections: rejected,
                },
            });
        }

        // ==========================================
        // 步骤4: 产能规划 + 评分
        // ==========================================
        debug!("步骤4: 执行产能规划与评分");
        let mut candidates: Vec<CandidateEvaluation> = feasible
            .into_iter()
            .map(|(model, support)| {
                let plan = self.planner.plan(model, required_throughput_pph);
                let (scores, composite_score) =
                    self.scoring
                        .score(model, product, total_daily_pieces, &plan, support);

                debug!(
                    model_id = %model.model_id,
                    composite_score,
                    utilization = plan.utilization,
                    chute_count = plan.chute_count,
                    block_count = plan.block_count,
                    outcome = %plan.outcome,
                    "候选机型评估完成"
                );

                CandidateEvaluation {
                    model_id: model.model_id.clone(),
                    model_name: model.name.clone(),
                    rated_capacity_pph: model.rated_capacity_pph,
                    installation: model.installation,
                    container_support: support,
                    scores,
                    composite_score,
                    base_priority: model.base_priority,
                    plan,
                }
            })
            .collect();

        // ==========================================
        // 步骤5: 确定性排序
        // ==========================================
        candidates.sort_by(Self::rank_ordering);

        // ==========================================
        // 步骤6: 汇总结果
        // ==========================================
        let max_alternatives = self.catalog.planning().max_alternatives;
        let primary = candidates.remove(0);
        candidates.truncate(max_alternatives);

        info!(
            primary_model = %primary.model_id,
            primary_score = primary.composite_score,
            multi_unit = primary.plan.outcome.is_multi_unit(),
            alternatives_count = candidates.len(),
            "机型推荐流程完成"
        );

        Ok(RecommendationResult {
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            total_daily_pieces,
            required_throughput_pph,
            outcome: RecommendationOutcome::Recommended {
                primary,
                alternatives: candidates,
            },
        })
    }

    /// 候选排序规则 (降序)
    ///
    /// # 并列判定链
    /// 1. 综合分降序 (f64 全序比较, 保证可复现)
    /// 2. 基础优先度降序
    /// 3. 所需区块数升序 (配置更紧凑者优先)
    /// 4. 机型ID字典序
    pub fn rank_ordering(a: &CandidateEvaluation, b: &CandidateEvaluation) -> Ordering {
        b.composite_score
            .total_cmp(&a.composite_score)
            .then_with(|| b.base_priority.total_cmp(&a.base_priority))
            .then_with(|| a.plan.block_count.cmp(&b.plan.block_count))
            .then_with(|| a.model_id.cmp(&b.model_id))
    }
}
