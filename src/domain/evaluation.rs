// ==========================================
// 分拣机选型决策支持系统 - 评估结果领域模型
// ==========================================
// 生命周期: 每次推荐请求新建, 返回后即丢弃, 无跨请求共享状态
// 红线: 子分用具名结构体表达, 不用临时字典
// ==========================================

use crate::domain::machine::InstallationDimensions;
use crate::domain::types::{ContainerSupport, PlanOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ScoreBreakdown - 评分明细
// ==========================================
// 五个具名子分, 统一 0-100 刻度, 综合分 = 加权和
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_priority: f64,   // 基础优先度 (机型配置值原样计入)
    pub container_fit: f64,   // 容器适配度 (推荐/可用 分档)
    pub capacity_fit: f64,    // 产能适配度 (利用率落在最优区间最高)
    pub size_efficiency: f64, // 尺寸效率 (商品体积 / 机型包络体积)
    pub volume_tier: f64,     // 处理量档位适配度 (日总件数 vs 机型适合区间)
}

// ==========================================
// CapacityPlan - 格口/区块配置方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityPlan {
    pub chute_count: u32,               // 格口数 (≥ 1, ≤ 机型上限)
    pub block_count: u32,               // 区块数 (≥ 1, ≤ 机型上限)
    pub utilization: f64,               // 利用率 (必要能力 / 配置能力; 多台场景 > 1.0)
    pub effective_throughput_pph: f64,  // 配置后有效处理能力 (件/小时)
    pub outcome: PlanOutcome,           // 单台 / 需多台部署
}

// ==========================================
// CandidateEvaluation - 机型候选评估
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEvaluation {
    pub model_id: String,                    // 机型ID
    pub model_name: String,                  // 机型名称
    pub rated_capacity_pph: f64,             // 额定处理能力 (件/小时)
    pub installation: InstallationDimensions, // 整机安装尺寸 (表现层展示场地占用)
    pub container_support: ContainerSupport, // 请求容器的适配档位
    pub scores: ScoreBreakdown,              // 评分明细
    pub composite_score: f64,                // 综合分 (0-100)
    pub base_priority: f64,                  // 基础优先度 (并列判定用)
    pub plan: CapacityPlan,                  // 格口/区块配置方案
}

// ==========================================
// ModelRejection - 机型淘汰记录
// ==========================================
// 红线: 所有淘汰必须输出 reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRejection {
    pub model_id: String,
    pub reasons: Vec<String>,
}

// ==========================================
// RecommendationOutcome - 推荐结论
// ==========================================
// "无可行机型" 是正常结论, 不是错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationOutcome {
    /// 存在可行机型: 首选 + 按综合分降序的备选
    Recommended {
        primary: CandidateEvaluation,
        alternatives: Vec<CandidateEvaluation>,
    },
    /// 所有机型均被物理/容器约束淘汰
    NoFeasibleModel { rejections: Vec<ModelRejection> },
}

impl RecommendationOutcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, RecommendationOutcome::Recommended { .. })
    }

    /// 首选方案 (无可行机型时为 None)
    pub fn primary(&self) -> Option<&CandidateEvaluation> {
        match self {
            RecommendationOutcome::Recommended { primary, .. } => Some(primary),
            RecommendationOutcome::NoFeasibleModel { .. } => None,
        }
    }
}

// ==========================================
// RecommendationResult - 推荐结果
// ==========================================
// 表现层可直接渲染, 不再做业务判断
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub request_id: Uuid,             // 请求ID
    pub generated_at: DateTime<Utc>,  // 生成时间
    pub total_daily_pieces: f64,      // 日总件数 (派生)
    pub required_throughput_pph: f64, // 必要处理能力 (件/小时, 派生)
    pub outcome: RecommendationOutcome, // 推荐结论
}
