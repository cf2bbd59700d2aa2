// ==========================================
// 分拣机选型决策支持系统 - 领域层
// ==========================================
// 职责: 定义选型引擎的实体与类型
// 红线: 领域对象不持有任何 I/O 句柄, 全部可序列化
// ==========================================

pub mod evaluation;
pub mod machine;
pub mod product;
pub mod types;

// 重导出领域实体
pub use evaluation::{
    CandidateEvaluation, CapacityPlan, ModelRejection, RecommendationOutcome,
    RecommendationResult, ScoreBreakdown,
};
pub use machine::{InstallationDimensions, ProductLimits, SorterModel, VolumeBand};
pub use product::{OperatingParameters, ProductSpec};
