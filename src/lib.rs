// ==========================================
// 分拣机选型决策支持系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (推荐 + 备选, 人工最终决策)
// 输入: 运营参数 + 商品规格 + 机型目录
// 输出: 机型推荐结果 (含格口/区块配置与利用率)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 机型目录与规划参数
pub mod config;

// 引擎层 - 选型业务规则
pub mod engine;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ContainerSupport, ContainerType, PlanOutcome};

// 领域实体
pub use domain::{
    CandidateEvaluation, CapacityPlan, InstallationDimensions, ModelRejection,
    OperatingParameters, ProductLimits, ProductSpec, RecommendationOutcome,
    RecommendationResult, ScoreBreakdown, SorterModel, VolumeBand,
};

// 配置
pub use config::{
    CapacityFitCurve, CompatibilityMatrix, MatrixEntry, PlanningParams, ScoreWeights,
    SorterCatalog,
};

// 引擎
pub use engine::{CapacityPlanner, FeasibilityEngine, RecommendationEngine, ScoringEngine};

// 错误
pub use error::{ConfigError, EngineError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "分拣机选型决策支持系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
