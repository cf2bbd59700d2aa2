// ==========================================
// 分拣机选型决策支持系统 - 引擎层
// ==========================================
// 职责: 实现选型业务规则 (过滤 → 评分 → 产能规划 → 汇总)
// 红线: 引擎无状态、无副作用、无 I/O; 所有淘汰必须输出 reason
// ==========================================

pub mod capacity;
pub mod feasibility;
pub mod recommend;
pub mod scoring;

// 重导出核心引擎
pub use capacity::CapacityPlanner;
pub use feasibility::FeasibilityEngine;
pub use recommend::RecommendationEngine;
pub use scoring::ScoringEngine;
