// ==========================================
// 分拣机选型决策支持系统 - 配置层
// ==========================================
// 职责: 机型目录/容器矩阵的装载校验 + 规划参数
// 红线: 文件解析 (YAML 等) 由外部协作方负责,
//       本层只接收已反序列化的结构并做结构校验
// ==========================================

pub mod catalog;
pub mod planning;

pub use catalog::{CompatibilityMatrix, MatrixEntry, SorterCatalog};
pub use planning::{CapacityFitCurve, PlanningParams, ScoreWeights};
