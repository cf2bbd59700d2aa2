// ==========================================
// 分拣机选型决策支持系统 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 非法输入立即报错, 绝不静默替换默认值;
//       "无可行机型" 与 "需多台部署" 不是错误, 由结果结构表达
// ==========================================

use thiserror::Error;

/// 推荐引擎入口错误类型
///
/// 所有校验错误在 RecommendationEngine 入口处抛出,
/// 内部纯函数假定输入已校验, 不重复校验。
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 输入校验错误 =====
    #[error("商品尺寸必须为正数: {field}={value}")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("商品重量必须为正数: weight_kg={0}")]
    NonPositiveWeight(f64),

    #[error("平均每单件数必须为正数: pieces_per_shipment={0}")]
    NonPositivePieces(f64),

    #[error("日工作时长必须为正数: working_hours={0}")]
    NonPositiveWorkingHours(f64),

    #[error("峰值倍率必须 >= 1.0: peak_ratio={0}")]
    InvalidPeakRatio(f64),

    // ===== 配置错误 =====
    #[error(transparent)]
    Config(#[from] ConfigError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 机型目录结构校验错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("机型目录为空")]
    EmptyModelList,

    #[error("机型ID重复: {model_id}")]
    DuplicateModel { model_id: String },

    #[error("机型数值字段必须为正数: model_id={model_id}, field={field}")]
    NonPositiveField {
        model_id: String,
        field: &'static str,
    },

    #[error("机型基础优先度超出范围 [0, 100]: model_id={model_id}, priority={priority}")]
    InvalidPriority { model_id: String, priority: f64 },

    #[error("机型适合处理量区间非法 (min > max): model_id={model_id}")]
    InvalidVolumeBand { model_id: String },

    #[error("机型支持容器集合为空: model_id={model_id}")]
    EmptyContainerSet { model_id: String },

    #[error("矩阵引用了未定义的机型: model_id={model_id}")]
    UnknownModelInMatrix { model_id: String },

    #[error("矩阵单元格重复: container={container_type}, model_id={model_id}")]
    DuplicateMatrixEntry {
        container_type: String,
        model_id: String,
    },

    #[error("规划参数非法: {message}")]
    InvalidPlanningParams { message: String },

    #[error("评分权重之和必须为 1.0: sum={sum}")]
    InvalidWeights { sum: f64 },

    #[error("产能适配曲线参数非法: {message}")]
    InvalidCapacityCurve { message: String },
}
