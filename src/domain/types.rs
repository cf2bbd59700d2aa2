// ==========================================
// 分拣机选型决策支持系统 - 领域类型定义
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与前端/配置一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 容器类型 (Container Type)
// ==========================================
// 投入分拣机的标准化容器规格, 机型兼容性按容器类型判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    #[serde(rename = "STANDARD_TOTE")]
    StandardTote, // 标准料箱
    #[serde(rename = "CRATE_30L")]
    Crate30L, // 周转箱 30L
    #[serde(rename = "CRATE_40L")]
    Crate40L, // 周转箱 40L
    #[serde(rename = "CRATE_50L")]
    Crate50L, // 周转箱 50L
    #[serde(rename = "UNKNOWN")]
    Unknown, // 容器未定 (客户尚未确定)
}

impl ContainerType {
    /// 全部已知容器类型 (不含 Unknown)
    pub const KNOWN: [ContainerType; 4] = [
        ContainerType::StandardTote,
        ContainerType::Crate30L,
        ContainerType::Crate40L,
        ContainerType::Crate50L,
    ];
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerType::StandardTote => write!(f, "STANDARD_TOTE"),
            ContainerType::Crate30L => write!(f, "CRATE_30L"),
            ContainerType::Crate40L => write!(f, "CRATE_40L"),
            ContainerType::Crate50L => write!(f, "CRATE_50L"),
            ContainerType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for ContainerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STANDARD_TOTE" => Ok(ContainerType::StandardTote),
            "CRATE_30L" => Ok(ContainerType::Crate30L),
            "CRATE_40L" => Ok(ContainerType::Crate40L),
            "CRATE_50L" => Ok(ContainerType::Crate50L),
            "UNKNOWN" => Ok(ContainerType::Unknown),
            other => Err(format!("未知容器类型: {}", other)),
        }
    }
}

// ==========================================
// 容器适配度 (Container Support)
// ==========================================
// 容器×机型矩阵的单元格取值
// 顺序: NotSupported < Supported < Recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerSupport {
    NotSupported, // 不支持 (缺失单元格视为此值, 默认拒绝)
    Supported,    // 可用
    Recommended,  // 推荐搭配
}

impl ContainerSupport {
    /// 是否允许投入 (Supported 或 Recommended)
    pub fn is_usable(&self) -> bool {
        !matches!(self, ContainerSupport::NotSupported)
    }
}

impl fmt::Display for ContainerSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerSupport::NotSupported => write!(f, "NOT_SUPPORTED"),
            ContainerSupport::Supported => write!(f, "SUPPORTED"),
            ContainerSupport::Recommended => write!(f, "RECOMMENDED"),
        }
    }
}

// ==========================================
// 配置方案结论 (Plan Outcome)
// ==========================================
// 红线: "需多台部署" 必须以标签变体表达, 不得用利用率数值隐式表达
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanOutcome {
    /// 单台机器即可满足需求
    SingleUnit,
    /// 单台机器格口/区块拉满仍不足, 建议部署多台
    MultiUnitRequired { suggested_units: u32 },
}

impl PlanOutcome {
    pub fn is_multi_unit(&self) -> bool {
        matches!(self, PlanOutcome::MultiUnitRequired { .. })
    }
}

impl fmt::Display for PlanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanOutcome::SingleUnit => write!(f, "SINGLE_UNIT"),
            PlanOutcome::MultiUnitRequired { suggested_units } => {
                write!(f, "MULTI_UNIT_REQUIRED({})", suggested_units)
            }
        }
    }
}
