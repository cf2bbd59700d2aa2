// ==========================================
// 分拣机选型决策支持系统 - 请求输入领域模型
// ==========================================
// 输入来源: 表现层采集的原始用户输入
// 职责: 数值合法性校验 + 派生指标计算
// ==========================================

use crate::domain::types::ContainerType;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductSpec - 商品规格
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub length_mm: f64,               // 商品长度 (mm)
    pub width_mm: f64,                // 商品宽度 (mm)
    pub height_mm: f64,               // 商品高度 (mm)
    pub weight_kg: f64,               // 商品重量 (kg)
    pub container_type: ContainerType, // 使用容器类型
}

impl ProductSpec {
    /// 输入校验
    ///
    /// # 规则
    /// - 长/宽/高/重量 均须 > 0
    /// - 校验失败立即返回错误, 不替换默认值
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.length_mm <= 0.0 {
            return Err(EngineError::NonPositiveDimension {
                field: "length_mm",
                value: self.length_mm,
            });
        }
        if self.width_mm <= 0.0 {
            return Err(EngineError::NonPositiveDimension {
                field: "width_mm",
                value: self.width_mm,
            });
        }
        if self.height_mm <= 0.0 {
            return Err(EngineError::NonPositiveDimension {
                field: "height_mm",
                value: self.height_mm,
            });
        }
        if self.weight_kg <= 0.0 {
            return Err(EngineError::NonPositiveWeight(self.weight_kg));
        }
        Ok(())
    }

    /// 商品外接盒体积 (mm³)
    pub fn volume_mm3(&self) -> f64 {
        self.length_mm * self.width_mm * self.height_mm
    }
}

// ==========================================
// OperatingParameters - 运营参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingParameters {
    pub daily_shipments: u32,     // 日出货单数 (≥ 0)
    pub pieces_per_shipment: f64, // 平均每单件数 (> 0)
    pub working_hours: f64,       // 日工作时长 (小时, > 0)
    // 峰值倍率 (≥ 1.0): 峰值时段相对常态的出货倍数, 计入必要处理能力
    #[serde(default = "default_peak_ratio")]
    pub peak_ratio: f64,
}

fn default_peak_ratio() -> f64 {
    1.0
}

impl OperatingParameters {
    /// 输入校验
    ///
    /// # 规则
    /// - pieces_per_shipment > 0
    /// - working_hours > 0
    /// - peak_ratio ≥ 1.0 (1.0 = 无峰值放大)
    /// - daily_shipments 为无符号整数, 0 是合法输入 (零单量场景)
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.pieces_per_shipment <= 0.0 {
            return Err(EngineError::NonPositivePieces(self.pieces_per_shipment));
        }
        if self.working_hours <= 0.0 {
            return Err(EngineError::NonPositiveWorkingHours(self.working_hours));
        }
        if self.peak_ratio < 1.0 {
            return Err(EngineError::InvalidPeakRatio(self.peak_ratio));
        }
        Ok(())
    }

    /// 日总件数 = 日出货单数 × 平均每单件数
    pub fn total_daily_pieces(&self) -> f64 {
        self.daily_shipments as f64 * self.pieces_per_shipment
    }

    /// 必要处理能力 (件/小时) = 日总件数 / 日工作时长 × 峰值倍率
    ///
    /// 前置条件: working_hours > 0 (入口已校验)
    pub fn required_throughput_pph(&self) -> f64 {
        self.total_daily_pieces() / self.working_hours * self.peak_ratio
    }
}
