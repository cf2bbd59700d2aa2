// ==========================================
// 分拣机选型决策支持系统 - 机型领域模型
// ==========================================
// 用途: 机型目录的静态条目, 由配置层加载并校验
// 红线: 引擎只读, 进程生命周期内不可变
// ==========================================

use crate::domain::types::ContainerType;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductLimits - 商品处理上限
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductLimits {
    pub max_length_mm: f64, // 最大商品长度 (mm)
    pub max_width_mm: f64,  // 最大商品宽度 (mm)
    pub max_height_mm: f64, // 最大商品高度 (mm)
    pub max_weight_kg: f64, // 最大商品重量 (kg)
}

impl ProductLimits {
    /// 处理包络体积 (mm³)
    ///
    /// 用于尺寸效率评分: 商品外接盒体积 / 包络体积
    pub fn envelope_volume_mm3(&self) -> f64 {
        self.max_length_mm * self.max_width_mm * self.max_height_mm
    }
}

// ==========================================
// InstallationDimensions - 整机安装尺寸
// ==========================================
// 用途: 随推荐结果输出, 供表现层展示场地占用
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallationDimensions {
    pub length_mm: f64, // 整机长度 (mm)
    pub width_mm: f64,  // 整机宽度 (mm)
    pub height_mm: f64, // 整机高度 (mm)
}

// ==========================================
// VolumeBand - 适合日处理量区间
// ==========================================
// 用途: 处理量档位评分 (避免小单量配大机/大单量配小机)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBand {
    pub min_daily_pieces: f64, // 区间下限 (件/日)
    pub max_daily_pieces: f64, // 区间上限 (件/日)
}

impl VolumeBand {
    pub fn contains(&self, daily_pieces: f64) -> bool {
        daily_pieces >= self.min_daily_pieces && daily_pieces <= self.max_daily_pieces
    }
}

// ==========================================
// SorterModel - 分拣机机型
// ==========================================
// 不变式 (配置层校验):
// - 额定能力/尺寸上限/格口上限/区块上限 严格为正
// - supported_containers 非空
// - base_priority ∈ [0, 100]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SorterModel {
    // ===== 标识 =====
    pub model_id: String, // 机型ID (如 OS-S)
    pub name: String,     // 机型名称

    // ===== 处理能力 =====
    pub rated_capacity_pph: f64, // 额定处理能力 (件/小时)

    // ===== 物理约束 =====
    pub max_product: ProductLimits,            // 商品处理上限
    pub installation: InstallationDimensions, // 整机安装尺寸

    // ===== 格口/区块 =====
    // 基准格口数 (配置时 单格口设计能力 = 额定能力 / 基准格口数;
    // 缺省时改按规划参数的目标周转数折算)
    pub design_chute_count: Option<u32>,
    pub max_chutes: u32, // 单台最大格口数
    pub max_blocks: u32, // 单台最大区块数

    // ===== 评分参数 =====
    pub base_priority: f64,    // 基础优先度 (0-100, 原样计入子分)
    pub volume_band: VolumeBand, // 适合日处理量区间

    // ===== 容器 =====
    pub supported_containers: Vec<ContainerType>, // 声明支持的容器类型 (细粒度由矩阵判定)
}

impl SorterModel {
    /// 单格口设计处理能力 (件/小时)
    ///
    /// # 规则
    /// - 配置了基准格口数 → per_chute = 额定能力 / 基准格口数
    /// - 未配置 → per_chute = 额定能力 / 目标周转数 (规划参数注入)
    ///
    /// 两种推导均来自目录/参数配置, 不在引擎内硬编码
    pub fn per_chute_throughput_pph(&self, target_turnover_per_hour: f64) -> f64 {
        match self.design_chute_count {
            Some(count) => self.rated_capacity_pph / count as f64,
            None => self.rated_capacity_pph / target_turnover_per_hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_volume() {
        let limits = ProductLimits {
            max_length_mm: 500.0,
            max_width_mm: 400.0,
            max_height_mm: 200.0,
            max_weight_kg: 5.0,
        };
        assert_eq!(limits.envelope_volume_mm3(), 40_000_000.0);
    }

    #[test]
    fn test_volume_band_contains() {
        let band = VolumeBand {
            min_daily_pieces: 1000.0,
            max_daily_pieces: 8000.0,
        };
        assert!(band.contains(1000.0));
        assert!(band.contains(8000.0));
        assert!(!band.contains(999.9));
        assert!(!band.contains(8000.1));
    }

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

    #[test]
    fn test_per_chute_throughput_from_design_count() {
        assert_eq!(standard_model().per_chute_throughput_pph(2.5), 150.0);
    }

    #[test]
    fn test_per_chute_throughput_turnover_fallback() {
        // 未配置基准格口数 → 额定能力 / 目标周转数 = 1200 / 2.5 = 480
        let mut model = standard_model();
        model.design_chute_count = None;
        assert_eq!(model.per_chute_throughput_pph(2.5), 480.0);
    }
}
