// ==========================================
// 分拣机选型决策支持系统 - 机型目录
// ==========================================
// 职责: 机型规格 + 容器×机型兼容矩阵的内存目录
// 装载: 进程启动时装载一次, 引擎侧只读
// 红线: 矩阵缺失单元格按 "不支持" 处理 (默认拒绝)
// ==========================================

use crate::config::planning::PlanningParams;
use crate::domain::machine::SorterModel;
use crate::domain::types::{ContainerSupport, ContainerType};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

// ==========================================
// MatrixEntry - 矩阵单元格 (序列化形态)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub container_type: ContainerType,
    pub model_id: String,
    pub support: ContainerSupport,
}

impl MatrixEntry {
    pub fn new(container_type: ContainerType, model_id: &str, support: ContainerSupport) -> Self {
        Self {
            container_type,
            model_id: model_id.to_string(),
            support,
        }
    }
}

// ==========================================
// CompatibilityMatrix - 容器×机型兼容矩阵
// ==========================================
// 复合键 (容器类型, 机型ID) → 适配档位
#[derive(Debug, Clone, Default)]
pub struct CompatibilityMatrix {
    index: HashMap<(ContainerType, String), ContainerSupport>,
}

impl CompatibilityMatrix {
    /// 由条目列表构建矩阵
    ///
    /// # 错误
    /// - DuplicateMatrixEntry: 同一 (容器, 机型) 单元格出现两次
    pub fn from_entries(entries: &[MatrixEntry]) -> Result<Self, ConfigError> {
        let mut index = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = (entry.container_type, entry.model_id.clone());
            if index.insert(key, entry.support).is_some() {
                return Err(ConfigError::DuplicateMatrixEntry {
                    container_type: entry.container_type.to_string(),
                    model_id: entry.model_id.clone(),
                });
            }
        }
        Ok(Self { index })
    }

    /// 查询适配档位
    ///
    /// # 规则
    /// - 缺失单元格 → NotSupported (默认拒绝, 绝不报错)
    pub fn support_for(&self, container: ContainerType, model_id: &str) -> ContainerSupport {
        self.index
            .get(&(container, model_id.to_string()))
            .copied()
            .unwrap_or(ContainerSupport::NotSupported)
    }

    /// 矩阵是否包含指定单元格
    pub fn has_entry(&self, container: ContainerType, model_id: &str) -> bool {
        self.index.contains_key(&(container, model_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ==========================================
// SorterCatalog - 机型目录
// ==========================================
#[derive(Debug, Clone)]
pub struct SorterCatalog {
    models: Vec<SorterModel>,
    matrix: CompatibilityMatrix,
    planning: PlanningParams,
}

impl SorterCatalog {
    /// 由机型列表 + 矩阵条目 + 规划参数构建目录
    ///
    /// # 结构校验 (入口一次性完成, 引擎侧不再校验)
    /// - 机型列表非空, ID 唯一
    /// - 数值字段严格为正, 优先度 ∈ [0, 100], 处理量区间 min ≤ max
    /// - 支持容器集合非空
    /// - 矩阵不得引用未定义机型, 单元格不得重复
    /// - 机型声明支持但矩阵缺失的单元格记 warn 日志 (运行期默认拒绝)
    pub fn from_parts(
        models: Vec<SorterModel>,
        entries: Vec<MatrixEntry>,
        planning: PlanningParams,
    ) -> Result<Self, ConfigError> {
        if models.is_empty() {
            return Err(ConfigError::EmptyModelList);
        }
        planning.validate()?;

        let mut seen_ids = Vec::with_capacity(models.len());
        for model in &models {
            if seen_ids.contains(&model.model_id) {
                return Err(ConfigError::DuplicateModel {
                    model_id: model.model_id.clone(),
                });
            }
            seen_ids.push(model.model_id.clone());
            Self::validate_model(model)?;
        }

        let matrix = CompatibilityMatrix::from_entries(&entries)?;
        for entry in &entries {
            if !seen_ids.contains(&entry.model_id) {
                return Err(ConfigError::UnknownModelInMatrix {
                    model_id: entry.model_id.clone(),
                });
            }
        }

        // 覆盖性检查: 声明支持却无矩阵单元格的组合, 运行期按默认拒绝处理
        for model in &models {
            for container in &model.supported_containers {
                if !matrix.has_entry(*container, &model.model_id) {
                    warn!(
                        model_id = %model.model_id,
                        container = %container,
                        "矩阵缺失单元格, 该组合将按默认拒绝处理"
                    );
                }
            }
        }

        Ok(Self {
            models,
            matrix,
            planning,
        })
    }

    fn validate_model(model: &SorterModel) -> Result<(), ConfigError> {
        let positive_fields: [(&'static str, f64); 8] = [
            ("rated_capacity_pph", model.rated_capacity_pph),
            ("max_length_mm", model.max_product.max_length_mm),
            ("max_width_mm", model.max_product.max_width_mm),
            ("max_height_mm", model.max_product.max_height_mm),
            ("max_weight_kg", model.max_product.max_weight_kg),
            ("installation.length_mm", model.installation.length_mm),
            ("installation.width_mm", model.installation.width_mm),
            ("installation.height_mm", model.installation.height_mm),
        ];
        for (field, value) in positive_fields {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveField {
                    model_id: model.model_id.clone(),
                    field,
                });
            }
        }

        // 基准格口数允许缺省 (按目标周转数折算), 配置了则必须 >= 1
        let positive_counts: [(&'static str, u32); 3] = [
            ("design_chute_count", model.design_chute_count.unwrap_or(1)),
            ("max_chutes", model.max_chutes),
            ("max_blocks", model.max_blocks),
        ];
        for (field, value) in positive_counts {
            if value == 0 {
                return Err(ConfigError::NonPositiveField {
                    model_id: model.model_id.clone(),
                    field,
                });
            }
        }

        if !(0.0..=100.0).contains(&model.base_priority) {
            return Err(ConfigError::InvalidPriority {
                model_id: model.model_id.clone(),
                priority: model.base_priority,
            });
        }

        if model.volume_band.min_daily_pieces > model.volume_band.max_daily_pieces
            || model.volume_band.min_daily_pieces < 0.0
        {
            return Err(ConfigError::InvalidVolumeBand {
                model_id: model.model_id.clone(),
            });
        }

        if model.supported_containers.is_empty() {
            return Err(ConfigError::EmptyContainerSet {
                model_id: model.model_id.clone(),
            });
        }

        Ok(())
    }

    // ===== 访问器 =====

    pub fn models(&self) -> &[SorterModel] {
        &self.models
    }

    pub fn matrix(&self) -> &CompatibilityMatrix {
        &self.matrix
    }

    pub fn planning(&self) -> &PlanningParams {
        &self.planning
    }

    pub fn model(&self, model_id: &str) -> Option<&SorterModel> {
        self.models.iter().find(|m| m.model_id == model_id)
    }

    // ==========================================
    // 基准配置
    // ==========================================

    /// 基准机型目录 (OS 系列 4 机型 + 基准矩阵)
    ///
    /// 配置文件缺失或仅作演示时使用; 生产环境由外部装载器提供目录。
    pub fn reference() -> Self {
        use crate::domain::machine::{InstallationDimensions, ProductLimits, VolumeBand};
        use ContainerSupport::{Recommended, Supported};
        use ContainerType::{Crate30L, Crate40L, Crate50L, StandardTote};

        let models = vec![
            SorterModel {
                model_id: "OS-Mini".to_string(),
                name: "小型机".to_string(),
                rated_capacity_pph: 600.0,
                max_product: ProductLimits {
                    max_length_mm: 400.0,
                    max_width_mm: 300.0,
                    max_height_mm: 200.0,
                    max_weight_kg: 2.0,
                },
                installation: InstallationDimensions {
                    length_mm: 3000.0,
                    width_mm: 1500.0,
                    height_mm: 1800.0,
                },
                design_chute_count: Some(4),
                max_chutes: 8,
                max_blocks: 1,
                base_priority: 60.0,
                volume_band: VolumeBand {
                    min_daily_pieces: 0.0,
                    max_daily_pieces: 3000.0,
                },
                supported_containers: vec![Crate30L, Crate40L],
            },
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
                supported_containers: vec![StandardTote, Crate30L, Crate40L],
            },
            SorterModel {
                model_id: "OS-M".to_string(),
                name: "中型机".to_string(),
                rated_capacity_pph: 2000.0,
                max_product: ProductLimits {
                    max_length_mm: 650.0,
                    max_width_mm: 450.0,
                    max_height_mm: 250.0,
                    max_weight_kg: 8.0,
                },
                installation: InstallationDimensions {
                    length_mm: 6000.0,
                    width_mm: 2500.0,
                    height_mm: 2200.0,
                },
                design_chute_count: Some(10),
                max_chutes: 24,
                max_blocks: 3,
                base_priority: 70.0,
                volume_band: VolumeBand {
                    min_daily_pieces: 6000.0,
                    max_daily_pieces: 20000.0,
                },
                supported_containers: vec![StandardTote, Crate30L, Crate40L, Crate50L],
            },
            SorterModel {
                model_id: "OS-L".to_string(),
                name: "大型机".to_string(),
                rated_capacity_pph: 3000.0,
                max_product: ProductLimits {
                    max_length_mm: 800.0,
                    max_width_mm: 600.0,
                    max_height_mm: 300.0,
                    max_weight_kg: 15.0,
                },
                installation: InstallationDimensions {
                    length_mm: 8000.0,
                    width_mm: 3000.0,
                    height_mm: 2500.0,
                },
                design_chute_count: Some(12),
                max_chutes: 32,
                max_blocks: 4,
                base_priority: 50.0,
                volume_band: VolumeBand {
                    min_daily_pieces: 15000.0,
                    max_daily_pieces: 50000.0,
                },
                supported_containers: vec![StandardTote, Crate40L, Crate50L],
            },
        ];

        let entries = vec![
            // 标准料箱
            MatrixEntry::new(StandardTote, "OS-S", Recommended),
            MatrixEntry::new(StandardTote, "OS-M", Recommended),
            MatrixEntry::new(StandardTote, "OS-L", Supported),
            // 周转箱 30L
            MatrixEntry::new(Crate30L, "OS-Mini", Recommended),
            MatrixEntry::new(Crate30L, "OS-S", Supported),
            MatrixEntry::new(Crate30L, "OS-M", Supported),
            // 周转箱 40L
            MatrixEntry::new(Crate40L, "OS-Mini", Supported),
            MatrixEntry::new(Crate40L, "OS-S", Supported),
            MatrixEntry::new(Crate40L, "OS-M", Recommended),
            MatrixEntry::new(Crate40L, "OS-L", Supported),
            // 周转箱 50L
            MatrixEntry::new(Crate50L, "OS-M", Supported),
            MatrixEntry::new(Crate50L, "OS-L", Recommended),
            // UNKNOWN 容器无任何单元格: 默认拒绝
        ];

        Self::from_parts(models, entries, PlanningParams::default())
            .expect("基准配置必须通过结构校验")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::machine::{InstallationDimensions, ProductLimits, VolumeBand};

    fn minimal_model(id: &str) -> SorterModel {
        SorterModel {
            model_id: id.to_string(),
            name: format!("测试机型 {}", id),
            rated_capacity_pph: 1000.0,
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
            base_priority: 50.0,
            volume_band: VolumeBand {
                min_daily_pieces: 0.0,
                max_daily_pieces: 10000.0,
            },
            supported_containers: vec![ContainerType::StandardTote],
        }
    }

    #[test]
    fn test_reference_catalog_valid() {
        let catalog = SorterCatalog::reference();
        assert_eq!(catalog.models().len(), 4);
        assert!(catalog.model("OS-S").is_some());
        assert!(catalog.model("OS-XL").is_none());
    }

    #[test]
    fn test_catalog_debug_format() {
        // 目录须可 Debug 输出 (排障日志与断言信息均依赖)
        let catalog = SorterCatalog::reference();
        let dump = format!("{:?}", catalog);
        assert!(dump.contains("OS-S"));
    }

    #[test]
    fn test_zero_installation_dimension_rejected() {
        let mut model = minimal_model("A");
        model.installation.width_mm = 0.0;
        let result = SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::NonPositiveField { field: "installation.width_mm", .. }
        ));
    }

    #[test]
    fn test_missing_design_chute_count_accepted() {
        // 基准格口数缺省合法: 规划按目标周转数折算
        let mut model = minimal_model("A");
        model.design_chute_count = None;
        assert!(SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default()).is_ok());
    }

    #[test]
    fn test_zero_design_chute_count_rejected() {
        let mut model = minimal_model("A");
        model.design_chute_count = Some(0);
        let result = SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::NonPositiveField { field: "design_chute_count", .. }
        ));
    }

    #[test]
    fn test_missing_cell_defaults_to_deny() {
        let catalog = SorterCatalog::reference();
        assert_eq!(
            catalog
                .matrix()
                .support_for(ContainerType::Unknown, "OS-S"),
            ContainerSupport::NotSupported
        );
        assert_eq!(
            catalog
                .matrix()
                .support_for(ContainerType::Crate50L, "OS-Mini"),
            ContainerSupport::NotSupported
        );
    }

    #[test]
    fn test_empty_model_list_rejected() {
        let result = SorterCatalog::from_parts(vec![], vec![], PlanningParams::default());
        assert!(matches!(result.unwrap_err(), ConfigError::EmptyModelList));
    }

    #[test]
    fn test_duplicate_model_rejected() {
        let result = SorterCatalog::from_parts(
            vec![minimal_model("A"), minimal_model("A")],
            vec![],
            PlanningParams::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::DuplicateModel { .. }
        ));
    }

    #[test]
    fn test_non_positive_field_rejected() {
        let mut model = minimal_model("A");
        model.rated_capacity_pph = 0.0;
        let result = SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::NonPositiveField { field: "rated_capacity_pph", .. }
        ));
    }

    #[test]
    fn test_zero_chute_limit_rejected() {
        let mut model = minimal_model("A");
        model.max_chutes = 0;
        let result = SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::NonPositiveField { field: "max_chutes", .. }
        ));
    }

    #[test]
    fn test_empty_container_set_rejected() {
        let mut model = minimal_model("A");
        model.supported_containers.clear();
        let result = SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::EmptyContainerSet { .. }
        ));
    }

    #[test]
    fn test_unknown_model_in_matrix_rejected() {
        let result = SorterCatalog::from_parts(
            vec![minimal_model("A")],
            vec![MatrixEntry::new(
                ContainerType::StandardTote,
                "GHOST",
                ContainerSupport::Supported,
            )],
            PlanningParams::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownModelInMatrix { .. }
        ));
    }

    #[test]
    fn test_duplicate_matrix_cell_rejected() {
        let result = SorterCatalog::from_parts(
            vec![minimal_model("A")],
            vec![
                MatrixEntry::new(
                    ContainerType::StandardTote,
                    "A",
                    ContainerSupport::Supported,
                ),
                MatrixEntry::new(
                    ContainerType::StandardTote,
                    "A",
                    ContainerSupport::Recommended,
                ),
            ],
            PlanningParams::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::DuplicateMatrixEntry { .. }
        ));
    }

    #[test]
    fn test_invalid_priority_rejected() {
        let mut model = minimal_model("A");
        model.base_priority = 120.0;
        let result = SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidPriority { .. }
        ));
    }

    #[test]
    fn test_inverted_volume_band_rejected() {
        let mut model = minimal_model("A");
        model.volume_band = VolumeBand {
            min_daily_pieces: 5000.0,
            max_daily_pieces: 100.0,
        };
        let result = SorterCatalog::from_parts(vec![model], vec![], PlanningParams::default());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidVolumeBand { .. }
        ));
    }
}
