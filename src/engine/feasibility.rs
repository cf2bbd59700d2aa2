// ==========================================
// 分拣机选型决策支持系统 - 可行性过滤引擎
// ==========================================
// 职责: 淘汰物理上或容器上无法处理该商品的机型
// 红线: 无状态、无副作用; 空结果是正常结论, 不是错误
// ==========================================

use crate::config::catalog::CompatibilityMatrix;
use crate::domain::evaluation::ModelRejection;
use crate::domain::machine::SorterModel;
use crate::domain::product::ProductSpec;
use crate::domain::types::ContainerSupport;

// ==========================================
// FeasibilityEngine - 可行性过滤引擎
// ==========================================
pub struct FeasibilityEngine {
    // 无状态引擎,不需要注入依赖
}

impl FeasibilityEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 单机型可行性判定
    ///
    /// # 规则
    /// 满足任一条件即淘汰:
    /// 1. 商品长/宽/高超过机型对应上限
    /// 2. 商品重量超过机型重量上限
    /// 3. 矩阵单元格为 NotSupported 或缺失 (默认拒绝)
    ///
    /// # 返回
    /// - (bool, Vec<String>): 是否可行 + 淘汰原因
    pub fn check_model(
        &self,
        model: &SorterModel,
        product: &ProductSpec,
        matrix: &CompatibilityMatrix,
    ) -> (bool, Vec<String>) {
        let mut reasons = Vec::new();
        let limits = &model.max_product;

        if product.length_mm > limits.max_length_mm {
            reasons.push(format!(
                "OVER_LENGTH: 商品长度 {}mm 超过上限 {}mm",
                product.length_mm, limits.max_length_mm
            ));
        }
        if product.width_mm > limits.max_width_mm {
            reasons.push(format!(
                "OVER_WIDTH: 商品宽度 {}mm 超过上限 {}mm",
                product.width_mm, limits.max_width_mm
            ));
        }
        if product.height_mm > limits.max_height_mm {
            reasons.push(format!(
                "OVER_HEIGHT: 商品高度 {}mm 超过上限 {}mm",
                product.height_mm, limits.max_height_mm
            ));
        }
        if product.weight_kg > limits.max_weight_kg {
            reasons.push(format!(
                "OVER_WEIGHT: 商品重量 {}kg 超过上限 {}kg",
                product.weight_kg, limits.max_weight_kg
            ));
        }

        let support = matrix.support_for(product.container_type, &model.model_id);
        if !support.is_usable() {
            reasons.push(format!(
                "CONTAINER_UNSUPPORTED: 容器 {} 与机型 {} 不兼容",
                product.container_type, model.model_id
            ));
        }

        (reasons.is_empty(), reasons)
    }

    /// 过滤机型列表
    ///
    /// # 返回
    /// - 存活机型及其容器适配档位
    /// - 被淘汰机型及原因列表
    pub fn filter<'a>(
        &self,
        models: &'a [SorterModel],
        product: &ProductSpec,
        matrix: &CompatibilityMatrix,
    ) -> (
        Vec<(&'a SorterModel, ContainerSupport)>,
        Vec<ModelRejection>,
    ) {
        let mut feasible = Vec::new();
        let mut rejected = Vec::new();

        for model in models {
            let (ok, reasons) = self.check_model(model, product, matrix);
            if ok {
                let support = matrix.support_for(product.container_type, &model.model_id);
                feasible.push((model, support));
            } else {
                rejected.push(ModelRejection {
                    model_id: model.model_id.clone(),
                    reasons,
                });
            }
        }

        (feasible, rejected)
    }
}

impl Default for FeasibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
