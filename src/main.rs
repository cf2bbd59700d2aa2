// ==========================================
// 分拣机选型决策支持系统 - 演示入口
// ==========================================
// 用途: 以基准机型目录运行一次推荐流程
// 输入: 可选的 JSON 请求文件 (argv[1]); 缺省使用内置示例请求
// ==========================================

use anyhow::Context;
use serde::Deserialize;
use sorter_dss::{
    logging, OperatingParameters, ProductSpec, RecommendationEngine, SorterCatalog,
};
use std::sync::Arc;

/// JSON 请求文件结构
#[derive(Debug, Deserialize)]
struct RecommendRequest {
    product: ProductSpec,
    operating: OperatingParameters,
}

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 机型推荐引擎", sorter_dss::APP_NAME);
    tracing::info!("系统版本: {}", sorter_dss::VERSION);
    tracing::info!("==================================================");

    // 装载基准机型目录 (生产环境由外部配置装载器提供)
    let catalog = Arc::new(SorterCatalog::reference());
    tracing::info!(models = catalog.models().len(), "机型目录装载完成");

    // 读取请求: 文件参数优先, 否则使用内置示例
    let request = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("无法读取请求文件: {}", path))?;
            serde_json::from_str::<RecommendRequest>(&raw)
                .with_context(|| format!("请求文件解析失败: {}", path))?
        }
        None => RecommendRequest {
            product: ProductSpec {
                length_mm: 300.0,
                width_mm: 200.0,
                height_mm: 150.0,
                weight_kg: 1.5,
                container_type: sorter_dss::ContainerType::StandardTote,
            },
            operating: OperatingParameters {
                daily_shipments: 100,
                pieces_per_shipment: 2.5,
                working_hours: 8.0,
                peak_ratio: 1.5,
            },
        },
    };

    // 执行推荐
    let engine = RecommendationEngine::new(catalog);
    let result = engine
        .recommend(&request.product, &request.operating)
        .context("推荐流程执行失败")?;

    // 输出结果 (表现层可直接渲染的 JSON)
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
