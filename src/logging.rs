// ==========================================
// 分拣机选型决策支持系统 - 日志系统
// ==========================================
// 工具: tracing + tracing-subscriber (EnvFilter)
// 约定: 引擎各步骤以结构化字段输出, 不在引擎内拼接日志文本
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统 (进程入口调用一次)
///
/// # 环境变量
/// - RUST_LOG: 过滤器表达式, 缺省 "sorter_dss=info,info"
///   例如: RUST_LOG=sorter_dss=debug
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sorter_dss=info,info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试日志 (debug 级, 输出接入测试捕获)
///
/// 可在多个测试中重复调用, 仅首次生效。
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("sorter_dss=debug"))
        .with_test_writer()
        .try_init();
}
