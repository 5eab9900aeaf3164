//! tracing 初始化

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志，默认级别 info；可通过 `RUST_LOG` 覆盖
pub fn init() {
    init_with_level("info");
}

/// 详细模式下默认级别为 debug
pub fn init_verbose(verbose: bool) {
    init_with_level(if verbose { "debug" } else { "info" });
}

fn init_with_level(default_level: &str) {
    // 重复初始化（例如多个测试）时忽略错误
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_target(false).with_line_number(true))
        .try_init();
}
