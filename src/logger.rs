use tracing::debug;
use tracing_subscriber::EnvFilter;

/// 初始化日志，`RUST_LOG` 优先于配置中的级别
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("navi_bridge={0},navi={0}", default_level)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
    {
        debug!("日志已初始化，沿用现有 subscriber: {}", e);
    }
}
