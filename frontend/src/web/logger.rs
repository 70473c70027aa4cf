//! 把 `log` 记录输出到浏览器控制台

use orbit::ClientConfig;

/// 级别为 `Off` 时不安装 logger；重复调用时保留第一次的设置
pub fn init(config: &ClientConfig) {
    let Some(level) = config.console_level() else {
        return;
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}
