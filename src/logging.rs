//! 终端输出
//!
//! 设置 `HDIMAGE_DEBUG=1` 打开带时间戳的调试输出。

use colored::*;
use std::sync::OnceLock;

use crate::{config::DEBUG_ENV, utils::current_timestamp};

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| match std::env::var(DEBUG_ENV) {
        Ok(val) => !val.is_empty() && val != "0",
        Err(_) => false,
    })
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            $crate::logging::debug(&format!($($arg)*));
        }
    };
}

pub fn debug(msg: &str) {
    eprintln!(
        "{} {}",
        format!("[{}]", current_timestamp()).bright_black(),
        msg.bright_black()
    );
}

pub fn step(msg: &str) {
    println!("{}", msg);
}

pub fn success(msg: &str) {
    println!("{}", msg.green().bold());
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "⚠️  Warning:".yellow().bold(), msg.yellow());
}

pub fn error(err: &dyn std::error::Error) {
    eprintln!("{} {}", "❌ Error:".red().bold(), err);

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("   {} {}", "caused by:".red(), cause);
        source = cause.source();
    }
}
