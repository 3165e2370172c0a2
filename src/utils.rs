use chrono::Local;

/// 当前本地时间，用于调试输出
pub fn current_timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

/// 把字节数格式化成便于阅读的形式
pub fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;

    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}
