use std::path::PathBuf;

// 约定路径，均相对于当前目录
pub const KERNEL_PATH: &str = "kern/image";
pub const RAMDISK_PATH: &str = "build/ramdisk";
pub const IMAGE_PATH: &str = "build/hd-image";

/// 调试输出开关的环境变量
pub const DEBUG_ENV: &str = "HDIMAGE_DEBUG";

/// 一次组装所需的三个路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub kernel: PathBuf,
    pub ramdisk: PathBuf,
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            kernel: PathBuf::from(KERNEL_PATH),
            ramdisk: PathBuf::from(RAMDISK_PATH),
            output: PathBuf::from(IMAGE_PATH),
        }
    }
}

impl BuildConfig {
    /// 用命令行给出的路径覆盖默认值
    pub fn with_overrides(
        kernel: Option<PathBuf>,
        ramdisk: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            kernel: kernel.unwrap_or(defaults.kernel),
            ramdisk: ramdisk.unwrap_or(defaults.ramdisk),
            output: output.unwrap_or(defaults.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_conventional_paths() {
        let config = BuildConfig::default();
        assert_eq!(config.kernel, PathBuf::from("kern/image"));
        assert_eq!(config.ramdisk, PathBuf::from("build/ramdisk"));
        assert_eq!(config.output, PathBuf::from("build/hd-image"));
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let config = BuildConfig::with_overrides(None, None, Some(PathBuf::from("out.img")));
        assert_eq!(config.kernel, PathBuf::from(KERNEL_PATH));
        assert_eq!(config.ramdisk, PathBuf::from(RAMDISK_PATH));
        assert_eq!(config.output, PathBuf::from("out.img"));
    }
}
