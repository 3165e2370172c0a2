use std::path::PathBuf;
use thiserror::Error;

/// 镜像组装 / 检查错误类型
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("kernel image not found: {}", .0.display())]
    KernelNotFound(PathBuf),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ramdisk too large for a 32-bit header: {0} bytes")]
    RamdiskTooLarge(u64),

    #[error("ramdisk header encoding failed")]
    Encoding(#[from] bincode::Error),

    #[error("invalid ramdisk header {which} signature: {found:?}")]
    BadSignature { which: &'static str, found: String },

    #[error("ramdisk header sector count mismatch: expected {expected}, found {found}")]
    SectorMismatch { expected: u32, found: u32 },

    #[error("image truncated: need {needed} bytes, file has {actual}")]
    Truncated { needed: u64, actual: u64 },
}

impl ImageError {
    /// 给底层 I/O 错误附上出错的路径
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ImageError::Io { path, source }
    }
}

/// 镜像操作统一结果类型
pub type Result<T> = std::result::Result<T, ImageError>;
