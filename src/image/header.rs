use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::image::{
    error::{ImageError, Result},
    types::{sectors_for, END_SIGNATURE, HEADER_LEN, SIGNATURE_LEN, START_SIGNATURE},
};

/// ramdisk 头部，紧跟在 512 KB 内核区域之后
///
/// 长度用两种单位描述：
/// - `sectors` 含头部，按 512 字节扇区向上取整，给实模式加载代码用
/// - `length` 不含头部，按字节计，给内核 C 代码直接访问 ramdisk 用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamdiskHeader {
    pub start_signature: [u8; SIGNATURE_LEN],
    pub sectors: u32,
    pub length: u32,
    pub end_signature: [u8; SIGNATURE_LEN],
}

// 定长整数 + 小端序，不随构建主机变化
fn codec() -> impl Options {
    bincode::options()
        .with_fixint_encoding()
        .with_little_endian()
}

impl RamdiskHeader {
    /// 根据 ramdisk 字节数生成头部
    pub fn new(payload_len: u64) -> Result<Self> {
        let length =
            u32::try_from(payload_len).map_err(|_| ImageError::RamdiskTooLarge(payload_len))?;
        let sectors = u32::try_from(sectors_for(HEADER_LEN + payload_len))
            .map_err(|_| ImageError::RamdiskTooLarge(payload_len))?;

        Ok(Self {
            start_signature: START_SIGNATURE,
            sectors,
            length,
            end_signature: END_SIGNATURE,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = codec().serialize(self)?;
        debug_assert_eq!(bytes.len() as u64, HEADER_LEN);
        Ok(bytes)
    }

    /// 从恰好 24 字节的切片解码，不做签名检查
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(codec().deserialize(bytes)?)
    }

    /// 与内核启动时的检查一致：两个签名必须匹配
    /// 额外校验扇区数与字节数是否自洽
    pub fn validate(&self) -> Result<()> {
        if self.start_signature != START_SIGNATURE {
            return Err(ImageError::BadSignature {
                which: "start",
                found: String::from_utf8_lossy(&self.start_signature).into_owned(),
            });
        }
        if self.end_signature != END_SIGNATURE {
            return Err(ImageError::BadSignature {
                which: "end",
                found: String::from_utf8_lossy(&self.end_signature).into_owned(),
            });
        }

        let expected = sectors_for(HEADER_LEN + self.payload_len()) as u32;
        if self.sectors != expected {
            return Err(ImageError::SectorMismatch {
                expected,
                found: self.sectors,
            });
        }
        Ok(())
    }

    pub fn payload_len(&self) -> u64 {
        self.length as u64
    }
}

impl fmt::Display for RamdiskHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} sectors | {} bytes | {}",
            String::from_utf8_lossy(&self.start_signature),
            self.sectors,
            self.length,
            String::from_utf8_lossy(&self.end_signature)
        )
    }
}
