use std::ops::Range;

use crate::image::types::{FILLER_SIZE, HEADER_LEN, HEADER_OFFSET, KERNEL_REGION_SIZE};

/// 最终镜像各区域在文件中的位置
///
/// | 内核 512 KB | 头部 24 B | ramdisk | 填充 1 MB |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLayout {
    pub payload_len: u64,
}

impl ImageLayout {
    pub fn new(payload_len: u64) -> Self {
        Self { payload_len }
    }

    pub fn kernel(&self) -> Range<u64> {
        0..KERNEL_REGION_SIZE
    }

    pub fn header(&self) -> Range<u64> {
        HEADER_OFFSET..HEADER_OFFSET + HEADER_LEN
    }

    pub fn payload(&self) -> Range<u64> {
        let start = self.header().end;
        start..start + self.payload_len
    }

    pub fn filler(&self) -> Range<u64> {
        let start = self.payload().end;
        start..start + FILLER_SIZE
    }

    pub fn total_len(&self) -> u64 {
        self.filler().end
    }
}
