use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::Path,
};

use crate::image::{
    error::{ImageError, Result},
    header::RamdiskHeader,
    layout::ImageLayout,
    types::{FILLER_SIZE, HEADER_LEN, HEADER_OFFSET},
};

/// 对已生成镜像的检查结果
#[derive(Debug, Clone)]
pub struct ImageReport {
    pub header: RamdiskHeader,
    pub layout: ImageLayout,
    pub file_len: u64,
    /// ramdisk 之后剩余的字节数，正常情况下是 1 MB 填充
    pub trailing_len: u64,
}

impl ImageReport {
    pub fn is_padded(&self) -> bool {
        self.trailing_len >= FILLER_SIZE
    }
}

/// 按内核启动时的方式读取并校验 ramdisk 头部，只读不写
pub fn inspect(path: &Path) -> Result<ImageReport> {
    let mut file = File::open(path).map_err(ImageError::io(path))?;
    let file_len = file.metadata().map_err(ImageError::io(path))?.len();

    let header_end = HEADER_OFFSET + HEADER_LEN;
    if file_len < header_end {
        return Err(ImageError::Truncated {
            needed: header_end,
            actual: file_len,
        });
    }

    let mut buf = [0u8; HEADER_LEN as usize];
    file.seek(SeekFrom::Start(HEADER_OFFSET))
        .map_err(ImageError::io(path))?;
    file.read_exact(&mut buf).map_err(ImageError::io(path))?;

    let header = RamdiskHeader::from_bytes(&buf)?;
    header.validate()?;

    let layout = ImageLayout::new(header.payload_len());
    let payload_end = layout.payload().end;
    if file_len < payload_end {
        return Err(ImageError::Truncated {
            needed: payload_end,
            actual: file_len,
        });
    }

    Ok(ImageReport {
        header,
        layout,
        file_len,
        trailing_len: file_len - payload_end,
    })
}
