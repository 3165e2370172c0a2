use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::image::{
    error::{ImageError, Result},
    types::KERNEL_REGION_SIZE,
};

/// 正在写入的磁盘镜像文件
///
/// 只追加写，不做原子替换：中途失败会留下不完整的文件。
#[derive(Debug)]
pub struct ImageFile {
    file: File,
    path: PathBuf,
}

impl ImageFile {
    /// 创建或清空输出文件
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(ImageError::io(path))?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// 写入内核并把区域调整为恰好 512 KB
    /// 不足部分由 set_len 补 0，超出部分被截掉。
    /// 返回内核是否被截断。
    pub fn write_kernel_region(&mut self, kernel: &[u8]) -> Result<bool> {
        let region = KERNEL_REGION_SIZE as usize;
        let kept = kernel.len().min(region);

        self.file
            .write_all(&kernel[..kept])
            .map_err(ImageError::io(&self.path))?;
        self.file
            .set_len(KERNEL_REGION_SIZE)
            .map_err(ImageError::io(&self.path))?;
        self.file
            .seek(SeekFrom::Start(KERNEL_REGION_SIZE))
            .map_err(ImageError::io(&self.path))?;

        Ok(kernel.len() > region)
    }

    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.file
            .write_all(bytes)
            .map_err(ImageError::io(&self.path))
    }

    /// 追加 `len` 个相同字节
    pub fn append_filler(&mut self, byte: u8, len: u64) -> Result<()> {
        let mut filler = io::repeat(byte).take(len);
        io::copy(&mut filler, &mut self.file).map_err(ImageError::io(&self.path))?;
        Ok(())
    }

    /// 刷盘并返回最终文件长度
    pub fn finish(mut self) -> Result<u64> {
        self.file.flush().map_err(ImageError::io(&self.path))?;
        self.file.sync_all().map_err(ImageError::io(&self.path))?;
        let len = self
            .file
            .metadata()
            .map_err(ImageError::io(&self.path))?
            .len();
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn short_kernel_is_zero_padded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("img");

        let mut image = ImageFile::create(&path).unwrap();
        let truncated = image.write_kernel_region(&[0xAA; 4]).unwrap();
        assert!(!truncated);
        assert_eq!(image.finish().unwrap(), KERNEL_REGION_SIZE);

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0xAA; 4]);
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn long_kernel_is_truncated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("img");
        let kernel: Vec<u8> = (0..KERNEL_REGION_SIZE + 100).map(|i| i as u8).collect();

        let mut image = ImageFile::create(&path).unwrap();
        assert!(image.write_kernel_region(&kernel).unwrap());
        image.append(b"tail").unwrap();
        image.finish().unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len() as u64, KERNEL_REGION_SIZE + 4);
        assert_eq!(&bytes[..KERNEL_REGION_SIZE as usize], &kernel[..KERNEL_REGION_SIZE as usize]);
        assert_eq!(&bytes[KERNEL_REGION_SIZE as usize..], b"tail");
    }

    #[test]
    fn filler_appends_exact_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("img");

        let mut image = ImageFile::create(&path).unwrap();
        image.append_filler(b'#', 10_000).unwrap();
        assert_eq!(image.finish().unwrap(), 10_000);

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.iter().all(|&b| b == b'#'));
    }

    #[test]
    fn create_fails_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("img");

        let result = ImageFile::create(&path);
        assert!(matches!(result, Err(ImageError::Io { .. })));
    }
}
