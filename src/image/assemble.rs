use indicatif::ProgressBar;
use std::{fs, io, path::Path};

use crate::{
    config::BuildConfig,
    debug_log,
    image::{
        error::{ImageError, Result},
        header::RamdiskHeader,
        image_file::ImageFile,
        layout::ImageLayout,
        types::{FILLER_BYTE, FILLER_SIZE, KERNEL_REGION_SIZE},
    },
    logging,
    utils::human_size,
};

/// 组装过程的步数，用于进度条长度
pub const ASSEMBLY_STEPS: u64 = 6;

/// 一次组装的结果摘要
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub kernel_len: u64,
    pub kernel_truncated: bool,
    pub header: RamdiskHeader,
    pub layout: ImageLayout,
    pub image_len: u64,
}

/// 拼接最终磁盘镜像：
///  o 扩展（或截断）到 512 KB 的内核
///  o 24 字节 ramdisk 头部
///  o ramdisk 本体（可选）
///  o 1 MB 填充
pub fn assemble(config: &BuildConfig, pb: &ProgressBar) -> Result<AssemblyReport> {
    pb.set_message("📁 Preparing build directory...");
    if let Some(parent) = config
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(ImageError::io(parent))?;
    }
    pb.inc(1);

    // 内核读取失败时还没有创建输出文件
    pb.set_message("🧠 Reading kernel image...");
    let kernel = read_kernel(&config.kernel)?;
    debug_log!(
        "kernel {}: {} bytes",
        config.kernel.display(),
        kernel.len()
    );
    pb.inc(1);

    pb.set_message("💾 Writing kernel region...");
    let mut image = ImageFile::create(&config.output)?;
    let kernel_truncated = image.write_kernel_region(&kernel)?;
    if kernel_truncated {
        pb.suspend(|| {
            logging::warn(&format!(
                "kernel image is {} bytes, only the first {} are kept",
                kernel.len(),
                human_size(KERNEL_REGION_SIZE)
            ))
        });
    }
    pb.inc(1);

    pb.set_message("📦 Loading ramdisk...");
    let payload = read_ramdisk(&config.ramdisk)?;
    let header = RamdiskHeader::new(payload.len() as u64)?;
    debug_log!("ramdisk header: {}", header);
    pb.inc(1);

    pb.set_message("🧩 Appending ramdisk...");
    image.append(&header.to_bytes()?)?;
    image.append(&payload)?;
    pb.inc(1);

    // 部分虚拟机 BIOS 在镜像小于 1 MB 时无法启动
    pb.set_message("🪶 Padding image...");
    image.append_filler(FILLER_BYTE, FILLER_SIZE)?;
    let image_len = image.finish()?;
    pb.inc(1);

    let layout = ImageLayout::new(header.payload_len());
    debug_assert_eq!(image_len, layout.total_len());

    Ok(AssemblyReport {
        kernel_len: kernel.len() as u64,
        kernel_truncated,
        header,
        layout,
        image_len,
    })
}

fn read_kernel(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ImageError::KernelNotFound(path.to_path_buf()),
        _ => ImageError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// ramdisk 不存在时视为空
fn read_ramdisk(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        debug_log!("no ramdisk at {}, using empty payload", path.display());
        return Ok(Vec::new());
    }
    fs::read(path).map_err(ImageError::io(path))
}
