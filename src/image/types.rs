/// 扇区大小：512 字节
/// 实模式引导代码以扇区为单位把 ramdisk 读进内存。
pub const SECTOR_SIZE: u64 = 512;

/// 内核区域大小：512 KB
/// 内核镜像不足时补 0，超出时截断。
pub const KERNEL_REGION_SIZE: u64 = 512 * 1024;

/// ramdisk 头部签名长度
pub const SIGNATURE_LEN: usize = 8;

pub const START_SIGNATURE: [u8; SIGNATURE_LEN] = *b"CUTE-STA";
pub const END_SIGNATURE: [u8; SIGNATURE_LEN] = *b"CUTE-END";

/// ramdisk 头部长度：签名 8 + 扇区数 4 + 字节数 4 + 签名 8
pub const HEADER_LEN: u64 = (SIGNATURE_LEN + 4 + 4 + SIGNATURE_LEN) as u64;

/// 尾部填充：1 MB
/// 部分虚拟机 BIOS 拒绝小于 1 MB 的磁盘镜像。
pub const FILLER_SIZE: u64 = 1024 * 1024;

/// 填充字节 '#'
pub const FILLER_BYTE: u8 = b'#';

/// 头部在镜像中的偏移，紧跟内核区域
pub const HEADER_OFFSET: u64 = KERNEL_REGION_SIZE;

/// 向上取整的扇区数
pub fn sectors_for(len: u64) -> u64 {
    (len + SECTOR_SIZE - 1) / SECTOR_SIZE
}
