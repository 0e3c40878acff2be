//! 幂表
//!
//! 对每个字符集长度 L (10..=64) 预先计算 L^0, L^1, ...，只保留不超过
//! `u32::MAX` 的项。表由 `build.rs` 在编译期生成，`max_chars` 直接取行长度，
//! 不做任何浮点对数运算。

include!(concat!(env!("OUT_DIR"), "/power_table.rs"));

/// 获取 `base` 对应的幂序列，`base` 不在 10..=64 时返回 None.
#[inline]
#[must_use]
pub fn powers(base: usize) -> Option<&'static [u32]> {
    let row = base.checked_sub(MIN_BASE)?;
    POWER_TABLE.get(row).copied()
}

/// `base` 进制下 u32 能容纳的最大字符数，`base` 非法时为 0.
///
/// 索引 0 (权重 1) 也算一个字符，因此等于行长度 - 1。
#[inline]
#[must_use]
pub fn max_chars(base: usize) -> usize {
    powers(base).map_or(0, |row| row.len() - 1)
}
