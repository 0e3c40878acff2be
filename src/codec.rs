//! 编解码器
//!
//! 把不超过 `max_chars` 个字符的字符串按小端定长进制转换为 u32：
//! 第一个字符是最低位，`value = Σ digit[i] * L^i`。

use std::borrow::Cow;

use crate::charset::{self, DEFAULT_CHARSET};
use crate::error::{Error, Result};
use crate::power;

/// 默认字符集编解码器，不可变，可在线程间共享.
pub static STANDARD: Codec = Codec::from_static(DEFAULT_CHARSET.as_bytes());

/// 持有一个字符集的编解码器.
///
/// 字符集非法时编解码器处于 inert 状态：字符集为空，`max_chars()` 为 0，
/// 所有编解码操作返回 [`Error::InvalidCharacterSet`]。
///
/// 重复符号不做检查：编码时取第一个匹配的位置，解码总是输出下标对应的符号，
/// 因此使用靠后重复符号的输入不能原样还原。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    /// 符号序列，inert 时为空.
    charset: Cow<'static, [u8]>,
}

impl Codec {
    /// 从任意字符集创建编解码器，非法时静默进入 inert 状态.
    ///
    /// # Example
    /// ```
    /// use numcode::Codec;
    /// let hex = Codec::new("0123456789ABCDEF");
    /// assert_eq!(hex.max_chars(), 7);
    ///
    /// let short = Codec::new("ABCDEFG");
    /// assert_eq!(short.max_chars(), 0);
    /// ```
    #[must_use]
    pub fn new(charset: impl AsRef<[u8]>) -> Self {
        Self::try_new(charset).unwrap_or_else(|_| Self::inert())
    }

    /// 从任意字符集创建编解码器，非法时返回错误.
    ///
    /// # Errors
    /// 长度不在 10..=64 时返回 [`Error::CharsetLength`]，
    /// 含非 ASCII 字节时返回 [`Error::NonAsciiCharset`]。
    pub fn try_new(charset: impl AsRef<[u8]>) -> Result<Self> {
        let charset = charset.as_ref();
        charset::validate(charset)?;
        Ok(Self {
            charset: Cow::Owned(charset.to_vec()),
        })
    }

    /// 从静态字符集创建，可用于 `static` 初始化.
    #[must_use]
    pub const fn from_static(charset: &'static [u8]) -> Self {
        if charset::validate(charset).is_ok() {
            Self {
                charset: Cow::Borrowed(charset),
            }
        } else {
            Self::inert()
        }
    }

    /// 默认字符集编解码器
    #[must_use]
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// 空字符集
    const fn inert() -> Self {
        Self {
            charset: Cow::Borrowed(&[]),
        }
    }

    /// 字符集是否合法
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.charset.is_empty()
    }

    /// 进制，即字符集长度；inert 时为 0.
    #[must_use]
    pub fn base(&self) -> usize {
        self.charset.len()
    }

    /// 字符集原始字节
    #[must_use]
    pub fn charset(&self) -> &[u8] {
        &self.charset
    }

    /// 字符集字符串（字符集只含 ASCII）.
    #[must_use]
    pub fn charset_str(&self) -> &str {
        std::str::from_utf8(&self.charset).unwrap_or_default()
    }

    /// u32 能容纳的最大字符数，inert 时为 0.
    #[must_use]
    pub fn max_chars(&self) -> usize {
        power::max_chars(self.base())
    }

    /// 当前进制的幂序列
    fn weights(&self) -> Result<&'static [u32]> {
        power::powers(self.base()).ok_or(Error::InvalidCharacterSet)
    }

    /// 编码为 u32.
    ///
    /// # Example
    /// ```
    /// use numcode::STANDARD;
    /// assert_eq!(STANDARD.encode("A").unwrap(), 1);
    /// assert_eq!(STANDARD.encode(" A").unwrap(), 40);
    /// ```
    ///
    /// # Errors
    /// inert 编解码器返回 [`Error::InvalidCharacterSet`]，输入超过 `max_chars`
    /// 返回 [`Error::LengthExceeded`]，出现字符集外的符号返回 [`Error::InvalidSymbol`]。
    pub fn encode(&self, src: impl AsRef<[u8]>) -> Result<u32> {
        let src = src.as_ref();
        let weights = self.weights()?;
        check_len(src.len(), weights)?;

        let digits = src
            .iter()
            .enumerate()
            .map(|(position, &symbol)| self.digit_of(symbol, position));

        let mut total = 0u32;
        for (digit, &weight) in digits.zip(weights) {
            total = accumulate(total, digit?, weight);
        }
        Ok(total)
    }

    /// 编码并以 4 字节小端写入 `dst`，失败时 `dst` 保持不变.
    ///
    /// # Errors
    /// 同 [`Codec::encode`]。
    pub fn encode_into(&self, dst: &mut [u8; 4], src: impl AsRef<[u8]>) -> Result<()> {
        let value = self.encode(src)?;
        *dst = value.to_le_bytes();
        Ok(())
    }

    /// 解码为字符串.
    ///
    /// `zero_fill` 为 true 时用字符集第 0 个符号补齐到 `max_chars`；
    /// 否则剩余值为 0 时立即停止，不输出尾部的零符号。
    ///
    /// # Example
    /// ```
    /// use numcode::Codec;
    /// let hex = Codec::new("0123456789ABCDEF");
    /// assert_eq!(hex.decode(255, false).unwrap(), "FF");
    /// assert_eq!(hex.decode(254, true).unwrap(), "EF00000");
    /// ```
    ///
    /// # Errors
    /// inert 编解码器返回 [`Error::InvalidCharacterSet`]，`code` 需要超过
    /// `max_chars` 个字符时返回 [`Error::LengthExceeded`]。
    pub fn decode(&self, code: u32, zero_fill: bool) -> Result<String> {
        let digits = self.digits(code, zero_fill)?;
        Ok(digits
            .iter()
            .map(|&digit| char::from(self.charset[usize::from(digit)]))
            .collect())
    }

    /// 解码并写入 `dst` 开头，返回写入的字节数；之后的字节保持不变.
    ///
    /// # Errors
    /// 同 [`Codec::decode`]；`dst` 放不下结果时返回 [`Error::BufferTooSmall`]。
    pub fn decode_into(&self, dst: &mut [u8], code: u32, zero_fill: bool) -> Result<usize> {
        let digits = self.digits(code, zero_fill)?;
        let got = dst.len();
        let Some(out) = dst.get_mut(..digits.len()) else {
            return Err(Error::BufferTooSmall {
                needed: digits.len(),
                got,
            });
        };
        for (slot, &digit) in out.iter_mut().zip(&digits) {
            *slot = self.charset[usize::from(digit)];
        }
        Ok(digits.len())
    }

    /// 符号转数位；非 ASCII 字节报告为 U+FFFD.
    pub(crate) fn digit_of(&self, symbol: u8, position: usize) -> Result<u8> {
        charset::position_of(&self.charset, symbol).ok_or(Error::InvalidSymbol {
            symbol: if symbol.is_ascii() {
                char::from(symbol)
            } else {
                char::REPLACEMENT_CHARACTER
            },
            position,
        })
    }

    /// 把 `code` 拆成数位，最低位在前.
    pub(crate) fn digits(&self, code: u32, zero_fill: bool) -> Result<Vec<u8>> {
        let max = self.max_chars();
        if max == 0 {
            return Err(Error::InvalidCharacterSet);
        }
        let base = u32::try_from(self.base()).map_err(|_| Error::InvalidCharacterSet)?;

        let mut remaining = code;
        let mut digits = Vec::with_capacity(max);
        while digits.len() < max {
            if remaining > 0 {
                #[allow(clippy::cast_possible_truncation)]
                let digit = (remaining % base) as u8;
                digits.push(digit);
                remaining /= base;
            } else if zero_fill {
                digits.push(0);
            } else {
                break;
            }
        }

        if remaining > 0 {
            let mut len = max;
            while remaining > 0 {
                remaining /= base;
                len += 1;
            }
            return Err(Error::LengthExceeded { len, max });
        }
        Ok(digits)
    }

    /// 按数位计算数值，数位须已校验.
    pub(crate) fn weigh(&self, digits: &[u8]) -> Result<u32> {
        let weights = self.weights()?;
        check_len(digits.len(), weights)?;
        Ok(digits
            .iter()
            .zip(weights)
            .fold(0, |total, (&digit, &weight)| accumulate(total, digit, weight)))
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::standard()
    }
}

/// 长度不能超过幂序列长度 - 1.
const fn check_len(len: usize, weights: &[u32]) -> Result<()> {
    let max = weights.len() - 1;
    if len > max {
        return Err(Error::LengthExceeded { len, max });
    }
    Ok(())
}

/// 长度受 `max_chars` 约束时不会溢出；debug 构建下溢出直接 trap.
#[inline]
fn accumulate(total: u32, digit: u8, weight: u32) -> u32 {
    total + u32::from(digit) * weight
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const HEX: &str = "0123456789ABCDEF";

    #[test]
    fn test_standard_encode() {
        assert_eq!(STANDARD.encode("A").unwrap(), 1);
        assert_eq!(STANDARD.encode("Z").unwrap(), 26);
        assert_eq!(STANDARD.encode("/").unwrap(), 39);
        assert_eq!(STANDARD.encode(" A").unwrap(), 40);
        assert_eq!(STANDARD.encode("  A").unwrap(), 1600);
        // 3 + 15 * 40 + 4 * 40^2 + 5 * 40^3
        assert_eq!(STANDARD.encode("CODE").unwrap(), 327_003);
        assert_eq!(STANDARD.encode("//////").unwrap(), 4_095_999_999);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(STANDARD.encode("").unwrap(), 0);
        assert_eq!(STANDARD.encode("      ").unwrap(), 0);
    }

    #[test]
    fn test_encode_length_exceeded() {
        assert_eq!(
            STANDARD.encode("1234567"),
            Err(Error::LengthExceeded { len: 7, max: 6 })
        );
        assert!(STANDARD.encode("LARGECODE").is_err());
    }

    #[test]
    fn test_encode_invalid_symbol() {
        let hex = Codec::new(HEX);
        assert_eq!(
            hex.encode("FG"),
            Err(Error::InvalidSymbol {
                symbol: 'G',
                position: 1
            })
        );
        assert!(matches!(
            STANDARD.encode("inval"),
            Err(Error::InvalidSymbol { symbol: 'i', position: 0 })
        ));
    }

    #[test]
    fn test_non_ascii_symbol_is_not_latin1() {
        assert_eq!(
            STANDARD.encode("é"),
            Err(Error::InvalidSymbol {
                symbol: char::REPLACEMENT_CHARACTER,
                position: 0
            })
        );
    }

    #[test]
    fn test_length_checked_before_symbols() {
        assert!(matches!(
            STANDARD.encode("Invalid code"),
            Err(Error::LengthExceeded { len: 12, .. })
        ));
    }

    #[test]
    fn test_hex_encode_is_little_endian() {
        let hex = Codec::new(HEX);
        assert_eq!(hex.encode("EF").unwrap(), 254);
        assert_eq!(hex.encode("FF").unwrap(), 255);
        assert_eq!(hex.encode("FFFFFF").unwrap(), 16_777_215);
    }

    #[test]
    fn test_encode_into() {
        let mut dst = [0u8; 4];
        STANDARD.encode_into(&mut dst, "  A").unwrap();
        assert_eq!(dst, 1600u32.to_le_bytes());

        let mut untouched = [9u8; 4];
        assert!(STANDARD.encode_into(&mut untouched, "a").is_err());
        assert_eq!(untouched, [9u8; 4]);
    }

    #[test]
    fn test_max_chars() {
        assert_eq!(STANDARD.max_chars(), 6);
        assert_eq!(Codec::new("1234567890123456789012345678901234567890").max_chars(), 6);
        assert_eq!(Codec::new("12345678901234567890123456789012345678901").max_chars(), 5);
        assert_eq!(Codec::new(HEX).max_chars(), 7);
    }

    #[test]
    fn test_inert_codec() {
        let codec = Codec::new("ABCDEFG");
        assert!(!codec.is_valid());
        assert_eq!(codec.max_chars(), 0);
        assert_eq!(codec.base(), 0);
        assert_eq!(codec.encode("A"), Err(Error::InvalidCharacterSet));
        assert_eq!(codec.encode(""), Err(Error::InvalidCharacterSet));
        assert_eq!(codec.decode(0, false), Err(Error::InvalidCharacterSet));
        assert_eq!(codec.decode(1, true), Err(Error::InvalidCharacterSet));
        let mut dst = [0u8; 8];
        assert_eq!(
            codec.decode_into(&mut dst, 1, false),
            Err(Error::InvalidCharacterSet)
        );
    }

    #[test]
    fn test_try_new_reports_reason() {
        assert_eq!(Codec::try_new("01"), Err(Error::CharsetLength(2)));
        assert!(Codec::try_new(HEX).is_ok());
    }

    #[test]
    fn test_hex_decode() {
        let hex = Codec::new(HEX);
        assert_eq!(hex.decode(255, false).unwrap(), "FF");
        assert_eq!(hex.decode(254, true).unwrap(), "EF00000");

        let mut dst = [0u8; 7];
        let n = hex.decode_into(&mut dst, 254, true).unwrap();
        assert_eq!(n, 7);
        assert_eq!(&dst, b"EF00000");
    }

    #[test]
    fn test_decode_zero() {
        assert_eq!(STANDARD.decode(0, false).unwrap(), "");
        assert_eq!(STANDARD.decode(0, true).unwrap(), "      ");
    }

    #[test]
    fn test_decode_keeps_inner_zero_symbols() {
        let code = STANDARD.encode("A A").unwrap();
        assert_eq!(code, 1601);
        assert_eq!(STANDARD.decode(code, false).unwrap(), "A A");
    }

    #[test]
    fn test_decode_length_exceeded() {
        // 40^6 需要 7 个字符
        assert_eq!(
            STANDARD.decode(4_096_000_000, false),
            Err(Error::LengthExceeded { len: 7, max: 6 })
        );
        assert!(STANDARD.decode(u32::MAX, true).is_err());
        assert_eq!(STANDARD.decode(4_095_999_999, false).unwrap(), "//////");
    }

    #[test]
    fn test_decode_into_buffer_too_small() {
        let hex = Codec::new(HEX);
        let mut dst = [b'#'; 4];
        assert_eq!(
            hex.decode_into(&mut dst, 254, true),
            Err(Error::BufferTooSmall { needed: 7, got: 4 })
        );
        assert_eq!(dst, [b'#'; 4]);

        let n = hex.decode_into(&mut dst, 255, false).unwrap();
        assert_eq!(n, 2);
        assert_eq!(&dst, b"FF##");
    }

    #[test]
    fn test_round_trip_trims_trailing_zero_symbols() {
        for s in ["A", "CODE", "A  ", "AB CD", "Z/-_09"] {
            let code = STANDARD.encode(s).unwrap();
            assert_eq!(STANDARD.decode(code, false).unwrap(), s.trim_end_matches(' '));
            assert_eq!(STANDARD.decode(code, true).unwrap(), format!("{s:<6}"));
        }
    }

    #[test]
    fn test_round_trip_exhaustive_small_codes() {
        let hex = Codec::new(HEX);
        for value in 0..=0xFFFFu32 {
            let decoded = hex.decode(value, false).unwrap();
            assert_eq!(hex.encode(&decoded).unwrap(), value);
        }
    }

    #[test]
    fn test_duplicate_symbols_do_not_round_trip() {
        let codec = Codec::new("0123456789A0");
        // 末尾重复的 '0' 按第一个匹配编码为数位 0
        assert_eq!(codec.encode("0").unwrap(), 0);
        assert_eq!(codec.decode(11, false).unwrap(), "0");
        assert_eq!(codec.encode("A").unwrap(), 10);
    }

    #[test]
    fn test_standard_matches_default() {
        assert_eq!(Codec::default(), Codec::standard());
        assert_eq!(STANDARD.charset_str(), DEFAULT_CHARSET);
        assert_eq!(Codec::new(DEFAULT_CHARSET), STANDARD);
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| STANDARD.encode("CODE").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 327_003);
        }
    }
}
