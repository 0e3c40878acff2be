//! 字符集定义
//!
//! 字符集是一组有序的 ASCII 符号，符号所在位置即其数位值，长度即进制 L。

use crate::error::Error;
use crate::power::{MAX_BASE, MIN_BASE};

/// 默认字符集：空格 + A-Z + 0-9 + `-_/`，共 40 个符号，最多 6 个字符.
pub const DEFAULT_CHARSET: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_/";

/// 校验字符集长度 (10..=64) 与 ASCII 约束.
///
/// 不检查重复符号：重复时查找取第一个匹配，解码总是输出下标对应的符号。
///
/// # Errors
/// 长度越界返回 [`Error::CharsetLength`]，含非 ASCII 字节返回 [`Error::NonAsciiCharset`]。
pub const fn validate(charset: &[u8]) -> Result<(), Error> {
    if charset.len() < MIN_BASE || charset.len() > MAX_BASE {
        return Err(Error::CharsetLength(charset.len()));
    }
    let mut i = 0;
    while i < charset.len() {
        if !charset[i].is_ascii() {
            return Err(Error::NonAsciiCharset {
                symbol: charset[i],
                position: i,
            });
        }
        i += 1;
    }
    Ok(())
}

/// 符号转数位，不在字符集内返回 None
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn position_of(charset: &[u8], symbol: u8) -> Option<u8> {
    // 字符集最多 64 个符号，下标必然落在 u8 内
    charset.iter().position(|&x| x == symbol).map(|i| i as u8)
}

/// 数位转符号
#[inline]
#[must_use]
pub fn symbol_at(charset: &[u8], digit: u8) -> Option<u8> {
    charset.get(usize::from(digit)).copied()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_charset_length() {
        assert_eq!(DEFAULT_CHARSET.len(), 40);
        assert!(validate(DEFAULT_CHARSET.as_bytes()).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(validate(b"ABCDEFG"), Err(Error::CharsetLength(7)));
        assert!(validate(b"0123456789").is_ok());
        assert!(validate(&[b'x'; 64]).is_ok());
        assert_eq!(validate(&[b'x'; 65]), Err(Error::CharsetLength(65)));
        assert_eq!(validate(b""), Err(Error::CharsetLength(0)));
    }

    #[test]
    fn test_non_ascii_rejected() {
        let mut set = *b"0123456789";
        set[3] = 0xC3;
        assert_eq!(
            validate(&set),
            Err(Error::NonAsciiCharset {
                symbol: 0xC3,
                position: 3
            })
        );
    }

    #[test]
    fn test_valid_symbols() {
        let set = DEFAULT_CHARSET.as_bytes();
        assert_eq!(position_of(set, b' '), Some(0));
        assert_eq!(position_of(set, b'A'), Some(1));
        assert_eq!(position_of(set, b'Z'), Some(26));
        assert_eq!(position_of(set, b'0'), Some(27));
        assert_eq!(position_of(set, b'/'), Some(39));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(position_of(DEFAULT_CHARSET.as_bytes(), b'a').is_none());
        assert!(position_of(DEFAULT_CHARSET.as_bytes(), b'.').is_none());
    }

    #[test]
    fn test_duplicate_first_match_wins() {
        let set = b"0123456789A0";
        assert_eq!(position_of(set, b'0'), Some(0));
        assert_eq!(symbol_at(set, 11), Some(b'0'));
    }

    #[test]
    fn test_round_trip() {
        let set = DEFAULT_CHARSET.as_bytes();
        for i in 0..40u8 {
            let c = symbol_at(set, i).unwrap();
            assert_eq!(position_of(set, c), Some(i));
        }
        assert!(symbol_at(set, 40).is_none());
    }
}
