//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("codec has no valid character set")]
    InvalidCharacterSet,

    #[error("character set must have 10-64 symbols, got {0}")]
    CharsetLength(usize),

    #[error("character set symbol {symbol:#04x} at position {position} is not ASCII")]
    NonAsciiCharset { symbol: u8, position: usize },

    #[error("code length {len} exceeds the maximum of {max} characters")]
    LengthExceeded { len: usize, max: usize },

    #[error("invalid character '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("digit {digit} at position {position} is outside the character set")]
    InvalidDigit { digit: u8, position: usize },

    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
