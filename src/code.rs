//! Code 值类型.
//!
//! 一个 Code 同时持有数位、符号串和 u32 数值。符号串只用于展示与交换，
//! 持久化时应存储 u32 (4 字节小端)。

use crate::codec::Codec;
use crate::error::{Error, Result};

/// 已校验的编码值.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    /// 数位，最低位在前.
    digits: Vec<u8>,
    /// 符号串.
    symbols: String,
    /// 数值.
    value: u32,
}

impl Codec {
    /// 从符号串创建 Code.
    ///
    /// # Example
    /// ```
    /// use numcode::STANDARD;
    /// let code = STANDARD.code("CODE").unwrap();
    /// assert_eq!(code.to_u32(), 327_003);
    /// assert_eq!(code.digits(), &[3, 15, 4, 5]);
    /// ```
    ///
    /// # Errors
    /// 同 [`Codec::encode`]。
    pub fn code(&self, s: &str) -> Result<Code> {
        if !self.is_valid() {
            return Err(Error::InvalidCharacterSet);
        }
        let max = self.max_chars();
        if s.len() > max {
            return Err(Error::LengthExceeded { len: s.len(), max });
        }
        let digits = s
            .bytes()
            .enumerate()
            .map(|(position, symbol)| self.digit_of(symbol, position))
            .collect::<Result<Vec<u8>>>()?;
        let value = self.weigh(&digits)?;
        Ok(Code {
            digits,
            symbols: s.to_string(),
            value,
        })
    }

    /// 从 u32 创建 Code（不补齐零符号）.
    ///
    /// # Errors
    /// 同 [`Codec::decode`]。
    pub fn code_from_u32(&self, value: u32) -> Result<Code> {
        let digits = self.digits(value, false)?;
        Ok(self.assemble(digits, value))
    }

    /// 从原始数位创建 Code，最低位在前.
    ///
    /// # Errors
    /// inert 编解码器返回 [`Error::InvalidCharacterSet`]，数位过多返回
    /// [`Error::LengthExceeded`]，数位不小于进制返回 [`Error::InvalidDigit`]。
    pub fn code_from_digits(&self, digits: &[u8]) -> Result<Code> {
        if !self.is_valid() {
            return Err(Error::InvalidCharacterSet);
        }
        if let Some(position) = digits
            .iter()
            .position(|&digit| usize::from(digit) >= self.base())
        {
            return Err(Error::InvalidDigit {
                digit: digits[position],
                position,
            });
        }
        let value = self.weigh(digits)?;
        Ok(self.assemble(digits.to_vec(), value))
    }

    /// 数位已校验
    fn assemble(&self, digits: Vec<u8>, value: u32) -> Code {
        let symbols = digits
            .iter()
            .map(|&digit| char::from(self.charset()[usize::from(digit)]))
            .collect();
        Code {
            digits,
            symbols,
            value,
        }
    }
}

impl Code {
    /// 数值
    #[must_use]
    pub const fn to_u32(&self) -> u32 {
        self.value
    }

    /// 4 字节小端表示，即持久化格式.
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; 4] {
        self.value.to_le_bytes()
    }

    /// 符号串
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// 数位，最低位在前.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// 数位的调试表示，如 `[3, 15, 4, 5]`.
    #[must_use]
    pub fn raw_string(&self) -> String {
        format!("{:?}", self.digits)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl From<&Code> for u32 {
    fn from(code: &Code) -> Self {
        code.value
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.value
    }
}

/// JSON 等格式中以符号串表示.
#[cfg(feature = "serde")]
impl serde::Serialize for Code {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.symbols)
    }
}
