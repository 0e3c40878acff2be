//! numcode - 定长进制短码编解码
//!
//! 把由固定字符集组成的短字符串（货币代码、配置键等）与一个 u32 互相转换，
//! 用 4 字节整数代替变长字符串存储与索引。
//!
//! # 编码方式
//!
//! ```text
//! 字符集长度 L (10..=64)，符号位置即数位值，第一个字符为最低位:
//!
//!   "CODE"  →  3 + 15·40 + 4·40² + 5·40³  =  327003
//!    ││││
//!    │││└── E = 5
//!    ││└─── D = 4
//!    │└──── O = 15
//!    └───── C = 3
//! ```
//!
//! 可容纳的最大字符数 `max_chars` 由编译期生成的幂表决定：L^n ≤ 2³²-1 的最大 n。
//!
//! # Example
//!
//! ```
//! use numcode::{Codec, STANDARD};
//!
//! // 默认字符集: 空格 + A-Z + 0-9 + "-_/"
//! assert_eq!(STANDARD.max_chars(), 6);
//! let value = STANDARD.encode("CODE").unwrap();
//! assert_eq!(value, 327_003);
//! assert_eq!(STANDARD.decode(value, false).unwrap(), "CODE");
//! assert_eq!(STANDARD.decode(value, true).unwrap(), "CODE  ");
//!
//! // 自定义字符集
//! let hex = Codec::new("0123456789ABCDEF");
//! assert_eq!(hex.encode("EF").unwrap(), 254);
//! ```

pub mod charset;
pub mod code;
pub mod codec;
pub mod error;
pub mod power;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use charset::DEFAULT_CHARSET;
pub use code::Code;
pub use codec::{Codec, STANDARD};
pub use error::{Error, Result};
