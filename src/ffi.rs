//! C FFI 导出
//!
//! 提供 C ABI 接口供其他语言调用

// FFI 模块需要 unsafe 代码
#![allow(unsafe_code)]

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::codec::Codec;
use crate::error::Error;

/// FFI 错误码
#[repr(i32)]
pub enum NumcodeError {
    Success = 0,
    InvalidCharacterSet = -1,
    LengthExceeded = -2,
    InvalidSymbol = -3,
    BufferTooSmall = -4,
    NullPointer = -5,
}

impl From<&Error> for NumcodeError {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidCharacterSet | Error::CharsetLength(_) | Error::NonAsciiCharset { .. } => {
                Self::InvalidCharacterSet
            }
            Error::LengthExceeded { .. } => Self::LengthExceeded,
            Error::InvalidSymbol { .. } | Error::InvalidDigit { .. } => Self::InvalidSymbol,
            Error::BufferTooSmall { .. } => Self::BufferTooSmall,
        }
    }
}

/// 错误转错误码
fn code_of(err: &Error) -> i32 {
    NumcodeError::from(err) as i32
}

/// 创建编解码器，字符集非法时返回空指针
///
/// # Safety
/// - `charset` 必须是有效的 C 字符串
/// - 返回值必须通过 `numcode_codec_free` 释放
#[no_mangle]
pub unsafe extern "C" fn numcode_codec_new(charset: *const c_char) -> *mut Codec {
    if charset.is_null() {
        return ptr::null_mut();
    }

    let bytes = CStr::from_ptr(charset).to_bytes();
    match Codec::try_new(bytes) {
        Ok(codec) => Box::into_raw(Box::new(codec)),
        Err(_) => ptr::null_mut(),
    }
}

/// 创建默认字符集编解码器
///
/// 返回值必须通过 `numcode_codec_free` 释放
#[no_mangle]
pub extern "C" fn numcode_codec_standard() -> *mut Codec {
    Box::into_raw(Box::new(Codec::standard()))
}

/// 释放编解码器
///
/// # Safety
/// - `codec` 必须由 `numcode_codec_new` / `numcode_codec_standard` 返回，且只释放一次
#[no_mangle]
pub unsafe extern "C" fn numcode_codec_free(codec: *mut Codec) {
    if !codec.is_null() {
        drop(Box::from_raw(codec));
    }
}

/// 最大字符数，空指针返回 0
///
/// # Safety
/// - `codec` 必须为空或指向有效的编解码器
#[no_mangle]
pub unsafe extern "C" fn numcode_max_chars(codec: *const Codec) -> usize {
    codec.as_ref().map_or(0, Codec::max_chars)
}

/// 编码
///
/// # Safety
/// - `codec` 必须指向有效的编解码器
/// - `src` 必须是有效的 C 字符串
/// - `out` 必须指向可写的 u32
#[no_mangle]
pub unsafe extern "C" fn numcode_encode(
    codec: *const Codec,
    src: *const c_char,
    out: *mut u32,
) -> i32 {
    let Some(codec) = codec.as_ref() else {
        return NumcodeError::NullPointer as i32;
    };
    if src.is_null() || out.is_null() {
        return NumcodeError::NullPointer as i32;
    }

    let src = CStr::from_ptr(src).to_bytes();
    match codec.encode(src) {
        Ok(value) => {
            *out = value;
            NumcodeError::Success as i32
        }
        Err(err) => code_of(&err),
    }
}

/// 解码为 C 字符串
///
/// # Safety
/// - `codec` 必须指向有效的编解码器
/// - `out` 必须指向至少 `out_len` 字节的缓冲区，需要为结尾的 0 留出 1 字节
#[no_mangle]
pub unsafe extern "C" fn numcode_decode(
    codec: *const Codec,
    value: u32,
    zero_fill: bool,
    out: *mut c_char,
    out_len: usize,
) -> i32 {
    let Some(codec) = codec.as_ref() else {
        return NumcodeError::NullPointer as i32;
    };
    if out.is_null() {
        return NumcodeError::NullPointer as i32;
    }

    let decoded = match codec.decode(value, zero_fill) {
        Ok(s) => s,
        Err(err) => return code_of(&err),
    };
    if decoded.len() >= out_len {
        return NumcodeError::BufferTooSmall as i32;
    }

    ptr::copy_nonoverlapping(decoded.as_ptr(), out.cast::<u8>(), decoded.len());
    *out.add(decoded.len()) = 0;
    NumcodeError::Success as i32
}
