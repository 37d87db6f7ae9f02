//! Single-column encodings for primitive values.
//!
//! Only `i16`, `i32` and `i64` (and the floats riding on their bit patterns)
//! travel in binary. Every other integer width goes out as decimal text, which
//! is what deployed servers expect for those types.

use std::borrow::Cow;
use std::ffi::{CStr, CString};

use super::{Encoding, Format, Parameter, check_column};
use crate::numfmt;

// ==================== NULL ====================

/// The SQL NULL marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

/// Shorthand for [`Null`].
pub const NULL: Null = Null;

/// Encoding of [`Null`]: one column that is always NULL.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEncoding;

impl Encoding for NullEncoding {
    const COLUMNS: usize = 1;

    fn data(&self, column: usize) -> Option<&[u8]> {
        check_column(column, Self::COLUMNS);
        None
    }

    fn length(column: usize) -> i32 {
        check_column(column, Self::COLUMNS);
        0
    }

    fn format(column: usize) -> Format {
        check_column(column, Self::COLUMNS);
        Format::Text
    }
}

impl Parameter for Null {
    type Encoding = NullEncoding;

    fn encode(&self) -> Self::Encoding {
        NullEncoding
    }
}

// ==================== Text ====================

/// One text column, stored NUL-terminated.
#[derive(Debug, Clone)]
pub struct TextEncoding {
    text: Cow<'static, [u8]>,
}

impl TextEncoding {
    /// `text` must already end with a NUL byte.
    const fn terminated(text: &'static [u8]) -> Self {
        TextEncoding {
            text: Cow::Borrowed(text),
        }
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        let mut text = Vec::with_capacity(bytes.len() + 1);
        text.extend_from_slice(bytes);
        text.push(0);
        TextEncoding {
            text: Cow::Owned(text),
        }
    }

    fn from_string(text: String) -> Self {
        let mut text = text.into_bytes();
        text.push(0);
        TextEncoding {
            text: Cow::Owned(text),
        }
    }

    fn from_c_str(text: &CStr) -> Self {
        TextEncoding {
            text: Cow::Owned(text.to_bytes_with_nul().to_vec()),
        }
    }
}

impl Encoding for TextEncoding {
    const COLUMNS: usize = 1;

    fn data(&self, column: usize) -> Option<&[u8]> {
        check_column(column, Self::COLUMNS);
        Some(&self.text)
    }

    fn length(column: usize) -> i32 {
        check_column(column, Self::COLUMNS);
        0
    }

    fn format(column: usize) -> Format {
        check_column(column, Self::COLUMNS);
        Format::Text
    }
}

impl Parameter for &str {
    type Encoding = TextEncoding;

    fn encode(&self) -> Self::Encoding {
        TextEncoding::from_bytes(self.as_bytes())
    }
}

impl Parameter for String {
    type Encoding = TextEncoding;

    fn encode(&self) -> Self::Encoding {
        TextEncoding::from_bytes(self.as_bytes())
    }
}

impl Parameter for &CStr {
    type Encoding = TextEncoding;

    fn encode(&self) -> Self::Encoding {
        TextEncoding::from_c_str(self)
    }
}

impl Parameter for CString {
    type Encoding = TextEncoding;

    fn encode(&self) -> Self::Encoding {
        TextEncoding::from_c_str(self)
    }
}

impl Parameter for bool {
    type Encoding = TextEncoding;

    fn encode(&self) -> Self::Encoding {
        if *self {
            TextEncoding::terminated(b"TRUE\0")
        } else {
            TextEncoding::terminated(b"FALSE\0")
        }
    }
}

/// Always text: the `char` wire type has no binary form worth sending.
impl Parameter for char {
    type Encoding = TextEncoding;

    fn encode(&self) -> Self::Encoding {
        let mut buf = [0u8; 4];
        TextEncoding::from_bytes(self.encode_utf8(&mut buf).as_bytes())
    }
}

macro_rules! decimal_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Parameter for $ty {
                type Encoding = TextEncoding;

                fn encode(&self) -> Self::Encoding {
                    TextEncoding::from_string(numfmt::integer(*self))
                }
            }
        )+
    };
}

// `isize` stays text even where it is 64 bits wide.
decimal_text!(i8, u8, u16, u32, u64, usize, isize, i128, u128);

// ==================== Binary ====================

/// One binary column of `N` bytes in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryEncoding<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> BinaryEncoding<N> {
    /// `bytes` must already be big-endian.
    #[inline]
    pub const fn new(bytes: [u8; N]) -> Self {
        BinaryEncoding { bytes }
    }
}

impl<const N: usize> Encoding for BinaryEncoding<N> {
    const COLUMNS: usize = 1;

    fn data(&self, column: usize) -> Option<&[u8]> {
        check_column(column, Self::COLUMNS);
        Some(&self.bytes)
    }

    fn length(column: usize) -> i32 {
        check_column(column, Self::COLUMNS);
        N as i32
    }

    fn format(column: usize) -> Format {
        check_column(column, Self::COLUMNS);
        Format::Binary
    }
}

macro_rules! network_order {
    ($($ty:ty => $width:literal),+ $(,)?) => {
        $(
            impl Parameter for $ty {
                type Encoding = BinaryEncoding<$width>;

                #[inline]
                fn encode(&self) -> Self::Encoding {
                    BinaryEncoding::new(self.to_be_bytes())
                }
            }
        )+
    };
}

network_order!(i16 => 2, i32 => 4, i64 => 8);

// Floats reuse the integer encoder of the same width on their raw bits.

impl Parameter for f32 {
    type Encoding = <i32 as Parameter>::Encoding;

    #[inline]
    fn encode(&self) -> Self::Encoding {
        (self.to_bits() as i32).encode()
    }
}

impl Parameter for f64 {
    type Encoding = <i64 as Parameter>::Encoding;

    #[inline]
    fn encode(&self) -> Self::Encoding {
        (self.to_bits() as i64).encode()
    }
}

// ==================== Extended precision ====================

/// Extended-precision float, always sent as text with
/// [`LONG_DOUBLE_DIGITS`](numfmt::LONG_DOUBLE_DIGITS) significant digits.
///
/// Use it for `numeric` or `float8` columns when the server should parse the
/// literal rather than receive raw IEEE bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct LongDouble(pub f64);

impl From<f64> for LongDouble {
    fn from(value: f64) -> Self {
        LongDouble(value)
    }
}

impl From<f32> for LongDouble {
    fn from(value: f32) -> Self {
        LongDouble(value.into())
    }
}

impl Parameter for LongDouble {
    type Encoding = TextEncoding;

    fn encode(&self) -> Self::Encoding {
        TextEncoding::from_string(numfmt::float(self.0, numfmt::LONG_DOUBLE_DIGITS))
    }
}
