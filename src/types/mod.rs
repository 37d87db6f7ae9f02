//! Parameter encoding traits and their implementations.
//!
//! A [`Parameter`] is any value that can be bound to a placeholder of an
//! extended-protocol query. Encoding it produces an [`Encoding`]: a short-lived
//! object that owns the wire bytes and exposes them column by column.
//!
//! Most values occupy a single column. Tuples flatten into one column per
//! element, so a whole parameter list is itself a `Parameter`:
//!
//! ```
//! use qail_param::{Encoding, Format, Parameter, columns};
//!
//! let params = ("alice", 42i32, Some(true));
//! let encoding = params.encode();
//!
//! assert_eq!(columns::<(&str, i32, Option<bool>)>(), 3);
//! assert_eq!(encoding.data(1), Some(&42i32.to_be_bytes()[..]));
//! assert_eq!(encoding.column::<2>().format, Format::Text);
//! ```
//!
//! Types outside this crate join in through [`ToParam`].

mod external;
mod optional;
mod scalar;
mod tuple;

pub use optional::OptionalEncoding;
pub use scalar::{BinaryEncoding, LongDouble, NULL, Null, NullEncoding, TextEncoding};

/// Wire format code of a parameter column.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// NUL-terminated textual literal.
    Text = 0,
    /// Fixed-width, network byte order.
    Binary = 1,
}

impl Format {
    /// The format code as sent in a Bind message.
    #[inline]
    pub const fn code(self) -> i16 {
        self as i16
    }
}

impl From<Format> for i16 {
    fn from(value: Format) -> Self {
        value.code()
    }
}

/// The wire representation of one value for one protocol call.
///
/// `COLUMNS` is fixed per type. `length` and `format` are static, so they can
/// be asked of a type without holding a value (an absent `Option` still reports
/// the metadata of its wrapped type).
pub trait Encoding {
    /// Number of wire parameters this encoding expands to.
    const COLUMNS: usize;

    /// Data of a column, `None` for SQL NULL.
    ///
    /// Binary columns yield exactly [`length`](Self::length) bytes in network
    /// byte order. Text columns yield the text followed by one NUL byte.
    ///
    /// # Panics
    ///
    /// If `column >= COLUMNS`.
    fn data(&self, column: usize) -> Option<&[u8]>;

    /// Byte length of a column. Only meaningful for binary columns.
    fn length(column: usize) -> i32;

    /// Format code of a column.
    fn format(column: usize) -> Format;

    /// Compile-time checked access to column `I`.
    ///
    /// ```compile_fail
    /// use qail_param::{Encoding, Parameter};
    ///
    /// let encoding = 7i32.encode();
    /// let _ = encoding.column::<1>();
    /// ```
    fn column<const I: usize>(&self) -> Column<'_>
    where
        Self: Sized,
    {
        const { assert!(I < Self::COLUMNS, "column index out of range") };
        Column {
            data: self.data(I),
            length: Self::length(I),
            format: Self::format(I),
        }
    }
}

/// A value that can be sent as query parameter(s).
///
/// There is deliberately no fallback implementation: a type that is neither
/// built in nor [`ToParam`] cannot be bound.
///
/// ```compile_fail
/// use qail_param::Parameter;
///
/// struct Opaque;
/// let _ = Opaque.encode();
/// ```
pub trait Parameter {
    /// Encoding produced for this type.
    type Encoding: Encoding;

    /// Build the encoding. Call right before the protocol call and drop it
    /// right after; it is not meant to be cached.
    fn encode(&self) -> Self::Encoding;
}

/// Conversion hook for types that are not encodable on their own.
///
/// The returned value may be a scalar, an `Option`, a tuple, or another
/// `ToParam` type; its encoding becomes the encoding of `Self`.
///
/// ```
/// use qail_param::{Encoding, Parameter, ToParam, columns};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl ToParam for Point {
///     type Param = (i32, i32);
///
///     fn to_param(&self) -> Self::Param {
///         (self.x, self.y)
///     }
/// }
///
/// let encoding = Point { x: 1, y: 2 }.encode();
/// assert_eq!(columns::<Point>(), 2);
/// assert_eq!(encoding.data(1), Some(&2i32.to_be_bytes()[..]));
/// ```
pub trait ToParam {
    /// Intermediate value that knows how to encode itself.
    type Param: Parameter;

    fn to_param(&self) -> Self::Param;
}

impl<T: ToParam> Parameter for T {
    type Encoding = <T::Param as Parameter>::Encoding;

    #[inline]
    fn encode(&self) -> Self::Encoding {
        self.to_param().encode()
    }
}

/// Number of wire columns `P` expands to.
#[inline]
pub const fn columns<P: Parameter>() -> usize {
    <P::Encoding as Encoding>::COLUMNS
}

/// A borrowed view of one column of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    pub data: Option<&'a [u8]>,
    pub length: i32,
    pub format: Format,
}

impl<'a> Column<'a> {
    /// Read column `column` of `encoding`.
    pub fn of<E: Encoding>(encoding: &'a E, column: usize) -> Self {
        Column {
            data: encoding.data(column),
            length: E::length(column),
            format: E::format(column),
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Bytes as they travel inside a Bind message: text without its NUL
    /// terminator, binary as is.
    pub fn payload(&self) -> Option<&'a [u8]> {
        self.data.map(|data| match self.format {
            Format::Text => data.strip_suffix(&[0u8]).unwrap_or(data),
            Format::Binary => data,
        })
    }
}

#[inline]
#[track_caller]
pub(crate) fn check_column(column: usize, columns: usize) {
    assert!(
        column < columns,
        "column index {column} out of range for {columns} column(s)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Celsius(f64);

    impl ToParam for Celsius {
        type Param = LongDouble;

        fn to_param(&self) -> Self::Param {
            LongDouble(self.0)
        }
    }

    struct Maybe(Option<i32>);

    impl ToParam for Maybe {
        type Param = Option<i32>;

        fn to_param(&self) -> Self::Param {
            self.0
        }
    }

    #[test]
    fn test_format_codes() {
        assert_eq!(Format::Text.code(), 0);
        assert_eq!(Format::Binary.code(), 1);
        assert_eq!(i16::from(Format::Binary), 1);
    }

    #[test]
    fn test_hook_delegates_to_intermediate() {
        let encoding = Celsius(21.5).encode();
        assert_eq!(columns::<Celsius>(), 1);
        assert_eq!(encoding.data(0), Some(&b"21.5\0"[..]));
        assert_eq!(Column::of(&encoding, 0).format, Format::Text);
    }

    #[test]
    fn test_hook_returning_empty_optional() {
        let hooked = Maybe(None).encode();
        let direct = None::<i32>.encode();
        assert_eq!(Column::of(&hooked, 0), Column::of(&direct, 0));
        assert!(Column::of(&hooked, 0).is_null());
        assert_eq!(Column::of(&hooked, 0).format, Format::Binary);
        assert_eq!(Column::of(&hooked, 0).length, 4);
    }

    #[test]
    fn test_hook_returning_present_optional() {
        let hooked = Maybe(Some(-3)).encode();
        assert_eq!(hooked.data(0), Some(&(-3i32).to_be_bytes()[..]));
    }

    #[test]
    fn test_column_payload_strips_terminator() {
        let encoding = "abc".encode();
        let column = encoding.column::<0>();
        assert_eq!(column.data, Some(&b"abc\0"[..]));
        assert_eq!(column.payload(), Some(&b"abc"[..]));

        let encoding = 1i16.encode();
        assert_eq!(encoding.column::<0>().payload(), Some(&[0u8, 1][..]));
    }

    #[test]
    #[should_panic(expected = "column index 1 out of range")]
    fn test_runtime_index_out_of_range() {
        let encoding = 1i64.encode();
        let _ = encoding.data(1);
    }
}
