//! Parallel parameter arrays, as the extended query protocol consumes them.

use crate::types::{Column, Encoding, Format};

/// The `values` / `lengths` / `formats` arrays for one protocol call.
///
/// All three have one entry per flattened column. Values borrow the encoding
/// they were collected from, so the encoding must outlive the call.
///
/// ```
/// use qail_param::{Format, ParamArrays, Parameter};
///
/// let encoding = (1i32, None::<&str>, true).encode();
/// let params = ParamArrays::new(&encoding);
///
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.values()[1], None);
/// assert_eq!(params.lengths(), &[4, 0, 0]);
/// assert_eq!(params.formats(), &[Format::Binary, Format::Text, Format::Text]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamArrays<'a> {
    values: Vec<Option<&'a [u8]>>,
    lengths: Vec<i32>,
    formats: Vec<Format>,
}

impl<'a> ParamArrays<'a> {
    /// Read every column of `encoding` once.
    pub fn new<E: Encoding>(encoding: &'a E) -> Self {
        let mut values = Vec::with_capacity(E::COLUMNS);
        let mut lengths = Vec::with_capacity(E::COLUMNS);
        let mut formats = Vec::with_capacity(E::COLUMNS);

        for column in 0..E::COLUMNS {
            values.push(encoding.data(column));
            lengths.push(E::length(column));
            formats.push(E::format(column));
        }

        ParamArrays {
            values,
            lengths,
            formats,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Column data, `None` for NULL. Text is NUL-terminated.
    pub fn values(&self) -> &[Option<&'a [u8]>] {
        &self.values
    }

    /// Byte lengths, meaningful only where the format is binary.
    pub fn lengths(&self) -> &[i32] {
        &self.lengths
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    /// Format codes as sent on the wire (0 = text, 1 = binary).
    pub fn format_codes(&self) -> Vec<i16> {
        self.formats.iter().map(|format| format.code()).collect()
    }

    /// All formats are text, so the Bind message can omit per-column codes.
    pub fn all_text(&self) -> bool {
        self.formats.iter().all(|format| *format == Format::Text)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Column<'a>> + '_ {
        self.values
            .iter()
            .zip(&self.lengths)
            .zip(&self.formats)
            .map(|((data, length), format)| Column {
                data: *data,
                length: *length,
                format: *format,
            })
    }
}

/// Concatenate columns, e.g. from several encodings bound in one call.
impl<'a> FromIterator<Column<'a>> for ParamArrays<'a> {
    fn from_iter<I: IntoIterator<Item = Column<'a>>>(iter: I) -> Self {
        let mut params = ParamArrays::default();
        params.extend(iter);
        params
    }
}

impl<'a> Extend<Column<'a>> for ParamArrays<'a> {
    fn extend<I: IntoIterator<Item = Column<'a>>>(&mut self, iter: I) {
        for column in iter {
            self.values.push(column.data);
            self.lengths.push(column.length);
            self.formats.push(column.format);
        }
    }
}
