//! `Option<T>` as a nullable parameter.

use super::{Encoding, Format, Parameter, check_column};

/// Encoding of `Option<T>`.
///
/// NULL is a property of a single column, so only single-column types can be
/// wrapped:
///
/// ```compile_fail
/// use qail_param::Parameter;
///
/// let _ = Some((1i32, 2i32)).encode();
/// ```
#[derive(Debug, Clone)]
pub struct OptionalEncoding<E> {
    inner: Option<E>,
}

impl<E: Encoding> Encoding for OptionalEncoding<E> {
    const COLUMNS: usize = {
        assert!(E::COLUMNS == 1, "Option<T> requires a single-column T");
        1
    };

    fn data(&self, column: usize) -> Option<&[u8]> {
        check_column(column, Self::COLUMNS);
        self.inner.as_ref().and_then(|inner| inner.data(column))
    }

    // An absent value still reports the wrapped type's metadata.
    fn length(column: usize) -> i32 {
        check_column(column, Self::COLUMNS);
        E::length(column)
    }

    fn format(column: usize) -> Format {
        check_column(column, Self::COLUMNS);
        E::format(column)
    }
}

impl<T: Parameter> Parameter for Option<T> {
    type Encoding = OptionalEncoding<T::Encoding>;

    fn encode(&self) -> Self::Encoding {
        const {
            assert!(
                <T::Encoding as Encoding>::COLUMNS == 1,
                "Option<T> requires a single-column T"
            )
        };
        OptionalEncoding {
            inner: self.as_ref().map(T::encode),
        }
    }
}
