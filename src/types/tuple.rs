//! Tuples as flattened parameter lists.
//!
//! A tuple occupies the columns of its elements back to back, in order. The
//! element owning a global column is found through the prefix sums of the
//! element column counts, all of which are associated constants.

use super::{Encoding, Format, Parameter, check_column};

/// Split a global column into `(element, column within element)`.
///
/// `counts` are the element column counts. Zero-column elements own no
/// column and are skipped.
///
/// # Panics
///
/// If `column` is not below the sum of `counts`.
#[inline]
#[track_caller]
pub(crate) const fn partition(column: usize, counts: &[usize]) -> (usize, usize) {
    let mut start = 0;
    let mut outer = 0;
    while outer < counts.len() {
        let end = start + counts[outer];
        if column < end {
            return (outer, column - start);
        }
        start = end;
        outer += 1;
    }
    panic!("column index out of range for tuple");
}

impl Encoding for () {
    const COLUMNS: usize = 0;

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

/// The empty parameter list.
impl Parameter for () {
    type Encoding = ();

    fn encode(&self) -> Self::Encoding {}
}

macro_rules! tuple_impls {
    ($( ( $($name:ident . $idx:tt),+ ) )+) => {
        $(
            impl<$($name: Encoding),+> Encoding for ($($name,)+) {
                const COLUMNS: usize = 0 $(+ <$name as Encoding>::COLUMNS)+;

                fn data(&self, column: usize) -> Option<&[u8]> {
                    match partition(column, &[$(<$name as Encoding>::COLUMNS),+]) {
                        $(($idx, inner) => self.$idx.data(inner),)+
                        _ => unreachable!(),
                    }
                }

                fn length(column: usize) -> i32 {
                    match partition(column, &[$(<$name as Encoding>::COLUMNS),+]) {
                        $(($idx, inner) => <$name as Encoding>::length(inner),)+
                        _ => unreachable!(),
                    }
                }

                fn format(column: usize) -> Format {
                    match partition(column, &[$(<$name as Encoding>::COLUMNS),+]) {
                        $(($idx, inner) => <$name as Encoding>::format(inner),)+
                        _ => unreachable!(),
                    }
                }
            }

            impl<$($name: Parameter),+> Parameter for ($($name,)+) {
                type Encoding = ($(<$name as Parameter>::Encoding,)+);

                fn encode(&self) -> Self::Encoding {
                    ($(self.$idx.encode(),)+)
                }
            }
        )+
    };
}

tuple_impls! {
    (A.0)
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
    (A.0, B.1, C.2, D.3, E.4)
    (A.0, B.1, C.2, D.3, E.4, F.5)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10)
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, NULL, Null, columns};

    #[test]
    fn test_partition_is_exact() {
        let counts = [2, 0, 3, 1];
        let owners: Vec<_> = (0..6).map(|column| partition(column, &counts)).collect();
        assert_eq!(
            owners,
            vec![(0, 0), (0, 1), (2, 0), (2, 1), (2, 2), (3, 0)]
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_partition_past_end() {
        partition(6, &[2, 0, 3, 1]);
    }

    #[test]
    fn test_flat_tuple() {
        let encoding = ("name", 7i32, NULL).encode();
        assert_eq!(columns::<(&str, i32, Null)>(), 3);

        assert_eq!(encoding.data(0), Some(&b"name\0"[..]));
        assert_eq!(encoding.data(1), Some(&7i32.to_be_bytes()[..]));
        assert_eq!(encoding.data(2), None);

        let column = Column::of(&encoding, 1);
        assert_eq!(column.format, Format::Binary);
        assert_eq!(column.length, 4);
    }

    #[test]
    fn test_nested_tuple() {
        type Params = (i32, (bool, bool));
        let encoding = (9i32, (true, false)).encode();
        assert_eq!(columns::<Params>(), 3);

        assert_eq!(encoding.data(0), Some(&9i32.to_be_bytes()[..]));
        assert_eq!(encoding.data(1), Some(&b"TRUE\0"[..]));
        assert_eq!(encoding.data(2), Some(&b"FALSE\0"[..]));
        assert_eq!(Column::of(&encoding, 2).format, Format::Text);
    }

    #[test]
    fn test_deeply_nested_routing() {
        let value = ((1i16, ((2i16,), 3i16)), (), 4i16);
        let encoding = value.encode();
        assert_eq!(columns::<((i16, ((i16,), i16)), (), i16)>(), 4);
        for (column, expected) in (1i16..=4).enumerate() {
            assert_eq!(encoding.data(column), Some(&expected.to_be_bytes()[..]));
        }
    }

    #[test]
    fn test_column_counts_sum() {
        assert_eq!(columns::<()>(), 0);
        assert_eq!(columns::<(i32,)>(), 1);
        assert_eq!(columns::<((i32, i64), (), (bool, (char, f32, Option<u8>)))>(), 6);
        assert_eq!(
            columns::<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>(),
            12
        );
    }

    #[test]
    fn test_mixed_metadata() {
        let encoding = (None::<i16>, 1.0f64, 'x').encode();
        let columns: Vec<_> = (0..3).map(|column| Column::of(&encoding, column)).collect();
        assert_eq!(columns[0].data, None);
        assert_eq!(columns[0].length, 2);
        assert_eq!(columns[0].format, Format::Binary);
        assert_eq!(columns[1].length, 8);
        assert_eq!(columns[1].data, Some(&1.0f64.to_be_bytes()[..]));
        assert_eq!(columns[2].data, Some(&b"x\0"[..]));
        assert_eq!(columns[2].format, Format::Text);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_empty_tuple_has_no_columns() {
        let _ = ().encode().data(0);
    }
}
