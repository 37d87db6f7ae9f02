//! # qail-param: typed query parameters for the PostgreSQL wire protocol
//!
//! Converts Rust values into the flat parameter arrays of the extended query
//! protocol: for every placeholder a data slice (or NULL), a byte length and a
//! format code.
//!
//! ## Quick Example
//!
//! ```rust
//! use qail_param::prelude::*;
//!
//! let params = ("alice", 42i32, None::<i64>, (true, 'x'));
//! let encoding = params.encode();
//! let arrays = ParamArrays::new(&encoding);
//!
//! assert_eq!(arrays.len(), 5);
//! assert_eq!(arrays.format_codes(), vec![0, 1, 1, 0, 0]);
//! assert_eq!(arrays.values()[2], None);
//! ```
//!
//! ## Wire formats
//!
//! | Rust type                              | Format | Sent as                    |
//! |----------------------------------------|--------|----------------------------|
//! | `i16`, `i32`, `i64`                    | binary | big-endian integer         |
//! | `f32`, `f64`                           | binary | big-endian IEEE bits       |
//! | `&str`, `String`, `&CStr`, `CString`   | text   | the string                 |
//! | `bool`                                 | text   | `TRUE` / `FALSE`           |
//! | `char`                                 | text   | one-character string       |
//! | other integers                         | text   | decimal                    |
//! | [`LongDouble`]                         | text   | 21 significant digits      |
//! | [`Null`]                               | text   | NULL                       |
//! | `Option<T>`                            | as `T` | NULL when `None`           |
//! | tuples                                 | mixed  | one column per element     |
//!
//! Anything else implements [`ToParam`].

pub mod numfmt;
pub mod protocol;
pub mod types;

pub use protocol::{EncodeError, EncodeResult, ParamArrays, PgEncoder};
pub use types::{
    BinaryEncoding, Column, Encoding, Format, LongDouble, NULL, Null, NullEncoding,
    OptionalEncoding, Parameter, TextEncoding, ToParam, columns,
};

pub mod prelude {
    pub use crate::protocol::{EncodeError, ParamArrays, PgEncoder};
    pub use crate::types::{Encoding, Format, LongDouble, NULL, Null, Parameter, ToParam};
}
