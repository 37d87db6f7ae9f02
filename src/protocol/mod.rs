//! PostgreSQL wire side of parameter encoding (pure, sync).
//!
//! No I/O: encodings in, parameter arrays and Bind message bytes out.

pub mod encoder;
pub mod error;
pub mod params;

pub use encoder::PgEncoder;
pub use error::{EncodeError, EncodeResult};
pub use params::ParamArrays;
