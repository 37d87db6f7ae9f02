//! Bind message encoder.
//!
//! Turns collected parameter arrays into the bytes of one extended-protocol
//! Bind message. This is pure, synchronous computation: no I/O, no async.

use bytes::{BufMut, BytesMut};
use tracing::{trace, warn};

use super::{EncodeError, EncodeResult, ParamArrays};
use crate::types::{Format, Parameter};

/// Writes encoded parameters as wire protocol bytes.
pub struct PgEncoder;

impl PgEncoder {
    /// Encode and bind `params` in one go.
    ///
    /// The encoding lives only for the duration of this call.
    ///
    /// ```
    /// use bytes::BytesMut;
    /// use qail_param::PgEncoder;
    ///
    /// let mut buf = BytesMut::new();
    /// PgEncoder::encode_bind_params(&mut buf, "", "stmt", &("alice", 42i32)).unwrap();
    /// assert_eq!(buf[0], b'B');
    /// ```
    pub fn encode_bind_params<P: Parameter>(
        buf: &mut BytesMut,
        portal: &str,
        statement: &str,
        params: &P,
    ) -> EncodeResult<()> {
        let encoding = params.encode();
        Self::encode_bind(buf, portal, statement, &ParamArrays::new(&encoding))
    }

    /// Encode a Bind message directly into `buf`.
    ///
    /// Wire format:
    /// - 'B' (1 byte) - message type
    /// - length (4 bytes, includes itself)
    /// - portal name (null-terminated)
    /// - statement name (null-terminated)
    /// - format code count (2 bytes), then one code per parameter (2 bytes each)
    /// - parameter count (2 bytes)
    /// - for each parameter: length (4 bytes, -1 for NULL), data
    /// - result format count (2 bytes) - we use 0 (all text)
    ///
    /// Text parameters are sent without their NUL terminator. Nothing is
    /// written when an error is returned.
    pub fn encode_bind(
        buf: &mut BytesMut,
        portal: &str,
        statement: &str,
        params: &ParamArrays<'_>,
    ) -> EncodeResult<()> {
        trace!(portal, statement, params = params.len(), "encoding Bind message");

        if params.len() > i16::MAX as usize {
            warn!(params = params.len(), "Bind message rejected: too many parameters");
            return Err(EncodeError::TooManyParameters(params.len()));
        }

        // Validate everything before touching the buffer
        let mut params_size = 0usize;
        for (column, param) in params.iter().enumerate() {
            params_size += 4;
            let Some(payload) = param.payload() else {
                continue;
            };
            if param.format == Format::Text && payload.contains(&0) {
                warn!(column, "Bind message rejected: NULL byte in text parameter");
                return Err(EncodeError::NullByte { column });
            }
            if payload.len() > i32::MAX as usize {
                return Err(EncodeError::ValueTooLarge {
                    column,
                    len: payload.len(),
                });
            }
            params_size += payload.len();
        }

        // portal + statement + format codes + params + result formats
        let content_len = portal.len()
            + 1
            + statement.len()
            + 1
            + 2
            + 2 * params.len()
            + 2
            + params_size
            + 2;
        if content_len + 4 > i32::MAX as usize {
            return Err(EncodeError::ValueTooLarge {
                column: params.len(),
                len: content_len,
            });
        }

        buf.reserve(1 + 4 + content_len);

        // Message type 'B'
        buf.put_u8(b'B');

        // Length (includes itself)
        buf.put_i32((content_len + 4) as i32);

        // Portal name (null-terminated)
        buf.extend_from_slice(portal.as_bytes());
        buf.put_u8(0);

        // Statement name (null-terminated)
        buf.extend_from_slice(statement.as_bytes());
        buf.put_u8(0);

        // One format code per parameter
        buf.put_i16(params.len() as i16);
        for format in params.formats() {
            buf.put_i16(format.code());
        }

        // Parameters
        buf.put_i16(params.len() as i16);
        for param in params.iter() {
            match param.payload() {
                None => buf.put_i32(-1),
                Some(data) => {
                    buf.put_i32(data.len() as i32);
                    buf.extend_from_slice(data);
                }
            }
        }

        // Result format codes count (0 = default text)
        buf.put_i16(0);

        trace!(bytes = content_len + 5, "Bind message encoded");
        Ok(())
    }
}
