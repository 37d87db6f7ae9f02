//! `ToParam` implementations for optional third-party types.
//!
//! Enabled per Cargo feature; each type is sent as the text literal the server
//! parses for its column type.

#[cfg(feature = "uuid")]
mod uuid_impl {
    use crate::types::ToParam;

    /// Hyphenated lowercase, e.g. `550e8400-e29b-41d4-a716-446655440000`.
    impl ToParam for uuid::Uuid {
        type Param = String;

        fn to_param(&self) -> Self::Param {
            self.hyphenated().to_string()
        }
    }

}

#[cfg(feature = "chrono")]
mod chrono_impl {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

    use crate::types::ToParam;

    impl ToParam for NaiveDate {
        type Param = String;

        fn to_param(&self) -> Self::Param {
            self.format("%Y-%m-%d").to_string()
        }
    }

    /// Fractional seconds only when non-zero.
    impl ToParam for NaiveTime {
        type Param = String;

        fn to_param(&self) -> Self::Param {
            self.format("%H:%M:%S%.f").to_string()
        }
    }

    impl ToParam for NaiveDateTime {
        type Param = String;

        fn to_param(&self) -> Self::Param {
            self.format("%Y-%m-%d %H:%M:%S%.f").to_string()
        }
    }

    impl ToParam for DateTime<Utc> {
        type Param = String;

        fn to_param(&self) -> Self::Param {
            self.format("%Y-%m-%d %H:%M:%S%.f+00:00").to_string()
        }
    }

}
