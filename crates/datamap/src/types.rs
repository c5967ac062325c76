use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// ColumnType
///
/// Scalar type tag carried by a column marker. The tag is structural: it is
/// mandatory on every column declaration and recorded verbatim on the
/// resolved metadata.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum ColumnType {
    Array,
    Boolean,
    Date,
    DateTime,
    Float,
    Integer,
    String,
    Text,
}

impl ColumnType {
    /// Only string columns take a length.
    #[must_use]
    pub const fn supports_length(self) -> bool {
        matches!(self, Self::String)
    }

    /// Only float columns take a precision and scale.
    #[must_use]
    pub const fn supports_precision(self) -> bool {
        matches!(self, Self::Float)
    }

    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::String | Self::Text)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Integer)
    }
}
