use serde::Serialize;

///
/// PrimaryKeyMetadata
///
/// Exactly one per entity; the auto-increment flag is taken verbatim from
/// the marker.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PrimaryKeyMetadata {
    pub property: &'static str,
    pub auto_increment: bool,
}
