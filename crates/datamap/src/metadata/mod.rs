//! The resolved, immutable metadata graph exposed to persistence code.

mod column;
mod entity;
mod primary_key;
mod relation;

pub use column::{ColumnList, ColumnMetadata};
pub use entity::EntityMetadata;
pub use primary_key::PrimaryKeyMetadata;
pub use relation::{RelationKind, RelationMap, RelationMetadata};
