//! Declarative entity metadata resolution.
//!
//! Data-model classes attach markers (entity, primary key, columns, the
//! four relation kinds) through statically declared sidecar descriptors.
//! The resolver reads those markers, applies defaulting rules, and builds a
//! cached, immutable metadata graph that persistence code (query builders,
//! hydrators, repositories) consumes.

pub mod class;
pub mod error;
pub mod marker;
pub mod metadata;
pub mod reader;
pub mod resolve;
pub mod trace;
pub mod types;

pub(crate) mod validate;

/// Maximum length for resolved table identifiers.
pub const MAX_TABLE_NAME_LEN: usize = 64;

/// Maximum length for resolved column identifiers.
pub const MAX_COLUMN_NAME_LEN: usize = 64;

/// Maximum length for explicit or synthesized association identifiers.
pub const MAX_ASSOCIATION_NAME_LEN: usize = MAX_TABLE_NAME_LEN + 1 + MAX_COLUMN_NAME_LEN;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ConfigError, Error, err,
        class::{ClassDef, ClassRegistry, Def, PropertyDef},
        error::ErrorTree,
        marker::{
            BelongsTo, BelongsToMany, ClassMarker, ColumnMarker, EntityMarker, HasMany, HasOne,
            PrimaryKeyMarker, PropertyMarker, RelationMarker,
        },
        metadata::{
            ColumnList, ColumnMetadata, EntityMetadata, PrimaryKeyMetadata, RelationKind,
            RelationMap, RelationMetadata,
        },
        reader::MarkerReader,
        resolve::MetadataResolver,
        trace::{ResolveTraceEvent, ResolveTraceSink},
        types::ColumnType,
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// ConfigError
///
/// Fatal misconfiguration surfaced immediately during resolution; never
/// cached, never retried.
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("class '{class}' is not registered")]
    UnknownClass { class: String },

    #[error("class '{class}' has no entity marker")]
    MissingEntityMarker { class: String },

    #[error("class '{class}' declares no primary key")]
    MissingPrimaryKey { class: String },

    #[error("class '{class}' declares primary keys on both '{first}' and '{second}'")]
    MultiplePrimaryKeys {
        class: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("property '{class}.{property}' carries more than one relation marker")]
    MultipleRelationMarkers {
        class: String,
        property: &'static str,
    },
}
