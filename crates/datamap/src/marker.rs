use crate::types::ColumnType;
use serde::Serialize;
use std::ops::Not;

///
/// ClassMarker
///
/// Declarative marker attached to a class. Entity is currently the only
/// class-level kind; the union keeps the reader surface uniform with
/// property markers.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum ClassMarker {
    Entity(EntityMarker),
}

///
/// EntityMarker
///

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct EntityMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<&'static str>,
}

impl EntityMarker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            repository: None,
        }
    }
}

///
/// PropertyMarker
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum PropertyMarker {
    PrimaryKey(PrimaryKeyMarker),
    Column(ColumnMarker),
    Relation(RelationMarker),
}

///
/// PrimaryKeyMarker
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PrimaryKeyMarker {
    pub auto_increment: bool,
}

impl PrimaryKeyMarker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auto_increment: true,
        }
    }
}

impl Default for PrimaryKeyMarker {
    fn default() -> Self {
        Self::new()
    }
}

///
/// ColumnMarker
///
/// The type tag is mandatory; every other field defaults. Length applies to
/// string columns, precision and scale to float columns; both are recorded
/// verbatim here and cross-checked by the validation pass.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ColumnMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,

    pub ty: ColumnType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl ColumnMarker {
    #[must_use]
    pub const fn new(ty: ColumnType) -> Self {
        Self {
            name: None,
            ty,
            length: None,
            unique: false,
            precision: None,
            scale: None,
        }
    }
}

///
/// RelationMarker
///
/// The four relation kinds as one tagged union. Owning-side kinds (HasOne,
/// HasMany) declare the paired property through `inversed_by` and may carry
/// an association name; inverse-side kinds (BelongsTo, BelongsToMany)
/// declare it through `mapped_by`.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum RelationMarker {
    HasOne(HasOne),
    BelongsTo(BelongsTo),
    HasMany(HasMany),
    BelongsToMany(BelongsToMany),
}

impl RelationMarker {
    #[must_use]
    pub const fn target_entity(&self) -> &'static str {
        match self {
            Self::HasOne(m) => m.target_entity,
            Self::BelongsTo(m) => m.target_entity,
            Self::HasMany(m) => m.target_entity,
            Self::BelongsToMany(m) => m.target_entity,
        }
    }

    #[must_use]
    pub const fn is_owning_side(&self) -> bool {
        matches!(self, Self::HasOne(_) | Self::HasMany(_))
    }
}

///
/// HasOne
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct HasOne {
    pub target_entity: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inversed_by: Option<&'static str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

///
/// BelongsTo
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BelongsTo {
    pub target_entity: &'static str,
    pub mapped_by: &'static str,
}

///
/// HasMany
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct HasMany {
    pub target_entity: &'static str,
    pub inversed_by: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

///
/// BelongsToMany
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BelongsToMany {
    pub target_entity: &'static str,
    pub mapped_by: &'static str,
}

///
/// ClassMarkerKind
/// Selects one marker kind out of the class-level union.
///

pub trait ClassMarkerKind: Sized {
    fn pick(marker: &ClassMarker) -> Option<&Self>;
}

impl ClassMarkerKind for EntityMarker {
    fn pick(marker: &ClassMarker) -> Option<&Self> {
        match marker {
            ClassMarker::Entity(m) => Some(m),
        }
    }
}

///
/// PropertyMarkerKind
/// Selects one marker kind out of the property-level union.
///

pub trait PropertyMarkerKind: Sized {
    fn pick(marker: &PropertyMarker) -> Option<&Self>;
}

impl PropertyMarkerKind for PrimaryKeyMarker {
    fn pick(marker: &PropertyMarker) -> Option<&Self> {
        match marker {
            PropertyMarker::PrimaryKey(m) => Some(m),
            _ => None,
        }
    }
}

impl PropertyMarkerKind for ColumnMarker {
    fn pick(marker: &PropertyMarker) -> Option<&Self> {
        match marker {
            PropertyMarker::Column(m) => Some(m),
            _ => None,
        }
    }
}

impl PropertyMarkerKind for RelationMarker {
    fn pick(marker: &PropertyMarker) -> Option<&Self> {
        match marker {
            PropertyMarker::Relation(m) => Some(m),
            _ => None,
        }
    }
}
