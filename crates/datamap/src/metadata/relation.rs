use derive_more::Display;
use serde::Serialize;
use std::collections::BTreeMap;

///
/// RelationMap
///
/// Relation metadata keyed by the declaring property name; at most one
/// relation per property.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RelationMap {
    relations: BTreeMap<&'static str, RelationMetadata>,
}

impl RelationMap {
    pub(crate) fn insert(&mut self, property: &'static str, relation: RelationMetadata) {
        self.relations.insert(property, relation);
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&RelationMetadata> {
        self.relations.get(property)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &RelationMetadata)> {
        self.relations.iter().map(|(property, relation)| (*property, relation))
    }
}

///
/// RelationKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum RelationKind {
    HasOne,
    BelongsTo,
    HasMany,
    BelongsToMany,
}

impl RelationKind {
    /// Kind required on the paired property of the target entity for the
    /// relation to be bidirectionally consistent.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::HasOne => Self::BelongsTo,
            Self::BelongsTo => Self::HasOne,
            Self::HasMany => Self::BelongsToMany,
            Self::BelongsToMany => Self::HasMany,
        }
    }

    #[must_use]
    pub const fn is_owning_side(self) -> bool {
        matches!(self, Self::HasOne | Self::HasMany)
    }
}

///
/// RelationMetadata
///
/// One resolved relation. `target_property` is the declared counterpart
/// name (or its deterministic default), recorded without scanning the
/// target class; structural verification belongs to the validation pass.
/// Owning-side variants carry the association name backing the join
/// construct.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RelationMetadata {
    HasOne {
        target_entity: &'static str,
        target_property: String,
        name: String,
    },
    BelongsTo {
        target_entity: &'static str,
        target_property: &'static str,
    },
    HasMany {
        target_entity: &'static str,
        target_property: &'static str,
        name: String,
    },
    BelongsToMany {
        target_entity: &'static str,
        target_property: &'static str,
    },
}

impl RelationMetadata {
    #[must_use]
    pub const fn kind(&self) -> RelationKind {
        match self {
            Self::HasOne { .. } => RelationKind::HasOne,
            Self::BelongsTo { .. } => RelationKind::BelongsTo,
            Self::HasMany { .. } => RelationKind::HasMany,
            Self::BelongsToMany { .. } => RelationKind::BelongsToMany,
        }
    }

    #[must_use]
    pub const fn target_entity(&self) -> &'static str {
        match self {
            Self::HasOne { target_entity, .. }
            | Self::BelongsTo { target_entity, .. }
            | Self::HasMany { target_entity, .. }
            | Self::BelongsToMany { target_entity, .. } => *target_entity,
        }
    }

    #[must_use]
    pub fn target_property(&self) -> &str {
        match self {
            Self::HasOne {
                target_property, ..
            } => target_property.as_str(),
            Self::BelongsTo {
                target_property, ..
            }
            | Self::HasMany {
                target_property, ..
            }
            | Self::BelongsToMany {
                target_property, ..
            } => target_property,
        }
    }

    /// Association name backing the join construct, when this side carries
    /// one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::HasOne { name, .. } | Self::HasMany { name, .. } => Some(name.as_str()),
            Self::BelongsTo { .. } | Self::BelongsToMany { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_owning_side(&self) -> bool {
        self.kind().is_owning_side()
    }
}
