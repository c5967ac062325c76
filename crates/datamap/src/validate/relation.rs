use crate::{
    err,
    error::ErrorTree,
    metadata::{EntityMetadata, RelationMetadata},
};
use std::{collections::BTreeMap, sync::Arc};

/// Bidirectional consistency: every relation must have a kind-compatible
/// counterpart on the declared target property, pointing back at the
/// originating class and property.
pub(crate) fn validate_pairing(
    resolved: &BTreeMap<String, Arc<EntityMetadata>>,
    errs: &mut ErrorTree,
) {
    for (path, metadata) in resolved {
        for (property, relation) in metadata.relations.iter() {
            check_pair(resolved, path, property, relation, errs);
        }
    }
}

fn check_pair(
    resolved: &BTreeMap<String, Arc<EntityMetadata>>,
    path: &str,
    property: &str,
    relation: &RelationMetadata,
    errs: &mut ErrorTree,
) {
    let target_path = relation.target_entity();
    let Some(target) = resolved.get(target_path) else {
        err!(
            errs,
            "relation '{path}.{property}' targets unresolved entity '{target_path}'"
        );
        return;
    };

    let target_property = relation.target_property();
    let Some(counterpart) = target.relations.get(target_property) else {
        err!(
            errs,
            "relation '{path}.{property}' expects '{target_path}.{target_property}' to declare the paired relation"
        );
        return;
    };

    let expected = relation.kind().counterpart();
    if counterpart.kind() != expected {
        err!(
            errs,
            "relation '{path}.{property}' expects a {expected} on '{target_path}.{target_property}', found {}",
            counterpart.kind()
        );
        return;
    }

    if counterpart.target_entity() != path {
        err!(
            errs,
            "relation '{target_path}.{target_property}' points back at '{}', expected '{path}'",
            counterpart.target_entity()
        );
        return;
    }

    if counterpart.target_property() != property {
        err!(
            errs,
            "relation '{target_path}.{target_property}' names counterpart property '{}', expected '{property}'",
            counterpart.target_property()
        );
    }
}
