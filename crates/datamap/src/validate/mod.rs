//! Cross-entity validation orchestration and shared helpers.

pub(crate) mod column;
pub(crate) mod naming;
pub(crate) mod relation;

use crate::{error::ErrorTree, metadata::EntityMetadata, resolve::MetadataResolver};
use std::{collections::BTreeMap, sync::Arc};

/// Run full validation in a staged, deterministic order.
pub(crate) fn validate_all(resolver: &MetadataResolver) -> ErrorTree {
    let mut errors = ErrorTree::new();

    // Phase 1: resolve each registered class (local invariants).
    let resolved = resolve_all(resolver, &mut errors);

    // Phase 2: enforce schema-wide invariants over whatever resolved.
    naming::validate_naming(&resolved, &mut errors);
    column::validate_shape(&resolved, &mut errors);
    relation::validate_pairing(&resolved, &mut errors);

    errors
}

// Per-class resolution failures land under the class path route.
fn resolve_all(
    resolver: &MetadataResolver,
    errors: &mut ErrorTree,
) -> BTreeMap<String, Arc<EntityMetadata>> {
    let mut resolved = BTreeMap::new();

    for (path, _) in resolver.registry().classes() {
        match resolver.get_metadata(path) {
            Ok(metadata) => {
                resolved.insert(path.to_string(), metadata);
            }
            Err(e) => errors.add_route(path, e),
        }
    }

    resolved
}
