//! Resolution pipeline: marker reading orchestrated into cached,
//! immutable entity metadata.

pub mod column;
pub mod primary_key;
pub mod relation;

use crate::{
    ConfigError, Error,
    class::{ClassDef, ClassRegistry},
    marker::EntityMarker,
    metadata::EntityMetadata,
    reader::MarkerReader,
    trace::{ResolveTraceEvent, ResolveTraceSink},
    validate,
};
use convert_case::{Case, Casing};
use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

///
/// MetadataResolver
///
/// Orchestrates marker reading and the per-concern resolvers, caching one
/// immutable `EntityMetadata` per class path. The cache is write-once per
/// key: concurrent resolution of the same class is deterministic and the
/// first inserted instance wins, so callers always observe a single
/// metadata identity per class. Failed resolution caches nothing.
///

pub struct MetadataResolver {
    registry: ClassRegistry,
    cache: RwLock<BTreeMap<String, Arc<EntityMetadata>>>,
    trace: Option<Arc<dyn ResolveTraceSink>>,
}

impl MetadataResolver {
    #[must_use]
    pub fn new(registry: ClassRegistry) -> Self {
        Self {
            registry,
            cache: RwLock::new(BTreeMap::new()),
            trace: None,
        }
    }

    #[must_use]
    pub fn with_trace(mut self, sink: Arc<dyn ResolveTraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Number of classes resolved and cached so far.
    #[must_use]
    pub fn cached_classes(&self) -> usize {
        self.cache
            .read()
            .expect("metadata cache poisoned while reading")
            .len()
    }

    /// Resolve (or fetch from cache) the metadata for one class path.
    pub fn get_metadata(&self, class: &str) -> Result<Arc<EntityMetadata>, Error> {
        if let Some(metadata) = self.cached(class) {
            self.emit(ResolveTraceEvent::CacheHit { class });
            return Ok(metadata);
        }

        let def = self
            .registry
            .get(class)
            .ok_or_else(|| ConfigError::UnknownClass {
                class: class.to_string(),
            })?;

        let metadata = Arc::new(resolve_class(def)?);

        let resolved = {
            let mut cache = self
                .cache
                .write()
                .expect("metadata cache poisoned while inserting");
            let entry = cache
                .entry(metadata.class.clone())
                .or_insert_with(|| Arc::clone(&metadata));
            Arc::clone(entry)
        };

        self.emit(ResolveTraceEvent::Resolved {
            class,
            columns: resolved.columns.len(),
            relations: resolved.relations.len(),
        });

        Ok(resolved)
    }

    /// Run the optional cross-check pass: resolve every registered class,
    /// then verify schema-wide invariants (relation pairing, naming,
    /// column shape).
    pub fn validate(&self) -> Result<(), Error> {
        self.emit(ResolveTraceEvent::ValidateStart {
            classes: self.registry.len(),
        });

        let errors = validate::validate_all(self);

        self.emit(ResolveTraceEvent::ValidateFinish {
            errors: errors.len(),
        });

        errors.result().map_err(Error::Validation)
    }

    fn cached(&self, class: &str) -> Option<Arc<EntityMetadata>> {
        self.cache
            .read()
            .expect("metadata cache poisoned while reading")
            .get(class)
            .cloned()
    }

    fn emit(&self, event: ResolveTraceEvent<'_>) {
        if let Some(sink) = &self.trace {
            sink.on_event(event);
        }
    }
}

// Resolution order is fixed: entity marker, primary key, columns,
// relations.
fn resolve_class(def: &'static ClassDef) -> Result<EntityMetadata, Error> {
    let Some(entity) = MarkerReader::read_class::<EntityMarker>(def) else {
        return Err(ConfigError::MissingEntityMarker {
            class: def.def.path(),
        }
        .into());
    };

    let primary_key = primary_key::resolve(def)?;
    let columns = column::resolve(def);
    let relations = relation::resolve(def)?;

    Ok(EntityMetadata {
        class: def.def.path(),
        table_name: entity
            .name
            .map_or_else(|| def.def.ident.to_case(Case::Snake), str::to_string),
        repository: entity.repository,
        primary_key,
        columns,
        relations,
    })
}
