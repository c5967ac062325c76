use crate::marker::{ClassMarker, PropertyMarker};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// Def
///
/// Identity of a declared class: the namespace it lives in plus its short
/// identifier. `path()` is the stable key used by the registry, the
/// resolver cache, and relation targets.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Def {
    pub module_path: &'static str,
    pub ident: &'static str,
}

impl Def {
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.module_path, self.ident)
    }
}

///
/// ClassDef
///
/// Statically declared sidecar descriptor for one data-model class: its
/// identity, class-level markers, and properties in declaration order.
/// Descriptors are plain data; attaching one to a class carries no behavior
/// until the class is registered and resolved.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ClassDef {
    pub def: Def,
    pub markers: &'static [ClassMarker],
    pub properties: &'static [PropertyDef],
}

impl ClassDef {
    #[must_use]
    pub fn property(&self, ident: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.ident == ident)
    }
}

///
/// PropertyDef
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PropertyDef {
    pub ident: &'static str,
    pub markers: &'static [PropertyMarker],
}

///
/// ClassRegistry
///
/// The introspection surface the resolvers consume: class path to
/// descriptor. Registration is explicit and idempotent; re-registering a
/// path replaces the previous descriptor.
///

#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<String, &'static ClassDef>,
}

impl ClassRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, class: &'static ClassDef) -> &mut Self {
        self.classes.insert(class.def.path(), class);
        self
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'static ClassDef> {
        self.classes.get(path).copied()
    }

    pub fn classes(&self) -> impl Iterator<Item = (&str, &'static ClassDef)> {
        self.classes.iter().map(|(path, class)| (path.as_str(), *class))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
