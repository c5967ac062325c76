use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// ErrorTree
///
/// Route-keyed aggregation of validation findings. Messages at the root
/// describe schema-wide problems; children are keyed by the class path they
/// belong to. `result()` collapses an empty tree to `Ok(())`.
///

#[derive(Debug, Default, Serialize)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl Display) {
        self.messages.push(message.to_string());
    }

    pub fn add_route(&mut self, route: impl Into<String>, message: impl Display) {
        self.children.entry(route.into()).or_default().add(message);
    }

    pub fn merge(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        let entry = self.children.entry(route.into()).or_default();
        entry.messages.extend(other.messages);
        entry.children.extend(other.children);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn fmt_routed(&self, f: &mut fmt::Formatter<'_>, route: &str) -> fmt::Result {
        for message in &self.messages {
            if route.is_empty() {
                writeln!(f, "{message}")?;
            } else {
                writeln!(f, "{route}: {message}")?;
            }
        }

        for (key, child) in &self.children {
            let route = if route.is_empty() {
                key.clone()
            } else {
                format!("{route}.{key}")
            };
            child.fmt_routed(f, &route)?;
        }

        Ok(())
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_routed(f, "")
    }
}

///
/// err!
/// Push a formatted finding into an `ErrorTree`.
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
