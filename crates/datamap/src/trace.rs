//! Resolution tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! resolution semantics.

///
/// ResolveTraceSink
///

pub trait ResolveTraceSink: Send + Sync {
    fn on_event(&self, event: ResolveTraceEvent<'_>);
}

///
/// ResolveTraceEvent
///

#[derive(Clone, Copy, Debug)]
pub enum ResolveTraceEvent<'a> {
    CacheHit {
        class: &'a str,
    },
    Resolved {
        class: &'a str,
        columns: usize,
        relations: usize,
    },
    ValidateStart {
        classes: usize,
    },
    ValidateFinish {
        errors: usize,
    },
}
