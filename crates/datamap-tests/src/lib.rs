//! Fixture classes and scenario tests for the metadata resolution
//! pipeline.

pub mod schema;

#[cfg(test)]
mod test;
