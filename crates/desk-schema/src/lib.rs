//! # desk-schema
//!
//! JSON Schema generation, validation, and registry for the CS insight desk.
//!
//! Entity and view types are defined in `desk-core` with `#[derive(JsonSchema)]`.
//! This crate collects their schemas in a [`SchemaRegistry`], validates raw
//! snapshot JSON before it is deserialized, and backs the `deskctl schema`
//! command.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
