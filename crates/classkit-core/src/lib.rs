//! classkit-core — Classroom entities, registries, and course plans.
//!
//! This crate defines the in-memory entity-management model the classkit
//! tools build on: identities, per-teacher artifact registries, the shared
//! question id allocator, and TOML course-plan loading.

pub mod bank;
pub mod error;
pub mod events;
pub mod identity;
pub mod model;
pub mod plan;
pub mod registry;
pub mod roles;
