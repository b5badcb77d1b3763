//! Realization of run templates against a managed resource store.
//!
//! This crate provides the [`Realizer`] — the single entry point that turns a
//! pipeline into a materialized resource. It sequences template lookup,
//! stamping, idempotent creation, re-listing, and output extraction, and maps
//! every failure mode onto a fixed condition reason.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  Realizer::realize                                     │
//! │  - Repository (injected): templates + resource store   │
//! │  - Stamper: render template against the pipeline       │
//! │  - Logger (injected): contract-stable failure entries  │
//! │  - returns (Condition, Outputs?, MaterializedObject?)  │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod conditions;
pub mod logger;
pub mod realizer;
pub mod repository;

pub use logger::{Logger, TracingLogger};
pub use realizer::Realizer;
pub use repository::Repository;
