//! # prisma-forge-core
//!
//! Typed AST for Prisma schema definition language (SDL) documents.
//!
//! This crate provides:
//! - Validated node types for data sources, generators, models, fields and enums
//! - One builder per node kind that validates names, defaults and modifiers
//! - `SchemaError`, the single failure kind every builder reports
//!
//! Nodes are immutable once built. Text rendering lives in `prisma-forge-dsl`.

pub mod builders;
pub mod error;
pub mod types;
pub mod validate;

pub use error::SchemaError;
