//! # prisma-forge-dsl
//!
//! Printer and formatter for Prisma schema definition language (SDL) text.
//!
//! This crate provides:
//! - Per-node printers that turn `prisma-forge-core` AST nodes into raw SDL
//! - `print_raw`, which assembles a whole schema in canonical statement order
//! - The `Formatter` trait and `print`, which hands raw text to a formatter
//! - `Reformatter`, a built-in formatter with indentation and column alignment
//!
//! # Example
//!
//! ```
//! use prisma_forge_core::builders::{self, ModelConfig, ScalarFieldConfig, SchemaConfig};
//! use prisma_forge_core::types::ScalarType;
//! use prisma_forge_dsl::{print_raw, Reformatter};
//!
//! let title = builders::scalar_field(
//!     ScalarFieldConfig::new("title", ScalarType::String).required(),
//! )
//! .expect("valid field");
//! let post = builders::model(ModelConfig::new("Post", vec![title])).expect("valid model");
//! let schema = builders::schema(SchemaConfig::new(vec![post], vec![]));
//!
//! let raw = print_raw(&schema);
//! assert_eq!(raw, "model Post {\ntitle String\n}");
//!
//! let formatted = Reformatter::default().reformat(&raw).expect("format failed");
//! assert_eq!(formatted, "model Post {\n  title String\n}\n");
//! ```

pub mod error;
pub mod formatter;
mod lexer;
pub mod printer;
pub mod reformat;
pub mod token;

pub use error::{FormatError, Span};
pub use formatter::{print, Formatter};
pub use printer::{
    print_data_source, print_documentation, print_enum, print_field, print_generator,
    print_model, print_raw,
};
pub use reformat::Reformatter;
