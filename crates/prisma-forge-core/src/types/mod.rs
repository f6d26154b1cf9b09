pub mod data_source;
pub mod default_value;
pub mod enum_definition;
pub mod field;
pub mod generator;
pub mod identifier;
pub mod model;
pub mod scalar_type;
pub mod schema;

pub use data_source::{DataSource, DataSourceProvider, DataSourceUrl};
pub use default_value::{DefaultFunction, DefaultValue, FloatLiteral, Literal};
pub use enum_definition::Enum;
pub use field::{Field, FieldArity, FieldKind, ObjectField, OnDelete, Relation, ScalarField};
pub use generator::Generator;
pub use identifier::Identifier;
pub use model::Model;
pub use scalar_type::ScalarType;
pub use schema::Schema;
