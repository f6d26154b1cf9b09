//! Entity builders: one construction operation per AST node kind.
//!
//! Each builder takes a configuration record, runs the validators that apply
//! to the entity and returns the immutable node. Builders never look at
//! sibling entities; `ObjectField` types are not checked against model names.
//!
//! ```
//! use prisma_forge_core::builders::{self, ModelConfig, ScalarFieldConfig};
//! use prisma_forge_core::types::{DefaultFunction, DefaultValue, ScalarType};
//!
//! let id = builders::scalar_field(
//!     ScalarFieldConfig::new("id", ScalarType::Int)
//!         .required()
//!         .id()
//!         .with_default(DefaultValue::call(DefaultFunction::AutoIncrement)),
//! )
//! .unwrap();
//! let model = builders::model(ModelConfig::new("User", vec![id])).unwrap();
//! assert_eq!(model.name().as_str(), "User");
//! ```

use crate::error::SchemaError;
use crate::types::{
    DataSource, DataSourceProvider, DataSourceUrl, DefaultValue, Enum, Field, FieldArity,
    FieldKind, Generator, Identifier, Model, ObjectField, OnDelete, Relation, ScalarField,
    ScalarType, Schema,
};
use crate::validate::validate_scalar_default;

/// Configuration of the schema root.
#[derive(Debug, Clone, Default)]
pub struct SchemaConfig {
    pub models: Vec<Model>,
    pub enums: Vec<Enum>,
    pub data_source: Option<DataSource>,
    pub generators: Vec<Generator>,
}

impl SchemaConfig {
    pub fn new(models: Vec<Model>, enums: Vec<Enum>) -> Self {
        Self {
            models,
            enums,
            ..Self::default()
        }
    }

    pub fn with_data_source(mut self, data_source: DataSource) -> Self {
        self.data_source = Some(data_source);
        self
    }

    pub fn with_generators(mut self, generators: Vec<Generator>) -> Self {
        self.generators = generators;
        self
    }
}

/// Creates the schema root. An empty schema is valid.
pub fn schema(config: SchemaConfig) -> Schema {
    tracing::trace!(
        models = config.models.len(),
        enums = config.enums.len(),
        generators = config.generators.len(),
        "built schema"
    );
    Schema::new(
        config.models,
        config.enums,
        config.data_source,
        config.generators,
    )
}

/// Configuration of an enum block.
#[derive(Debug, Clone)]
pub struct EnumConfig {
    pub name: String,
    pub values: Vec<String>,
    pub documentation: Option<String>,
}

impl EnumConfig {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
            documentation: None,
        }
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

/// Creates an enum block. Validates the name.
pub fn enumeration(config: EnumConfig) -> Result<Enum, SchemaError> {
    let name = Identifier::new(config.name)?;
    tracing::trace!(%name, "built enum");
    Ok(Enum::new(name, config.values, config.documentation))
}

/// Configuration of a model block.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub name: String,
    pub fields: Vec<Field>,
    pub documentation: Option<String>,
}

impl ModelConfig {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            documentation: None,
        }
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

/// Creates a model block. Validates the name.
pub fn model(config: ModelConfig) -> Result<Model, SchemaError> {
    let name = Identifier::new(config.name)?;
    tracing::trace!(%name, fields = config.fields.len(), "built model");
    Ok(Model::new(name, config.fields, config.documentation))
}

/// Configuration of a scalar field.
#[derive(Debug, Clone)]
pub struct ScalarFieldConfig {
    pub name: String,
    pub r#type: ScalarType,
    pub is_list: bool,
    pub is_required: bool,
    pub is_id: bool,
    pub is_unique: bool,
    pub is_updated_at: bool,
    pub default: Option<DefaultValue>,
    pub documentation: Option<String>,
}

impl ScalarFieldConfig {
    /// A non-list, optional field with no attributes and no default.
    pub fn new(name: impl Into<String>, r#type: ScalarType) -> Self {
        Self {
            name: name.into(),
            r#type,
            is_list: false,
            is_required: false,
            is_id: false,
            is_unique: false,
            is_updated_at: false,
            default: None,
            documentation: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn updated_at(mut self) -> Self {
        self.is_updated_at = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

/// Creates a scalar field.
///
/// Validates, in order: the name, the default against the declared type,
/// and the list/optional modifier combination.
pub fn scalar_field(config: ScalarFieldConfig) -> Result<Field, SchemaError> {
    let name = Identifier::new(config.name)?;
    validate_scalar_default(config.r#type, config.default.as_ref())?;
    let arity = FieldArity::from_flags(config.is_required, config.is_list)?;
    tracing::trace!(%name, r#type = %config.r#type, "built scalar field");

    let scalar = ScalarField::new(
        config.r#type,
        config.is_id,
        config.is_unique,
        config.is_updated_at,
        config.default,
    );
    Ok(Field::new(
        name,
        arity,
        config.documentation,
        FieldKind::Scalar(scalar),
    ))
}

/// Configuration of an object (relation) field.
#[derive(Debug, Clone)]
pub struct ObjectFieldConfig {
    pub name: String,
    pub r#type: String,
    pub is_list: bool,
    pub is_required: bool,
    pub relation_name: Option<String>,
    pub relation_fields: Vec<String>,
    pub relation_references: Vec<String>,
    pub relation_on_delete: OnDelete,
    pub documentation: Option<String>,
}

impl ObjectFieldConfig {
    /// A non-list, optional field with no relation metadata.
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
            is_list: false,
            is_required: false,
            relation_name: None,
            relation_fields: Vec::new(),
            relation_references: Vec::new(),
            relation_on_delete: OnDelete::None,
            documentation: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn with_relation_name(mut self, name: impl Into<String>) -> Self {
        self.relation_name = Some(name.into());
        self
    }

    pub fn with_relation_fields(mut self, fields: Vec<String>) -> Self {
        self.relation_fields = fields;
        self
    }

    pub fn with_relation_references(mut self, references: Vec<String>) -> Self {
        self.relation_references = references;
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

/// Creates an object field. Validates the name and the modifier combination.
pub fn object_field(config: ObjectFieldConfig) -> Result<Field, SchemaError> {
    let name = Identifier::new(config.name)?;
    let arity = FieldArity::from_flags(config.is_required, config.is_list)?;
    tracing::trace!(%name, r#type = %config.r#type, "built object field");

    let relation = Relation::new(
        config.relation_name,
        config.relation_fields,
        config.relation_references,
        config.relation_on_delete,
    );
    Ok(Field::new(
        name,
        arity,
        config.documentation,
        FieldKind::Object(ObjectField::new(config.r#type, relation)),
    ))
}

/// Configuration of a data source.
#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    pub name: String,
    pub provider: DataSourceProvider,
    pub url: DataSourceUrl,
}

impl DataSourceConfig {
    pub fn new(name: impl Into<String>, provider: DataSourceProvider, url: DataSourceUrl) -> Self {
        Self {
            name: name.into(),
            provider,
            url,
        }
    }
}

/// Creates a data source. Validates the name.
pub fn data_source(config: DataSourceConfig) -> Result<DataSource, SchemaError> {
    let name = Identifier::new(config.name)?;
    tracing::trace!(%name, provider = %config.provider, "built data source");
    Ok(DataSource::new(name, config.provider, config.url))
}

/// Configuration of a generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub name: String,
    pub provider: String,
    pub output: Option<String>,
    pub binary_targets: Vec<String>,
}

impl GeneratorConfig {
    pub fn new(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            output: None,
            binary_targets: Vec::new(),
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_binary_targets(mut self, targets: Vec<String>) -> Self {
        self.binary_targets = targets;
        self
    }
}

/// Creates a generator. Validates the name.
pub fn generator(config: GeneratorConfig) -> Result<Generator, SchemaError> {
    let name = Identifier::new(config.name)?;
    tracing::trace!(%name, provider = %config.provider, "built generator");
    Ok(Generator::new(
        name,
        config.provider,
        config.output,
        config.binary_targets,
    ))
}
