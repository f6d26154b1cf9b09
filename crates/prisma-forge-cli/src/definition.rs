//! Definition documents: the JSON/TOML input format of the CLI.
//!
//! A document is decoded with serde into plain records, then every entity is
//! run through the core builders, so the document format never bypasses
//! validation.

use std::path::{Path, PathBuf};

use prisma_forge_core::builders::{
    self, DataSourceConfig, EnumConfig, GeneratorConfig, ModelConfig, ObjectFieldConfig,
    ScalarFieldConfig, SchemaConfig,
};
use prisma_forge_core::types::{
    DataSourceProvider, DataSourceUrl, DefaultFunction, DefaultValue, Field, Model, ScalarType,
    Schema,
};
use prisma_forge_core::SchemaError;
use serde::Deserialize;

use crate::error::CliError;

/// One decoded definition file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionDocument {
    #[serde(default)]
    pub datasource: Option<DataSourceDef>,
    #[serde(default)]
    pub generators: Vec<GeneratorDef>,
    #[serde(default)]
    pub models: Vec<ModelDef>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSourceDef {
    pub name: String,
    pub provider: DataSourceProvider,
    pub url: UrlDef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlDef {
    Literal(String),
    Env(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorDef {
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub binary_targets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelDef {
    pub name: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDef {
    Scalar(ScalarFieldDef),
    Object(ObjectFieldDef),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarFieldDef {
    pub name: String,
    pub r#type: ScalarType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub list: bool,
    #[serde(default)]
    pub id: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub updated_at: bool,
    #[serde(default)]
    pub default: Option<DefaultDef>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectFieldDef {
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub list: bool,
    #[serde(default)]
    pub relation: Option<RelationDef>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

/// `{ literal = ... }` or `{ call = "now" }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultDef {
    Literal(LiteralDef),
    Call(DefaultFunction),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LiteralDef {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl DefaultDef {
    fn into_default(self) -> Result<DefaultValue, SchemaError> {
        Ok(match self {
            Self::Call(function) => DefaultValue::call(function),
            Self::Literal(LiteralDef::Boolean(b)) => DefaultValue::boolean(b),
            Self::Literal(LiteralDef::Int(i)) => DefaultValue::int(i),
            Self::Literal(LiteralDef::Float(f)) => DefaultValue::float(f)?,
            Self::Literal(LiteralDef::String(s)) => DefaultValue::string(s),
        })
    }
}

/// A validation failure tagged with the entity it came from, e.g.
/// `field User.email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityError {
    pub entity: String,
    pub source: SchemaError,
}

impl EntityError {
    fn new(entity: impl Into<String>, source: SchemaError) -> Self {
        Self {
            entity: entity.into(),
            source,
        }
    }

    /// Attaches the file the entity was read from.
    pub fn into_cli_error(self, file: &Path) -> CliError {
        CliError::Schema {
            file: file.to_path_buf(),
            entity: self.entity,
            source: self.source,
        }
    }
}

/// Supported document encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Toml,
}

impl Encoding {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Decodes a definition document, reporting errors with a byte span into
/// `text` where the decoder provides one.
pub fn decode(path: &Path, text: &str) -> Result<DefinitionDocument, CliError> {
    let decode_error = |message: String, span: Option<(usize, usize)>| CliError::Decode {
        file: path.to_path_buf(),
        message,
        source_text: text.to_string(),
        span,
    };

    match Encoding::from_path(path) {
        Some(Encoding::Json) => serde_json::from_str(text).map_err(|e| {
            let span = line_column_offset(text, e.line(), e.column()).map(|at| (at, at + 1));
            decode_error(e.to_string(), span)
        }),
        Some(Encoding::Toml) => toml::from_str(text).map_err(|e| {
            let span = e.span().map(|r| (r.start, r.end));
            decode_error(e.message().to_string(), span)
        }),
        None => Err(decode_error(
            "unsupported file extension; expected .json or .toml".to_string(),
            None,
        )),
    }
}

/// Converts a 1-based line and column into a byte offset.
fn line_column_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < text.len()).then_some(offset)
}

/// Definition files merged in read order, remembering where the data source
/// came from.
#[derive(Debug, Default)]
pub struct MergedDefinitions {
    config: SchemaConfig,
    data_source_file: Option<PathBuf>,
}

impl MergedDefinitions {
    /// Builds `document` and appends its entities.
    ///
    /// # Errors
    ///
    /// Fails when an entity is invalid, or when both the merged set and
    /// `document` declare a data source.
    pub fn add(&mut self, file: &Path, document: DefinitionDocument) -> Result<(), CliError> {
        if document.datasource.is_some() {
            if let Some(first) = &self.data_source_file {
                return Err(CliError::DuplicateDataSource {
                    first: first.clone(),
                    second: file.to_path_buf(),
                });
            }
        }

        let parts = document.build().map_err(|e| e.into_cli_error(file))?;
        if let Some(data_source) = parts.data_source {
            self.config.data_source = Some(data_source);
            self.data_source_file = Some(file.to_path_buf());
        }
        self.config.generators.extend(parts.generators);
        self.config.models.extend(parts.models);
        self.config.enums.extend(parts.enums);
        Ok(())
    }

    pub fn into_schema(self) -> Schema {
        builders::schema(self.config)
    }
}

impl DefinitionDocument {
    /// Builds every entity through the core builders, returning the parts of
    /// a schema root.
    pub fn build(self) -> Result<SchemaConfig, EntityError> {
        let data_source = self
            .datasource
            .map(|def| {
                let entity = format!("datasource {}", def.name);
                let url = match def.url {
                    UrlDef::Literal(url) => DataSourceUrl::Literal(url),
                    UrlDef::Env(name) => DataSourceUrl::Env(name),
                };
                builders::data_source(DataSourceConfig::new(def.name, def.provider, url))
                    .map_err(|e| EntityError::new(entity, e))
            })
            .transpose()?;

        let generators = self
            .generators
            .into_iter()
            .map(|def| {
                let entity = format!("generator {}", def.name);
                let mut config = GeneratorConfig::new(def.name, def.provider)
                    .with_binary_targets(def.binary_targets);
                config.output = def.output;
                builders::generator(config).map_err(|e| EntityError::new(entity, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let models = self
            .models
            .into_iter()
            .map(build_model)
            .collect::<Result<Vec<_>, _>>()?;

        let enums = self
            .enums
            .into_iter()
            .map(|def| {
                let entity = format!("enum {}", def.name);
                let mut config = EnumConfig::new(def.name, def.values);
                config.documentation = def.documentation;
                builders::enumeration(config).map_err(|e| EntityError::new(entity, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = SchemaConfig::new(models, enums).with_generators(generators);
        config.data_source = data_source;
        Ok(config)
    }
}

fn build_model(def: ModelDef) -> Result<Model, EntityError> {
    let fields = def
        .fields
        .into_iter()
        .map(|field| build_field(&def.name, field))
        .collect::<Result<Vec<_>, _>>()?;

    let entity = format!("model {}", def.name);
    let mut config = ModelConfig::new(def.name, fields);
    config.documentation = def.documentation;
    builders::model(config).map_err(|e| EntityError::new(entity, e))
}

fn build_field(model: &str, def: FieldDef) -> Result<Field, EntityError> {
    match def {
        FieldDef::Scalar(def) => {
            let entity = format!("field {model}.{}", def.name);
            let default = def
                .default
                .map(DefaultDef::into_default)
                .transpose()
                .map_err(|e| EntityError::new(entity.clone(), e))?;
            let config = ScalarFieldConfig {
                name: def.name,
                r#type: def.r#type,
                is_list: def.list,
                is_required: def.required,
                is_id: def.id,
                is_unique: def.unique,
                is_updated_at: def.updated_at,
                default,
                documentation: def.documentation,
            };
            builders::scalar_field(config).map_err(|e| EntityError::new(entity, e))
        }
        FieldDef::Object(def) => {
            let entity = format!("field {model}.{}", def.name);
            let relation = def.relation.unwrap_or_default();
            let mut config = ObjectFieldConfig::new(def.name, def.r#type)
                .with_relation_fields(relation.fields)
                .with_relation_references(relation.references);
            config.is_required = def.required;
            config.is_list = def.list;
            config.relation_name = relation.name;
            config.documentation = def.documentation;
            builders::object_field(config).map_err(|e| EntityError::new(entity, e))
        }
    }
}
