use serde::Serialize;

use super::data_source::DataSource;
use super::enum_definition::Enum;
use super::generator::Generator;
use super::model::Model;

/// Root of the AST. Owns every top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Schema {
    models: Vec<Model>,
    enums: Vec<Enum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_source: Option<DataSource>,
    generators: Vec<Generator>,
}

impl Schema {
    pub(crate) fn new(
        models: Vec<Model>,
        enums: Vec<Enum>,
        data_source: Option<DataSource>,
        generators: Vec<Generator>,
    ) -> Self {
        Self {
            models,
            enums,
            data_source,
            generators,
        }
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn data_source(&self) -> Option<&DataSource> {
        self.data_source.as_ref()
    }

    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    /// Looks up a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name().as_str() == name)
    }

    /// Looks up an enum by name.
    pub fn enumeration(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name().as_str() == name)
    }

    /// Number of top-level statements the schema prints to.
    pub fn statement_count(&self) -> usize {
        usize::from(self.data_source.is_some())
            + self.generators.len()
            + self.models.len()
            + self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statement_count() == 0
    }
}
