use serde::Serialize;

use super::field::Field;
use super::identifier::Identifier;

/// A model block: a name and its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    name: Identifier,
    fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
}

impl Model {
    pub(crate) fn new(name: Identifier, fields: Vec<Field>, documentation: Option<String>) -> Self {
        Self {
            name,
            fields,
            documentation,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name().as_str() == name)
    }
}
