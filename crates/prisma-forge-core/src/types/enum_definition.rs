use serde::Serialize;

use super::identifier::Identifier;

/// An enum block: a name and its ordered values.
///
/// Values are kept as given; the SDL printer emits them one per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    name: Identifier,
    values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
}

impl Enum {
    pub(crate) fn new(name: Identifier, values: Vec<String>, documentation: Option<String>) -> Self {
        Self {
            name,
            values,
            documentation,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}
