use serde::Serialize;

use super::identifier::Identifier;

/// A `generator` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generator {
    name: Identifier,
    provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    binary_targets: Vec<String>,
}

impl Generator {
    pub(crate) fn new(
        name: Identifier,
        provider: String,
        output: Option<String>,
        binary_targets: Vec<String>,
    ) -> Self {
        Self {
            name,
            provider,
            output,
            binary_targets,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn binary_targets(&self) -> &[String] {
        &self.binary_targets
    }
}
