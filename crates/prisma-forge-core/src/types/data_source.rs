use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

use super::identifier::Identifier;

/// Database kinds a data source can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DataSourceProvider {
    PostgreSql,
    MySql,
    Sqlite,
}

impl DataSourceProvider {
    pub const ALL: [DataSourceProvider; 3] = [Self::PostgreSql, Self::MySql, Self::Sqlite];

    /// Returns the provider string as written in SDL.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostgreSql => "postgresql",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DataSourceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSourceProvider {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownProvider(s.to_string()))
    }
}

impl TryFrom<String> for DataSourceProvider {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DataSourceProvider> for String {
    fn from(p: DataSourceProvider) -> String {
        p.as_str().to_string()
    }
}

/// Connection url of a data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceUrl {
    /// A literal connection string.
    Literal(String),
    /// The name of an environment variable holding the connection string.
    Env(String),
}

/// A `datasource` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSource {
    name: Identifier,
    provider: DataSourceProvider,
    url: DataSourceUrl,
}

impl DataSource {
    pub(crate) fn new(name: Identifier, provider: DataSourceProvider, url: DataSourceUrl) -> Self {
        Self {
            name,
            provider,
            url,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn provider(&self) -> DataSourceProvider {
        self.provider
    }

    pub fn url(&self) -> &DataSourceUrl {
        &self.url
    }
}
