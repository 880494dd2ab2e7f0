//! Table names, bare or qualified with a namespace
//!
//! Every SQL statement in this crate takes its table names from one
//! `TableNames` value, so foreign key targets always agree with the tables
//! they point at.

use chat_common::{is_valid_identifier, AppConfig, ConfigError};

/// Fully qualified names of the six tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    namespace: Option<String>,
    pub images: String,
    pub users: String,
    pub servers: String,
    pub channels: String,
    pub messages: String,
    pub reactions: String,
}

impl TableNames {
    /// Unqualified table names (resolved through the connection's search path)
    pub fn bare() -> Self {
        Self::build(None)
    }

    /// Table names qualified with `namespace`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if `namespace` is not a plain SQL identifier
    pub fn qualified(namespace: &str) -> Result<Self, ConfigError> {
        if !is_valid_identifier(namespace) {
            return Err(ConfigError::InvalidValue("SCHEMA", namespace.to_string()));
        }
        Ok(Self::build(Some(namespace)))
    }

    /// Bare names, or qualified ones when a namespace is given
    pub fn new(namespace: Option<&str>) -> Result<Self, ConfigError> {
        match namespace {
            Some(namespace) => Self::qualified(namespace),
            None => Ok(Self::bare()),
        }
    }

    /// Names for the deployment described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Self::new(config.table_namespace())
    }

    fn build(namespace: Option<&str>) -> Self {
        let name = |table: &str| match namespace {
            Some(ns) => format!("{ns}.{table}"),
            None => table.to_string(),
        };

        Self {
            namespace: namespace.map(str::to_string),
            images: name("images"),
            users: name("users"),
            servers: name("servers"),
            channels: name("channels"),
            messages: name("messages"),
            reactions: name("reactions"),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// All table names in creation order (parents before children)
    pub fn in_dependency_order(&self) -> [&str; 6] {
        [
            self.images.as_str(),
            self.users.as_str(),
            self.servers.as_str(),
            self.channels.as_str(),
            self.messages.as_str(),
            self.reactions.as_str(),
        ]
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self::bare()
    }
}
