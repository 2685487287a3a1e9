use serde::{Deserialize, Serialize};

use crate::helpers::{snake_to_camel, to_pascal_case};

/// One introspected column of a table. Immutable once deserialized, the
/// generators only ever read from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub name: String,

    /// Fully qualified Java type of the mapped property, kept opaque.
    pub java_type: String,

    /// Overrides the lowerCamelCase property derived from the column name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_property: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jdbc_type: Option<String>,

    /// The database assigns the value on insert, it is never supplied.
    #[serde(default)]
    pub identity: bool,

    /// The value is computed by a sequence expression inline in the SQL,
    /// not read from the entity object.
    #[serde(default)]
    pub sequence: bool,

    /// The column name needs delimiters in SQL.
    #[serde(default)]
    pub delimited: bool,
}

impl Column {
    pub fn property_name(&self) -> String {
        match &self.java_property {
            Some(property) => property.clone(),
            None => snake_to_camel(&self.name),
        }
    }

    pub fn escaped_column_name(&self) -> String {
        if self.delimited {
            format!("\"{}\"", self.name)
        } else {
            self.name.clone()
        }
    }

    /// The MyBatis bind placeholder for this column. `prefix` is the foreach
    /// loop variable path, empty for sequence columns.
    pub fn parameter_clause(&self, prefix: &str) -> String {
        match &self.jdbc_type {
            Some(jdbc_type) => {
                format!("#{{{}{},jdbcType={}}}", prefix, self.property_name(), jdbc_type)
            }
            None => format!("#{{{}{}}}", prefix, self.property_name()),
        }
    }
}

/// How the database-assigned key value is retrieved after (or before) the
/// insert runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyRetrieval {
    /// The driver hands the key back, no extra statement needed.
    JdbcStandard,

    /// A runtime SELECT fetches the key value.
    Select { statement: String, order: KeyOrder },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyOrder {
    Before,
    After,
}

impl KeyOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyOrder::Before => "BEFORE",
            KeyOrder::After => "AFTER",
        }
    }
}

/// At most one per table: names the column the database fills in on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedKey {
    pub column: String,

    pub retrieval: KeyRetrieval,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Overrides the PascalCase entity name derived from the table name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    pub columns: Vec<Column>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_key: Option<GeneratedKey>,
}

impl Table {
    /// Runtime-qualified table name as it appears in the generated SQL.
    pub fn qualified_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(catalog) = &self.catalog {
            parts.push(catalog.as_str());
        }
        if let Some(schema) = &self.schema {
            parts.push(schema.as_str());
        }
        parts.push(self.name.as_str());
        parts.join(".")
    }

    pub fn entity_type(&self) -> String {
        match &self.entity_name {
            Some(entity_name) => entity_name.clone(),
            None => to_pascal_case(&self.name),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
