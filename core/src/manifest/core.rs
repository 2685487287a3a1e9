use serde::{Deserialize, Serialize};

use crate::manifest::table::Table;

fn default_wrap_width() -> usize {
    80
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Output {
    /// Directory the generated mapper interface .java files land in,
    /// relative to the project path.
    pub java_dir: String,

    /// Directory the generated mapper .xml documents land in, relative to
    /// the project path.
    pub xml_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,

    /// Java package the generated mapper interfaces live in.
    pub java_package: String,

    /// Java package the entity classes live in.
    pub entity_package: String,

    pub output: Output,

    /// Column at which generated SQL map text lines are flushed and wrapped.
    /// Formatting only, never changes statement semantics.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Skips the generated-code banners on methods and SQL map elements.
    #[serde(default)]
    pub suppress_comments: bool,

    pub tables: Vec<Table>,
}

impl Manifest {
    /// Fully qualified entity type for a table.
    pub fn entity_type(&self, table: &Table) -> String {
        format!("{}.{}", self.entity_package, table.entity_type())
    }

    pub fn mapper_name(&self, table: &Table) -> String {
        format!("{}Mapper", table.entity_type())
    }

    /// Namespace of the SQL map document, matches the mapper interface FQN
    /// so MyBatis binds the two together.
    pub fn mapper_namespace(&self, table: &Table) -> String {
        format!("{}.{}", self.java_package, self.mapper_name(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapper_names_follow_entity_type() {
        let table = Table {
            name: "user_account".to_string(),
            catalog: None,
            schema: None,
            entity_name: None,
            columns: vec![],
            generated_key: None,
        };
        let manifest = Manifest {
            name: "demo".to_string(),
            java_package: "com.example.mapper".to_string(),
            entity_package: "com.example.model".to_string(),
            output: Output {
                java_dir: "src/main/java".to_string(),
                xml_dir: "src/main/resources".to_string(),
            },
            wrap_width: 80,
            suppress_comments: false,
            tables: vec![table.clone()],
        };

        assert_eq!(manifest.entity_type(&table), "com.example.model.UserAccount");
        assert_eq!(manifest.mapper_name(&table), "UserAccountMapper");
        assert_eq!(manifest.mapper_namespace(&table), "com.example.mapper.UserAccountMapper");
    }
}
