use std::{
    env,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use dotenv::dotenv;
use regex::{Captures, Regex};
use tracing::error;

use crate::manifest::core::Manifest;

pub const YAML_CONFIG_NAME: &str = "mybatisgen.yaml";

fn substitute_env_variables(contents: &str) -> Result<String, regex::Error> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;
    let result = re.replace_all(contents, |caps: &Captures| match env::var(&caps[1]) {
        Ok(value) => value,
        Err(_) => {
            error!("Environment variable {} not found", &caps[1]);
            caps[0].to_string()
        }
    });
    Ok(result.into_owned())
}

#[derive(thiserror::Error, Debug)]
pub enum ReadManifestError {
    #[error("Could not open file: {0}")]
    CouldNotOpenFile(#[from] std::io::Error),

    #[error("Could not parse manifest: {0}")]
    CouldNotParseManifest(#[from] serde_yaml::Error),

    #[error("Could not substitute env variables: {0}")]
    CouldNotSubstituteEnvVariables(#[from] regex::Error),
}

pub fn read_manifest(file_path: &Path) -> Result<Manifest, ReadManifestError> {
    // .env values may be referenced from the manifest with ${VAR}
    dotenv().ok();

    let mut file = File::open(file_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let contents = substitute_env_variables(&contents)?;

    let manifest: Manifest = serde_yaml::from_str(&contents)?;
    Ok(manifest)
}

#[derive(thiserror::Error, Debug)]
pub enum WriteManifestError {
    #[error("Could not create file: {0}")]
    CouldNotCreateFile(#[from] std::io::Error),

    #[error("Could not serialize manifest: {0}")]
    CouldNotSerializeManifest(#[from] serde_yaml::Error),
}

pub fn write_manifest(manifest: &Manifest, file_path: &Path) -> Result<(), WriteManifestError> {
    let yaml_string = serde_yaml::to_string(manifest)?;

    let mut file = File::create(file_path)?;
    file.write_all(yaml_string.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::table::{GeneratedKey, KeyRetrieval};

    const MANIFEST_YAML: &str = r#"
name: demo
java_package: com.example.mapper
entity_package: com.example.model
output:
  java_dir: src/main/java
  xml_dir: src/main/resources
tables:
  - name: user
    generated_key:
      column: id
      retrieval: jdbc_standard
    columns:
      - name: id
        java_type: java.lang.Long
        identity: true
      - name: name
        java_type: java.lang.String
        jdbc_type: VARCHAR
      - name: seq_no
        java_type: java.lang.Long
        sequence: true
"#;

    #[test]
    fn read_manifest_parses_tables_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(YAML_CONFIG_NAME);
        std::fs::write(&path, MANIFEST_YAML).unwrap();

        let manifest = read_manifest(&path).unwrap();

        assert_eq!(manifest.name, "demo");
        assert_eq!(manifest.wrap_width, 80);
        assert!(!manifest.suppress_comments);
        assert_eq!(manifest.tables.len(), 1);

        let table = &manifest.tables[0];
        assert_eq!(table.columns.len(), 3);
        assert!(table.columns[0].identity);
        assert!(table.columns[2].sequence);
        assert_eq!(
            table.generated_key,
            Some(GeneratedKey {
                column: "id".to_string(),
                retrieval: KeyRetrieval::JdbcStandard
            })
        );
    }

    #[test]
    fn read_manifest_substitutes_env_variables() {
        env::set_var("MYBATISGEN_TEST_PACKAGE", "com.acme.mapper");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(YAML_CONFIG_NAME);
        std::fs::write(
            &path,
            MANIFEST_YAML.replace("com.example.mapper", "${MYBATISGEN_TEST_PACKAGE}"),
        )
        .unwrap();

        let manifest = read_manifest(&path).unwrap();
        assert_eq!(manifest.java_package, "com.acme.mapper");
    }

    #[test]
    fn manifest_round_trips_through_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(YAML_CONFIG_NAME);
        std::fs::write(&path, MANIFEST_YAML).unwrap();

        let manifest = read_manifest(&path).unwrap();

        let rewritten = dir.path().join("rewritten.yaml");
        write_manifest(&manifest, &rewritten).unwrap();

        let reread = read_manifest(&rewritten).unwrap();
        assert_eq!(manifest, reread);
    }

    #[test]
    fn select_retrieval_parses_statement_and_order() {
        let yaml = MANIFEST_YAML.replace(
            "      retrieval: jdbc_standard",
            "      retrieval:\n        select:\n          statement: SELECT LAST_INSERT_ID()\n          order: AFTER",
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(YAML_CONFIG_NAME);
        std::fs::write(&path, yaml).unwrap();

        let manifest = read_manifest(&path).unwrap();
        let generated_key = manifest.tables[0].generated_key.as_ref().unwrap();
        match &generated_key.retrieval {
            KeyRetrieval::Select { statement, order } => {
                assert_eq!(statement, "SELECT LAST_INSERT_ID()");
                assert_eq!(order.as_str(), "AFTER");
            }
            other => panic!("expected select retrieval, got {:?}", other),
        }
    }

    #[test]
    fn columns_reject_missing_java_type() {
        let yaml = MANIFEST_YAML.replace("        java_type: java.lang.String\n", "");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(YAML_CONFIG_NAME);
        std::fs::write(&path, yaml).unwrap();

        assert!(matches!(
            read_manifest(&path),
            Err(ReadManifestError::CouldNotParseManifest(_))
        ));
    }
}
