use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::generator::java_bindings::{render_mapper_interface, MapperInterface};
use crate::generator::sql_map_bindings::{render_sql_map_document, SqlMapDocument};
use crate::helpers::{write_file, WriteFileError};
use crate::manifest::core::Manifest;
use crate::manifest::yaml::{read_manifest, ReadManifestError, YAML_CONFIG_NAME};
use crate::plugin::{batch_insert::BatchInsertPlugin, GeneratorPlugin};

fn java_file_location(project_path: &Path, java_dir: &str, mapper_name: &str) -> PathBuf {
    let mut path = project_path.join(java_dir);
    path.push(format!("{}.java", mapper_name));
    path
}

fn xml_file_location(project_path: &Path, xml_dir: &str, mapper_name: &str) -> PathBuf {
    let mut path = project_path.join(xml_dir);
    path.push(format!("{}.xml", mapper_name));
    path
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateMappersError {
    #[error("Could not read manifest: {0}")]
    CouldNotReadManifest(#[from] ReadManifestError),

    #[error("Plugin rejected the configuration: {0}")]
    PluginValidationFailed(String),

    #[error("Could not write mapper file: {0}")]
    CouldNotWriteMapperFile(#[from] WriteFileError),
}

/// Reads `mybatisgen.yaml` from the project path and generates every
/// table's mapper pair.
pub fn generate_mappers(project_path: &Path) -> Result<(), GenerateMappersError> {
    let manifest = read_manifest(&project_path.join(YAML_CONFIG_NAME))?;
    generate_mappers_from_manifest(project_path, &manifest)
}

pub fn generate_mappers_from_manifest(
    project_path: &Path,
    manifest: &Manifest,
) -> Result<(), GenerateMappersError> {
    let plugins: Vec<Box<dyn GeneratorPlugin>> = vec![Box::new(BatchInsertPlugin)];

    let mut warnings = Vec::new();
    for plugin in &plugins {
        if !plugin.validate(&mut warnings) {
            return Err(GenerateMappersError::PluginValidationFailed(warnings.join("; ")));
        }
    }
    for warning in warnings {
        warn!("{}", warning);
    }

    for table in &manifest.tables {
        let mapper_name = manifest.mapper_name(table);

        let mut interface = MapperInterface::new(&manifest.java_package, &mapper_name);
        let mut document = SqlMapDocument::new(manifest.mapper_namespace(table));

        for plugin in &plugins {
            plugin.client_generated(&mut interface, manifest, table);
            plugin.sql_map_document_generated(&mut document, manifest, table);
        }

        let java_path = java_file_location(project_path, &manifest.output.java_dir, &mapper_name);
        write_file(&java_path, render_mapper_interface(&interface).as_str())?;

        let xml_path = xml_file_location(project_path, &manifest.output.xml_dir, &mapper_name);
        write_file(&xml_path, render_sql_map_document(&document).as_str())?;

        info!("Generated {} for table {}", mapper_name, table.qualified_name());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::core::Output;
    use crate::manifest::table::{Column, GeneratedKey, KeyRetrieval, Table};
    use std::fs;

    fn manifest() -> Manifest {
        Manifest {
            name: "demo".to_string(),
            java_package: "com.example.mapper".to_string(),
            entity_package: "com.example.model".to_string(),
            output: Output {
                java_dir: "src/main/java/com/example/mapper".to_string(),
                xml_dir: "src/main/resources/mapper".to_string(),
            },
            wrap_width: 120,
            suppress_comments: true,
            tables: vec![Table {
                name: "user".to_string(),
                catalog: None,
                schema: None,
                entity_name: None,
                columns: vec![
                    Column {
                        name: "id".to_string(),
                        java_type: "java.lang.Long".to_string(),
                        java_property: None,
                        jdbc_type: None,
                        identity: true,
                        sequence: false,
                        delimited: false,
                    },
                    Column {
                        name: "name".to_string(),
                        java_type: "java.lang.String".to_string(),
                        java_property: None,
                        jdbc_type: None,
                        identity: false,
                        sequence: false,
                        delimited: false,
                    },
                ],
                generated_key: Some(GeneratedKey {
                    column: "id".to_string(),
                    retrieval: KeyRetrieval::JdbcStandard,
                }),
            }],
        }
    }

    #[test]
    fn generates_java_and_xml_files_per_table() {
        let dir = tempfile::tempdir().unwrap();

        generate_mappers_from_manifest(dir.path(), &manifest()).unwrap();

        let java = fs::read_to_string(
            dir.path().join("src/main/java/com/example/mapper/UserMapper.java"),
        )
        .unwrap();
        assert!(java.contains("public interface UserMapper"));
        assert!(java.contains("int batchInsert(@Param(\"recordList\") List<User> recordList);"));

        let xml =
            fs::read_to_string(dir.path().join("src/main/resources/mapper/UserMapper.xml"))
                .unwrap();
        assert!(xml.contains("<mapper namespace=\"com.example.mapper.UserMapper\">"));
        assert!(xml.contains("useGeneratedKeys=\"true\""));
        assert!(xml.contains("insert into user (name)"));
        assert!(xml.contains("<foreach collection=\"recordList\""));
    }

    #[test]
    fn generate_mappers_reads_the_manifest_from_the_project_path() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = serde_yaml::to_string(&manifest()).unwrap();
        fs::write(dir.path().join(YAML_CONFIG_NAME), yaml).unwrap();

        generate_mappers(dir.path()).unwrap();

        assert!(dir.path().join("src/main/resources/mapper/UserMapper.xml").exists());
    }

    #[test]
    fn missing_manifest_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            generate_mappers(dir.path()),
            Err(GenerateMappersError::CouldNotReadManifest(_))
        ));
    }
}
