mod cli_interface;
mod console;

use std::{env, path::PathBuf, process};

use clap::Parser;

use mybatisgen::generator::build::generate_mappers;
use mybatisgen::manifest::core::{Manifest, Output};
use mybatisgen::manifest::table::{Column, GeneratedKey, KeyRetrieval, Table};
use mybatisgen::manifest::yaml::{write_manifest, YAML_CONFIG_NAME};
use mybatisgen::setup_info_logger;

use crate::cli_interface::{Commands, CLI};
use crate::console::{print_error_message, print_success_message};

fn resolve_project_path(override_path: &Option<String>) -> Result<PathBuf, std::io::Error> {
    match override_path {
        Some(path) => Ok(PathBuf::from(path)),
        None => env::current_dir(),
    }
}

fn starter_manifest() -> Manifest {
    Manifest {
        name: "my-project".to_string(),
        java_package: "com.example.mapper".to_string(),
        entity_package: "com.example.model".to_string(),
        output: Output {
            java_dir: "src/main/java/com/example/mapper".to_string(),
            xml_dir: "src/main/resources/mapper".to_string(),
        },
        wrap_width: 80,
        suppress_comments: false,
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
                    jdbc_type: Some("BIGINT".to_string()),
                    identity: true,
                    sequence: false,
                    delimited: false,
                },
                Column {
                    name: "name".to_string(),
                    java_type: "java.lang.String".to_string(),
                    java_property: None,
                    jdbc_type: Some("VARCHAR".to_string()),
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

fn handle_new_command(path: &Option<String>) -> Result<(), String> {
    let project_path = resolve_project_path(path).map_err(|e| e.to_string())?;
    let manifest_path = project_path.join(YAML_CONFIG_NAME);

    if manifest_path.exists() {
        return Err(format!("{} already exists in {}", YAML_CONFIG_NAME, project_path.display()));
    }

    write_manifest(&starter_manifest(), &manifest_path).map_err(|e| e.to_string())?;

    print_success_message(&format!("Created {}", manifest_path.display()));
    Ok(())
}

fn handle_codegen_command(path: &Option<String>) -> Result<(), String> {
    let project_path = resolve_project_path(path).map_err(|e| e.to_string())?;

    generate_mappers(&project_path).map_err(|e| e.to_string())?;

    print_success_message("Mapper generation complete");
    Ok(())
}

fn main() {
    setup_info_logger();

    let cli = CLI::parse();

    let result = match &cli.command {
        Commands::New { path } => handle_new_command(path),
        Commands::Codegen { path } => handle_codegen_command(path),
    };

    if let Err(error_message) = result {
        print_error_message(&error_message);
        process::exit(1);
    }
}
