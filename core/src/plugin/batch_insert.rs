use crate::generator::batch_insert::{
    build_batch_insert_selective_statement, build_batch_insert_statement, build_interface_methods,
};
use crate::generator::java_bindings::MapperInterface;
use crate::generator::sql_map_bindings::{
    batch_insert_element, batch_insert_selective_element, RenderConfig, SqlMapDocument, XmlNode,
    GENERATED_COMMENT,
};
use crate::manifest::core::Manifest;
use crate::manifest::table::Table;
use crate::plugin::GeneratorPlugin;

/// Adds the batchInsert / batchInsertSelective method pair and their SQL
/// map insert elements for every table.
pub struct BatchInsertPlugin;

impl BatchInsertPlugin {
    fn method_javadoc(table: &Table) -> Vec<String> {
        vec![
            format!("Generated for table {}.", table.qualified_name()),
            String::new(),
            "@mbg.generated".to_string(),
        ]
    }
}

impl GeneratorPlugin for BatchInsertPlugin {
    fn client_generated(
        &self,
        interface: &mut MapperInterface,
        manifest: &Manifest,
        table: &Table,
    ) {
        let entity_type = manifest.entity_type(table);
        let before = interface.methods.len();
        build_interface_methods(interface, &entity_type);

        if !manifest.suppress_comments {
            for method in &mut interface.methods[before..] {
                method.javadoc = Self::method_javadoc(table);
            }
        }
    }

    fn sql_map_document_generated(
        &self,
        document: &mut SqlMapDocument,
        manifest: &Manifest,
        table: &Table,
    ) {
        let entity_type = manifest.entity_type(table);
        let config = RenderConfig { wrap_width: manifest.wrap_width };

        let statement = build_batch_insert_statement(table, &entity_type);
        let mut element = batch_insert_element(&statement, &config);
        if !manifest.suppress_comments {
            element.children.insert(0, XmlNode::Text(GENERATED_COMMENT.to_string()));
        }
        document.elements.push(element);

        let selective = build_batch_insert_selective_statement(table, &entity_type);
        let mut selective_element = batch_insert_selective_element(&selective);
        if !manifest.suppress_comments {
            selective_element.children.insert(0, XmlNode::Text(GENERATED_COMMENT.to_string()));
        }
        document.elements.push(selective_element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::core::Output;
    use crate::manifest::table::Column;

    fn manifest() -> Manifest {
        Manifest {
            name: "demo".to_string(),
            java_package: "com.example.mapper".to_string(),
            entity_package: "com.example.model".to_string(),
            output: Output {
                java_dir: "src/main/java".to_string(),
                xml_dir: "src/main/resources".to_string(),
            },
            wrap_width: 80,
            suppress_comments: false,
            tables: vec![table()],
        }
    }

    fn table() -> Table {
        Table {
            name: "user".to_string(),
            catalog: None,
            schema: None,
            entity_name: None,
            columns: vec![Column {
                name: "name".to_string(),
                java_type: "java.lang.String".to_string(),
                java_property: None,
                jdbc_type: None,
                identity: false,
                sequence: false,
                delimited: false,
            }],
            generated_key: None,
        }
    }

    #[test]
    fn adds_method_pair_and_both_insert_elements() {
        let manifest = manifest();
        let table = table();
        let plugin = BatchInsertPlugin;

        let mut interface = MapperInterface::new(&manifest.java_package, "UserMapper");
        plugin.client_generated(&mut interface, &manifest, &table);
        assert_eq!(interface.methods.len(), 2);
        assert!(!interface.methods[0].javadoc.is_empty());

        let mut document = SqlMapDocument::new(manifest.mapper_namespace(&table));
        plugin.sql_map_document_generated(&mut document, &manifest, &table);

        assert_eq!(document.elements.len(), 2);
        assert_eq!(document.elements[0].attribute("id"), Some("batchInsert"));
        assert_eq!(document.elements[1].attribute("id"), Some("batchInsertSelective"));
        assert_eq!(
            document.elements[0].children[0],
            XmlNode::Text(GENERATED_COMMENT.to_string())
        );
    }

    #[test]
    fn suppress_comments_drops_banners_and_javadoc() {
        let mut manifest = manifest();
        manifest.suppress_comments = true;
        let table = table();
        let plugin = BatchInsertPlugin;

        let mut interface = MapperInterface::new(&manifest.java_package, "UserMapper");
        plugin.client_generated(&mut interface, &manifest, &table);
        assert!(interface.methods.iter().all(|method| method.javadoc.is_empty()));

        let mut document = SqlMapDocument::new(manifest.mapper_namespace(&table));
        plugin.sql_map_document_generated(&mut document, &manifest, &table);
        assert_ne!(
            document.elements[0].children[0],
            XmlNode::Text(GENERATED_COMMENT.to_string())
        );
    }

    #[test]
    fn validate_accepts_by_default() {
        let mut warnings = Vec::new();
        assert!(BatchInsertPlugin.validate(&mut warnings));
        assert!(warnings.is_empty());
    }
}
