use crate::generator::java_bindings::{JavaMethod, JavaParameter, MapperInterface};
use crate::manifest::table::{KeyOrder, KeyRetrieval, Table};

pub const BATCH_INSERT: &str = "batchInsert";
pub const BATCH_INSERT_SELECTIVE: &str = "batchInsertSelective";

/// The name the list parameter is bound under, referenced by the foreach
/// collection in the SQL map.
pub const RECORD_LIST: &str = "recordList";

/// One non-identity column of the statement. The INSERT clause and VALUES
/// clause are both driven off this single ordered list, so their column
/// order can never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    /// Escaped SQL identifier as it appears in the INSERT column list.
    pub column: String,

    /// Bind placeholder as it appears in the VALUES tuple.
    pub placeholder: String,

    /// Java property backing the placeholder, used by selective guards.
    pub property: String,

    /// Sequence columns are computed inline and never guarded or prefixed.
    pub sequence: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectKey {
    pub result_type: String,
    pub key_property: String,
    pub order: KeyOrder,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedKeyHandling {
    /// Driver-returned key: the statement carries useGeneratedKeys.
    JdbcStandard { key_property: String },

    /// A nested selectKey fragment runs the configured statement.
    SelectKey(SelectKey),
}

/// Everything needed to emit one batch insert SQL map element. Plain data,
/// rendering to XML text is a separate step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInsertStatement {
    pub id: String,
    pub parameter_type: String,
    pub table_name: String,
    pub entries: Vec<ColumnEntry>,
    pub generated_key: Option<GeneratedKeyHandling>,
}

fn build_statement(table: &Table, entity_type: &str, id: &str) -> BatchInsertStatement {
    let entries = table
        .columns
        .iter()
        .filter(|column| !column.identity)
        .map(|column| {
            // sequence values are computed inline, not read off the entity,
            // so they get no loop variable prefix
            let prefix = if column.sequence { "" } else { "item." };
            ColumnEntry {
                column: column.escaped_column_name(),
                placeholder: column.parameter_clause(prefix),
                property: column.property_name(),
                sequence: column.sequence,
            }
        })
        .collect();

    let generated_key = table.generated_key.as_ref().and_then(|generated_key| {
        let column = table.column(&generated_key.column)?;
        let handling = match &generated_key.retrieval {
            KeyRetrieval::JdbcStandard => GeneratedKeyHandling::JdbcStandard {
                key_property: column.property_name(),
            },
            KeyRetrieval::Select { statement, order } => {
                GeneratedKeyHandling::SelectKey(SelectKey {
                    result_type: column.java_type.clone(),
                    key_property: column.property_name(),
                    order: *order,
                    statement: statement.clone(),
                })
            }
        };
        Some(handling)
    });

    BatchInsertStatement {
        id: id.to_string(),
        parameter_type: entity_type.to_string(),
        table_name: table.qualified_name(),
        entries,
        generated_key,
    }
}

pub fn build_batch_insert_statement(table: &Table, entity_type: &str) -> BatchInsertStatement {
    build_statement(table, entity_type, BATCH_INSERT)
}

pub fn build_batch_insert_selective_statement(
    table: &Table,
    entity_type: &str,
) -> BatchInsertStatement {
    build_statement(table, entity_type, BATCH_INSERT_SELECTIVE)
}

/// Adds the batchInsert / batchInsertSelective method pair to the mapper
/// interface and registers the imports they need.
pub fn build_interface_methods(interface: &mut MapperInterface, entity_type: &str) {
    let entity_simple = entity_type.rsplit('.').next().unwrap_or(entity_type).to_string();

    interface.add_import("java.util.List");
    interface.add_import("org.apache.ibatis.annotations.Param");
    interface.add_import(entity_type);

    for name in [BATCH_INSERT, BATCH_INSERT_SELECTIVE] {
        interface.add_method(JavaMethod {
            name: name.to_string(),
            return_type: "int".to_string(),
            parameters: vec![JavaParameter {
                annotation: Some(format!("@Param(\"{}\")", RECORD_LIST)),
                type_: format!("List<{}>", entity_simple),
                name: RECORD_LIST.to_string(),
            }],
            javadoc: Vec::new(),
        });
    }
}
