pub mod batch_insert;

use crate::generator::java_bindings::MapperInterface;
use crate::generator::sql_map_bindings::SqlMapDocument;
use crate::manifest::core::Manifest;
use crate::manifest::table::Table;

/// Lifecycle hooks the generation pass drives once per table. Mirrors the
/// two sides of a mapper: the Java interface and the SQL map document.
pub trait GeneratorPlugin {
    /// Configuration gate run once before generation starts. Push human
    /// readable problems into `warnings`; returning false aborts the run.
    fn validate(&self, warnings: &mut Vec<String>) -> bool {
        let _ = warnings;
        true
    }

    /// Called while the mapper interface for `table` is being assembled.
    fn client_generated(&self, interface: &mut MapperInterface, manifest: &Manifest, table: &Table);

    /// Called while the SQL map document for `table` is being assembled.
    fn sql_map_document_generated(
        &self,
        document: &mut SqlMapDocument,
        manifest: &Manifest,
        table: &Table,
    );
}
