pub mod batch_insert;
pub mod build;
pub mod java_bindings;
pub mod sql_map_bindings;
