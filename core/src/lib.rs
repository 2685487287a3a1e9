// public
pub mod generator;
pub mod manifest;
pub mod plugin;

mod helpers;
pub use helpers::{snake_to_camel, to_pascal_case, write_file, WriteFileError};

mod logger;
pub use logger::{setup_info_logger, setup_logger};

mod types;
pub use types::code::Code;
