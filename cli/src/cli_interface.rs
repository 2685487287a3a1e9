use clap::{Parser, Subcommand};

#[allow(clippy::upper_case_acronyms)]
#[derive(Parser, Debug)]
#[clap(name = "mybatisgen", about, version)]
pub struct CLI {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates a starter mybatisgen.yaml manifest with an example table.
    ///
    /// Edit the manifest to describe your tables, then run
    /// `mybatisgen codegen`.
    #[clap(name = "new")]
    New {
        /// optional - The path to create the manifest in, default will be where the command is run.
        #[clap(long, short)]
        path: Option<String>,
    },

    /// Generates the mapper interfaces and SQL map XML documents described
    /// by mybatisgen.yaml.
    ///
    /// Example:
    /// `mybatisgen codegen`
    #[clap(name = "codegen")]
    Codegen {
        /// optional - The path to run the command in, default will be where the command is run.
        #[clap(long, short)]
        path: Option<String>,
    },
}
