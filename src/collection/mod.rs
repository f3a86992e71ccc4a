pub mod builder;
pub mod environment;
pub mod model;
pub mod source;

pub use environment::EnvironmentFile;
pub use model::{ApiCollection, ApiDoc, ApiExample, DocSet, TreeNode};
pub use source::{DocSource, FileSource, LoadedDocs, SampleSource};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported collection schema: {0}")]
    UnsupportedSchema(String),
}
