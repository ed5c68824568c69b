use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecwiseError {
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("No products available for recommendation")]
    EmptyInput,

    #[error("Could not decode document '{source_name}': {reason}")]
    DocumentDecode { source_name: String, reason: String },

    #[error("Unknown attribute id: {0}")]
    UnknownAttribute(String),

    #[error("No comparison session: {0}")]
    NoSession(String),

    #[error("Invalid specification pair: {0}")]
    InvalidSpecPair(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SpecwiseError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SpecwiseError::EmptyInput => Some(
                "Add products first:\n  specwise analyze <files>...\n  specwise add --brand <name> [id=value ...]",
            ),
            SpecwiseError::NoSession(_) => Some(
                "Start a comparison first:\n  specwise research \"<product type>\" --use-case \"<use case>\"",
            ),
            SpecwiseError::UnknownAttribute(_) => Some(
                "Run `specwise show` to list the attribute ids of the current catalog",
            ),
            SpecwiseError::InvalidSpecPair(_) => Some(
                "Manual specifications use id=value form:\n  specwise add --brand KONE capacity=1000 speed=1.5",
            ),
            SpecwiseError::DocumentDecode { .. } => Some(
                "Only plain-text documents are supported. Convert PDFs to text before analyzing.",
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecwiseError>;
