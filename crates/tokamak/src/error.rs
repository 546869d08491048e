//! Template errors

use tokamak_dom::DomError;

/// Result type for template construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A list value was given for an attribute other than `class`
    #[error("Attribute \"{0}\" must be a scalar value; only \"class\" accepts a list")]
    InvalidAttribute(String),

    /// No component registered under the name or in the built-in namespace
    #[error("Component {0} not defined")]
    ComponentNotFound(String),

    /// A node built against one document was appended into another
    #[error("Node belongs to a different document")]
    WrongDocument,

    /// The native tree rejected an operation
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}
