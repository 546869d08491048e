//! DOM operation errors

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("Node not found")]
    NotFound,
    /// Hierarchy error (e.g., inserting an ancestor)
    #[error("Hierarchy request error")]
    HierarchyRequest,
    /// Operation not valid for this node type
    #[error("Invalid node type")]
    InvalidNodeType,
    /// Node is not a child
    #[error("Node is not a child")]
    NotAChild,
    /// Name contains characters not allowed in element/attribute names
    #[error("Invalid character in name {0:?}")]
    InvalidCharacter(String),
    /// The arena has no more addressable node slots
    #[error("Node arena is full")]
    CapacityExceeded,
}

/// Validate an element or attribute name
pub(crate) fn validate_name(name: &str) -> DomResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(DomError::InvalidCharacter(name.to_string()))
    }
}
