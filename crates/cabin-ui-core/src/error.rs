//! Error types for Cabin UI.

/// The kind of resource a lookup was asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A localized string.
    String,
    /// A text appearance style.
    Style,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Style => write!(f, "style"),
        }
    }
}

/// The main error type for Cabin UI operations.
#[derive(Debug, thiserror::Error)]
pub enum CabinError {
    /// The host resource system has no entry for the requested id.
    #[error("No {kind} resource with id {id:#010x}")]
    ResourceNotFound { kind: ResourceKind, id: u32 },

    /// The resource exists but holds a different kind of value.
    #[error("Resource {id:#010x} is not a {expected} resource")]
    ResourceType { id: u32, expected: ResourceKind },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// `layout()` was called before any `measure()` pass.
    #[error("Layout requested before the widget was measured")]
    LayoutNotMeasured,
}

impl CabinError {
    /// Create a missing-resource error.
    pub fn resource_not_found(kind: ResourceKind, id: u32) -> Self {
        Self::ResourceNotFound { kind, id }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true if this error came from a failed resource lookup.
    pub fn is_resource_error(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. } | Self::ResourceType { .. })
    }
}

/// A specialized Result type for Cabin UI operations.
pub type Result<T> = std::result::Result<T, CabinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_display() {
        let err = CabinError::resource_not_found(ResourceKind::String, 0x7f0a_0001);
        assert_eq!(err.to_string(), "No string resource with id 0x7f0a0001");
        assert!(err.is_resource_error());
    }

    #[test]
    fn test_config_error_is_not_resource_error() {
        let err = CabinError::config("toolbar_height must not be negative");
        assert!(!err.is_resource_error());
        assert!(err.to_string().contains("toolbar_height"));
    }

    #[test]
    fn test_resource_type_display() {
        let err = CabinError::ResourceType {
            id: 0x10,
            expected: ResourceKind::Style,
        };
        assert_eq!(err.to_string(), "Resource 0x00000010 is not a style resource");
    }
}
