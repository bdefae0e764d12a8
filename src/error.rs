/// Errors raised by the spanning-tree core
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint was never registered with `Graph::add_node`.
    /// Carries the label rendered with `Debug`.
    UnknownNode(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownNode(label) => {
                write!(f, "Unknown node {label}: every edge endpoint must be added with add_node first")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_node() {
        let err = GraphError::UnknownNode(format!("{:?}", "Z"));
        assert!(err.to_string().contains("\"Z\""));
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = GraphError::UnknownNode("7".to_string()).into();
        assert_eq!(
            err.downcast_ref::<GraphError>(),
            Some(&GraphError::UnknownNode("7".to_string()))
        );
    }
}
