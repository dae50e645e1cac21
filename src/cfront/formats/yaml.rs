//! YAML formatter
//!
//! Same document shape and depth limit as the JSON formatter.

use crate::cfront::ast::AstSnapshot;
use crate::cfront::formats::registry::{check_serde_depth, FormatError, Formatter};

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, snapshot: &AstSnapshot) -> Result<String, FormatError> {
        check_serde_depth(snapshot)?;
        serde_yaml::to_string(snapshot).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "YAML tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfront::formats::registry::MAX_SERDE_DEPTH;

    #[test]
    fn test_yaml_round_trips_through_value() {
        let snapshot = AstSnapshot::new("Declaration", "int x");
        let output = YamlFormatter.serialize(&snapshot).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(value["node_type"].as_str(), Some("Declaration"));
        assert_eq!(value["label"].as_str(), Some("int x"));
        assert!(value["children"].as_sequence().is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn test_depth_limit_is_inclusive() {
        let mut snapshot = AstSnapshot::new("Number", "1");
        for _ in 1..MAX_SERDE_DEPTH {
            snapshot = AstSnapshot::new("BinaryOp", "-").with_child(snapshot);
        }
        assert!(YamlFormatter.serialize(&snapshot).is_ok());

        let deeper = AstSnapshot::new("BinaryOp", "-").with_child(snapshot);
        assert!(matches!(
            YamlFormatter.serialize(&deeper),
            Err(FormatError::TooDeep { depth, .. }) if depth == MAX_SERDE_DEPTH + 1
        ));
    }
}
