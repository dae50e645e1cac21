//! JSON formatter
//!
//! Pretty printed `serde_json` rendering of the snapshot: `node_type`, `label` and
//! `children` on every node. Trees deeper than
//! [`MAX_SERDE_DEPTH`](crate::cfront::formats::registry::MAX_SERDE_DEPTH) are refused.

use crate::cfront::ast::AstSnapshot;
use crate::cfront::formats::registry::{check_serde_depth, FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, snapshot: &AstSnapshot) -> Result<String, FormatError> {
        check_serde_depth(snapshot)?;
        serde_json::to_string_pretty(snapshot)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty printed JSON tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let snapshot = AstSnapshot::new("BinaryOp", "+").with_child(AstSnapshot::new("Number", "1"));
        let output = JsonFormatter.serialize(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["node_type"], "BinaryOp");
        assert_eq!(value["label"], "+");
        assert_eq!(value["children"][0]["label"], "1");
        assert_eq!(value["children"][0]["children"], serde_json::json!([]));
    }

    #[test]
    fn test_too_deep_is_an_error() {
        let mut snapshot = AstSnapshot::new("Number", "1");
        for _ in 0..1_000 {
            snapshot = AstSnapshot::new("BinaryOp", "+").with_child(snapshot);
        }
        assert_eq!(
            JsonFormatter.serialize(&snapshot),
            Err(FormatError::TooDeep {
                depth: 1_001,
                limit: 512
            })
        );
    }
}
