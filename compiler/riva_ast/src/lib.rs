//! Abstract Syntax Tree (AST) for the Riva expression language.
//!
//! This crate defines the nodes used to represent Riva expressions, a
//! renderer that turns a tree back into minimally parenthesized source
//! text, and utilities for traversing trees.

pub mod ast;
pub mod conversions;
pub mod print;
pub mod visit;

// Re-export commonly used types
pub use ast::ExpressionNode;
pub use print::{render, render_with, Associativity, OperatorInfo, OperatorTable, MAX_PRECEDENCE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use riva_ast::ast::ExpressionNode;
/// use riva_ast::to_json;
///
/// let expr = ExpressionNode::Number(42.0);
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("Number"));
/// assert!(json.contains("42"));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
///
/// # Example
///
/// ```
/// use riva_ast::ast::ExpressionNode;
/// use riva_ast::from_json;
///
/// let expr: ExpressionNode = from_json(r#"{"Number": 42.0}"#).unwrap();
/// assert_eq!(expr, ExpressionNode::Number(42.0));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::ast::*;

    #[test]
    fn test_serialization() -> Result<()> {
        let expr = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left: ExpressionNode::Number(1.0),
            operator: "+".to_string(),
            right: ExpressionNode::Number(2.0),
        }));

        let json = to_json(&expr)?;
        let deserialized: ExpressionNode = from_json(&json)?;
        assert_eq!(expr, deserialized);
        Ok(())
    }
}
