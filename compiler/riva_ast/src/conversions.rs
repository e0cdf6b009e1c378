use crate::ast::ExpressionNode;

impl From<f64> for ExpressionNode {
    fn from(value: f64) -> Self {
        ExpressionNode::Number(value)
    }
}

impl From<bool> for ExpressionNode {
    fn from(value: bool) -> Self {
        ExpressionNode::Bool(value)
    }
}

impl From<&str> for ExpressionNode {
    fn from(value: &str) -> Self {
        ExpressionNode::Text(value.to_string())
    }
}

impl From<String> for ExpressionNode {
    fn from(value: String) -> Self {
        ExpressionNode::Text(value)
    }
}
