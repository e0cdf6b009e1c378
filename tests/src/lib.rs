//! Shared builders for the integration tests. Building trees through these
//! keeps the test bodies close to the shape of the rendered source.

use riva_ast::ast::*;

pub fn name(name: &str) -> ExpressionNode {
    ExpressionNode::Name(name.to_string())
}

pub fn identifier(name: &str) -> ExpressionNode {
    ExpressionNode::Identifier(name.to_string())
}

pub fn number(value: f64) -> ExpressionNode {
    ExpressionNode::Number(value)
}

pub fn text(value: &str) -> ExpressionNode {
    ExpressionNode::Text(value.to_string())
}

pub fn unary(operator: &str, operand: ExpressionNode) -> ExpressionNode {
    ExpressionNode::Unary(Box::new(UnaryExpressionNode {
        operator: operator.to_string(),
        operand,
    }))
}

pub fn binary(operator: &str, left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
    ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left,
        operator: operator.to_string(),
        right,
    }))
}

pub fn property(object: ExpressionNode, property: &str) -> ExpressionNode {
    ExpressionNode::Property(Box::new(MemberExpressionNode {
        object,
        property: property.to_string(),
    }))
}

pub fn index(object: ExpressionNode, idx: ExpressionNode) -> ExpressionNode {
    ExpressionNode::Index(Box::new(IndexExpressionNode { object, index: idx }))
}

pub fn method(
    object: ExpressionNode,
    method: &str,
    arguments: Vec<ExpressionNode>,
) -> ExpressionNode {
    ExpressionNode::Method(Box::new(MethodCallNode {
        object,
        method: method.to_string(),
        arguments,
    }))
}

pub fn builtin(name: &str, arguments: Vec<ExpressionNode>) -> ExpressionNode {
    ExpressionNode::Builtin(Box::new(BuiltinCallNode {
        name: name.to_string(),
        arguments,
    }))
}

pub fn matches(left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
    ExpressionNode::Matches(Box::new(MatchesNode { left, right }))
}

pub fn conditional(
    condition: ExpressionNode,
    then_branch: ExpressionNode,
    else_branch: ExpressionNode,
) -> ExpressionNode {
    ExpressionNode::Conditional(Box::new(ConditionalNode {
        condition,
        then_branch,
        else_branch,
    }))
}

pub fn array(elements: Vec<ExpressionNode>) -> ExpressionNode {
    ExpressionNode::Array(ArrayLiteralNode { elements })
}

pub fn map(entries: Vec<(ExpressionNode, ExpressionNode)>) -> ExpressionNode {
    ExpressionNode::Map(MapLiteralNode {
        entries: entries
            .into_iter()
            .map(|(key, value)| PairNode { key, value })
            .collect(),
    })
}
