//! AST node definitions for the Riva expression language.

use std::fmt;

use crate::print;

/// A single expression construct.
///
/// The variant set is closed: every consumer dispatches with an exhaustive
/// `match`, so an unhandled variant is a compile-time error rather than a
/// runtime surprise. Trees own their children outright (`Box`/`Vec`, no
/// back-references), which keeps them finite and acyclic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionNode {
    /// The `nil` literal.
    Nil,
    /// An identifier, emitted verbatim.
    Identifier(String),
    /// A numeric literal.
    Number(f64),
    /// A boolean literal.
    Bool(bool),
    /// A string literal; quoted and escaped when rendered.
    Text(String),
    /// A bare name reference, distinct from [`ExpressionNode::Identifier`]:
    /// identifiers come out of the lexer, names are introduced by the
    /// compiler (function references, environment slots).
    Name(String),
    Unary(Box<UnaryExpressionNode>),
    Binary(Box<BinaryExpressionNode>),
    Matches(Box<MatchesNode>),
    Property(Box<MemberExpressionNode>),
    Index(Box<IndexExpressionNode>),
    Method(Box<MethodCallNode>),
    Builtin(Box<BuiltinCallNode>),
    Function(Box<FunctionCallNode>),
    Conditional(Box<ConditionalNode>),
    Array(ArrayLiteralNode),
    Map(MapLiteralNode),
}

/// A unary operator application, e.g. `-x` or `not ready`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpressionNode {
    pub operator: String,
    pub operand: ExpressionNode,
}

/// A binary operator application. The operator symbol keys the
/// [`OperatorTable`](crate::print::OperatorTable) when the node is rendered.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: String,
    pub right: ExpressionNode,
}

/// A pattern-match test, e.g. `(name matches "^foo.*")`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchesNode {
    pub left: ExpressionNode,
    pub right: ExpressionNode,
}

/// Dotted member access, e.g. `user.age`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberExpressionNode {
    pub object: ExpressionNode,
    pub property: String,
}

/// Bracketed element access, e.g. `items[0]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexExpressionNode {
    pub object: ExpressionNode,
    pub index: ExpressionNode,
}

/// A method call on a base object, e.g. `user.has_role("admin")`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodCallNode {
    pub object: ExpressionNode,
    pub method: String,
    pub arguments: Vec<ExpressionNode>,
}

/// A call to a builtin, e.g. `len(items)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuiltinCallNode {
    pub name: String,
    pub arguments: Vec<ExpressionNode>,
}

/// A call to a user-defined function. Renders identically to a builtin
/// call; the distinction matters to the evaluator, not the renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCallNode {
    pub name: String,
    pub arguments: Vec<ExpressionNode>,
}

/// The ternary conditional, e.g. `ok ? a : b`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalNode {
    pub condition: ExpressionNode,
    pub then_branch: ExpressionNode,
    pub else_branch: ExpressionNode,
}

/// An array literal, e.g. `[1, 2, 3]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayLiteralNode {
    pub elements: Vec<ExpressionNode>,
}

/// A map literal. Entries keep insertion order and are rendered in that
/// order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapLiteralNode {
    pub entries: Vec<PairNode>,
}

/// One `key: value` entry of a map literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairNode {
    pub key: ExpressionNode,
    pub value: ExpressionNode,
}

impl fmt::Display for ExpressionNode {
    /// Formats the expression as minimally parenthesized Riva source text
    /// using the default operator table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print::render(self))
    }
}
