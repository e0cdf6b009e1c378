//! Visitor pattern implementation for traversing expression trees.
//!
//! Implement [`Visitor`] to perform an operation over the tree; nodes
//! accept visitors through [`Visitable`]. The default method bodies
//! recurse into children, so a visitor only overrides the variants it
//! cares about.

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error produced by a visitor.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A trait for types that can be visited by a [`Visitor`].
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;

    /// Visits the children of this node with the given visitor.
    ///
    /// The default implementation does nothing.
    fn visit_children<V: Visitor + ?Sized>(&self, _visitor: &mut V) -> VisitResult<V::Output> {
        Ok(Default::default())
    }
}

/// A visitor over expression trees.
///
/// The default implementations recurse into children and produce
/// `Self::Output::default()` at the leaves.
pub trait Visitor {
    /// The output type of the visitor.
    type Output: Default;

    fn visit_nil(&mut self) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_identifier(&mut self, _name: &str) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_number(&mut self, _value: f64) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_bool(&mut self, _value: bool) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_text(&mut self, _value: &str) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_name(&mut self, _name: &str) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_matches(&mut self, node: &MatchesNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_member_expr(&mut self, node: &MemberExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_index_expr(&mut self, node: &IndexExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_method_call(&mut self, node: &MethodCallNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_builtin_call(&mut self, node: &BuiltinCallNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_function_call(&mut self, node: &FunctionCallNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_conditional(&mut self, node: &ConditionalNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_array_literal(&mut self, node: &ArrayLiteralNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_map_literal(&mut self, node: &MapLiteralNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_pair(&mut self, node: &PairNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    /// Helper to visit the children of a node.
    fn visit_children<T: Visitable + ?Sized>(&mut self, node: &T) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            ExpressionNode::Nil => visitor.visit_nil(),
            ExpressionNode::Identifier(name) => visitor.visit_identifier(name),
            ExpressionNode::Number(value) => visitor.visit_number(*value),
            ExpressionNode::Bool(value) => visitor.visit_bool(*value),
            ExpressionNode::Text(value) => visitor.visit_text(value),
            ExpressionNode::Name(name) => visitor.visit_name(name),
            ExpressionNode::Unary(node) => visitor.visit_unary_expr(node),
            ExpressionNode::Binary(node) => visitor.visit_binary_expr(node),
            ExpressionNode::Matches(node) => visitor.visit_matches(node),
            ExpressionNode::Property(node) => visitor.visit_member_expr(node),
            ExpressionNode::Index(node) => visitor.visit_index_expr(node),
            ExpressionNode::Method(node) => visitor.visit_method_call(node),
            ExpressionNode::Builtin(node) => visitor.visit_builtin_call(node),
            ExpressionNode::Function(node) => visitor.visit_function_call(node),
            ExpressionNode::Conditional(node) => visitor.visit_conditional(node),
            ExpressionNode::Array(node) => visitor.visit_array_literal(node),
            ExpressionNode::Map(node) => visitor.visit_map_literal(node),
        }
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            ExpressionNode::Unary(node) => node.visit_children(visitor),
            ExpressionNode::Binary(node) => node.visit_children(visitor),
            ExpressionNode::Matches(node) => node.visit_children(visitor),
            ExpressionNode::Property(node) => node.visit_children(visitor),
            ExpressionNode::Index(node) => node.visit_children(visitor),
            ExpressionNode::Method(node) => node.visit_children(visitor),
            ExpressionNode::Builtin(node) => node.visit_children(visitor),
            ExpressionNode::Function(node) => node.visit_children(visitor),
            ExpressionNode::Conditional(node) => node.visit_children(visitor),
            ExpressionNode::Array(node) => node.visit_children(visitor),
            ExpressionNode::Map(node) => node.visit_children(visitor),
            _ => Ok(Default::default()),
        }
    }
}

impl Visitable for UnaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_unary_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.operand.accept(visitor)
    }
}

impl Visitable for BinaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_binary_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.left.accept(visitor)?;
        self.right.accept(visitor)
    }
}

impl Visitable for MatchesNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_matches(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.left.accept(visitor)?;
        self.right.accept(visitor)
    }
}

impl Visitable for MemberExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_member_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.object.accept(visitor)
    }
}

impl Visitable for IndexExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_index_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.object.accept(visitor)?;
        self.index.accept(visitor)
    }
}

impl Visitable for MethodCallNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_method_call(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.object.accept(visitor)?;
        visit_all(&self.arguments, visitor)
    }
}

impl Visitable for BuiltinCallNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_builtin_call(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visit_all(&self.arguments, visitor)
    }
}

impl Visitable for FunctionCallNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_function_call(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visit_all(&self.arguments, visitor)
    }
}

impl Visitable for ConditionalNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_conditional(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.condition.accept(visitor)?;
        self.then_branch.accept(visitor)?;
        self.else_branch.accept(visitor)
    }
}

impl Visitable for ArrayLiteralNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_array_literal(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visit_all(&self.elements, visitor)
    }
}

impl Visitable for MapLiteralNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_map_literal(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        let mut last = Default::default();
        for entry in &self.entries {
            last = visitor.visit_pair(entry)?;
        }
        Ok(last)
    }
}

impl Visitable for PairNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_pair(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.key.accept(visitor)?;
        self.value.accept(visitor)
    }
}

fn visit_all<V: Visitor + ?Sized>(
    nodes: &[ExpressionNode],
    visitor: &mut V,
) -> VisitResult<V::Output> {
    let mut last = Default::default();
    for node in nodes {
        last = node.accept(visitor)?;
    }
    Ok(last)
}
