//! Rendering of expression trees back to Riva source text.
//!
//! The renderer is the inverse of the parser: the output of [`render`] is
//! valid input for the parser and re-parses to a tree with the same
//! evaluation semantics. Parentheses are inserted only where operator
//! precedence or associativity would otherwise change the parse; every
//! other construct has unambiguous delimiters of its own.
//!
//! Rendering is a pure function of the tree. It never mutates nodes, keeps
//! no state between calls, and cannot fail for a well-formed tree:
//! operators missing from the [`OperatorTable`] fall back to
//! [`MAX_PRECEDENCE`] instead of erroring.

use std::cmp::Ordering;
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::trace;

use crate::ast::{
    BinaryExpressionNode, ExpressionNode, PairNode, UnaryExpressionNode,
};

/// Precedence assigned to operators absent from the table. It is higher
/// than every table entry, so an unknown operator is never parenthesized
/// by its parent.
pub const MAX_PRECEDENCE: u8 = 99;

/// Unary operators rendered as `<op> <operand>` with no surrounding
/// parentheses. Every other unary operator renders as `(<op><operand>)`:
/// symbolic operators are ambiguous when stacked or adjacent to other
/// tokens, word-like ones are not.
const SPACED_UNARY_OPERATORS: &[&str] = &["!", "not"];

/// Grouping direction for chains of equal-precedence operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Precedence and associativity of one binary operator. A numerically
/// larger precedence binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorInfo {
    /// The fallback for operators missing from the table: maximum
    /// precedence, left-associative.
    pub const MAX: OperatorInfo = OperatorInfo {
        precedence: MAX_PRECEDENCE,
        associativity: Associativity::Left,
    };

    pub const fn new(precedence: u8, associativity: Associativity) -> Self {
        OperatorInfo {
            precedence,
            associativity,
        }
    }

    pub const fn left(precedence: u8) -> Self {
        OperatorInfo::new(precedence, Associativity::Left)
    }

    pub const fn right(precedence: u8) -> Self {
        OperatorInfo::new(precedence, Associativity::Right)
    }
}

/// The binary-operator table consulted while rendering.
///
/// The table is plain data so that callers targeting a different surface
/// syntax (a dialect with different operator spellings) can build their own
/// and pass it to [`render_with`] without touching the renderer. Lookups of
/// unknown symbols resolve to [`OperatorInfo::MAX`]; that fallback is part
/// of the table's contract, not an error.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: HashMap<String, OperatorInfo>,
}

impl OperatorTable {
    /// Creates a table with no entries. Every lookup on it falls back to
    /// [`OperatorInfo::MAX`].
    pub fn empty() -> Self {
        OperatorTable {
            entries: HashMap::new(),
        }
    }

    /// Adds or replaces an operator, builder-style.
    pub fn with_operator(mut self, symbol: &str, info: OperatorInfo) -> Self {
        self.insert(symbol, info);
        self
    }

    /// Adds or replaces an operator.
    pub fn insert(&mut self, symbol: &str, info: OperatorInfo) {
        self.entries.insert(symbol.to_string(), info);
    }

    /// Looks up an operator symbol, falling back to [`OperatorInfo::MAX`]
    /// for symbols the table does not know.
    pub fn lookup(&self, symbol: &str) -> OperatorInfo {
        match self.entries.get(symbol) {
            Some(&info) => info,
            None => {
                trace!("operator {symbol:?} not in table, using maximum precedence");
                OperatorInfo::MAX
            }
        }
    }
}

impl Default for OperatorTable {
    /// The standard Riva operator set.
    fn default() -> Self {
        let mut table = OperatorTable::empty();
        for symbol in ["or", "||"] {
            table.insert(symbol, OperatorInfo::left(10));
        }
        for symbol in ["and", "&&"] {
            table.insert(symbol, OperatorInfo::left(15));
        }
        for symbol in ["==", "!=", "<", ">", "<=", ">=", "in", "contains"] {
            table.insert(symbol, OperatorInfo::left(20));
        }
        for symbol in ["+", "-"] {
            table.insert(symbol, OperatorInfo::left(30));
        }
        for symbol in ["*", "/", "%"] {
            table.insert(symbol, OperatorInfo::left(40));
        }
        for symbol in ["**", "^"] {
            table.insert(symbol, OperatorInfo::right(60));
        }
        table
    }
}

lazy_static! {
    static ref DEFAULT_TABLE: OperatorTable = OperatorTable::default();
}

/// Renders an expression tree as minimally parenthesized source text using
/// the default operator table.
///
/// ```
/// use riva_ast::ast::{BinaryExpressionNode, ExpressionNode};
///
/// let sum = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
///     left: ExpressionNode::Name("a".to_string()),
///     operator: "+".to_string(),
///     right: ExpressionNode::Name("b".to_string()),
/// }));
/// let product = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
///     left: sum,
///     operator: "*".to_string(),
///     right: ExpressionNode::Name("c".to_string()),
/// }));
/// assert_eq!(riva_ast::render(&product), "(a + b) * c");
/// ```
pub fn render(expr: &ExpressionNode) -> String {
    render_with(expr, &DEFAULT_TABLE)
}

/// Renders an expression tree using a caller-supplied operator table.
pub fn render_with(expr: &ExpressionNode, table: &OperatorTable) -> String {
    let mut printer = Printer::new(table);
    printer.expression(expr);
    printer.finish()
}

/// Which operand position of a binary node a child occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Decides whether a binary child must be parenthesized inside a binary
/// parent. The decision is local: it depends only on the child's own
/// top-level operator, the parent's operator, and the side the child is on.
///
/// A child binding looser than its parent is always wrapped. At equal
/// precedence, the left operand of a right-associative operator is
/// wrapped; every other equal-precedence operand renders in written order
/// unwrapped, so chains like `a + b + c + d` carry no parentheses.
fn needs_parentheses(child: OperatorInfo, parent: OperatorInfo, side: Side) -> bool {
    match child.precedence.cmp(&parent.precedence) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => side == Side::Left && parent.associativity == Associativity::Right,
    }
}

/// Quotes a string literal so it re-parses to the identical value: wraps
/// it in double quotes and escapes quote characters, backslashes and
/// control characters.
fn quote(text: &str) -> String {
    format!("{text:?}")
}

/// Append-only buffer the recursive dispatch writes into.
struct Printer<'a> {
    table: &'a OperatorTable,
    out: String,
}

impl<'a> Printer<'a> {
    fn new(table: &'a OperatorTable) -> Self {
        Printer {
            table,
            out: String::new(),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn expression(&mut self, expr: &ExpressionNode) {
        match expr {
            ExpressionNode::Nil => self.out.push_str("nil"),
            ExpressionNode::Identifier(name) | ExpressionNode::Name(name) => {
                self.out.push_str(name)
            }
            ExpressionNode::Number(value) => self.out.push_str(&value.to_string()),
            ExpressionNode::Bool(true) => self.out.push_str("true"),
            ExpressionNode::Bool(false) => self.out.push_str("false"),
            ExpressionNode::Text(value) => self.out.push_str(&quote(value)),
            ExpressionNode::Unary(node) => self.unary(node),
            ExpressionNode::Binary(node) => self.binary(node),
            ExpressionNode::Matches(node) => {
                self.out.push('(');
                self.expression(&node.left);
                self.out.push_str(" matches ");
                self.expression(&node.right);
                self.out.push(')');
            }
            ExpressionNode::Property(node) => {
                self.expression(&node.object);
                self.out.push('.');
                self.out.push_str(&node.property);
            }
            ExpressionNode::Index(node) => {
                self.expression(&node.object);
                self.out.push('[');
                self.expression(&node.index);
                self.out.push(']');
            }
            ExpressionNode::Method(node) => {
                self.expression(&node.object);
                self.out.push('.');
                self.out.push_str(&node.method);
                self.arguments(&node.arguments);
            }
            ExpressionNode::Builtin(node) => {
                self.out.push_str(&node.name);
                self.arguments(&node.arguments);
            }
            ExpressionNode::Function(node) => {
                self.out.push_str(&node.name);
                self.arguments(&node.arguments);
            }
            ExpressionNode::Conditional(node) => {
                self.expression(&node.condition);
                self.out.push_str(" ? ");
                self.expression(&node.then_branch);
                self.out.push_str(" : ");
                self.expression(&node.else_branch);
            }
            ExpressionNode::Array(node) => {
                self.out.push('[');
                self.comma_separated(&node.elements);
                self.out.push(']');
            }
            ExpressionNode::Map(node) => {
                self.out.push('{');
                for (i, entry) in node.entries.iter().enumerate() {
                    if i != 0 {
                        self.out.push_str(", ");
                    }
                    self.pair(entry);
                }
                self.out.push('}');
            }
        }
    }

    fn unary(&mut self, node: &UnaryExpressionNode) {
        if SPACED_UNARY_OPERATORS.contains(&node.operator.as_str()) {
            self.out.push_str(&node.operator);
            self.out.push(' ');
            self.expression(&node.operand);
        } else {
            self.out.push('(');
            self.out.push_str(&node.operator);
            self.expression(&node.operand);
            self.out.push(')');
        }
    }

    fn binary(&mut self, node: &BinaryExpressionNode) {
        let parent = self.table.lookup(&node.operator);
        self.operand(&node.left, parent, Side::Left);
        self.out.push(' ');
        self.out.push_str(&node.operator);
        self.out.push(' ');
        self.operand(&node.right, parent, Side::Right);
    }

    /// Renders one side of a binary node, parenthesized when required.
    /// Non-binary children are never wrapped here: each non-binary form
    /// carries its own delimiters.
    fn operand(&mut self, expr: &ExpressionNode, parent: OperatorInfo, side: Side) {
        let wrap = match expr {
            ExpressionNode::Binary(child) => {
                needs_parentheses(self.table.lookup(&child.operator), parent, side)
            }
            _ => false,
        };
        if wrap {
            self.out.push('(');
            self.expression(expr);
            self.out.push(')');
        } else {
            self.expression(expr);
        }
    }

    /// One `key: value` map entry. Binary keys render unquoted inside
    /// parentheses, unary keys render unquoted as-is; every other key is
    /// the quoted rendering of the key node.
    fn pair(&mut self, entry: &PairNode) {
        match &entry.key {
            ExpressionNode::Binary(_) => {
                self.out.push('(');
                self.expression(&entry.key);
                self.out.push(')');
            }
            ExpressionNode::Unary(_) => self.expression(&entry.key),
            key => {
                let rendered = render_with(key, self.table);
                self.out.push_str(&quote(&rendered));
            }
        }
        self.out.push_str(": ");
        self.expression(&entry.value);
    }

    fn arguments(&mut self, args: &[ExpressionNode]) {
        self.out.push('(');
        self.comma_separated(args);
        self.out.push(')');
    }

    fn comma_separated(&mut self, exprs: &[ExpressionNode]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i != 0 {
                self.out.push_str(", ");
            }
            self.expression(expr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_max_precedence() {
        let table = OperatorTable::default();
        assert_eq!(table.lookup("<=>"), OperatorInfo::MAX);
        assert_eq!(table.lookup("+"), OperatorInfo::left(30));
        assert_eq!(table.lookup("**"), OperatorInfo::right(60));
    }

    #[test]
    fn lower_precedence_child_is_wrapped() {
        let add = OperatorInfo::left(30);
        let mul = OperatorInfo::left(40);
        assert!(needs_parentheses(add, mul, Side::Left));
        assert!(needs_parentheses(add, mul, Side::Right));
        assert!(!needs_parentheses(mul, add, Side::Left));
        assert!(!needs_parentheses(mul, add, Side::Right));
    }

    #[test]
    fn equal_precedence_wraps_only_left_of_right_associative() {
        let add = OperatorInfo::left(30);
        let pow = OperatorInfo::right(60);
        assert!(!needs_parentheses(add, add, Side::Left));
        assert!(!needs_parentheses(add, add, Side::Right));
        assert!(needs_parentheses(pow, pow, Side::Left));
        assert!(!needs_parentheses(pow, pow, Side::Right));
    }

    #[test]
    fn unknown_operators_never_wrap_each_other() {
        assert!(!needs_parentheses(OperatorInfo::MAX, OperatorInfo::MAX, Side::Left));
        assert!(!needs_parentheses(OperatorInfo::MAX, OperatorInfo::MAX, Side::Right));
    }

    #[test]
    fn quote_escapes_quotes_and_control_characters() {
        assert_eq!(quote("foobar"), r#""foobar""#);
        assert_eq!(quote(r#"he said "hi""#), r#""he said \"hi\"""#);
        assert_eq!(quote("line\nbreak"), r#""line\nbreak""#);
    }
}
