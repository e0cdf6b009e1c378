//! End-to-end rendering of realistic rule expressions, the way a debugger
//! or error message would show them to a user.

use pretty_assertions::assert_eq;
use riva_ast::render;
use tests::*;

#[test]
fn renders_an_access_rule() {
    let condition = binary(
        "and",
        binary(">=", property(name("user"), "age"), number(18.0)),
        binary(
            "or",
            binary("==", property(name("user"), "plan"), text("pro")),
            binary(">", builtin("credits", vec![name("user")]), number(0.0)),
        ),
    );
    let rule = conditional(condition, text("allow"), text("deny"));

    assert_eq!(
        render(&rule),
        r#"user.age >= 18 and (user.plan == "pro" or credits(user) > 0) ? "allow" : "deny""#
    );
}

#[test]
fn renders_a_request_filter() {
    let filter = binary(
        "and",
        matches(property(name("req"), "path"), text("^/api/.*")),
        unary("not", method(name("req"), "is_internal", vec![])),
    );

    assert_eq!(
        render(&filter),
        r#"(req.path matches "^/api/.*") and not req.is_internal()"#
    );
}

#[test]
fn renders_a_response_payload() {
    let payload = map(vec![
        (identifier("subject"), property(name("user"), "id")),
        (
            identifier("limit"),
            binary(
                "*",
                binary("+", name("base"), name("bonus")),
                number(2.0),
            ),
        ),
        (
            binary("+", number(1.0), number(2.0)),
            array(vec![number(1.0), unary("not", riva_ast::ExpressionNode::Bool(true))]),
        ),
    ]);

    assert_eq!(
        render(&payload),
        r#"{"subject": user.id, "limit": (base + bonus) * 2, (1 + 2): [1, not true]}"#
    );
}

#[test]
fn renders_indexed_history_lookup() {
    let lookup = binary(
        "<",
        index(property(name("visits"), "history"), number(0.0)),
        property(name("limits"), "daily"),
    );

    assert_eq!(render(&lookup), "visits.history[0] < limits.daily");
}
