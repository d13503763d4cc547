//! Call-site selection
//!
//! Only `test(name, fn)` calls are checked, where `test` is a plain identifier and `fn` is a
//! function or arrow function with a `{ ... }` body. Anything else is not a test for this rule
//! and is skipped without a report.

use crate::js::ast::{BlockStatement, CallExpression, FunctionBody};

/// Callee name of the tracked test function
pub const TEST_CALLEE: &str = "test";

pub fn is_test_call(call: &CallExpression) -> bool {
    test_body(call).is_some()
}

/// Block body of the test function, if `call` is a test call
pub fn test_body(call: &CallExpression) -> Option<&BlockStatement> {
    if call.callee_name() != Some(TEST_CALLEE) {
        return None;
    }
    let function = call.arguments.get(1)?.as_function()?;
    match &function.body {
        FunctionBody::Block(block) => Some(block),
        FunctionBody::Expression(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::parse;

    fn first_call(source: &str) -> CallExpression {
        parse(source).unwrap().calls.remove(0)
    }

    #[test]
    fn test_accepts_function_and_arrow_bodies() {
        assert!(is_test_call(&first_call("test('a', () => {})")));
        assert!(is_test_call(&first_call("test('a', async () => {})")));
        assert!(is_test_call(&first_call("test('a', function () {})")));
        assert!(is_test_call(&first_call("test('a', async function named() {}, 5000)")));
    }

    #[test]
    fn test_rejects_other_shapes() {
        for source in [
            "test(null)",
            "test('a')",
            "test('a', null)",
            "test('a', done)",
            "test('a', () => expect(1).toBe(1))",
            "it('a', () => {})",
            "Test('a', () => {})",
            "test.skip('a', () => {})",
            "describe.test('a', () => {})",
        ] {
            assert!(!is_test_call(&first_call(source)), "{}", source);
        }
    }

    #[test]
    fn test_body_range_covers_braces() {
        let source = "test('a', () => { run(); })";
        let call = first_call(source);
        let body = test_body(&call).unwrap();
        assert_eq!(&source[body.range.span.clone()], "{ run(); }");
    }
}
