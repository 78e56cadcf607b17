//! Control flow blocks.
//!
//! Apart from [`guard`], these return only the opening block; the caller
//! chains further branches and appends [`end`] itself:
//!
//! ```
//! use stanza_codegen::Code;
//! use stanza_codegen_swift::{control_flow, else_, end, statement};
//!
//! let code: Code = vec![
//!     control_flow("if ready", statement("start()")),
//!     else_(statement("wait()")),
//!     end(),
//! ]
//! .into();
//! assert_eq!(
//!     code.render_with(stanza_codegen::Indent::SWIFT),
//!     "if ready {\n    start()\n} else {\n    wait()\n}\n"
//! );
//! ```

use stanza_codegen::{Code, Fragment};

use crate::helpers::end;

/// `statement {` followed by the body, e.g. `if x == 0`, `for x in xs`,
/// `switch value`.
pub fn control_flow(statement: impl AsRef<str>, body: impl Into<Code>) -> Fragment {
    Fragment::block(format!("{} {{", statement.as_ref()), body)
}

/// `} else if condition {`
pub fn else_if(condition: impl AsRef<str>, body: impl Into<Code>) -> Fragment {
    Fragment::block(format!("}} else if {} {{", condition.as_ref()), body)
}

/// `} else {`
pub fn else_(body: impl Into<Code>) -> Fragment {
    Fragment::block("} else {", body)
}

/// `do {`
pub fn do_(body: impl Into<Code>) -> Fragment {
    Fragment::block("do {", body)
}

/// `} catch {` or `} catch pattern {`
pub fn catch(pattern: Option<&str>, body: impl Into<Code>) -> Fragment {
    let content = match pattern {
        Some(pattern) => format!("}} catch {pattern} {{"),
        None => "} catch {".to_string(),
    };
    Fragment::block(content, body)
}

/// A complete `guard` statement including its closing brace.
///
/// A single condition stays on the `guard` line; several are listed one per
/// line with the `else {` on its own line.
pub fn guard<S: AsRef<str>>(
    conditions: impl IntoIterator<Item = S>,
    else_body: impl Into<Code>,
) -> Fragment {
    let conditions: Vec<String> = conditions
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .collect();
    let else_body = else_body.into();

    let mut fragments = Vec::new();
    match conditions.as_slice() {
        [] => {}
        [single] => fragments.push(Fragment::block(format!("guard {single} else {{"), else_body)),
        [rest @ .., last] => {
            let mut lines: Vec<Fragment> = rest
                .iter()
                .map(|c| Fragment::line(format!("{c},")))
                .collect();
            lines.push(Fragment::line(last.clone()));
            fragments.push(Fragment::block("guard", lines));
            fragments.push(Fragment::block("else {", else_body));
        }
    }
    fragments.push(end());
    Fragment::group(fragments)
}

#[cfg(test)]
mod tests {
    use stanza_codegen::Indent;

    use super::*;
    use crate::helpers::statement;

    fn render(code: impl Into<Code>) -> String {
        code.into().render_with(Indent::SWIFT)
    }

    #[test]
    fn test_if_else_chain() {
        let chain = vec![
            control_flow("if x == 0", statement("zero()")),
            else_if("x > 0", statement("positive()")),
            else_(statement("negative()")),
            end(),
        ];
        assert_eq!(
            render(chain),
            "if x == 0 {\n    zero()\n} else if x > 0 {\n    positive()\n} else {\n    negative()\n}\n"
        );
    }

    #[test]
    fn test_do_catch() {
        let chain = vec![
            do_(statement("try load()")),
            catch(Some("let error as DecodingError"), statement("report(error)")),
            catch(None, statement("fail()")),
            end(),
        ];
        assert_eq!(
            render(chain),
            "do {\n    try load()\n} catch let error as DecodingError {\n    report(error)\n} catch {\n    fail()\n}\n"
        );
    }

    #[test]
    fn test_guard_single_condition() {
        let guard = guard(["let value = optional"], statement("return"));
        assert_eq!(
            render(guard),
            "guard let value = optional else {\n    return\n}\n"
        );
    }

    #[test]
    fn test_guard_multiple_conditions() {
        let guard = guard(["let a = a", "let b = b", "a < b"], statement("return nil"));
        assert_eq!(
            render(guard),
            "guard\n    let a = a,\n    let b = b,\n    a < b\nelse {\n    return nil\n}\n"
        );
    }

    #[test]
    fn test_guard_without_conditions() {
        assert_eq!(render(guard(Vec::<String>::new(), Code::Empty)), "}\n");
    }

    #[test]
    fn test_guard_nested_in_function() {
        let body = Fragment::block(
            "func f(x: Int?) {",
            vec![guard(["let x"], statement("return")), end()],
        );
        assert_eq!(
            render(body),
            "func f(x: Int?) {\n    guard let x else {\n        return\n    }\n}\n"
        );
    }
}
