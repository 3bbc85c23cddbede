//! Built-in call templates
//!
//! `print` and `input` are not ordinary calls: their emitted form comes from a
//! template keyed by callee name. Templates receive the arguments already
//! rendered as JavaScript, plus the binding name when the call is the
//! right-hand side of an assignment.
//!
//! | Scrawl                  | JavaScript                 |
//! |-------------------------|----------------------------|
//! | `print(a, "b")`         | `console.log(a, "b");`     |
//! | `input("? ")`           | `input("? ");`             |
//! | `name = input("? ");`   | `let name = input("? ");`  |
//!
//! The binding passed to a template is the full left-hand side, so it is
//! `let name` on first assignment and `name` afterwards.
//!
//! `input` itself is supplied by the execution harness prelude.

use rustc_hash::FxHashMap;

/// Renders one built-in call. The second argument is the left-hand side when
/// the call is assigned.
pub type Template = fn(&[String], Option<&str>) -> String;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub template: Template,
    /// Whether the template also handles `x = name(...)`
    pub binds_result: bool,
}

/// Registry of built-in templates
pub struct StdLib {
    builtins: FxHashMap<&'static str, Builtin>,
}

impl StdLib {
    pub fn new() -> Self {
        let mut builtins = FxHashMap::default();
        builtins.insert(
            "print",
            Builtin {
                template: print_template,
                binds_result: false,
            },
        );
        builtins.insert(
            "input",
            Builtin {
                template: input_template,
                binds_result: true,
            },
        );
        Self { builtins }
    }

    /// Template for a call in statement position
    pub fn statement(&self, callee: &str) -> Option<Template> {
        self.builtins.get(callee).map(|builtin| builtin.template)
    }

    /// Template for a call on the right-hand side of an assignment
    pub fn binding(&self, callee: &str) -> Option<Template> {
        self.builtins
            .get(callee)
            .filter(|builtin| builtin.binds_result)
            .map(|builtin| builtin.template)
    }
}

impl Default for StdLib {
    fn default() -> Self {
        Self::new()
    }
}

fn print_template(args: &[String], binding: Option<&str>) -> String {
    let call = format!("console.log({})", args.join(", "));
    match binding {
        Some(target) => format!("{} = {};", target, call),
        None => format!("{};", call),
    }
}

fn input_template(args: &[String], binding: Option<&str>) -> String {
    let call = format!("input({})", args.join(", "));
    match binding {
        Some(target) => format!("{} = {};", target, call),
        None => format!("{};", call),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_print_template() {
        let stdlib = StdLib::new();
        let template = stdlib.statement("print").unwrap();
        assert_eq!(template(&args(&["a", "\"b\""]), None), "console.log(a, \"b\");");
        assert_eq!(template(&[], None), "console.log();");
    }

    #[test]
    fn test_input_template() {
        let stdlib = StdLib::new();
        let template = stdlib.binding("input").unwrap();
        assert_eq!(
            template(&args(&["\"name: \""]), Some("let name")),
            "let name = input(\"name: \");"
        );
        assert_eq!(template(&args(&["\"again: \""]), Some("name")), "name = input(\"again: \");");
        assert_eq!(template(&args(&["\"go\""]), None), "input(\"go\");");
    }

    #[test]
    fn test_only_input_binds() {
        let stdlib = StdLib::new();
        assert!(stdlib.binding("print").is_none());
        assert!(stdlib.binding("input").is_some());
        assert!(stdlib.statement("print").is_some());
        assert!(stdlib.statement("max").is_none());
    }
}
