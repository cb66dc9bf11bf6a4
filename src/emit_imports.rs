use crate::emit::{EmitInput, Style, import_stmts};

/// Only the import statements needed by `emit_full`'s output; a literal
/// subset of its import section. The scroll-trigger plugin import appears
/// only when the trigger is scroll-bound.
pub fn emit_imports_only(input: &EmitInput) -> String {
    let mut out = String::new();
    for line in import_stmts(&input.shape, Style::Pretty) {
        out.push_str(line);
        out.push('\n');
    }
    out
}
