use crate::emit::{EmitInput, Style, render_script};

/// The full script rendered compactly: same statement stream, no
/// indentation, no blank lines, no comments. Never longer than `emit_full`.
pub fn emit_minified(input: &EmitInput) -> String {
    render_script(input, Style::Compact)
}
