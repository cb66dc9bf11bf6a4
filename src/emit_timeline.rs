use crate::emit::{EmitInput, JsWriter, Style, tween_call, write_timeline};

/// The timeline construction and step calls alone, for embedding inside a
/// caller's own setup code. No imports, no guard, no listener registration.
/// A scroll binding is part of timeline construction and is kept.
pub fn emit_timeline_only(input: &EmitInput) -> String {
    let mut w = JsWriter::new(Style::Pretty);
    write_timeline(&mut w, input);
    if !input.tweens.is_empty() {
        w.blank();
        for tween in &input.tweens {
            w.stmt(&tween_call(input.ident.as_str(), tween, Style::Pretty));
        }
    }
    w.finish()
}
