use crate::emit::{EmitInput, Style, render_script};

/// Ready-to-run script: imports, plugin registration, reduced-motion guard
/// when requested, timeline construction, step calls, listeners.
pub fn emit_full(input: &EmitInput) -> String {
    render_script(input, Style::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dispatch::dispatch,
        model::{GsapPresetConfig, TriggerConfig, TriggerKind},
        normalize::{normalize, sanitize_name},
        reduced_motion::apply_reduced_motion,
    };

    fn input_for(kind: TriggerKind) -> EmitInput {
        let normalized = normalize(&GsapPresetConfig {
            trigger: TriggerConfig {
                kind,
                ..TriggerConfig::default()
            },
            ..GsapPresetConfig::default()
        });
        let shape = dispatch(&normalized);
        let mode = normalized.reduced_motion.mode.unwrap_or_default();
        let (tweens, timeline, guard) =
            apply_reduced_motion(&normalized.tweens, &normalized.timeline_settings, mode);
        EmitInput {
            ident: sanitize_name("demo"),
            shape,
            tweens,
            timeline,
            guard,
        }
    }

    #[test]
    fn scroll_full_registers_plugin_and_binding() {
        let full = emit_full(&input_for(TriggerKind::ScrollTrigger));
        assert!(full.contains(r#"import { ScrollTrigger } from "gsap/ScrollTrigger";"#));
        assert!(full.contains("gsap.registerPlugin(ScrollTrigger);"));
        assert!(full.contains(r#"trigger: ".section","#));
        assert!(full.contains(r#"toggleActions: "play none none reverse","#));
    }

    #[test]
    fn load_full_is_guarded_by_default() {
        let full = emit_full(&input_for(TriggerKind::Load));
        assert!(full.contains("prefers-reduced-motion"));
        assert!(full.contains("if (!reduceMotion) {"));
        // Guarded body is indented one level.
        assert!(full.contains("  const demo = gsap.timeline({"));
    }

    #[test]
    fn hover_full_attaches_both_listeners() {
        let full = emit_full(&input_for(TriggerKind::Hover));
        assert!(full.contains(r#"el.addEventListener("mouseenter", () => {"#));
        assert!(full.contains(r#"el.addEventListener("mouseleave", () => {"#));
        assert!(full.contains("demo.play();"));
        assert!(full.contains("demo.reverse();"));
        assert!(full.contains("paused: true,"));
    }

    #[test]
    fn click_full_restarts_timeline() {
        let full = emit_full(&input_for(TriggerKind::Click));
        assert!(full.contains(r#"el.addEventListener("click", () => {"#));
        assert!(full.contains("demo.restart();"));
    }

    #[test]
    fn empty_tweens_still_emit_a_timeline() {
        let full = emit_full(&input_for(TriggerKind::Load));
        assert!(full.contains("gsap.timeline({"));
        assert!(!full.contains(".to("));
    }
}
