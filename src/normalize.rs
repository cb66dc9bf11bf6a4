use crate::model::{
    GsapPresetConfig, ReducedMotionMode, ScrollTriggerConfig, TimelineSettings, TriggerKind, Tween,
};

/// A JS identifier derived from a preset display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub const DEFAULT_SELECTOR: &str = ".section";
pub const FALLBACK_IDENT: &str = "preset";

/// Fill every unset field with its default. Idempotent; never errors.
pub fn normalize(config: &GsapPresetConfig) -> GsapPresetConfig {
    let mut out = config.clone();

    out.trigger.selector = Some(
        out.trigger
            .selector
            .unwrap_or_else(|| DEFAULT_SELECTOR.to_string()),
    );

    // A retained payload gets its inner defaults filled in place; one is
    // synthesized only when the scroll trigger is actually active.
    out.trigger.scroll_trigger = match out.trigger.scroll_trigger.take() {
        Some(st) => Some(fill_scroll_trigger(st)),
        None if out.trigger.kind == TriggerKind::ScrollTrigger => {
            Some(fill_scroll_trigger(ScrollTriggerConfig::default()))
        }
        None => None,
    };

    out.timeline_settings = fill_timeline_settings(out.timeline_settings);
    out.reduced_motion.mode = Some(out.reduced_motion.mode.unwrap_or(ReducedMotionMode::Skip));
    out.tweens = out.tweens.into_iter().map(fill_tween).collect();
    out
}

fn fill_scroll_trigger(st: ScrollTriggerConfig) -> ScrollTriggerConfig {
    ScrollTriggerConfig {
        trigger: Some(
            st.trigger
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_TRIGGER.to_string()),
        ),
        start: Some(
            st.start
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_START.to_string()),
        ),
        end: Some(
            st.end
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_END.to_string()),
        ),
        scrub: Some(st.scrub.unwrap_or(false)),
        pin: Some(st.pin.unwrap_or(false)),
        toggle_actions: Some(
            st.toggle_actions
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_TOGGLE_ACTIONS.to_string()),
        ),
        markers: Some(st.markers.unwrap_or(false)),
    }
}

fn fill_timeline_settings(ts: TimelineSettings) -> TimelineSettings {
    TimelineSettings {
        repeat: Some(ts.repeat.unwrap_or(0)),
        yoyo: Some(ts.yoyo.unwrap_or(false)),
        delay: Some(ts.delay.unwrap_or(0.0)),
    }
}

fn fill_tween(tween: Tween) -> Tween {
    Tween {
        target: Some(
            tween
                .target
                .unwrap_or_else(|| Tween::DEFAULT_TARGET.to_string()),
        ),
        properties: tween.properties,
        duration: Some(tween.duration.unwrap_or(Tween::DEFAULT_DURATION)),
        ease: Some(tween.ease.unwrap_or_else(|| Tween::DEFAULT_EASE.to_string())),
        // Unset position means "append at the timeline end"; left unset.
        position: tween.position,
        stagger: tween.stagger,
    }
}

/// Collapse a display name to a camelCase JS identifier.
///
/// Non-alphanumeric characters act as word boundaries and are dropped. A name
/// with no usable characters becomes `preset`; a leading digit is prefixed
/// with `preset` to stay a valid identifier.
pub fn sanitize_name(name: &str) -> Identifier {
    let mut out = String::with_capacity(name.len());
    let mut boundary = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if out.is_empty() {
                out.push(c.to_ascii_lowercase());
            } else if boundary {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
            boundary = false;
        } else {
            boundary = true;
        }
    }

    if out.is_empty() {
        return Identifier(FALLBACK_IDENT.to_string());
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, FALLBACK_IDENT);
    }
    Identifier(out)
}
