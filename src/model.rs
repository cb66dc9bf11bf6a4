use std::collections::BTreeMap;

use crate::error::{TweaveError, TweaveResult};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GsapPresetConfig {
    pub trigger: TriggerConfig,
    pub timeline_settings: TimelineSettings,
    pub reduced_motion: ReducedMotionConfig,
    pub tweens: Vec<Tween>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerConfig {
    pub kind: TriggerKind,
    pub selector: Option<String>,
    // Retained even while `kind != ScrollTrigger`; read only when it is.
    pub scroll_trigger: Option<ScrollTriggerConfig>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerKind {
    #[default]
    Load,
    ScrollTrigger,
    Click,
    Hover,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollTriggerConfig {
    pub trigger: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub scrub: Option<bool>,
    pub pin: Option<bool>,
    pub toggle_actions: Option<String>,
    pub markers: Option<bool>,
}

impl ScrollTriggerConfig {
    pub const DEFAULT_TRIGGER: &'static str = ".section";
    pub const DEFAULT_START: &'static str = "top 80%";
    pub const DEFAULT_END: &'static str = "bottom 20%";
    pub const DEFAULT_TOGGLE_ACTIONS: &'static str = "play none none reverse";
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineSettings {
    pub repeat: Option<i32>, // -1 = infinite
    pub yoyo: Option<bool>,
    pub delay: Option<f64>, // seconds
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReducedMotionConfig {
    pub mode: Option<ReducedMotionMode>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReducedMotionMode {
    #[default]
    Skip,
    Instant,
    Simplified,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tween {
    pub target: Option<String>,
    pub properties: BTreeMap<String, PropValue>, // stable key order
    pub duration: Option<f64>,
    pub ease: Option<String>,
    pub position: Option<TweenPosition>,
    pub stagger: Option<f64>,
}

impl Tween {
    pub const DEFAULT_TARGET: &'static str = ".element";
    pub const DEFAULT_EASE: &'static str = "power1.out";
    pub const DEFAULT_DURATION: f64 = 0.5;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TweenPosition {
    Offset(f64),
    Label(String),
}

impl GsapPresetConfig {
    pub fn from_json(s: &str) -> TweaveResult<Self> {
        serde_json::from_str(s).map_err(|e| TweaveError::serde(e.to_string()))
    }

    pub fn validate(&self) -> TweaveResult<()> {
        if let Some(sel) = &self.trigger.selector
            && sel.trim().is_empty()
        {
            return Err(TweaveError::validation("trigger selector must be non-empty"));
        }
        if let Some(st) = &self.trigger.scroll_trigger {
            st.validate()?;
        }
        self.timeline_settings.validate()?;

        for (idx, tween) in self.tweens.iter().enumerate() {
            tween
                .validate()
                .map_err(|e| TweaveError::validation(format!("tween #{idx}: {e}")))?;
        }
        Ok(())
    }
}

impl ScrollTriggerConfig {
    pub fn validate(&self) -> TweaveResult<()> {
        if let Some(sel) = &self.trigger
            && sel.trim().is_empty()
        {
            return Err(TweaveError::validation(
                "scrollTrigger trigger selector must be non-empty",
            ));
        }
        if let Some(actions) = &self.toggle_actions
            && actions.split_whitespace().count() != 4
        {
            return Err(TweaveError::validation(
                "scrollTrigger toggleActions must have exactly 4 tokens",
            ));
        }
        Ok(())
    }
}

impl TimelineSettings {
    pub fn validate(&self) -> TweaveResult<()> {
        if let Some(repeat) = self.repeat
            && repeat < -1
        {
            return Err(TweaveError::validation("repeat must be >= -1"));
        }
        if let Some(delay) = self.delay
            && !(delay.is_finite() && delay >= 0.0)
        {
            return Err(TweaveError::validation("delay must be a finite number >= 0"));
        }
        Ok(())
    }
}

impl Tween {
    pub fn validate(&self) -> TweaveResult<()> {
        if let Some(target) = &self.target
            && target.trim().is_empty()
        {
            return Err(TweaveError::validation("target must be non-empty"));
        }
        if let Some(duration) = self.duration
            && !(duration.is_finite() && duration >= 0.0)
        {
            return Err(TweaveError::validation(
                "duration must be a finite number >= 0",
            ));
        }
        if let Some(ease) = &self.ease
            && ease.trim().is_empty()
        {
            return Err(TweaveError::validation("ease must be non-empty"));
        }
        if let Some(stagger) = self.stagger
            && !(stagger.is_finite() && stagger >= 0.0)
        {
            return Err(TweaveError::validation(
                "stagger must be a finite number >= 0",
            ));
        }
        for (key, value) in &self.properties {
            if let PropValue::Number(n) = value
                && !n.is_finite()
            {
                return Err(TweaveError::validation(format!(
                    "property '{key}' must be a finite number"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_config() -> GsapPresetConfig {
        let mut properties = BTreeMap::new();
        properties.insert("opacity".to_string(), PropValue::Number(1.0));
        properties.insert("y".to_string(), PropValue::Number(0.0));

        GsapPresetConfig {
            trigger: TriggerConfig {
                kind: TriggerKind::ScrollTrigger,
                selector: Some(".hero".to_string()),
                scroll_trigger: Some(ScrollTriggerConfig {
                    trigger: Some(".hero".to_string()),
                    scrub: Some(true),
                    ..ScrollTriggerConfig::default()
                }),
            },
            timeline_settings: TimelineSettings {
                repeat: Some(0),
                yoyo: Some(false),
                delay: Some(0.2),
            },
            reduced_motion: ReducedMotionConfig {
                mode: Some(ReducedMotionMode::Skip),
            },
            tweens: vec![Tween {
                target: Some(".hero".to_string()),
                properties,
                duration: Some(0.8),
                ease: Some("power2.out".to_string()),
                position: Some(TweenPosition::Offset(0.0)),
                stagger: None,
            }],
        }
    }

    #[test]
    fn json_roundtrip() {
        let config = basic_config();
        let s = serde_json::to_string_pretty(&config).unwrap();
        let de: GsapPresetConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(de, config);
    }

    #[test]
    fn partial_json_is_accepted() {
        let config = GsapPresetConfig::from_json(r#"{ "trigger": { "kind": "click" } }"#).unwrap();
        assert_eq!(config.trigger.kind, TriggerKind::Click);
        assert!(config.tweens.is_empty());
        assert!(config.timeline_settings.repeat.is_none());
    }

    #[test]
    fn empty_object_is_a_valid_config() {
        let config = GsapPresetConfig::from_json("{}").unwrap();
        assert_eq!(config, GsapPresetConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn untagged_values_parse_both_arms() {
        let tween: Tween = serde_json::from_str(
            r#"{ "properties": { "x": 50, "transformOrigin": "center" }, "position": "intro" }"#,
        )
        .unwrap();
        assert_eq!(tween.properties["x"], PropValue::Number(50.0));
        assert_eq!(
            tween.properties["transformOrigin"],
            PropValue::Text("center".to_string())
        );
        assert_eq!(
            tween.position,
            Some(TweenPosition::Label("intro".to_string()))
        );
    }

    #[test]
    fn inactive_scroll_payload_survives_roundtrip() {
        let mut config = basic_config();
        config.trigger.kind = TriggerKind::Hover;
        let s = serde_json::to_string(&config).unwrap();
        let de: GsapPresetConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(de.trigger.kind, TriggerKind::Hover);
        assert!(de.trigger.scroll_trigger.is_some());
    }

    #[test]
    fn validate_rejects_negative_delay() {
        let mut config = basic_config();
        config.timeline_settings.delay = Some(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_toggle_actions() {
        let mut config = basic_config();
        config.trigger.scroll_trigger = Some(ScrollTriggerConfig {
            toggle_actions: Some("play none".to_string()),
            ..ScrollTriggerConfig::default()
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_duration() {
        let mut config = basic_config();
        config.tweens[0].duration = Some(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_repeat_below_infinite() {
        let mut config = basic_config();
        config.timeline_settings.repeat = Some(-2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_property() {
        let mut config = basic_config();
        config.tweens[0]
            .properties
            .insert("x".to_string(), PropValue::Number(f64::NAN));
        assert!(config.validate().is_err());
    }
}
