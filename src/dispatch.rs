use crate::{
    model::{GsapPresetConfig, ScrollTriggerConfig, TriggerKind},
    normalize::DEFAULT_SELECTOR,
};

/// How the timeline gets run. Backend-agnostic shape consumed by every
/// emitter; no registration text lives here.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchShape {
    /// Plays on construction (load trigger).
    Immediate,
    /// Bound to scroll position at timeline-creation time.
    Scroll(ScrollBinding),
    /// Restarts from the top on each click of the matched elements.
    Click { selector: String },
    /// Plays on pointer-enter, reverses on pointer-leave.
    Hover { selector: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollBinding {
    pub trigger: String,
    pub start: String,
    pub end: String,
    pub scrub: bool,
    pub pin: bool,
    pub toggle_actions: String,
    pub markers: bool,
}

impl DispatchShape {
    pub fn needs_scroll_plugin(&self) -> bool {
        matches!(self, Self::Scroll(_))
    }

    /// Click and hover timelines wait for their listener to fire.
    pub fn starts_paused(&self) -> bool {
        matches!(self, Self::Click { .. } | Self::Hover { .. })
    }
}

impl ScrollBinding {
    fn from_config(cfg: Option<&ScrollTriggerConfig>) -> Self {
        let cfg = cfg.cloned().unwrap_or_default();
        Self {
            trigger: cfg
                .trigger
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_TRIGGER.to_string()),
            start: cfg
                .start
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_START.to_string()),
            end: cfg
                .end
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_END.to_string()),
            scrub: cfg.scrub.unwrap_or(false),
            pin: cfg.pin.unwrap_or(false),
            toggle_actions: cfg
                .toggle_actions
                .unwrap_or_else(|| ScrollTriggerConfig::DEFAULT_TOGGLE_ACTIONS.to_string()),
            markers: cfg.markers.unwrap_or(false),
        }
    }
}

/// Lower the normalized trigger into its registration shape.
///
/// The retained `scroll_trigger` payload is read only for the scroll kind;
/// every other kind ignores it.
pub fn dispatch(config: &GsapPresetConfig) -> DispatchShape {
    let selector = || {
        config
            .trigger
            .selector
            .clone()
            .unwrap_or_else(|| DEFAULT_SELECTOR.to_string())
    };

    match config.trigger.kind {
        TriggerKind::Load => DispatchShape::Immediate,
        TriggerKind::ScrollTrigger => DispatchShape::Scroll(ScrollBinding::from_config(
            config.trigger.scroll_trigger.as_ref(),
        )),
        TriggerKind::Click => DispatchShape::Click {
            selector: selector(),
        },
        TriggerKind::Hover => DispatchShape::Hover {
            selector: selector(),
        },
    }
}
