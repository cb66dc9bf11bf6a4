use std::collections::BTreeMap;

use crate::model::{PropValue, ReducedMotionMode, TimelineSettings, Tween, TweenPosition};

/// A tween with every unset field resolved, ready for emission.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTween {
    pub target: String,
    pub properties: BTreeMap<String, PropValue>,
    pub duration: f64,
    pub ease: String,
    pub position: Option<TweenPosition>,
    pub stagger: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineValues {
    pub repeat: i32,
    pub yoyo: bool,
    pub delay: f64,
}

/// What the emitters must wrap around the animation registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDescriptor {
    None,
    /// Short-circuit everything behind a `prefers-reduced-motion` check.
    MediaQuerySkip,
}

/// Property keys that move, scale, rotate or skew the target. The
/// `Simplified` policy strips exactly these; opacity/color/filter keys stay.
pub const SPATIAL_PROPS: &[&str] = &[
    "x",
    "y",
    "z",
    "xPercent",
    "yPercent",
    "top",
    "left",
    "right",
    "bottom",
    "scale",
    "scaleX",
    "scaleY",
    "rotation",
    "rotationX",
    "rotationY",
    "skewX",
    "skewY",
];

/// Rewrite the tween sequence and timeline settings for a reduced-motion
/// policy. Runs on the normalized config, before any emitter renders text,
/// so all five artifacts reflect the same policy.
pub fn apply_reduced_motion(
    tweens: &[Tween],
    settings: &TimelineSettings,
    mode: ReducedMotionMode,
) -> (Vec<ResolvedTween>, TimelineValues, GuardDescriptor) {
    let timeline = TimelineValues {
        repeat: settings.repeat.unwrap_or(0),
        yoyo: settings.yoyo.unwrap_or(false),
        delay: settings.delay.unwrap_or(0.0),
    };

    match mode {
        ReducedMotionMode::Skip => {
            let resolved = tweens.iter().map(resolve).collect();
            (resolved, timeline, GuardDescriptor::MediaQuerySkip)
        }
        ReducedMotionMode::Instant => {
            // End state must appear immediately: no duration, no stagger,
            // no leading delay.
            let resolved = tweens
                .iter()
                .map(|t| {
                    let mut r = resolve(t);
                    r.duration = 0.0;
                    r.stagger = None;
                    r
                })
                .collect();
            let timeline = TimelineValues {
                delay: 0.0,
                ..timeline
            };
            (resolved, timeline, GuardDescriptor::None)
        }
        ReducedMotionMode::Simplified => {
            let resolved = tweens
                .iter()
                .map(resolve)
                .filter_map(|mut r| {
                    r.properties.retain(|key, _| !is_spatial(key));
                    (!r.properties.is_empty()).then_some(r)
                })
                .collect();
            (resolved, timeline, GuardDescriptor::None)
        }
    }
}

fn is_spatial(key: &str) -> bool {
    SPATIAL_PROPS.contains(&key)
}

fn resolve(tween: &Tween) -> ResolvedTween {
    ResolvedTween {
        target: tween
            .target
            .clone()
            .unwrap_or_else(|| Tween::DEFAULT_TARGET.to_string()),
        properties: tween.properties.clone(),
        duration: tween.duration.unwrap_or(Tween::DEFAULT_DURATION),
        ease: tween
            .ease
            .clone()
            .unwrap_or_else(|| Tween::DEFAULT_EASE.to_string()),
        position: tween.position.clone(),
        stagger: tween.stagger,
    }
}
