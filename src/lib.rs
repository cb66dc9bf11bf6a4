//! Tweave compiles a declarative GSAP animation preset into five
//! deterministic code/data artifacts.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: `GsapPresetConfig -> GsapPresetConfig` (every unset field
//!    resolved to its default; idempotent)
//! 2. **Dispatch**: trigger kind -> [`DispatchShape`] (how the timeline gets run)
//! 3. **Adapt**: reduced-motion policy rewrites the tween sequence and
//!    timeline settings
//! 4. **Emit**: five independent backends render the same input into `full`,
//!    `timelineOnly`, `importsOnly`, `minified` and `configJson`
//!
//! Every stage is a total pure function; `generate` holds no state and is
//! byte-deterministic for a given `(config, preset name)` pair.
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod emit;
pub mod emit_full;
pub mod emit_imports;
pub mod emit_json;
pub mod emit_min;
pub mod emit_timeline;
pub mod error;
pub mod generate;
pub mod model;
pub mod normalize;
pub mod reduced_motion;

pub use dispatch::{DispatchShape, ScrollBinding, dispatch};
pub use emit::EmitInput;
pub use emit_full::emit_full;
pub use emit_imports::emit_imports_only;
pub use emit_json::emit_config_json;
pub use emit_min::emit_minified;
pub use emit_timeline::emit_timeline_only;
pub use error::{TweaveError, TweaveResult};
pub use generate::{GeneratedCodeSet, generate};
pub use model::{
    GsapPresetConfig, PropValue, ReducedMotionConfig, ReducedMotionMode, ScrollTriggerConfig,
    TimelineSettings, TriggerConfig, TriggerKind, Tween, TweenPosition,
};
pub use normalize::{Identifier, normalize, sanitize_name};
pub use reduced_motion::{GuardDescriptor, ResolvedTween, TimelineValues, apply_reduced_motion};
