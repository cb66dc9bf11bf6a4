use crate::{
    dispatch::dispatch,
    emit::EmitInput,
    emit_full::emit_full,
    emit_imports::emit_imports_only,
    emit_json::emit_config_json,
    emit_min::emit_minified,
    emit_timeline::emit_timeline_only,
    error::TweaveResult,
    model::GsapPresetConfig,
    normalize::{normalize, sanitize_name},
    reduced_motion::apply_reduced_motion,
};

/// The five artifacts derived from one `(config, preset name)` pair.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCodeSet {
    pub full: String,
    pub timeline_only: String,
    pub imports_only: String,
    pub minified: String,
    pub config_json: String,
}

/// Compile a preset into its five artifacts.
///
/// Pure and deterministic: the same `(config, preset_name)` pair always
/// yields byte-identical output. Intended to be re-run on every edit and
/// memoized by the caller.
#[tracing::instrument(skip(config))]
pub fn generate(config: &GsapPresetConfig, preset_name: &str) -> TweaveResult<GeneratedCodeSet> {
    let normalized = normalize(config);
    normalized.validate()?;

    let ident = sanitize_name(preset_name);
    let shape = dispatch(&normalized);
    let mode = normalized.reduced_motion.mode.unwrap_or_default();
    let (tweens, timeline, guard) =
        apply_reduced_motion(&normalized.tweens, &normalized.timeline_settings, mode);
    tracing::debug!(
        ident = %ident,
        tweens = tweens.len(),
        "emitting artifacts"
    );

    let input = EmitInput {
        ident,
        shape,
        tweens,
        timeline,
        guard,
    };

    Ok(GeneratedCodeSet {
        full: emit_full(&input),
        timeline_only: emit_timeline_only(&input),
        imports_only: emit_imports_only(&input),
        minified: emit_minified(&input),
        config_json: emit_config_json(&normalized)?,
    })
}
