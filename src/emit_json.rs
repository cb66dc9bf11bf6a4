use crate::{
    error::{TweaveError, TweaveResult},
    model::GsapPresetConfig,
};

/// Canonical JSON of the *normalized* config — the durable, editable form,
/// independent of the reduced-motion view. Round-trips through `normalize`.
pub fn emit_config_json(normalized: &GsapPresetConfig) -> TweaveResult<String> {
    serde_json::to_string_pretty(normalized).map_err(|e| TweaveError::serde(e.to_string()))
}
