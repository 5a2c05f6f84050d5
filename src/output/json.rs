// Machine-readable output for `recommend --json`.

use anyhow::Result;

use crate::recommend::Recommendation;

/// Render recommendations as a pretty-printed JSON array.
///
/// An undefined average serializes as `null`.
pub fn render_recommendations(recommendations: &[Recommendation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(recommendations)?)
}
