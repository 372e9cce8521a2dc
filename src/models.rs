//! Supported model identifiers.
//!
//! The allow-list is closed: adding a model means adding a constant here and
//! listing it in [`SUPPORTED_MODELS`].

pub const GPT_4: &str = "gpt-4";
pub const GPT_4_0314: &str = "gpt-4-0314";
pub const GPT_4_32K: &str = "gpt-4-32k";
pub const GPT_4_32K_0314: &str = "gpt-4-32k-0314";
pub const GPT_3_5_TURBO: &str = "gpt-3.5-turbo";

/// Every model id accepted by [`validate_model`].
pub const SUPPORTED_MODELS: &[&str] = &[
    GPT_4,
    GPT_4_0314,
    GPT_4_32K,
    GPT_4_32K_0314,
    GPT_3_5_TURBO,
];

/// Returns `true` iff `model` exactly matches a supported model id.
///
/// Matching is case-sensitive with no trimming or normalization.
pub fn validate_model(model: &str) -> bool {
    SUPPORTED_MODELS.contains(&model)
}
