//! Tiered pricing for cost estimation.
//!
//! Rates are per million tokens, matching the published Claude API pricing
//! for each model family. A model identifier resolves to a family by
//! case-insensitive substring match; anything unrecognized falls back to the
//! Sonnet 4 tier.

/// Per-million-token rates for one model family.
#[derive(Debug, Clone, Copy)]
pub struct ModelPricing {
    pub input: f64,
    pub output: f64,
    pub cache_write: f64,
    pub cache_read: f64,
}

const OPUS_4_PRICING: ModelPricing = ModelPricing {
    input: 15.0,
    output: 75.0,
    cache_write: 18.75,
    cache_read: 1.50,
};

const SONNET_4_PRICING: ModelPricing = ModelPricing {
    input: 3.0,
    output: 15.0,
    cache_write: 3.75,
    cache_read: 0.30,
};

const HAIKU_4_PRICING: ModelPricing = ModelPricing {
    input: 0.8,
    output: 4.0,
    cache_write: 1.0,
    cache_read: 0.08,
};

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Resolve a model identifier to its pricing tier.
///
/// Families are checked in priority order: opus-4, haiku-4, sonnet-4. An
/// empty or unrecognized model uses the Sonnet 4 tier.
pub fn pricing_for_model(model: &str) -> &'static ModelPricing {
    let model = model.to_lowercase();

    if model.contains("opus-4") {
        &OPUS_4_PRICING
    } else if model.contains("haiku-4") {
        &HAIKU_4_PRICING
    } else {
        // sonnet-4 match and the unrecognized default share a tier
        &SONNET_4_PRICING
    }
}

/// Compute the cost of one turn from its token counts and model.
pub fn calculate_cost(
    model: &str,
    input_tokens: u64,
    output_tokens: u64,
    cache_write_tokens: u64,
    cache_read_tokens: u64,
) -> f64 {
    let pricing = pricing_for_model(model);

    input_tokens as f64 * pricing.input / TOKENS_PER_MILLION
        + output_tokens as f64 * pricing.output / TOKENS_PER_MILLION
        + cache_write_tokens as f64 * pricing.cache_write / TOKENS_PER_MILLION
        + cache_read_tokens as f64 * pricing.cache_read / TOKENS_PER_MILLION
}
