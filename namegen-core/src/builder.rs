use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use namegen_adapters::traits::{InferenceRequest, ModelAdapter};
use namegen_prompts::PromptTemplate;
use tracing::{debug, info, instrument, warn};

use crate::error::{GenerateError, UpstreamError};
use crate::filter::filter_names;
use crate::request::{NameCount, NameRequest};

/// Output token ceiling used unless configured otherwise.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

/// Instruction sent upstream for every request.
pub const PROMPT_TEMPLATE: &str = "I need {{num_names}} creative and unique business name \
suggestions for a {{business_type}}. The target audience is {{target_audience}}. \
The branding tone should be {{branding_tone}}. Include the following keywords: {{keywords}}. \
Each name should be no more than {{max_words}} words long. \
Provide only the names, separated by commas.";

/// Per-request knobs forwarded to the adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationSettings {
    /// Output token ceiling.
    pub max_output_tokens: u32,
    /// Sampling temperature; provider default when `None`.
    pub temperature: Option<f32>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: None,
        }
    }
}

/// Turns a [`NameRequest`] into filtered name suggestions.
///
/// Holds no mutable state; share it behind an [`Arc`] across requests.
pub struct NameRequestBuilder {
    adapter: Arc<dyn ModelAdapter>,
    settings: GenerationSettings,
    template: PromptTemplate,
}

impl fmt::Debug for NameRequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameRequestBuilder")
            .field("provider", &self.adapter.metadata().provider())
            .field("model", &self.adapter.metadata().model())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl NameRequestBuilder {
    /// Creates a builder calling through `adapter` with default settings.
    #[must_use]
    pub fn new(adapter: Arc<dyn ModelAdapter>) -> Self {
        Self {
            adapter,
            settings: GenerationSettings::default(),
            template: PromptTemplate::new(PROMPT_TEMPLATE),
        }
    }

    /// Replaces the request settings.
    #[must_use]
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Model identifier of the underlying adapter.
    #[must_use]
    pub fn model(&self) -> &str {
        self.adapter.metadata().model()
    }

    /// Active request settings.
    #[must_use]
    pub const fn settings(&self) -> GenerationSettings {
        self.settings
    }

    /// Renders the fixed instruction with every field of `request` inserted
    /// verbatim. Empty fields render as empty text.
    #[must_use]
    pub fn build_prompt(&self, request: &NameRequest) -> String {
        let num_names = request.num_names().to_string();
        let max_words = request.max_words().to_string();
        let vars = HashMap::from([
            ("num_names", num_names.as_str()),
            ("business_type", request.business_type()),
            ("target_audience", request.target_audience()),
            ("branding_tone", request.branding_tone()),
            ("keywords", request.keywords()),
            ("max_words", max_words.as_str()),
        ]);
        self.template.fill(&vars)
    }

    /// Sends `prompt` as one user message and returns the first candidate's
    /// raw text. Makes exactly one upstream call.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] when the call fails for any reason.
    #[instrument(
        name = "request_names",
        skip(self, prompt, num_names),
        fields(model = self.model(), num_names = num_names.get())
    )]
    pub async fn request_names(
        &self,
        prompt: &str,
        num_names: NameCount,
    ) -> Result<String, UpstreamError> {
        let mut request = InferenceRequest::single_turn(prompt)
            .with_max_output_tokens(self.settings.max_output_tokens);
        if let Some(temperature) = self.settings.temperature {
            request = request.with_temperature(temperature);
        }

        debug!(
            max_output_tokens = self.settings.max_output_tokens,
            "requesting name suggestions"
        );

        match self.adapter.complete(request).await {
            Ok(raw) => Ok(raw),
            Err(err) => {
                warn!(?err, "name suggestion request failed");
                Err(err.into())
            }
        }
    }

    /// Runs one click: validate, build the prompt, call upstream once, and
    /// filter by the request's word limit.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Validation`] without calling upstream if a
    /// required field is empty, or [`GenerateError::Upstream`] if the call fails.
    pub async fn generate(&self, request: &NameRequest) -> Result<Vec<String>, GenerateError> {
        if let Err(err) = request.validate() {
            info!(%err, "rejected name request");
            return Err(err.into());
        }

        let prompt = self.build_prompt(request);
        let raw = self.request_names(&prompt, request.num_names()).await?;
        let names = filter_names(&raw, request.max_words());
        let segments = raw.split(',').filter(|part| !part.trim().is_empty()).count();

        debug!(
            requested = request.num_names().get(),
            raw_len = raw.len(),
            kept = names.len(),
            dropped = segments - names.len(),
            "filtered name suggestions"
        );

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use namegen_adapters::traits::{AdapterMetadata, AdapterResult};
    use proptest::prelude::*;

    use super::*;
    use crate::request::MAX_WORDS;

    struct Unreachable {
        metadata: AdapterMetadata,
    }

    #[async_trait]
    impl ModelAdapter for Unreachable {
        fn metadata(&self) -> &AdapterMetadata {
            &self.metadata
        }

        async fn complete(&self, _request: InferenceRequest) -> AdapterResult<String> {
            unreachable!("prompt building never calls upstream")
        }
    }

    fn builder() -> NameRequestBuilder {
        NameRequestBuilder::new(Arc::new(Unreachable {
            metadata: AdapterMetadata::new("test", "offline"),
        }))
    }

    #[test]
    fn prompt_matches_reference_wording() {
        let request = NameRequest::new("coffee shop", "eco-conscious millennials", "playful")
            .with_keywords("green, bean")
            .with_num_names(NameCount::try_from(4).unwrap());

        assert_eq!(
            builder().build_prompt(&request),
            "I need 4 creative and unique business name suggestions for a coffee shop. \
             The target audience is eco-conscious millennials. The branding tone should be playful. \
             Include the following keywords: green, bean. Each name should be no more than 5 words long. \
             Provide only the names, separated by commas."
        );
    }

    #[test]
    fn template_covers_every_field() {
        let template = PromptTemplate::new(PROMPT_TEMPLATE);
        let mut names = template.placeholders();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "branding_tone",
                "business_type",
                "keywords",
                "max_words",
                "num_names",
                "target_audience",
            ]
        );
    }

    #[test]
    fn empty_fields_still_produce_a_prompt() {
        let prompt = builder().build_prompt(&NameRequest::new("", "", ""));
        assert!(prompt.contains("for a . The target audience is ."));
        assert!(prompt.ends_with("separated by commas."));
    }

    #[test]
    fn placeholder_text_in_fields_is_not_expanded() {
        let request = NameRequest::new("{{keywords}}", "kids", "fun").with_keywords("toys");
        let prompt = builder().build_prompt(&request);
        assert!(prompt.contains("for a {{keywords}}."));
    }

    #[test]
    fn default_settings_cap_output_tokens() {
        assert_eq!(builder().settings().max_output_tokens, 200);
    }

    proptest! {
        #[test]
        fn prompt_contains_every_field(
            business in ".{1,40}",
            audience in ".{1,40}",
            tone in ".{1,40}",
            keywords in ".{0,40}",
            count in 1u8..=5,
        ) {
            let request = NameRequest::new(business.clone(), audience.clone(), tone.clone())
                .with_keywords(keywords.clone())
                .with_num_names(NameCount::try_from(count).unwrap());
            let prompt = builder().build_prompt(&request);

            prop_assert!(prompt.contains(&business));
            prop_assert!(prompt.contains(&audience));
            prop_assert!(prompt.contains(&tone));
            prop_assert!(prompt.contains(&keywords));
            prop_assert!(prompt.contains(&count.to_string()));
            prop_assert!(prompt.contains(&MAX_WORDS.to_string()));
        }
    }
}
