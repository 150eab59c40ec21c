//! Decoding of the posted form.

use namegen_core::{NameCount, NameRequest, ValidationError};

/// Raw field values as submitted, kept verbatim so the page can echo them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    /// `business_type` field.
    pub business_type: String,
    /// `target_audience` field.
    pub target_audience: String,
    /// `branding_tone` field.
    pub branding_tone: String,
    /// `keywords` field.
    pub keywords: String,
    /// `num_names` field, unparsed.
    pub num_names: String,
}

impl FormInput {
    /// Decodes an `application/x-www-form-urlencoded` body. Unknown keys are
    /// ignored; a repeated key keeps its last value.
    #[must_use]
    pub fn parse(body: &[u8]) -> Self {
        let mut input = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "business_type" => &mut input.business_type,
                "target_audience" => &mut input.target_audience,
                "branding_tone" => &mut input.branding_tone,
                "keywords" => &mut input.keywords,
                "num_names" => &mut input.num_names,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        input
    }

    /// Number of names as submitted, falling back to the default when the
    /// field is blank or invalid. Used to keep the slider position.
    #[must_use]
    pub fn num_names_or_default(&self) -> NameCount {
        self.num_names.parse().unwrap_or_default()
    }

    /// Builds the pipeline request. Required-field checks happen later, in
    /// the pipeline itself.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameCountOutOfRange`] when `num_names` is
    /// present but not an integer in `1..=5`.
    pub fn to_request(&self) -> Result<NameRequest, ValidationError> {
        let num_names = if self.num_names.trim().is_empty() {
            NameCount::default()
        } else {
            self.num_names.parse()?
        };

        Ok(NameRequest::new(
            self.business_type.as_str(),
            self.target_audience.as_str(),
            self.branding_tone.as_str(),
        )
        .with_keywords(self.keywords.as_str())
        .with_num_names(num_names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_and_plus_encoding() {
        let input = FormInput::parse(
            b"business_type=Coffee+shop&target_audience=Pet%20lovers&branding_tone=Playful\
              &keywords=green%2C+eco&num_names=4&extra=ignored",
        );
        assert_eq!(input.business_type, "Coffee shop");
        assert_eq!(input.target_audience, "Pet lovers");
        assert_eq!(input.keywords, "green, eco");
        assert_eq!(input.num_names, "4");

        let request = input.to_request().unwrap();
        assert_eq!(request.business_type(), "Coffee shop");
        assert_eq!(request.keywords(), "green, eco");
        assert_eq!(request.num_names().get(), 4);
    }

    #[test]
    fn blank_count_uses_default() {
        let input = FormInput::parse(b"business_type=Gym");
        assert_eq!(input.to_request().unwrap().num_names(), NameCount::default());
    }

    #[test]
    fn out_of_range_count_is_rejected() {
        let input = FormInput::parse(b"num_names=9");
        assert_eq!(
            input.to_request(),
            Err(ValidationError::NameCountOutOfRange("9".to_owned()))
        );
        assert_eq!(input.num_names_or_default(), NameCount::default());
    }

    #[test]
    fn empty_body_is_all_blank() {
        assert_eq!(FormInput::parse(b""), FormInput::default());
    }
}
