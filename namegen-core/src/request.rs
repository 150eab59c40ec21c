use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Longest suggestion kept, in whitespace-separated words.
pub const MAX_WORDS: usize = 5;

/// How many suggestions to ask for, always within `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameCount(u8);

impl NameCount {
    /// Smallest accepted count.
    pub const MIN: u8 = 1;
    /// Largest accepted count.
    pub const MAX: u8 = 5;

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for NameCount {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for NameCount {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::NameCountOutOfRange(value.to_string()))
        }
    }
}

impl From<NameCount> for u8 {
    fn from(count: NameCount) -> Self {
        count.0
    }
}

impl FromStr for NameCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| ValidationError::NameCountOutOfRange(trimmed.to_owned()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for NameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three inputs that must be filled in before generating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// What kind of business is being named.
    BusinessType,
    /// Who the business serves.
    TargetAudience,
    /// Desired voice of the brand.
    BrandingTone,
}

impl RequiredField {
    /// Every required field, in form order.
    pub const ALL: [Self; 3] = [Self::BusinessType, Self::TargetAudience, Self::BrandingTone];

    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessType => "Type of Business",
            Self::TargetAudience => "Target Audience",
            Self::BrandingTone => "Branding Tone",
        }
    }
}

/// Form state captured at the moment "generate" is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRequest {
    business_type: String,
    target_audience: String,
    branding_tone: String,
    keywords: String,
    max_words: usize,
    num_names: NameCount,
}

impl Default for NameRequest {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl NameRequest {
    /// Creates a request from the required fields. Keywords start empty and
    /// the count at its default.
    #[must_use]
    pub fn new(
        business_type: impl Into<String>,
        target_audience: impl Into<String>,
        branding_tone: impl Into<String>,
    ) -> Self {
        Self {
            business_type: business_type.into(),
            target_audience: target_audience.into(),
            branding_tone: branding_tone.into(),
            keywords: String::new(),
            max_words: MAX_WORDS,
            num_names: NameCount::default(),
        }
    }

    /// Sets the optional comma-separated keywords.
    #[must_use]
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// Sets how many suggestions to ask for.
    #[must_use]
    pub fn with_num_names(mut self, num_names: NameCount) -> Self {
        self.num_names = num_names;
        self
    }

    /// Type of business.
    #[must_use]
    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    /// Target audience.
    #[must_use]
    pub fn target_audience(&self) -> &str {
        &self.target_audience
    }

    /// Branding tone.
    #[must_use]
    pub fn branding_tone(&self) -> &str {
        &self.branding_tone
    }

    /// Free-text keywords, possibly empty.
    #[must_use]
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Word limit per suggestion; always [`MAX_WORDS`].
    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    /// Requested number of suggestions.
    #[must_use]
    pub const fn num_names(&self) -> NameCount {
        self.num_names
    }

    /// Returns the value entered for `field`.
    #[must_use]
    pub fn field(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::BusinessType => &self.business_type,
            RequiredField::TargetAudience => &self.target_audience,
            RequiredField::BrandingTone => &self.branding_tone,
        }
    }

    /// Required fields that are empty or whitespace only, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    /// Checks that every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] listing every empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}
