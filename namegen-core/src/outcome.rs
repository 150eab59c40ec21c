use crate::error::{GenerateError, ValidationError};

/// What the page shows after one click. Exactly one applies per invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// At least one suggestion survived the word-count filter.
    Names(Vec<String>),
    /// The call succeeded but nothing fit the criteria.
    NoResults,
    /// The form was rejected before calling upstream.
    Invalid(ValidationError),
    /// The upstream call failed; details stay in the logs.
    Failed,
}

impl GenerationOutcome {
    /// Collapses a pipeline result into the notice to render.
    #[must_use]
    pub fn from_result(result: Result<Vec<String>, GenerateError>) -> Self {
        match result {
            Ok(names) if names.is_empty() => Self::NoResults,
            Ok(names) => Self::Names(names),
            Err(GenerateError::Validation(err)) => Self::Invalid(err),
            Err(GenerateError::Upstream(_)) => Self::Failed,
        }
    }

    /// Suggestions paired with their 1-based position.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        let names: &[String] = match self {
            Self::Names(names) => names,
            _ => &[],
        };
        names
            .iter()
            .enumerate()
            .map(|(index, name)| (index + 1, name.as_str()))
    }

    /// User-facing text for the non-list outcomes.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Names(_) => None,
            Self::NoResults => Some(
                "No names were generated with the specified criteria. Try relaxing the inputs!",
            ),
            Self::Invalid(ValidationError::MissingFields(_)) => {
                Some("Please fill in all required fields!")
            }
            Self::Invalid(ValidationError::NameCountOutOfRange(_)) => {
                Some("Please choose between 1 and 5 names.")
            }
            Self::Failed => Some("Something went wrong while generating names. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpstreamError;
    use crate::request::RequiredField;

    #[test]
    fn empty_success_is_no_results() {
        let outcome = GenerationOutcome::from_result(Ok(Vec::new()));
        assert_eq!(outcome, GenerationOutcome::NoResults);
        assert!(outcome.notice().unwrap().starts_with("No names were generated"));
    }

    #[test]
    fn names_are_numbered_from_one() {
        let outcome =
            GenerationOutcome::from_result(Ok(vec!["Brew Haven".to_owned(), "EcoBrew".to_owned()]));
        assert_eq!(
            outcome.numbered().collect::<Vec<_>>(),
            vec![(1, "Brew Haven"), (2, "EcoBrew")]
        );
        assert_eq!(outcome.notice(), None);
    }

    #[test]
    fn errors_map_to_distinct_notices() {
        let invalid = GenerationOutcome::from_result(Err(GenerateError::Validation(
            ValidationError::MissingFields(vec![RequiredField::BusinessType]),
        )));
        assert_eq!(invalid.notice(), Some("Please fill in all required fields!"));
        assert_eq!(invalid.numbered().count(), 0);

        let failed = GenerationOutcome::from_result(Err(GenerateError::Upstream(
            UpstreamError::MalformedResponse {
                reason: "no choices".to_owned(),
            },
        )));
        assert_eq!(failed, GenerationOutcome::Failed);
        assert_eq!(failed.numbered().count(), 0);
    }
}
