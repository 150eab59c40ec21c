/// Number of whitespace-separated words in `candidate`.
#[must_use]
pub fn word_count(candidate: &str) -> usize {
    candidate.split_whitespace().count()
}

/// Splits a raw upstream reply on `,` and keeps the trimmed candidates of at
/// most `max_words` words, in reply order.
///
/// Segments that are empty after trimming are dropped, so `""` and `" , "`
/// both yield nothing. An empty result is a valid "no matches" outcome.
#[must_use]
pub fn filter_names(raw_response: &str, max_words: usize) -> Vec<String> {
    raw_response
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty() && word_count(candidate) <= max_words)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SAMPLE: &str =
        "Brew Haven, The Daily Grind Coffee House, EcoBrew, Perk & Pine, Sustainable Sips Café";

    #[test]
    fn counts_words_on_any_whitespace() {
        assert_eq!(word_count("Brew Haven"), 2);
        assert_eq!(word_count("  Perk &\tPine\n"), 3);
        assert_eq!(word_count("The Daily Grind Coffee House"), 5);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn five_word_limit_keeps_every_sample_name() {
        assert_eq!(
            filter_names(SAMPLE, 5),
            vec![
                "Brew Haven",
                "The Daily Grind Coffee House",
                "EcoBrew",
                "Perk & Pine",
                "Sustainable Sips Café",
            ]
        );
    }

    #[test]
    fn tighter_limit_drops_long_names_in_order() {
        assert_eq!(
            filter_names(SAMPLE, 3),
            vec!["Brew Haven", "EcoBrew", "Perk & Pine", "Sustainable Sips Café"]
        );
        assert_eq!(filter_names(SAMPLE, 1), vec!["EcoBrew"]);
    }

    #[test]
    fn empty_response_yields_nothing() {
        assert!(filter_names("", 5).is_empty());
        assert!(filter_names(" ,  , ", 5).is_empty());
    }

    #[test]
    fn all_too_long_yields_nothing() {
        let raw = "One Two Three Four Five Six, Alpha Beta Gamma Delta Epsilon Zeta Eta";
        assert!(filter_names(raw, 5).is_empty());
    }

    #[test]
    fn trims_surrounding_whitespace_and_newlines() {
        assert_eq!(
            filter_names("\n  Leaf & Loaf ,\tCrumb  \n", 5),
            vec!["Leaf & Loaf", "Crumb"]
        );
    }

    fn candidate() -> impl Strategy<Value = String> {
        prop::collection::vec("[A-Za-z&]{1,8}", 1..9).prop_map(|words| words.join(" "))
    }

    proptest! {
        #[test]
        fn refiltering_is_idempotent(raw in "[A-Za-z ,&\t]{0,120}", max_words in 0usize..8) {
            let once = filter_names(&raw, max_words);
            let twice = filter_names(&once.join(","), max_words);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn keeps_exactly_the_short_candidates(
            names in prop::collection::vec(candidate(), 0..10),
            max_words in 1usize..8,
        ) {
            let raw = names
                .iter()
                .map(|name| format!("  {name} "))
                .collect::<Vec<_>>()
                .join(",");
            let expected: Vec<String> = names
                .into_iter()
                .filter(|name| word_count(name) <= max_words)
                .collect();
            prop_assert_eq!(filter_names(&raw, max_words), expected);
        }
    }
}
