#[cfg(test)]
mod passing {
    use translation_prep::translation::must_be_omitted;

    #[test]
    fn sentence() {
        assert!(!must_be_omitted("Die folgenden Produkte sind toll"));
    }

    #[test]
    fn product_description() {
        assert!(!must_be_omitted("Heavy duty roller"));
    }

    #[test]
    fn lowercase_word() {
        assert!(!must_be_omitted("hello"));
    }

    #[test]
    fn text_with_trailing_space() {
        assert!(!must_be_omitted("Hello "));
    }

    #[test]
    fn single_lowercase_character() {
        assert!(!must_be_omitted("x"));
    }

    #[test]
    fn non_ascii_after_first_word() {
        assert!(!must_be_omitted("Sehr schön"));
    }
}

#[cfg(test)]
mod failing {
    use translation_prep::translation::{omit_reason, OmitReason};

    #[test]
    fn empty_and_quote_artifacts() {
        for text in ["", "\"", "\"\"", "\" \""] {
            assert_eq!(omit_reason(text), Some(OmitReason::QuoteArtifact), "{:?}", text);
        }
    }

    #[test]
    fn single_space() {
        assert_eq!(omit_reason(" "), Some(OmitReason::UppercasePrefix));
    }

    #[test]
    fn leading_digit() {
        assert_eq!(omit_reason("9 Bearing"), Some(OmitReason::LeadingDigit));
        assert_eq!(omit_reason("3M-Tape"), Some(OmitReason::LeadingDigit));
    }

    #[test]
    fn uppercase_prefix() {
        assert_eq!(omit_reason("AB Motor"), Some(OmitReason::UppercasePrefix));
        assert_eq!(omit_reason("SKU-1234"), Some(OmitReason::UppercasePrefix));
        assert_eq!(omit_reason("-- Hinweis"), Some(OmitReason::UppercasePrefix));
    }

    #[test]
    fn non_alphabetic_first_word() {
        assert_eq!(omit_reason("Ab1 Motor"), Some(OmitReason::NonAlphabeticFirstWord));
        assert_eq!(omit_reason("Schöner Tisch"), Some(OmitReason::NonAlphabeticFirstWord));
        assert_eq!(omit_reason("e-mail"), Some(OmitReason::NonAlphabeticFirstWord));
    }

    #[test]
    fn leading_whitespace_gives_empty_first_word() {
        assert_eq!(omit_reason(" hello"), Some(OmitReason::NonAlphabeticFirstWord));
    }
}
