#[cfg(test)]
mod passing {
    use translation_prep::routing::{matches, FilterExpression};

    #[test]
    fn single_alternative() {
        assert!(matches("Hersteller", "Der Hersteller ist bekannt"));
    }

    #[test]
    fn any_alternative_of_a_clause() {
        assert!(matches("FAQ|Frage", "Eine Frage zum Produkt"));
        assert!(matches("FAQ|Frage", "FAQ"));
    }

    #[test]
    fn every_clause_must_match() {
        assert!(matches("FAQ|Frage&?", "FAQ: Wie lange?"));
    }

    #[test]
    fn empty_expression_matches_everything() {
        assert!(matches("", ""));
        assert!(matches("", "beliebiger Inhalt"));
    }

    #[test]
    fn empty_alternative_matches_everything() {
        assert!(matches("Variante|", "ohne Treffer"));
    }

    #[test]
    fn parsed_and_free_function_agree() {
        let expression = FilterExpression::parse("Die folgenden Produkte|Variante");
        for value in ["Die folgenden Produkte sind toll", "Variante Blau", "Farbe"] {
            assert_eq!(
                expression.matches(value),
                matches("Die folgenden Produkte|Variante", value)
            );
        }
        assert_eq!(expression.clause_count(), 1);
        assert_eq!(expression.to_string(), "Die folgenden Produkte|Variante");
    }
}

#[cfg(test)]
mod failing {
    use translation_prep::routing::{matches, FilterExpression};

    #[test]
    fn case_sensitive() {
        assert!(!matches("Hersteller", "hersteller"));
    }

    #[test]
    fn missing_clause() {
        assert!(!matches("FAQ|Frage&?", "FAQ ohne Fragezeichen"));
        assert!(!matches("FAQ|Frage&?", "Warum?"));
    }

    #[test]
    fn no_alternative_present() {
        let expression = FilterExpression::from("Eigenschaft|Merkmal");
        assert!(!expression.matches("Farbe: Rot"));
    }
}
