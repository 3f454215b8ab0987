//! Property tests for session id validation.

use proptest::prelude::*;

use livepoll::SessionId;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary cookie values never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = s.parse::<SessionId>();
    }

    /// PROPERTY: Accepted ids contain only the allowed alphabet.
    #[test]
    fn property_accepted_ids_are_safe(s in "[A-Za-z0-9_./-]{0,140}") {
        if let Ok(id) = s.parse::<SessionId>() {
            prop_assert!(!id.as_str().is_empty());
            prop_assert!(id.as_str().len() <= 128);
            prop_assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        }
    }

    /// PROPERTY: Generated ids always validate.
    #[test]
    fn property_generated_ids_parse(_seed in any::<u8>()) {
        let id = SessionId::generate();
        prop_assert_eq!(id.as_str().parse::<SessionId>().unwrap(), id);
    }
}
