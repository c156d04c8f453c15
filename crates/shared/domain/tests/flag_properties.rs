use ctf_domain::{Flag, validate_flag};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_single_line_payload_is_accepted(payload in "[^\n\r\u{2028}\u{2029}]*") {
        let raw = format!("AITCTF{{{payload}}}");
        prop_assert!(validate_flag(&raw));
        let flag = Flag::parse(raw.as_str()).unwrap();
        prop_assert_eq!(flag.payload(), payload.as_str());
    }

    #[test]
    fn trailing_text_after_the_brace_is_rejected(payload in "[a-z0-9_]*", tail in "[a-z0-9 ]+") {
        let raw = format!("AITCTF{{{payload}}}{tail}");
        prop_assert!(!validate_flag(&raw));
    }

    #[test]
    fn wrong_prefix_case_is_rejected(payload in "[a-z0-9_]*") {
        let raw = format!("aitctf{{{payload}}}");
        prop_assert!(!validate_flag(&raw));
    }

    #[test]
    fn strings_without_the_envelope_are_rejected(s in "[^A{}]*") {
        prop_assert!(!validate_flag(&s));
    }
}
