/// Property-based tests for name normalization and Lua rendering.
///
/// Uses `proptest` to generate catalog-like names and values and checks the
/// invariants the generated `.luacheckrc` relies on:
///
/// - `to_pascal_case` is deterministic and only ever yields `[A-Za-z][A-Za-z0-9]*`
/// - names the strict mode accepts never collide with a reserved word
/// - `normalize_unique` output has no duplicates and is a subsequence of the
///   per-name conversions
/// - rendered strings always escape every quote
use cfx_luacheck::identifier::is_reserved;
use cfx_luacheck::{macro_case, normalize_unique, render, to_pascal_case, LuaValue};
use proptest::prelude::*;
use std::collections::HashSet;

/// Snake-case names with at least one letter-led segment.
fn arb_snake_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,8}(_{1,2}[a-z0-9]{1,8}){0,4}_?").unwrap()
}

/// Anything in the accepted character set, including all-underscore and
/// digit-led names.
fn arb_raw_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_]{0,24}").unwrap()
}

fn arb_macro_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z0-9]{1,6}(_[A-Z0-9]{1,6}){0,5}").unwrap()
}

proptest! {
    #[test]
    fn pascal_case_is_deterministic(raw in arb_raw_name()) {
        let first = to_pascal_case(&raw).ok();
        let second = to_pascal_case(&raw).ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pascal_case_accepts_snake_names(raw in arb_snake_name()) {
        prop_assume!(!is_reserved(&raw));
        let name = to_pascal_case(&raw).unwrap();
        prop_assert!(name.chars().next().unwrap().is_ascii_uppercase());
        prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn pascal_case_output_is_a_valid_identifier(raw in arb_raw_name()) {
        if let Ok(name) = to_pascal_case(&raw) {
            let mut chars = name.chars();
            prop_assert!(chars.next().unwrap().is_ascii_alphabetic());
            prop_assert!(chars.all(|c| c.is_ascii_alphanumeric()));
            prop_assert!(!is_reserved(&raw));
        }
    }

    #[test]
    fn pascal_case_drops_only_underscores(raw in arb_raw_name()) {
        if let Ok(name) = to_pascal_case(&raw) {
            let stripped: String = raw.chars().filter(|c| *c != '_').collect();
            prop_assert_eq!(name.to_ascii_lowercase(), stripped.to_ascii_lowercase());
        }
    }

    #[test]
    fn macro_case_only_emits_identifier_characters(raw in arb_macro_name()) {
        let name = macro_case(&raw);
        prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert_eq!(macro_case(&raw), name);
    }

    #[test]
    fn normalize_unique_has_no_duplicates(names in prop::collection::vec(arb_snake_name(), 0..20)) {
        prop_assume!(names.iter().all(|n| !is_reserved(n)));
        let unique = normalize_unique(&names).unwrap();
        let set: HashSet<&String> = unique.iter().collect();
        prop_assert_eq!(set.len(), unique.len());

        // First-seen order: `unique` is a subsequence of the raw conversions.
        let all: Vec<String> = names.iter().map(|n| to_pascal_case(n).unwrap()).collect();
        let mut cursor = all.iter();
        for name in &unique {
            prop_assert!(cursor.any(|n| n == name));
        }
    }

    #[test]
    fn rendered_strings_escape_every_quote(s in "[a-z\"' ]{0,20}") {
        let out = render(&LuaValue::String(s.clone()), 0);
        let inner = &out[1..out.len() - 1];
        prop_assert_eq!(inner.replace("\\\"", "\""), s.clone());
        prop_assert_eq!(inner.matches("\\\"").count(), s.matches('"').count());
    }
}
