//! Integration tests for the builtin function library, grouped by
//! category. Each test drives a full parse-and-evaluate cycle so
//! arguments arrive the way real configurations deliver them.

use nimbus_eval::{EvalContext, EvalError, EvalResult};
use nimbus_parser::parse_all;
use nimbus_types::Expr;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn eval_source(source: &str) -> EvalResult<Expr> {
    let forms = parse_all(source).expect("source should parse");
    EvalContext::new().eval_all(&forms)
}

fn eval_str(source: &str) -> String {
    eval_source(source)
        .unwrap_or_else(|e| panic!("evaluation of '{source}' failed: {e}"))
        .to_string()
}

fn invalid_argument_for(source: &str, expected_fn: &str) {
    match eval_source(source).unwrap_err() {
        EvalError::InvalidArgument { function, .. } => assert_eq!(function, expected_fn),
        other => panic!("'{source}' should be an invalid-argument error, got {other}"),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Environment
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_env_reads_a_set_variable() {
    std::env::set_var("NIMBUS_BUILTIN_TEST_REGION", "eu-central-1");
    assert_eq!(eval_str("(env \"NIMBUS_BUILTIN_TEST_REGION\")"), "eu-central-1");
}

#[test]
fn test_env_default_applies_only_when_unset() {
    assert_eq!(
        eval_str("(env \"NIMBUS_BUILTIN_TEST_MISSING\" \"fallback\")"),
        "fallback"
    );
    std::env::set_var("NIMBUS_BUILTIN_TEST_EMPTY", "");
    // Set-but-empty is still set; the default does not apply
    assert_eq!(eval_str("(env \"NIMBUS_BUILTIN_TEST_EMPTY\" \"fallback\")"), "");
}

#[test]
fn test_env_unset_without_default_is_empty() {
    assert_eq!(eval_str("(env \"NIMBUS_BUILTIN_TEST_ABSENT\")"), "");
}

#[cfg(unix)]
#[test]
fn test_env_non_utf8_value_is_read_lossily_not_defaulted() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    // A set variable is present even when its bytes are not UTF-8
    std::env::set_var(
        "NIMBUS_BUILTIN_TEST_RAW",
        OsString::from_vec(vec![b'f', b'o', 0x80]),
    );
    assert_eq!(eval_str("(env? \"NIMBUS_BUILTIN_TEST_RAW\")"), "true");
    assert_eq!(
        eval_str("(env \"NIMBUS_BUILTIN_TEST_RAW\" \"fallback\")"),
        "fo\u{FFFD}"
    );
}

#[test]
fn test_env_exists_predicate() {
    std::env::set_var("NIMBUS_BUILTIN_TEST_PRESENT", "");
    assert_eq!(eval_str("(env? \"NIMBUS_BUILTIN_TEST_PRESENT\")"), "true");
    assert_eq!(eval_str("(env? \"NIMBUS_BUILTIN_TEST_NEVER_SET\")"), "false");
}

// ─────────────────────────────────────────────────────────────────────
// Strings
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_concat_joins_string_forms() {
    assert_eq!(eval_str("(concat \"Hello\" \" \" \"World\")"), "Hello World");
    assert_eq!(eval_str("(concat \"n=\" (+ 1 2))"), "n=3");
    assert_eq!(eval_str("(concat)"), "");
}

#[test]
fn test_format_substitutes_in_order() {
    assert_eq!(
        eval_str("(format \"%s.%s.svc\" \"api\" \"staging\")"),
        "api.staging.svc"
    );
    // Extra arguments are ignored
    assert_eq!(eval_str("(format \"%s\" \"a\" \"b\")"), "a");
}

#[test]
fn test_format_with_too_few_arguments_errors() {
    invalid_argument_for("(format \"%s-%s\" \"only-one\")", "format");
}

#[test]
fn test_case_and_trim() {
    assert_eq!(eval_str("(upper \"web-tier\")"), "WEB-TIER");
    assert_eq!(eval_str("(lower \"Web-Tier\")"), "web-tier");
    assert_eq!(eval_str("(trim \"  padded  \")"), "padded");
}

#[test]
fn test_replace_all_occurrences() {
    assert_eq!(eval_str("(replace \"a.b.c\" \".\" \"-\")"), "a-b-c");
    assert_eq!(eval_str("(replace \"abc\" \"x\" \"y\")"), "abc");
}

#[test]
fn test_replace_rejects_an_empty_search_string() {
    invalid_argument_for("(replace \"abc\" \"\" \"y\")", "replace");
}

#[test]
fn test_substring_is_character_based() {
    assert_eq!(eval_str("(substring \"kubernetes\" 0 4)"), "kube");
    assert_eq!(eval_str("(substring \"héllo\" 1 3)"), "él");
    assert_eq!(eval_str("(substring \"abc\" 1 1)"), "");
}

#[test]
fn test_substring_range_errors() {
    invalid_argument_for("(substring \"abc\" 2 1)", "substring");
    invalid_argument_for("(substring \"abc\" 0 9)", "substring");
    invalid_argument_for("(substring \"abc\" -1 2)", "substring");
}

#[test]
fn test_split_and_join_round_trip() {
    assert_eq!(eval_str("(split \"a,b,c\" \",\")"), "(a b c)");
    assert_eq!(eval_str("(join (split \"a,b,c\" \",\") \"-\")"), "a-b-c");
    assert_eq!(eval_str("(join (list) \",\")"), "");
}

#[test]
fn test_split_rejects_an_empty_separator() {
    invalid_argument_for("(split \"abc\" \"\")", "split");
}

// ─────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_integer_arithmetic() {
    assert_eq!(eval_str("(+ 1 2 3)"), "6");
    assert_eq!(eval_str("(- 10 3)"), "7");
    assert_eq!(eval_str("(- 10 3 2)"), "5");
    assert_eq!(eval_str("(* 2 3 4)"), "24");
    assert_eq!(eval_str("(/ 10 2)"), "5");
    assert_eq!(eval_str("(/ 7 2)"), "3");
    assert_eq!(eval_str("(mod 10 3)"), "1");
}

#[test]
fn test_float_arithmetic_when_any_operand_is_fractional() {
    assert_eq!(eval_str("(+ 1 0.5)"), "1.5");
    assert_eq!(eval_str("(/ 7.0 2)"), "3.5");
    // Whole-number float results drop the trailing .0
    assert_eq!(eval_str("(+ 1.5 0.5)"), "2");
}

#[test]
fn test_single_operand_arithmetic() {
    assert_eq!(eval_str("(+ 5)"), "5");
    assert_eq!(eval_str("(- 5)"), "5");
    assert_eq!(eval_str("(* 5)"), "5");
}

#[test]
fn test_division_and_modulo_by_zero() {
    invalid_argument_for("(/ 10 0)", "/");
    invalid_argument_for("(mod 10 0)", "mod");
}

#[test]
fn test_non_numeric_operand_errors() {
    invalid_argument_for("(+ 1 \"two\")", "+");
    invalid_argument_for("(* \"x\" 3)", "*");
}

#[test]
fn test_arithmetic_requires_operands() {
    assert!(matches!(
        eval_source("(+)").unwrap_err(),
        EvalError::WrongArity { function: "+", .. }
    ));
}

// ─────────────────────────────────────────────────────────────────────
// Comparison & logic
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_eq_compares_string_forms() {
    assert_eq!(eval_str("(eq \"prod\" \"prod\")"), "true");
    assert_eq!(eval_str("(eq \"prod\" \"dev\")"), "false");
    assert_eq!(eval_str("(eq (+ 1 2) 3)"), "true");
    assert_eq!(eval_str("(eq (list 1 2) (list 1 2))"), "true");
}

#[test]
fn test_numeric_ordering() {
    assert_eq!(eval_str("(< 1 2)"), "true");
    assert_eq!(eval_str("(> 1 2)"), "false");
    assert_eq!(eval_str("(<= 2 2)"), "true");
    assert_eq!(eval_str("(>= 2 3)"), "false");
    assert_eq!(eval_str("(< 1.5 2)"), "true");
}

#[test]
fn test_ordering_requires_numbers() {
    invalid_argument_for("(< \"a\" \"b\")", "<");
}

#[test]
fn test_not_inverts_truthiness() {
    assert_eq!(eval_str("(not true)"), "false");
    assert_eq!(eval_str("(not false)"), "true");
    // Any non-"true" atom is falsey
    assert_eq!(eval_str("(not \"anything\")"), "true");
    assert_eq!(eval_str("(not (list 1))"), "true");
}

// ─────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_type_predicates() {
    assert_eq!(eval_str("(string? \"x\")"), "true");
    assert_eq!(eval_str("(string? 42)"), "true"); // every atom is a string
    assert_eq!(eval_str("(string? (list))"), "false");

    assert_eq!(eval_str("(number? 42)"), "true");
    assert_eq!(eval_str("(number? -3.5)"), "true");
    assert_eq!(eval_str("(number? \"abc\")"), "false");
    assert_eq!(eval_str("(number? (list 1))"), "false");

    assert_eq!(eval_str("(bool? true)"), "true");
    assert_eq!(eval_str("(bool? false)"), "true");
    assert_eq!(eval_str("(bool? \"yes\")"), "false");

    assert_eq!(eval_str("(list? (list 1 2))"), "true");
    assert_eq!(eval_str("(list? ())"), "true");
    assert_eq!(eval_str("(list? \"x\")"), "false");
}

#[test]
fn test_empty_predicate_applies_to_scalars_only() {
    assert_eq!(eval_str("(empty? \"\")"), "true");
    assert_eq!(eval_str("(empty? \"x\")"), "false");
    assert_eq!(eval_str("(empty? 0)"), "false");
    // Lists are never empty? — element counts go through len
    assert_eq!(eval_str("(empty? ())"), "false");
    assert_eq!(eval_str("(empty? (list 1))"), "false");
    assert_eq!(eval_str("(eq (len ()) 0)"), "true");
}

// ─────────────────────────────────────────────────────────────────────
// Collections
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_list_construction_preserves_order_and_nesting() {
    assert_eq!(eval_str("(list 1 2 3)"), "(1 2 3)");
    assert_eq!(eval_str("(list \"a\" (list \"b\" \"c\"))"), "(a (b c))");
    assert_eq!(eval_str("(list)"), "()");
}

#[test]
fn test_first_and_len() {
    assert_eq!(eval_str("(first (list \"a\" \"b\"))"), "a");
    assert_eq!(eval_str("(len (list 1 2 3))"), "3");
    assert_eq!(eval_str("(len \"héllo\")"), "5"); // characters, not bytes
    assert_eq!(eval_str("(len ())"), "0");
}

#[test]
fn test_first_of_an_empty_list_errors() {
    invalid_argument_for("(first (list))", "first");
}

#[test]
fn test_range_is_end_exclusive() {
    assert_eq!(eval_str("(range 5)"), "(0 1 2 3 4)");
    assert_eq!(eval_str("(range 1 4)"), "(1 2 3)");
    assert_eq!(eval_str("(range 0)"), "()");
    assert_eq!(eval_str("(range 3 3)"), "()");
}

// ─────────────────────────────────────────────────────────────────────
// Encoding & hashing
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_base64_round_trip() {
    assert_eq!(eval_str("(base64-encode \"hello\")"), "aGVsbG8=");
    assert_eq!(eval_str("(base64-decode \"aGVsbG8=\")"), "hello");
    assert_eq!(
        eval_str("(base64-decode (base64-encode \"user:pass\"))"),
        "user:pass"
    );
}

#[test]
fn test_base64_decode_rejects_bad_input() {
    invalid_argument_for("(base64-decode \"not-base64!!\")", "base64-decode");
}

#[test]
fn test_sha256_digest_is_lowercase_hex() {
    assert_eq!(
        eval_str("(sha256 \"hello\")"),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(
        eval_str("(sha256 \"\")"),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_uuid_shape() {
    let id = eval_str("(uuid)");
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
    // v4 marker in the third group
    assert_eq!(&id[14..15], "4");
    // Two draws are distinct
    assert_ne!(eval_str("(uuid)"), eval_str("(uuid)"));
}

// ─────────────────────────────────────────────────────────────────────
// System
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_now_is_rfc3339_utc() {
    let stamp = eval_str("(now)");
    assert!(stamp.ends_with('Z'), "UTC suffix expected: {stamp}");
    assert!(stamp.contains('T'), "date/time separator expected: {stamp}");
    assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
}

#[test]
fn test_timestamp_is_recent_epoch_seconds() {
    let seconds: i64 = eval_str("(timestamp)").parse().unwrap();
    // After 2020-01-01, before 2100
    assert!(seconds > 1_577_836_800 && seconds < 4_102_444_800);
}

#[test]
fn test_host_and_directories_are_nonempty() {
    assert!(!eval_str("(hostname)").is_empty());
    assert!(eval_str("(home)").starts_with('/'));
    assert!(eval_str("(cwd)").starts_with('/'));
}

// ─────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_dirname() {
    assert_eq!(eval_str("(dirname \"/etc/nimbus/config.lisp\")"), "/etc/nimbus");
    assert_eq!(eval_str("(dirname \"config.lisp\")"), ".");
    assert_eq!(eval_str("(dirname \"/\")"), ".");
}

#[test]
fn test_basename() {
    assert_eq!(eval_str("(basename \"/etc/nimbus/config.lisp\")"), "config.lisp");
    assert_eq!(eval_str("(basename \"config.lisp\")"), "config.lisp");
}

// ─────────────────────────────────────────────────────────────────────
// Variables & defaults
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_set_returns_its_value() {
    assert_eq!(eval_str("(set \"zone\" \"us-east-1a\")"), "us-east-1a");
}

#[test]
fn test_var_on_unknown_name_errors() {
    assert_eq!(
        eval_source("(var \"never-set\")").unwrap_err(),
        EvalError::UndefinedVariable("never-set".into())
    );
}

#[test]
fn test_default_falls_back_on_empty() {
    assert_eq!(eval_str("(default \"\" \"fallback\")"), "fallback");
    assert_eq!(eval_str("(default \"value\" \"fallback\")"), "value");
    assert_eq!(
        eval_str("(default (env \"NIMBUS_BUILTIN_TEST_NO_SUCH\") \"3\")"),
        "3"
    );
}

// ─────────────────────────────────────────────────────────────────────
// Pattern matching
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_match_is_a_search_not_a_full_match() {
    assert_eq!(eval_str("(match? \"^prod-\" \"prod-eu-1\")"), "true");
    assert_eq!(eval_str("(match? \"eu\" \"prod-eu-1\")"), "true");
    assert_eq!(eval_str("(match? \"^dev-\" \"prod-eu-1\")"), "false");
    assert_eq!(eval_str("(match? \"[0-9]+$\" \"node-42\")"), "true");
}

#[test]
fn test_match_rejects_an_invalid_pattern() {
    invalid_argument_for("(match? \"[unclosed\" \"x\")", "match?");
}

// ─────────────────────────────────────────────────────────────────────
// Arity errors
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_arity_errors_name_the_function() {
    for (source, name) in [
        ("(upper)", "upper"),
        ("(replace \"a\" \"b\")", "replace"),
        ("(substring \"a\" 1)", "substring"),
        ("(mod 10)", "mod"),
        ("(uuid \"extra\")", "uuid"),
        ("(set \"only-name\")", "set"),
    ] {
        match eval_source(source).unwrap_err() {
            EvalError::WrongArity { function, .. } => assert_eq!(function, name),
            other => panic!("'{source}' should be an arity error, got {other}"),
        }
    }
}
