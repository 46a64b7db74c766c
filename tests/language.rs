use std::fs;

use quill::{interpreter::value::core::Value, run};
use walkdir::WalkDir;

#[test]
fn sample_scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        assert_eq!(output_of(&script), expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No sample scripts found in scripts/");
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).expect("output is not UTF-8")
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src), expected, "Script:\n{src}");
}

fn last_value(src: &str) -> Option<Value> {
    let mut out = Vec::new();
    match run(src, &mut out) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {e}"),
    }
}

/// Runs a script that must fail and returns what it printed and the error
/// message.
fn assert_failure(src: &str) -> (String, String) {
    let mut out = Vec::new();
    match run(src, &mut out) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => (String::from_utf8(out).expect("output is not UTF-8"), e.to_string()),
    }
}

#[test]
fn println_prints_integer_literals() {
    for n in [0, 1, 7, 42, 1_000_000, 123_456_789, i64::MAX] {
        assert_output(&format!("println {n} ;"), &format!("{n}\n"));
    }
}

#[test]
fn println_prints_boolean_literals() {
    assert_output("println true ;", "true\n");
    assert_output("println false ;", "false\n");
}

#[test]
fn print_does_not_end_the_line() {
    assert_output("print 1 ;\nprint true ;", "1true");
    assert_output("print 1 ; println 2 ; print 3 ;", "12\n3");
}

#[test]
fn let_binds_and_println_reads() {
    assert_output("let x 5 ;\nprintln x ;", "5\n");
    assert_output("let flag true ;\nprintln flag ;", "true\n");
}

#[test]
fn let_copies_by_value() {
    assert_output("let x 5 ;\nlet y x ;\nprintln y ;", "5\n");
    assert_output("let x 5 ;\nlet y x ;\nlet x 6 ;\nprintln y ;\nprintln x ;",
                  "5\n6\n");
}

#[test]
fn rebinding_may_change_kind() {
    assert_output("let x 1 ;\nlet x false ;\nprintln x ;", "false\n");
    assert_output("let x false ;\nlet x 1 ;\nprintln x ;", "1\n");
}

#[test]
fn operator_results_are_not_printed() {
    assert_output("add 2 3 ;", "");
    assert_output("eq 4 4 ;", "");
    assert_output("eq true true ;", "");
    assert_output("let x 10 ;\nlet y 3 ;\ndiv x y ;", "");
}

#[test]
fn operator_results_are_returned() {
    assert_eq!(last_value("add 2 3 ;"), Some(Value::Int(5)));
    assert_eq!(last_value("sub 2 5 ;"), Some(Value::Int(-3)));
    assert_eq!(last_value("mul 6 7 ;"), Some(Value::Int(42)));
    assert_eq!(last_value("let a 8 ;\nlet b 2 ;\nsub a b ;"), Some(Value::Int(6)));
}

#[test]
fn operands_are_read_in_source_order() {
    assert_eq!(last_value("sub 10 4 ;"), Some(Value::Int(6)));
    assert_eq!(last_value("div 12 4 ;"), Some(Value::Int(3)));
    assert_eq!(last_value("div 4 12 ;"), Some(Value::Int(0)));
}

#[test]
fn division_truncates() {
    assert_eq!(last_value("div 10 3 ;"), Some(Value::Int(3)));
    assert_eq!(last_value("let x 10 ;\nlet y 3 ;\ndiv x y ;"), Some(Value::Int(3)));
    assert_eq!(last_value("div 7 2 ;"), Some(Value::Int(3)));
}

#[test]
fn eq_compares_values_of_the_same_kind() {
    assert_eq!(last_value("eq 4 4 ;"), Some(Value::Bool(true)));
    assert_eq!(last_value("eq 4 5 ;"), Some(Value::Bool(false)));
    assert_eq!(last_value("eq true true ;"), Some(Value::Bool(true)));
    assert_eq!(last_value("eq true false ;"), Some(Value::Bool(false)));
    assert_eq!(last_value("let x 4 ;\nlet y 4 ;\neq x y ;"), Some(Value::Bool(true)));
}

#[test]
fn mismatched_kinds_produce_nothing() {
    assert_eq!(last_value("eq 1 true ;"), None);
    assert_eq!(last_value("add 1 true ;"), None);
    assert_eq!(last_value("mul false 2 ;"), None);
    assert_eq!(last_value("div true false ;"), None);
}

#[test]
fn division_by_zero_and_overflow_produce_nothing() {
    assert_eq!(last_value("div 1 0 ;"), None);
    assert_eq!(last_value("add 9223372036854775807 1 ;"), None);
    assert_eq!(last_value("mul 9223372036854775807 2 ;"), None);
    assert_output("div 1 0 ;\nprintln 1 ;", "1\n");
}

#[test]
fn last_value_survives_statements_without_results() {
    assert_eq!(last_value("add 1 1 ;\nadd 1 true ;"), Some(Value::Int(2)));
    assert_eq!(last_value("eq 1 1 ;\nlet x 5 ;\nprintln x ;"), Some(Value::Bool(true)));
}

#[test]
fn let_and_print_produce_no_value() {
    assert_eq!(last_value("println 3 ;"), None);
    assert_eq!(last_value("print 3 ;"), None);
    assert_eq!(last_value("let x true ;"), None);
}

#[test]
fn undefined_identifier_aborts_the_run() {
    let (output, error) = assert_failure("println 1 ;\nlet x y ;\nprintln 2 ;");

    assert_eq!(output, "1\n");
    assert_eq!(error, "Error on line 2: Unknown variable 'y'.");
}

#[test]
fn undefined_identifier_fails_in_every_operand_position() {
    assert_failure("println missing ;");
    assert_failure("print missing ;");
    assert_failure("eq missing 1 ;");
    assert_failure("eq 1 missing ;");
    assert_failure("add missing 1 ;");
    assert_failure("div 1 missing ;");
}

#[test]
fn errors_point_at_the_operand_line() {
    let (_, error) = assert_failure("let\nx\ny\n;");
    assert_eq!(error, "Error on line 3: Unknown variable 'y'.");

    let (_, error) = assert_failure("add 1\n\nmissing ;");
    assert_eq!(error, "Error on line 3: Unknown variable 'missing'.");

    let (_, error) = assert_failure("println\n  gone\n;");
    assert_eq!(error, "Error on line 2: Unknown variable 'gone'.");
}

#[test]
fn bindings_before_a_failure_stay_in_effect() {
    let (output, _) = assert_failure("let x 3 ;\nprintln x ;\nprintln nope ;\nprintln x ;");

    assert_eq!(output, "3\n");
}

#[test]
fn comments_never_contribute_lexemes() {
    assert_output("// this is ignored\nprintln 1 ;", "1\n");
    assert_output("   // indented println 5 ;\nprintln 2 ;", "2\n");
    assert_output("println 1 ;\n// println 2 ;\nprintln 3 ;", "1\n3\n");
}

#[test]
fn empty_and_comment_only_scripts_do_nothing() {
    assert_output("", "");
    assert_output("\n\n   \n", "");
    assert_output("// one\n// two", "");
    assert_eq!(last_value("// nothing here"), None);
}

#[test]
fn tokens_after_the_last_separator_are_dropped() {
    assert_output("println 1 ;\nprintln 2", "1\n");
    assert_output("println 1", "");
}

#[test]
fn statements_may_span_lines() {
    assert_output("let\nx\n3\n;\nprintln\nx\n;", "3\n");
    assert_output("let x 1 ; let y 2 ; println y ; println x ;", "2\n1\n");
}

#[test]
fn malformed_statements_are_skipped() {
    assert_output("let 5 x ;\nprintln 0 ;", "0\n");
    assert_output("let x ;\nprintln 0 ;", "0\n");
    assert_output("add 1 ;\nprintln 0 ;", "0\n");
    assert_output("add 1 2 3 ;\nprintln 0 ;", "0\n");
    assert_output("println 1 2 ;\nprintln 0 ;", "0\n");
    assert_output("x println 1 ;\nprintln 0 ;", "0\n");
    assert_output("add let 1 ;\nprintln 0 ;", "0\n");
    assert_output(";\nprintln 0 ;", "0\n");
}

#[test]
fn malformed_statements_do_not_resolve_operands() {
    assert_output("let 5 unknown ;", "");
    assert_output("println unknown extra ;", "");
    assert_output("add unknown ;", "");
}

#[test]
fn unrecognized_lexemes_are_dropped() {
    assert_output("println @ 5 ;", "5\n");
    assert_output("println -5 ;\nprintln 0 ;", "0\n");
    assert_output("let __a 1 ;\nprintln 2 ;", "2\n");
    assert_output("println 4; println 6 ;\nprintln 7 ;", "7\n");
}

#[test]
fn identifier_shapes() {
    assert_output("let _tmp 1 ;\nprintln _tmp ;", "1\n");
    assert_output("let a1_b 4 ;\nprintln a1_b ;", "4\n");
    assert_output("let letter 3 ;\nprintln letter ;", "3\n");
    assert_output("let truth 8 ;\nprintln truth ;", "8\n");
    assert_output("let X 9 ;\nlet x 1 ;\nprintln X ;", "9\n");
}

#[test]
fn oversized_literal_fails_when_resolved() {
    let (output, error) = assert_failure("println 1 ;\nprintln 99999999999999999999 ;\nprintln 2 ;");

    assert_eq!(output, "1\n");
    assert_eq!(error, "Error on line 2: Literal '99999999999999999999' is too large.");

    assert_failure("let x 9223372036854775808 ;");
    assert_failure("add 1 99999999999999999999 ;");
}

#[test]
fn oversized_literal_in_trailing_tokens_is_dropped() {
    assert_output("println 1 ;\nprintln 99999999999999999999", "1\n");
}

#[test]
fn oversized_literal_in_malformed_statement_is_skipped() {
    assert_output("println 1 ;\nadd 1 99999999999999999999 5 ;\nprintln 2 ;", "1\n2\n");
    assert_output("let 99999999999999999999 1 ;\nprintln 3 ;", "3\n");
}

#[test]
fn runs_are_independent() {
    let script = "let x 5 ;\nlet y x ;\nprintln y ;\nprint x ;";

    let first = output_of(script);
    let second = output_of(script);

    assert_eq!(first, "5\n5");
    assert_eq!(first, second);
    assert_failure("println x ;");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.txt").expect("missing file");
    assert_output(&script, "21\ntrue\n7");
}
