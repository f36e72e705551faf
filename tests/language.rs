use std::fs;

use ban::{
    Config, Error,
    error::{LexError, ParseError, RuntimeError},
    interpreter::token::Position,
    run_with_output,
};
use walkdir::WalkDir;

fn run_captured(src: &str) -> Result<String, Error> {
    let out = run_with_output(src, &Config::default(), Vec::new())?;
    Ok(String::from_utf8(out).expect("program output is UTF-8"))
}

fn output_of(src: &str) -> String {
    run_captured(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_success(src: &str) {
    if let Err(e) = run_captured(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match run_captured(src) {
        Ok(out) => panic!("Script succeeded but was expected to fail; it printed {out:?}"),
        Err(e) => e,
    }
}

#[test]
fn demo_scripts_print_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "ban"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match run_captured(&source) {
            Ok(actual) => assert_eq!(actual, expected, "output of {path:?} differs"),
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn literals_round_trip_through_definitions() {
    assert_eq!(output_of("ճշմարիտ որպես ա\nտպիր ա"), "ճշմարիտ\n");
    assert_eq!(output_of("կեղծ որպես ա\nտպիր ա"), "կեղծ\n");
    assert_eq!(output_of("17 որպես ա\nտպիր ա"), "17\n");
    assert_eq!(output_of("«Բարև, աշխարհ!» որպես ա\nտպիր ա"), "Բարև, աշխարհ!\n");
}

#[test]
fn numbers_print_as_decimal_values() {
    assert_eq!(output_of("007 որպես ա\nտպիր ա"), "7\n");
    assert_eq!(output_of("տպիր 0"), "0\n");
}

#[test]
fn print_joins_arguments_with_comma() {
    assert_eq!(output_of("5 որպես թիվ\nճշմարիտ որպես դրոշ\nտպիր թիվ և դրոշ"),
               "5, ճշմարիտ\n");
    assert_eq!(output_of("տպիր 1 և 2 և 3"), "1, 2, 3\n");
}

#[test]
fn case_marker_makes_value_the_object_of_a_call() {
    assert_eq!(output_of("«ա»ն տպիր"), "ա\n");
    assert_eq!(output_of("9ն տպիր"), "9\n");
    assert_eq!(output_of("ճշմարիտը տպիր"), "ճշմարիտ\n");
}

#[test]
fn marked_call_puts_the_marked_value_last() {
    assert_eq!(output_of("1ն և 2 և 3 տպիր"), "2, 3, 1\n");
}

#[test]
fn names_bound_in_a_call_are_not_visible_afterwards() {
    let src = "ա չափոցով գործառույթ «\n«ներս» որպես գաղտնիք\n» որպես ֆ\nֆ 1\nտպիր գաղտնիք";
    match assert_failure(src) {
        Error::Runtime(RuntimeError::UndefinedName { name, position }) => {
            assert_eq!(name, "գաղտնիք");
            assert_eq!(position.line, 5);
        },
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn parameters_shadow_outer_bindings_for_the_call_only() {
    let src = "1 որպես ա\nա չափոցով գործառույթ « տպիր ա » որպես ֆ\nֆ 2\nտպիր ա";
    assert_eq!(output_of(src), "2\n1\n");
}

#[test]
fn local_definitions_shadow_without_overwriting() {
    let src = "«դուրս» որպես բառ\nզ չափոցով գործառույթ « «ներս» որպես բառ\nտպիր բառ » որպես ֆ\nֆ 0\nտպիր բառ";
    assert_eq!(output_of(src), "ներս\nդուրս\n");
}

#[test]
fn callee_sees_the_callers_bindings() {
    let src = "«արտաքին» որպես բառ\nզ չափոցով գործառույթ « տպիր բառ » որպես ֆ\nֆ 0";
    assert_eq!(output_of(src), "արտաքին\n");
}

#[test]
fn functions_defined_in_a_call_do_not_escape() {
    let src = "զ չափոցով գործառույթ « ա չափոցով գործառույթ « տպիր ա » որպես ներսի » որպես ֆ\nֆ 0\nներսի 1";
    match assert_failure(src) {
        Error::Runtime(RuntimeError::UnknownFunction { name, .. }) => assert_eq!(name, "ներսի"),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn leading_parameter_takes_the_last_argument() {
    assert_eq!(output_of("ա և բ չափոցով գործառույթ « տպիր ա » որպես ֆ\nֆ 1 և 2"), "2\n");
    assert_eq!(output_of("ա և բ և գ չափոցով գործառույթ « տպիր ա և բ և գ » որպես ֆ\nֆ 1 և 2 և 3"),
               "3, 1, 2\n");
}

#[test]
fn too_few_arguments_is_error() {
    match assert_failure("ա և բ չափոցով գործառույթ « տպիր ա » որպես ֆ\nֆ 1") {
        Error::Runtime(RuntimeError::ArityMismatch { name,
                                                     expected,
                                                     found,
                                                     position, }) => {
            assert_eq!(name, "ֆ");
            assert_eq!((expected, found), (2, 1));
            assert_eq!(position, Position::new(2, 1));
        },
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn too_many_arguments_is_error() {
    let error = assert_failure("ա չափոցով գործառույթ « տպիր ա » որպես ֆ\nֆ 1 և 2");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArityMismatch { expected: 1,
                                                                  found: 2,
                                                                  .. })));
}

#[test]
fn unknown_function_is_error() {
    let error = assert_failure("անհայտ 5");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnknownFunction { .. })));

    let error = assert_failure("5 6");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn unknown_callee_is_reported_before_its_arguments() {
    match assert_failure("անհայտ չկա") {
        Error::Runtime(RuntimeError::UnknownFunction { name, position }) => {
            assert_eq!(name, "անհայտ");
            assert_eq!(position, Position::new(1, 1));
        },
        other => panic!("unexpected error {other}"),
    }
    assert!(matches!(assert_failure("ա չափոցով գործառույթ « » որպես ֆ\nֆ չկա"),
                     Error::Runtime(RuntimeError::UndefinedName { .. })));
    assert!(matches!(assert_failure("տպիր 1\nանհայտ չկա"),
                     Error::Runtime(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn undefined_name_is_error() {
    match assert_failure("տպիր չկա") {
        Error::Runtime(RuntimeError::UndefinedName { name, position }) => {
            assert_eq!(name, "չկա");
            assert_eq!(position, Position::new(1, 6));
        },
        other => panic!("unexpected error {other}"),
    }
    assert_failure("չկա որպես ա");
}

#[test]
fn user_function_shadows_native_print() {
    assert_eq!(output_of("ա չափոցով գործառույթ « » որպես տպիր\nտպիր 5"), "");
}

#[test]
fn bare_values_and_literals_are_inert() {
    assert_eq!(output_of("ճշմարիտ"), "");
    assert_eq!(output_of("«միայն տեքստ»"), "");
    assert_eq!(output_of("ա չափոցով գործառույթ « տպիր ա »"), "");
}

#[test]
fn defining_a_call_binds_nothing() {
    assert_eq!(output_of("տպիր 5 որպես ա"), "");
    assert_failure("տպիր 5 որպես ա\nտպիր ա");
}

#[test]
fn statements_before_a_runtime_error_take_effect() {
    let mut out = Vec::new();
    let failed = run_with_output("տպիր 1\nտպիր չկա\nտպիր 2", &Config::default(), &mut out).is_err();

    assert!(failed);
    assert_eq!(out, "1\n".as_bytes());
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let mut out = Vec::new();
    let parse_failed = matches!(run_with_output("տպիր 1\n5 որպես", &Config::default(), &mut out),
                                Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. })));

    assert!(parse_failed);
    assert!(out.is_empty());
}

#[test]
fn unterminated_function_body_is_error() {
    match assert_failure("ա չափոցով գործառույթ « տպիր ա") {
        Error::Parse(ParseError::UnterminatedBlock { position }) => {
            assert_eq!(position, Position::new(1, 11));
        },
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn stray_block_terminator_is_error() {
    let error = assert_failure("տպիր 1\n»\nտպիր 2");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn missing_function_keyword_is_error() {
    let error = assert_failure("ա չափոցով « տպիր ա »");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn missing_definition_name_is_error() {
    assert!(matches!(assert_failure("5 որպես"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("5 որպես 6"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn lexical_errors_abort_the_run() {
    match assert_failure("5\tորպես ա") {
        Error::Lex(LexError::UnexpectedCharacter { character, position }) => {
            assert_eq!(character, '\t');
            assert_eq!(position, Position::new(1, 2));
        },
        other => panic!("unexpected error {other}"),
    }
    assert!(matches!(assert_failure("print"),
                     Error::Lex(LexError::UnexpectedCharacter { character: 'p', .. })));
    assert!(matches!(assert_failure("տպիր 1 (չփակված"),
                     Error::Lex(LexError::UnterminatedComment { .. })));
    assert!(matches!(assert_failure("«չփակված"),
                     Error::Lex(LexError::UnterminatedQuote { .. })));
}

#[test]
fn errors_name_their_stage_and_position() {
    let message = assert_failure("տպիր չկա").to_string();
    assert_eq!(message,
               "Execution failed. Error on line 1, column 6: Undefined name 'չկա'.");

    let message = assert_failure("\n  ;").to_string();
    assert_eq!(message,
               "Lexing failed. Error on line 2, column 3: Unexpected character ';'.");
}

#[test]
fn every_stage_reports_where_it_failed() {
    assert_eq!(assert_failure("ա\n  \t").position(), Some(Position::new(2, 3)));
    assert_eq!(assert_failure("5 որպես\n«ա»").position(), Some(Position::new(2, 1)));
    assert_eq!(assert_failure("տպիր 1\nտպիր չկա").position(), Some(Position::new(2, 6)));
}

#[test]
fn debug_dump_precedes_program_output() {
    let config = Config::default().with_debug(true);
    let out = run_with_output("տպիր 5", &config, Vec::new()).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(out,
               "Identifier \"տպիր\" 1:1\nNumber \"5\" 1:6\nExpression Call տպիր(\"5\")\n5\n");
}

#[test]
fn debug_dump_indents_function_bodies() {
    let config = Config::default().with_debug(true);
    let src = "ա չափոցով գործառույթ « տպիր ա » որպես ֆ";
    let out = String::from_utf8(run_with_output(src, &config, Vec::new()).unwrap()).unwrap();

    assert!(out.ends_with("Definition ֆ = Function(ա)\n  Expression Call տպիր(\"ա\")\n"),
            "{out}");
}

#[test]
fn multiline_quotes_keep_positions_accurate() {
    let error = assert_failure("«առաջին\nերկրորդ» որպես ա\nտպիր բ");
    assert_eq!(error.to_string(),
               "Execution failed. Error on line 3, column 6: Undefined name 'բ'.");
}

#[test]
fn success_scripts_run() {
    assert_success("(միայն մեկնաբանություն)");
    assert_success("");
    assert_success("\n\n");
}
