use std::{fs, path::Path};

use intscript::{interpreter::evaluator::core::Session, run_script};
use walkdir::WalkDir;

#[test]
fn script_outputs_match() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path().extension().is_some_and(|ext| ext == "is")
                                              })
    {
        count += 1;
        check_script(entry.path());
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn check_script(path: &Path) {
    let source =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let expected_out = read_expectation(&path.with_extension("out"));
    let expected_err = read_expectation(&path.with_extension("err"));

    let mut session = Session::with_output(Vec::<u8>::new());
    let errors = run_script(&mut session, &source)
                 .iter()
                 .map(|e| format!("{e}\n"))
                 .collect::<String>();
    let out = String::from_utf8(session.into_output()).expect("output is utf-8");

    assert_eq!(out, expected_out, "stdout of {path:?}");
    assert_eq!(errors, expected_err, "errors of {path:?}");
}

fn read_expectation(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
