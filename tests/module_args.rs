// tests/module_args.rs

use std::io::Write;
use std::path::Path;

use get_locale::config::{load_and_validate, ModuleArgs};
use get_locale::errors::GetLocaleError;
use tempfile::NamedTempFile;

fn args_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn no_file_means_no_arguments() {
    let args = load_and_validate(None).unwrap();
    assert_eq!(args, ModuleArgs::default());
}

#[test]
fn empty_object_and_empty_file_are_accepted() {
    let file = args_file("{}");
    assert!(load_and_validate(Some(file.path())).is_ok());

    let file = args_file("");
    assert!(load_and_validate(Some(file.path())).is_ok());
}

#[test]
fn internal_controller_keys_are_ignored() {
    let file = args_file(
        r#"{"_ansible_check_mode": true, "_ansible_verbosity": 3, "_ansible_module_name": "get_locale"}"#,
    );

    let args = load_and_validate(Some(file.path())).unwrap();
    assert!(args.check_mode);
}

#[test]
fn unknown_parameters_are_rejected() {
    let file = args_file(r#"{"zeta": 1, "alpha": "x", "_ansible_diff": false}"#);

    match load_and_validate(Some(file.path())) {
        Err(GetLocaleError::Arguments(msg)) => {
            assert_eq!(
                msg,
                "Unsupported parameters for (get_locale) module: alpha, zeta. Supported parameters include: ."
            );
        }
        Err(e) => panic!("Expected Arguments error, got: {e:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn invalid_json_is_an_arguments_error() {
    let file = args_file("not json");

    let err = load_and_validate(Some(file.path())).unwrap_err();
    match err {
        GetLocaleError::Arguments(msg) => assert!(msg.contains("JSON object")),
        other => panic!("Expected Arguments error, got: {other:?}"),
    }
}

#[test]
fn non_object_json_is_rejected() {
    let file = args_file("[1, 2, 3]");
    assert!(matches!(
        load_and_validate(Some(file.path())),
        Err(GetLocaleError::Arguments(_))
    ));
}

#[test]
fn unreadable_file_is_an_arguments_error() {
    let err = load_and_validate(Some(Path::new("/nonexistent/get_locale/args.json"))).unwrap_err();
    match err {
        GetLocaleError::Arguments(msg) => assert!(msg.contains("failed to read")),
        other => panic!("Expected Arguments error, got: {other:?}"),
    }
}
