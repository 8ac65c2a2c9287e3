// tests/entry_point.rs

use get_locale::collect_locale_report;
use get_locale::config::FetchConfig;
use get_locale::errors::GetLocaleError;
use get_locale::report::{
    ModuleOutcome, LOCALE_MALFORMED_MESSAGE, LOCALE_MISSING_MESSAGE, SUCCESS_MESSAGE,
};
use get_locale_test_utils::fake_locale::FakeLocale;
use get_locale_test_utils::fake_runner::FakeRunner;
use get_locale_test_utils::init_tracing;
use serde_json::{json, Value};

fn healthy_runner() -> FakeRunner {
    FakeRunner::new()
        .with_stdout("localectl", "C.UTF-8\nen_US.UTF-8\n")
        .with_stdout("locale", "LANG=en_US.UTF-8\nLC_ALL=\n")
}

#[tokio::test]
async fn success_report_has_expected_shape() {
    init_tracing();

    let provider = FakeLocale::parts(&["en_US", "UTF-8"]);
    let runner = healthy_runner();

    let outcome = collect_locale_report(&provider, &runner, &FetchConfig::default())
        .await
        .unwrap();

    let report = match &outcome {
        ModuleOutcome::Success(r) => r,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(report.language_code, "en_US");
    assert_eq!(report.system_locale, "UTF-8");
    assert_eq!(report.message, SUCCESS_MESSAGE);
    assert!(!report.changed);
    assert_eq!(outcome.exit_code(), 0);

    let doc: Value = serde_json::from_str(&outcome.to_json(false).unwrap()).unwrap();
    assert_eq!(
        doc,
        json!({
            "system_locale": "UTF-8",
            "language_code": "en_US",
            "changed": false,
            "message": "Gather Locales Informations End Successfully.",
            "available_locales": ["C.UTF-8", "en_US.UTF-8"],
            "locale_details": {"LANG": "en_US.UTF-8", "LC_ALL": ""},
        })
    );
}

#[tokio::test]
async fn missing_localectl_still_succeeds_with_null_list() {
    let provider = FakeLocale::parts(&["en_US", "UTF-8"]);
    let runner = FakeRunner::new().with_stdout("locale", "LANG=en_US.UTF-8\nLC_ALL=\n");

    let outcome = collect_locale_report(&provider, &runner, &FetchConfig::default())
        .await
        .unwrap();

    assert!(outcome.is_success());
    let doc: Value = serde_json::from_str(&outcome.to_json(false).unwrap()).unwrap();
    assert_eq!(doc["available_locales"], Value::Null);
    assert_eq!(doc["locale_details"]["LANG"], "en_US.UTF-8");
}

#[tokio::test]
async fn missing_host_locale_fails_without_running_commands() {
    let provider = FakeLocale::missing();
    let runner = healthy_runner();

    let outcome = collect_locale_report(&provider, &runner, &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome, ModuleOutcome::failure(LOCALE_MISSING_MESSAGE));
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(runner.run_count(), 0);
}

#[tokio::test]
async fn single_component_locale_fails_without_running_commands() {
    let provider = FakeLocale::parts(&["C"]);
    let runner = healthy_runner();

    let outcome = collect_locale_report(&provider, &runner, &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome, ModuleOutcome::failure(LOCALE_MALFORMED_MESSAGE));
    assert_eq!(runner.run_count(), 0);

    let doc: Value = serde_json::from_str(&outcome.to_json(false).unwrap()).unwrap();
    assert_eq!(
        doc,
        json!({
            "msg": "Get System Locale or Language Code Failed",
            "changed": false,
            "failed": true,
        })
    );
}

#[tokio::test]
async fn three_component_locale_is_malformed() {
    let provider = FakeLocale::parts(&["en_US", "UTF-8", "extra"]);
    let runner = healthy_runner();

    let outcome = collect_locale_report(&provider, &runner, &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome, ModuleOutcome::failure(LOCALE_MALFORMED_MESSAGE));
    assert_eq!(runner.run_count(), 0);
}

#[tokio::test]
async fn empty_language_or_encoding_is_malformed() {
    for parts in [["en_US", ""], ["", "UTF-8"]] {
        let provider = FakeLocale::parts(&parts);
        let runner = healthy_runner();

        let outcome = collect_locale_report(&provider, &runner, &FetchConfig::default())
            .await
            .unwrap();

        assert_eq!(outcome, ModuleOutcome::failure(LOCALE_MALFORMED_MESSAGE));
        assert_eq!(runner.run_count(), 0);
    }
}

#[tokio::test]
async fn decoding_errors_propagate_to_the_caller() {
    let provider = FakeLocale::parts(&["en_US", "UTF-8"]);
    let runner = FakeRunner::new()
        .with_stdout("localectl", "C.UTF-8\n")
        .with_stdout("locale", b"LANG=\xc3\x28\n".to_vec());

    let err = collect_locale_report(&provider, &runner, &FetchConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GetLocaleError::Decoding { .. }));
    assert_eq!(runner.run_count(), 2);
}

#[tokio::test]
async fn host_encoding_is_used_for_decoding() {
    let provider = FakeLocale::parts(&["de_DE", "ISO-8859-1"]);
    let runner = FakeRunner::new()
        .with_stdout("localectl", b"de_DE\n".to_vec())
        .with_stdout("locale", b"LC_MESSAGES=\"gr\xfc\xdf\"\n".to_vec());

    let outcome = collect_locale_report(&provider, &runner, &FetchConfig::default())
        .await
        .unwrap();

    match outcome {
        ModuleOutcome::Success(report) => {
            let details = report.locale_details.expect("details expected");
            assert_eq!(details["LC_MESSAGES"], "\"grüß\"");
            assert_eq!(report.system_locale, "ISO-8859-1");
        }
        other => panic!("expected success, got {other:?}"),
    }
}
