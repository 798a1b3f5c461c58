// SPDX-License-Identifier: MPL-2.0
use pathstarter::app::session::Session;
use pathstarter::config::{self, Config, GeneralConfig};
use pathstarter::diagnostics::{DiagnosticsCollector, UserAction};
use pathstarter::forms::{
    password_strength, validate_field, Field, FieldId, FieldKind, FormKind, FormState,
    ReasonCode, StrengthLevel, SubmitOutcome,
};
use pathstarter::i18n::fluent::I18n;
use pathstarter::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(loaded_initial_config.general.theme_mode, ThemeMode::Light);

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("screen-profile"), "Profil");
}

#[test]
fn test_timing_overrides_are_clamped() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[timing]\nsearch_latency_ms = 10\nsubmit_latency_ms = 99999999\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let latencies = config.timing.latencies();
    assert_eq!(latencies.search.as_millis(), 10);
    assert_eq!(
        latencies.submit.as_millis(),
        u128::from(config::MAX_SIMULATED_DELAY_MS)
    );
}

#[test]
fn test_validation_examples() {
    let report = |kind, value| validate_field(&Field::required(kind, value)).reason;

    assert_eq!(report(FieldKind::Email, "a@b.com"), None);
    assert_eq!(
        report(FieldKind::Email, "not-an-email"),
        Some(ReasonCode::InvalidEmailFormat)
    );
    assert_eq!(
        report(FieldKind::Password, "short"),
        Some(ReasonCode::PasswordTooShort)
    );
    assert_eq!(report(FieldKind::Password, "longenough1"), None);
    assert_eq!(
        report(FieldKind::Text, "   "),
        Some(ReasonCode::RequiredMissing)
    );

    assert_eq!(password_strength("Ab1!defg").level, StrengthLevel::Strong);
    assert_eq!(password_strength("abc").level, StrengthLevel::Weak);
}

#[test]
fn test_signup_form_accepts_after_corrections() {
    let mut form = FormState::new(FormKind::Signup);
    assert_eq!(form.submit(), SubmitOutcome::Blocked);

    form.input(FieldId::FullName, "Ada Lovelace".into());
    form.input(FieldId::Email, " ada@example.com ".into());
    form.input(FieldId::Password, "Analytical1!".into());

    match form.submit() {
        SubmitOutcome::Accepted(submission) => {
            assert_eq!(submission.form, FormKind::Signup);
            assert_eq!(submission.email, "ada@example.com");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(form.submit(), SubmitOutcome::Busy);
}

#[test]
fn test_session_round_trip_and_corruption() {
    let dir = tempdir().expect("temp dir");
    let base = Some(dir.path().to_path_buf());

    assert!(Session::signed_in("ada@example.com")
        .save_to(base.clone())
        .is_none());
    let (session, warning) = Session::load_from(base.clone());
    assert!(warning.is_none());
    assert_eq!(session.email(), Some("ada@example.com"));

    fs::write(dir.path().join("session.cbor"), b"\xff\x00garbage").expect("corrupt");
    let (session, warning) = Session::load_from(base);
    assert!(!session.is_signed_in());
    assert_eq!(
        warning.as_deref(),
        Some("notification-session-parse-error")
    );
}

#[test]
fn test_activity_report_export() {
    let dir = tempdir().expect("temp dir");
    let mut collector = DiagnosticsCollector::default();
    let handle = collector.handle();

    handle.track(UserAction::SearchPerformed {
        query: "designer".into(),
    });
    handle.track(UserAction::UserLogout);
    collector.process_pending();

    let path = collector
        .export_to_file(dir.path().join("reports").join("activity.json"))
        .expect("export");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("parse");

    assert_eq!(json["event_count"], 2);
    assert_eq!(json["events"][0]["action"]["event"], "search_performed");
    assert_eq!(json["events"][1]["action"]["event"], "user_logout");
}
