use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_point_at_public_roster() {
    let settings = Settings::default();
    assert_eq!(settings.roster_url, DEFAULT_ROSTER_URL);
    assert_eq!(settings.roster_file, None);
    assert!(matches!(
        settings.roster_location(),
        Ok(RosterLocation::Http(_))
    ));
    assert_eq!(settings.page_url().expect("page url").as_str(), DEFAULT_PAGE_URL);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
roster_url = "http://127.0.0.1:9000/doctors.json"
page_url = "https://doctors.example.test/list"
"#,
    )
    .expect("apply file");

    assert_eq!(settings.roster_url, "http://127.0.0.1:9000/doctors.json");
    assert_eq!(settings.page_url, "https://doctors.example.test/list");
}

#[test]
fn malformed_file_is_a_config_error() {
    let mut settings = Settings::default();
    let err = apply_file(&mut settings, "roster_url = [1, 2]").expect_err("not a string");
    assert!(matches!(err, DirectoryError::Config(_)));
}

#[test]
fn prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env(&mut settings, |name| match name {
        "ROSTER_URL" => Some("http://plain.test/doctors.json".to_string()),
        "APP__ROSTER_URL" => Some("http://prefixed.test/doctors.json".to_string()),
        "ROSTER_FILE" => Some("roster.json".to_string()),
        _ => None,
    });

    assert_eq!(settings.roster_url, "http://prefixed.test/doctors.json");
    assert_eq!(
        settings.roster_location().expect("location"),
        RosterLocation::File(PathBuf::from("roster.json"))
    );
}

#[test]
fn explicit_config_file_must_exist() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let missing = env::temp_dir().join(format!("doctor_directory_missing_{suffix}.toml"));

    let err = load_settings(Some(missing.as_path())).expect_err("missing config");
    assert!(matches!(err, DirectoryError::Io { .. }));
}

#[test]
fn invalid_page_url_is_reported() {
    let settings = Settings {
        page_url: "not a url".to_string(),
        ..Settings::default()
    };
    assert!(matches!(
        settings.page_url(),
        Err(DirectoryError::InvalidUrl { .. })
    ));
}
