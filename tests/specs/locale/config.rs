//! Locale contexts built from TOML configuration files.

use crate::prelude::*;
use durfmt_locale::LocaleConfig;
use similar_asserts::assert_eq;

#[test]
fn config_file_drives_formatting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locale.toml");
    std::fs::write(
        &path,
        r#"
locale = "en_US"
numerals = "arabext"
separator = " · "

[labels.hour]
one = "hr"
other = "hrs"
"#,
    )
    .unwrap();

    let ctx = LocaleConfig::load(&path).unwrap().into_context().unwrap();
    let formatter = DurationFormatter::new(ctx);
    assert_eq!(
        formatter.format(2 * HOUR_MS + MINUTE_MS).unwrap(),
        "۲ hrs · ۱ minute"
    );
}

#[test]
fn unknown_locale_in_config_is_reported() {
    let config = LocaleConfig::from_toml_str("locale = \"tlh\"\n").unwrap();
    let err = config.into_context().unwrap_err();
    assert_eq!(err.to_string(), "unknown locale: tlh");
}
