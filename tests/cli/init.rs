use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    let config: Value = serde_json::from_str(&test.read_file(".tscatrc.json")?)?;
    assert_eq!(config["translationsDir"], "./i18n");
    assert_eq!(config["sourceLanguage"], "en");
    assert!(test.root().join(".tscatrc.json").is_file());

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", r#"{ "translationsDir": "lang" }"#)?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(
        test.read_file(".tscatrc.json")?,
        r#"{ "translationsDir": "lang" }"#
    );

    Ok(())
}
