use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, UI_DE, UI_FR, run};

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_fr.ts", UI_FR)?;

    assert_cmd_snapshot!(test.check_command());
    Ok(())
}

#[test]
fn test_unfinished_is_warning() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_de.ts", UI_DE)?;

    // Warnings alone do not fail the check
    assert_cmd_snapshot!(test.check_command());
    Ok(())
}

#[test]
fn test_vanished_entries_are_not_reported() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/ui_de.ts",
        r#"<TS version="2.1" language="de_DE">
<context>
    <name>AndroidAutoScreen</name>
    <message>
        <source>Connected</source>
        <translation type="vanished"></translation>
    </message>
    <message>
        <source>Disconnected</source>
        <translation type="obsolete">Getrennt</translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());
    Ok(())
}

#[test]
fn test_errors_fail_the_check() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/ui_de.ts",
        r#"<TS version="2.1" language="de_DE">
<context>
    <name>Strings</name>
    <message>
        <source>Back</source>
        <translation></translation>
    </message>
    <message>
        <source>Track %1 of %2</source>
        <translation>Titel %1</translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());
    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_fr.ts", UI_FR)?;
    test.write_file(
        "i18n/ui_it.ts",
        "<TS version=\"2.1\">\n<context>\n<message><source>Ciao</source></message>",
    )?;

    assert_cmd_snapshot!(test.check_command());
    Ok(())
}

#[test]
fn test_unknown_status() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/ui_de.ts",
        r#"<TS version="2.1" language="de_DE">
<context>
    <name>Strings</name>
    <message>
        <source>Tools</source>
        <translation type="pending">Werkzeuge</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"Tools\"  unknown-status"));
    assert!(stdout.contains("type=\"pending\", treated as unfinished"));
    // Reported once, not also as unfinished
    assert!(!stdout.contains("  unfinished\n"));
    // Logged once while loading, not again by the parser
    assert_eq!(
        stderr
            .matches("unknown translation type \"pending\" for \"Tools\"")
            .count(),
        1,
        "stderr:\n{}",
        stderr
    );

    Ok(())
}

#[test]
fn test_selected_rules() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_de.ts", UI_DE)?;

    let mut cmd = test.check_command();
    cmd.arg("empty-translation").arg("placeholder-mismatch");
    assert_cmd_snapshot!(cmd);
    Ok(())
}

#[test]
fn test_config_translations_dir_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tscatrc.json",
        r#"{
    "translationsDir": "ui/i18n",
    "ignores": ["legacy/**"],
    "ignoreContexts": ["Strings"]
}"#,
    )?;
    test.write_file("ui/i18n/ui_de.ts", UI_DE)?;
    test.write_file("ui/i18n/legacy/ui_it.ts", "<TS><context>")?;

    assert_cmd_snapshot!(test.check_command());
    Ok(())
}

#[test]
fn test_translations_dir_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", r#"{ "translationsDir": "missing" }"#)?;
    test.write_file("lang/ui_fr.ts", UI_FR)?;

    let mut cmd = test.check_command();
    cmd.arg("--translations-dir").arg("lang");
    assert_cmd_snapshot!(cmd);
    Ok(())
}

#[test]
fn test_missing_translations_dir() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command());
    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", r#"{ "ignores": ["[oops"] }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: Invalid glob pattern in 'ignores': \"[oops\""));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    for command in ["check", "lookup", "contexts", "export", "init", "serve"] {
        assert!(stdout.contains(command), "help should list {}", command);
    }

    Ok(())
}
