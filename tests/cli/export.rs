use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, UI_DE, run};

#[test]
fn test_export_ts_round_trip() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_de.ts", UI_DE)?;

    let mut cmd = test.command();
    cmd.arg("export").arg("i18n/ui_de.ts");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, UI_DE);

    Ok(())
}

#[test]
fn test_export_normalizes_layout() -> Result<()> {
    let test = CliTest::with_file(
        "ui_fr.ts",
        r#"<TS version="2.1" language="fr_FR"><context><name>Strings</name><message><source>Back</source><translation type="unfinished"/></message></context></TS>"#,
    )?;

    let mut cmd = test.command();
    cmd.arg("export").arg("ui_fr.ts");
    assert_cmd_snapshot!(cmd);
    Ok(())
}

#[test]
fn test_export_keeps_length_variants_and_extras() -> Result<()> {
    let test = CliTest::with_file(
        "ui_de.ts",
        r#"<TS version="2.1" language="de_DE"><context><name>Strings</name><message><source>Settings</source><translation variants="yes"><lengthvariant>Einstellungen</lengthvariant><lengthvariant>Einst.</lengthvariant></translation><extra-po-flags>fuzzy</extra-po-flags></message></context></TS>"#,
    )?;

    let mut cmd = test.command();
    cmd.arg("export").arg("ui_de.ts");
    assert_cmd_snapshot!(cmd);
    Ok(())
}

#[test]
fn test_export_json() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_de.ts", UI_DE)?;

    let mut cmd = test.command();
    cmd.arg("export").arg("i18n/ui_de.ts").args(["--format", "json"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["language"], "de_DE");
    assert_eq!(json["contexts"][0]["name"], "AndroidAutoScreen");
    assert_eq!(json["contexts"][0]["messages"][0]["status"], "vanished");

    let strings = &json["contexts"][1]["messages"];
    assert_eq!(strings[0]["translation"], "Verfügbar");
    assert_eq!(strings[0]["locations"][0]["filename"], "../qml/Strings.qml");
    assert_eq!(strings[1]["status"], "unfinished");
    assert_eq!(strings[2]["numerusForms"][1], "%n Geräte");

    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_de.ts", UI_DE)?;

    let mut cmd = test.command();
    cmd.arg("export").arg("i18n/ui_de.ts").args(["-o", "copy.ts"]);
    assert_cmd_snapshot!(cmd);

    assert_eq!(test.read_file("copy.ts")?, UI_DE);

    Ok(())
}
