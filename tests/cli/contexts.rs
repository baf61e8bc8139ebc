use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, UI_DE};

#[test]
fn test_contexts_table() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_de.ts", UI_DE)?;

    let mut cmd = test.command();
    cmd.arg("contexts").arg("i18n/ui_de.ts");
    assert_cmd_snapshot!(cmd);
    Ok(())
}

#[test]
fn test_contexts_parse_error() -> Result<()> {
    let test = CliTest::with_file("i18n/ui_de.ts", "<resources></resources>")?;

    let mut cmd = test.command();
    cmd.arg("contexts").arg("i18n/ui_de.ts");
    assert_cmd_snapshot!(cmd);
    Ok(())
}
