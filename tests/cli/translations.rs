use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, run, run_json};

const OVERRIDES: &str = r#"{
    "(es|fr)": {"foo": "foobar"},
    "es": {"fuz": "ball"},
    "fr": {"bar": "bell"}
}"#;

fn overrides_test() -> Result<CliTest> {
    let test = CliTest::with_file("content/index.yaml", "foo@: foo\nfuz@: fuz\nbar@: bar\n")?;
    test.write_file("overrides.json", OVERRIDES)?;
    test.write_file(".gleanrc.json", r#"{ "translations": "overrides.json" }"#)?;
    Ok(test)
}

#[test]
fn test_translations_json() -> Result<()> {
    let test = overrides_test()?;

    let mut cmd = test.translations_command("es");
    cmd.args(["--format", "json"]);
    let (code, json) = run_json(cmd)?;

    assert_eq!(code, Some(0));
    assert_eq!(
        json,
        json!({
            "locale": "es",
            "patterns": ["(es|fr)", "es"],
            "translations": {"foo": "foobar", "fuz": "ball"}
        })
    );

    Ok(())
}

#[test]
fn test_translations_text() -> Result<()> {
    let test = overrides_test()?;

    let (code, stdout, _) = run(test.translations_command("fr"))?;

    assert_eq!(code, Some(0));
    assert_snapshot!(stdout, @r"
    locale fr ((es|fr), fr)
    foo => foobar
    bar => bell
    ");

    Ok(())
}

#[test]
fn test_translations_unmatched_locale() -> Result<()> {
    let test = overrides_test()?;

    let mut cmd = test.translations_command("en");
    cmd.args(["--format", "json"]);
    let (code, json) = run_json(cmd)?;

    assert_eq!(code, Some(0));
    assert_eq!(
        json,
        json!({"locale": "en", "patterns": [], "translations": {}})
    );

    let (_, stdout, _) = run(test.translations_command("en"))?;
    assert_eq!(stdout, "No translations match locale 'en'\n");

    Ok(())
}

#[test]
fn test_translations_yaml_overrides() -> Result<()> {
    let test = CliTest::with_file("content/index.yaml", "title@: Hello\n")?;
    test.write_file(
        "overrides.yaml",
        "'^fr':\n  Hello: Bonjour\n'fr_CA$':\n  Hello: Allo\n",
    )?;

    let mut cmd = test.translations_command("fr_CA");
    cmd.args(["--translations", "overrides.yaml", "--format", "json"]);
    let (code, json) = run_json(cmd)?;

    assert_eq!(code, Some(0));
    assert_eq!(json["translations"], json!({"Hello": "Allo"}));

    Ok(())
}

#[test]
fn test_translations_invalid_pattern() -> Result<()> {
    let test = CliTest::with_file("content/index.yaml", "title@: Hello\n")?;
    test.write_file("overrides.json", r#"{"(fr": {"Hello": "Bonjour"}}"#)?;

    let mut cmd = test.translations_command("fr");
    cmd.args(["--translations", "overrides.json"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("invalid locale pattern '(fr'"));

    Ok(())
}
