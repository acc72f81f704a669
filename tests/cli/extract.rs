use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, run, run_json};

#[test]
fn test_extract_text_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "content/index.yaml",
        r#"
title@: Welcome
title@#: Page heading
subtitle: Not for translation
"#,
    )?;

    let (code, stdout, _) = run(test.extract_command())?;

    assert_eq!(code, Some(0));
    assert_snapshot!(stdout, @r"
    Welcome
      --> ./content/index.yaml
      = note: Page heading
    ✓ Extracted 1 message from 1 file
    ");

    Ok(())
}

#[test]
fn test_extract_json_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "content/pages/home.yaml",
        r#"
key:
  nested@: value
  other: valued
bar:
  baz:
    bum: dum
    boo@: foobar
foo@: bar
"#,
    )?;
    test.write_file(
        "content/posts/hello.md",
        r#"---
title@: value
tags@:
  - news
  - release
tags@#: Post tags
---
# Hello

This body is never extracted.
"#,
    )?;

    let mut cmd = test.extract_command();
    cmd.args(["--format", "json"]);
    let (code, json) = run_json(cmd)?;

    assert_eq!(code, Some(0));
    assert_eq!(
        json,
        json!({
            "messages": {
                "value": {
                    "locations": ["./content/pages/home.yaml", "./content/posts/hello.md"],
                    "comments": []
                },
                "foobar": {"locations": ["./content/pages/home.yaml"], "comments": []},
                "bar": {"locations": ["./content/pages/home.yaml"], "comments": []},
                "news": {"locations": ["./content/posts/hello.md"], "comments": ["Post tags"]},
                "release": {"locations": ["./content/posts/hello.md"], "comments": ["Post tags"]}
            }
        })
    );

    Ok(())
}

#[test]
fn test_extract_reports_unparseable_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("content/good.yaml", "title@: Fine\n")?;
    test.write_file("content/broken.yaml", "title@: [unclosed\n")?;

    let (code, stdout, stderr) = run(test.extract_command())?;

    assert_eq!(code, Some(1));
    assert!(stdout.contains("Fine"));
    assert!(stdout.contains("1 file could not be parsed"));
    assert!(stderr.contains("broken.yaml could not be parsed"));

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gleanrc.json",
        r#"{
            "contentRoot": "./site",
            "ignores": ["**/drafts/**"]
        }"#,
    )?;
    test.write_file("site/index.yaml", "title@: Published\n")?;
    test.write_file("site/drafts/wip.yaml", "title@: Draft\n")?;

    let mut cmd = test.extract_command();
    cmd.args(["--format", "json"]);
    let (code, json) = run_json(cmd)?;

    assert_eq!(code, Some(0));
    let messages: Vec<&String> = json["messages"].as_object().unwrap().keys().collect();
    assert_eq!(messages, vec!["Published"]);

    Ok(())
}

#[test]
fn test_extract_from_subdirectory_uses_project_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gleanrc.json",
        r#"{
            "contentRoot": "./content",
            "includes": ["**/*.yaml"]
        }"#,
    )?;
    test.write_file("content/index.yaml", "title@: Home\n")?;
    test.write_file("content/pages/about.yaml", "title@: About\n")?;
    test.write_file("content/pages/notes.md", "---\ntitle@: Notes\n---\n")?;

    let mut cmd = test.extract_command();
    cmd.current_dir(test.root().join("content").join("pages"));
    cmd.args(["--format", "json"]);
    let (code, json) = run_json(cmd)?;

    assert_eq!(code, Some(0));
    let messages: Vec<&String> = json["messages"].as_object().unwrap().keys().collect();
    assert_eq!(messages, vec!["Home", "About"]);

    Ok(())
}

#[test]
fn test_extract_content_root_argument_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".gleanrc.json", r#"{ "contentRoot": "./site" }"#)?;
    test.write_file("other/index.json", r#"{"items@": ["One", "Two"]}"#)?;

    let mut cmd = test.extract_command();
    cmd.args(["--content-root", "./other", "--format", "json"]);
    let (code, json) = run_json(cmd)?;

    assert_eq!(code, Some(0));
    let messages: Vec<&String> = json["messages"].as_object().unwrap().keys().collect();
    assert_eq!(messages, vec!["One", "Two"]);

    Ok(())
}

#[test]
fn test_extract_missing_content_root() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, stderr) = run(test.extract_command())?;

    assert_eq!(code, Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_extract_rejects_unanchored_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("content/index.yaml", "title@: Hello\n")?;
    test.write_file("overrides.json", r#"{"fr": {"": "Bonjour"}}"#)?;

    let mut cmd = test.extract_command();
    cmd.args(["--translations", "overrides.json"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("has no base message"));

    Ok(())
}
