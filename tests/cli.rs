use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;

fn mdhtml() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdhtml"))
}

#[test]
fn writes_fragment_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.md");
    fs::write(&input, "# Hello\n\n- one\n- two\n").unwrap();

    let status = mdhtml()
        .arg(&input)
        .arg("--fragment")
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("index.html")).unwrap(),
        "<div><h1>Hello</h1><ul><li>one</li><li>two</li></ul></div>"
    );
}

#[test]
fn writes_page_with_config_template() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.md");
    let output = dir.path().join("out.html");
    let config = dir.path().join("site.toml");
    fs::write(&input, "# Post\n\n[up](/)").unwrap();
    fs::write(
        &config,
        "[page]\nbase_path = \"/blog\"\ntemplate = \"<h>{{ Title }}</h>{{ Content }}\"\n",
    )
    .unwrap();

    let status = mdhtml()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-c")
        .arg(&config)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"<h>Post</h><div><h1>Post</h1><p><a href="/blog/">up</a></p></div>"#
    );
}

#[test]
fn fails_on_unmatched_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.md");
    fs::write(&input, "# Title\n\nsome `code").unwrap();

    let result = mdhtml().arg(&input).current_dir(dir.path()).output().unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("unmatched"));
    assert!(!dir.path().join("bad.html").exists());
}

#[test]
fn fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = mdhtml()
        .arg(dir.path().join("missing.md"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!result.status.success());
}
