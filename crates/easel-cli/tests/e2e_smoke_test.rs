//! End-to-end smoke tests driving the CLI against the captured fixture.

use std::{fs, io::Write as _, path::PathBuf};

use tempfile::tempdir;

use easel_cli::{Args, Command, GenerateArgs, run};

/// Fixture lives at the workspace root, relative to the workspace not the crate
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("testdata/design-system.json")
}

fn generate_args(input: &str, output: &str) -> GenerateArgs {
    GenerateArgs {
        input: input.to_string(),
        output: output.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_all_commands() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixture_path().to_string_lossy().to_string();

    let commands: Vec<(&str, fn(GenerateArgs) -> Command)> = vec![
        ("tokens.json", Command::Tokens),
        ("interfaces.ts", Command::Interfaces),
        ("props.ts", Command::Props),
    ];

    for (output_filename, command) in commands {
        let output_path = temp_dir.path().join(output_filename);
        let output = output_path.to_string_lossy().to_string();

        let args = Args {
            command: command(generate_args(&input, &output)),
        };
        run(&args).unwrap_or_else(|e| panic!("{output_filename} generation failed: {e}"));

        let written = fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("{output_filename} not written: {e}"));
        assert!(!written.is_empty(), "{output_filename} is empty");
    }
}

#[test]
fn e2e_tokens_output_is_json() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixture_path().to_string_lossy().to_string();
    let output_path = temp_dir.path().join("tokens.json");

    let args = Args {
        command: Command::Tokens(generate_args(
            &input,
            &output_path.to_string_lossy(),
        )),
    };
    run(&args).expect("tokens generation failed");

    let written = fs::read_to_string(&output_path).expect("tokens.json not written");
    let tokens: serde_json::Value = serde_json::from_str(&written).expect("output is JSON");
    assert_eq!(tokens["size"]["small"]["value"], 16.0);
    assert_eq!(tokens["color"]["primary"]["ink"]["category"], "color");
}

#[test]
fn e2e_config_file_changes_token_discovery() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixture_path().to_string_lossy().to_string();
    let output_path = temp_dir.path().join("tokens.json");

    let config_path = temp_dir.path().join("config.toml");
    let mut config_file = fs::File::create(&config_path).expect("config file created");
    // A marker that matches nothing in the fixture drops every node token.
    writeln!(config_file, "[tokens]\nmarker = \"_nothing\"").expect("config written");

    let args = Args {
        command: Command::Tokens(GenerateArgs {
            input,
            output: output_path.to_string_lossy().to_string(),
            config: Some(config_path.to_string_lossy().to_string()),
            log_level: "off".to_string(),
        }),
    };
    run(&args).expect("tokens generation failed");

    let written = fs::read_to_string(&output_path).expect("tokens.json not written");
    let tokens: serde_json::Value = serde_json::from_str(&written).expect("output is JSON");
    assert!(tokens.get("size").is_none(), "node tokens should be gone");
    // Style-table tokens do not depend on the marker.
    assert_eq!(tokens["color"]["primary"]["ink"]["category"], "color");
}

#[test]
fn e2e_missing_input_fails() {
    let args = Args {
        command: Command::Props(generate_args("does/not/exist.json", "-")),
    };
    assert!(run(&args).is_err());
}

#[test]
fn e2e_missing_explicit_config_fails() {
    let input = fixture_path().to_string_lossy().to_string();
    let args = Args {
        command: Command::Tokens(GenerateArgs {
            input,
            output: "-".to_string(),
            config: Some("does/not/exist.toml".to_string()),
            log_level: "off".to_string(),
        }),
    };
    assert!(run(&args).is_err());
}
