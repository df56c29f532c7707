//! End-to-end tests for the urlprovider CLI
//!
//! These tests verify:
//! - `--describe` output for each provider
//! - Input validation failures never reach the network
//! - Resolution against a local index in text and JSON modes
//! - Exit codes for success and failure

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command for the compiled binary with colors disabled
fn urlprovider() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_urlprovider"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run a command on a blocking thread so the mock server keeps serving
async fn run_blocking(args: Vec<String>) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || urlprovider().args(&args).assert())
        .await
        .expect("command thread panicked")
}

async fn index_server(at: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

mod describe {
    use super::*;

    #[test]
    fn test_describe_praat() {
        urlprovider()
            .args(["praat", "--describe"])
            .assert()
            .success()
            .stdout(predicate::str::contains("arch_edition (optional, default: 32)"))
            .stdout(predicate::str::contains("base_url"))
            .stdout(predicate::str::contains("Output variables:\n  url"));
    }

    #[test]
    fn test_describe_puppetlabs_json() {
        let output = urlprovider()
            .args(["puppetlabs", "--describe", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["name"], "puppetlabs");
        let inputs: Vec<&str> = json["input_variables"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            inputs,
            vec!["product_name", "get_version", "get_os_version", "index_url"]
        );
    }

    #[test]
    fn test_no_color_flag_strips_ansi() {
        let colored = Command::new(env!("CARGO_BIN_EXE_urlprovider"))
            .env_remove("NO_COLOR")
            .env("CLICOLOR_FORCE", "1")
            .args(["praat", "--describe"])
            .output()
            .unwrap();
        assert!(String::from_utf8_lossy(&colored.stdout).contains("\u{1b}"));

        Command::new(env!("CARGO_BIN_EXE_urlprovider"))
            .env_remove("NO_COLOR")
            .env("CLICOLOR_FORCE", "1")
            .args(["praat", "--describe", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}").not());
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_unknown_product_fails() {
        urlprovider()
            .args(["puppetlabs", "-k", "product_name=razor"])
            .args(["-k", "index_url=http://127.0.0.1:9/mac"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value 'razor'"));
    }

    #[test]
    fn test_missing_product_fails() {
        urlprovider()
            .args(["puppetlabs", "-k", "index_url=http://127.0.0.1:9/mac"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "missing required input variable 'product_name'",
            ));
    }

    #[test]
    fn test_invalid_arch_fails_as_json() {
        let output = urlprovider()
            .args(["praat", "--json", "-k", "arch_edition=128"])
            .output()
            .unwrap();
        assert!(!output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["error"]["kind"], "invalid_input");
    }

    #[test]
    fn test_malformed_key_is_rejected() {
        urlprovider()
            .args(["praat", "-k", "arch_edition"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("KEY=VALUE"));
    }

    #[test]
    fn test_invalid_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("inputs.toml");
        fs::write(&input, "get_os_version = 10.10\n").unwrap();

        urlprovider()
            .args(["puppetlabs", "--input", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("must be a string"));
    }
}

mod resolution {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_praat_text_output() {
        let server = index_server(
            "/praat/download_mac.html",
            r#"<a href="praat6123_mac64.dmg">64</a> <a href="praat6123_mac32.dmg">32</a>"#,
        )
        .await;
        let base_url = format!("{}/praat/download_mac.html", server.uri());

        run_blocking(vec![
            "praat".into(),
            "-k".into(),
            "arch_edition=64".into(),
            "-k".into(),
            format!("base_url={}", base_url),
        ])
        .await
        .success()
        .stdout(predicate::str::contains(format!(
            "Found URL {}/praat/praat6123_mac64.dmg",
            server.uri()
        )));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_puppetlabs_quiet_output() {
        let server = index_server(
            "/mac",
            r#"href="hiera-1.3.4.dmg" href="hiera-3.0.1.dmg" href="hiera-2.0.0.dmg""#,
        )
        .await;

        run_blocking(vec![
            "puppetlabs".into(),
            "-q".into(),
            "-k".into(),
            "product_name=hiera".into(),
            "-k".into(),
            format!("index_url={}/mac", server.uri()),
        ])
        .await
        .success()
        .stdout(predicate::str::diff(format!(
            "{}/mac/hiera-3.0.1.dmg\n",
            server.uri()
        )));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_puppetlabs_agent_from_input_file() {
        let server = index_server(
            "/mac/10.9/PC1/x86_64",
            r#"<a href="puppet-agent-1.2.5-1.osx10.9.dmg">agent</a>"#,
        )
        .await;
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("inputs.toml");
        fs::write(
            &input,
            format!(
                "product_name = \"agent\"\nget_os_version = \"10.9\"\nindex_url = \"{}/mac\"\n",
                server.uri()
            ),
        )
        .unwrap();

        let assert = run_blocking(vec![
            "puppetlabs".into(),
            "--json".into(),
            "--input".into(),
            input.to_str().unwrap().to_string(),
        ])
        .await
        .success();

        let json: serde_json::Value =
            serde_json::from_slice(&assert.get_output().stdout).unwrap();
        assert_eq!(json["outputs"]["version"], "1.2.5");
        assert_eq!(
            json["outputs"]["url"],
            format!(
                "{}/mac/10.9/PC1/x86_64/puppet-agent-1.2.5-1.osx10.9.dmg",
                server.uri()
            )
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_no_match_exit_code_and_json_error() {
        let server = index_server("/mac", "<html>This page has moved</html>").await;

        let assert = run_blocking(vec![
            "puppetlabs".into(),
            "--json".into(),
            "-k".into(),
            "product_name=facter".into(),
            "-k".into(),
            format!("index_url={}/mac", server.uri()),
        ])
        .await
        .failure();

        let json: serde_json::Value =
            serde_json::from_slice(&assert.get_output().stdout).unwrap();
        assert_eq!(json["error"]["kind"], "no_match");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains(&format!("{}/mac", server.uri())));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_fetch_failure_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        run_blocking(vec![
            "praat".into(),
            "-k".into(),
            format!("base_url={}/download_mac.html", server.uri()),
        ])
        .await
        .failure()
        .stderr(predicate::str::contains("retrieving download index"));
    }
}
