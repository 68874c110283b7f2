//! End-to-end CLI tests
//!
//! Run the built `smurfdykt` binary against a wiremock server that speaks the
//! Secrets Manager JSON protocol, and check stdout, stderr and exit status.

use serde_json::json;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GET_SECRET_VALUE: &str = "secretsmanager.GetSecretValue";

/// Run the binary with static credentials pointed at `endpoint`.
async fn run_smurfdykt(endpoint: &str, args: &[&str]) -> Output {
    let isolated = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_smurfdykt"))
        .args(args)
        .env("AWS_ACCESS_KEY_ID", "AKIDSMURFDYKTTEST")
        .env("AWS_SECRET_ACCESS_KEY", "smurfdykt-test-secret")
        .env("AWS_CONFIG_FILE", isolated.path().join("config"))
        .env("AWS_SHARED_CREDENTIALS_FILE", isolated.path().join("credentials"))
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("SMURFDYKT_AWS_REGION", "us-east-1")
        .env("SMURFDYKT_AWS_SM_ENDPOINT", endpoint)
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("AWS_PROFILE")
        .env_remove("AWS_ENDPOINT_URL")
        .env_remove("AWS_ENDPOINT_URL_SECRETS_MANAGER")
        .env_remove("SMURFDYKT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("failed to run smurfdykt binary")
}

async fn mount_secret(server: &MockServer, name: &str, payload: &str) {
    let body = json!({
        "ARN": format!("arn:aws:secretsmanager:us-east-1:123456789012:secret:{}-AbCdEf", name),
        "Name": name,
        "SecretString": payload,
        "VersionId": "5e1f9a42-0000-4000-8000-000000000001",
        "VersionStages": ["AWSCURRENT"],
        "CreatedDate": 1.7e9
    });

    Mock::given(method("POST"))
        .and(header("x-amz-target", GET_SECRET_VALUE))
        .and(body_partial_json(json!({ "SecretId": name })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/x-amz-json-1.1")
                .set_body_string(body.to_string()),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_not_found(server: &MockServer) {
    let body = json!({
        "__type": "ResourceNotFoundException",
        "Message": "Secrets Manager can't find the specified secret."
    });

    Mock::given(method("POST"))
        .and(header("x-amz-target", GET_SECRET_VALUE))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("content-type", "application/x-amz-json-1.1")
                .set_body_string(body.to_string()),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const ALICE: &str = r#"[{"Key":"username","Value":"alice"},{"Key":"password","Value":"hunter2"}]"#;

#[tokio::test]
async fn prints_requested_tag() {
    let server = MockServer::start().await;
    mount_secret(&server, "app/db", ALICE).await;

    let output = run_smurfdykt(&server.uri(), &["-secretname", "app/db"]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "alice\n");
}

#[tokio::test]
async fn prints_other_tag() {
    let server = MockServer::start().await;
    mount_secret(&server, "app/db", ALICE).await;

    let output =
        run_smurfdykt(&server.uri(), &["-secretname", "app/db", "-tag", "password"]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "hunter2\n");
}

#[tokio::test]
async fn missing_tag_prints_empty_line() {
    let server = MockServer::start().await;
    mount_secret(&server, "app/db", ALICE).await;

    let output = run_smurfdykt(&server.uri(), &["-secretname", "app/db", "-tag", "host"]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\n");
}

#[tokio::test]
async fn raw_mode_prints_secret_string() {
    let server = MockServer::start().await;
    mount_secret(&server, "app/raw", r#"{"anything":"goes"}"#).await;

    let output = run_smurfdykt(&server.uri(), &["-secretname", "app/raw", "-raw"]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "{\"anything\":\"goes\"}\n");
}

#[tokio::test]
async fn not_found_exits_one_without_output() {
    let server = MockServer::start().await;
    mount_not_found(&server).await;

    let output = run_smurfdykt(&server.uri(), &["-secretname", "app/missing"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let diagnostics = stderr(&output);
    assert!(diagnostics.contains("Secret not found: app/missing"), "stderr: {}", diagnostics);
}

#[tokio::test]
async fn malformed_payload_exits_one_without_output() {
    let server = MockServer::start().await;
    mount_secret(&server, "app/db", "username=alice").await;

    let output = run_smurfdykt(&server.uri(), &["-secretname", "app/db"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let diagnostics = stderr(&output);
    assert!(diagnostics.contains("Serialization error"), "stderr: {}", diagnostics);
}

#[tokio::test]
async fn config_file_overrides_flags() {
    let server = MockServer::start().await;
    mount_secret(&server, "from/file", ALICE).await;

    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("smurf.yml");
    std::fs::write(&config, "secret_name: from/file\ntag: password\n").unwrap();

    let output = run_smurfdykt(
        &server.uri(),
        &["-secretname", "from/flags", "-config", path_str(&config)],
    )
    .await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "hunter2\n");
}

#[tokio::test]
async fn unreadable_config_file_warns_and_uses_flags() {
    let server = MockServer::start().await;
    mount_secret(&server, "app/db", ALICE).await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yml");

    let output =
        run_smurfdykt(&server.uri(), &["-secretname", "app/db", "-config", path_str(&missing)])
            .await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "alice\n");
    let diagnostics = stderr(&output);
    assert!(diagnostics.contains("Error parsing config file"), "stderr: {}", diagnostics);
}

#[tokio::test]
async fn unknown_profile_is_credential_failure() {
    let server = MockServer::start().await;
    let isolated = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_smurfdykt"))
        .args(["-profile", "does-not-exist", "-secretname", "app/db"])
        .env("AWS_CONFIG_FILE", isolated.path().join("config"))
        .env("AWS_SHARED_CREDENTIALS_FILE", isolated.path().join("credentials"))
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("SMURFDYKT_AWS_REGION", "us-east-1")
        .env("SMURFDYKT_AWS_SM_ENDPOINT", server.uri())
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("AWS_PROFILE")
        .env_remove("AWS_WEB_IDENTITY_TOKEN_FILE")
        .env_remove("AWS_CONTAINER_CREDENTIALS_RELATIVE_URI")
        .env_remove("AWS_CONTAINER_CREDENTIALS_FULL_URI")
        .env_remove("SMURFDYKT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("failed to run smurfdykt binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        stderr(&output).contains("Error loading default or shared profile credentials"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}
