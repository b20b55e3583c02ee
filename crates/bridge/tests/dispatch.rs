//! End-to-end dispatch over a filesystem-backed registry.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use {serde_json::json, tempfile::tempdir};

use {
    hertz_bridge::{MediaStoreBridge, Services, StoreMediaService},
    hertz_media_store::{AUDIO_RELATIVE_PATH, AudioSaver, FsMediaRegistry},
    hertz_protocol::{MethodCall, MethodReply, error_codes},
};

fn bridge_over(root: &std::path::Path) -> MediaStoreBridge {
    let registry = Arc::new(FsMediaRegistry::new(root));
    let saver = AudioSaver::new(registry);
    MediaStoreBridge::new(Services {
        media: Arc::new(StoreMediaService::new(saver)),
    })
}

fn save_call(args: serde_json::Value) -> MethodCall {
    MethodCall::new("saveAudioToPublic", args)
}

fn expect_ok(reply: MethodReply) -> serde_json::Value {
    match reply {
        MethodReply::Ok { payload } => payload,
        other => panic!("expected ok reply, got {other:?}"),
    }
}

fn expect_err_code(reply: MethodReply) -> String {
    match reply {
        MethodReply::Err { error } => error.code,
        other => panic!("expected error reply, got {other:?}"),
    }
}

#[tokio::test]
async fn save_audio_round_trip() {
    let dir = tempdir().unwrap();
    let bridge = bridge_over(dir.path());

    let reply = bridge
        .handle(save_call(json!({
            "fileName": "tone.wav",
            "mimeType": "audio/wav",
            "bytes": [1, 2, 3],
        })))
        .await;

    let payload = expect_ok(reply);
    let id = payload.as_str().unwrap();
    assert!(id.starts_with("media://audio/"));

    let written = dir.path().join(AUDIO_RELATIVE_PATH).join("tone.wav");
    assert_eq!(std::fs::read(written).unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn base64_payloads_are_accepted() {
    let dir = tempdir().unwrap();
    let bridge = bridge_over(dir.path());

    let reply = bridge
        .handle(save_call(json!({ "fileName": "tone.wav", "bytes": "AQID" })))
        .await;

    expect_ok(reply);
    let written = dir.path().join(AUDIO_RELATIVE_PATH).join("tone.wav");
    assert_eq!(std::fs::read(written).unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn missing_file_name_is_invalid_args_with_no_side_effects() {
    let dir = tempdir().unwrap();
    let bridge = bridge_over(dir.path());

    let reply = bridge.handle(save_call(json!({ "bytes": [1] }))).await;

    assert_eq!(expect_err_code(reply), error_codes::INVALID_ARGS);
    // Nothing was created below the media root.
    assert!(!dir.path().join("Music").exists());
}

#[tokio::test]
async fn missing_bytes_is_invalid_args() {
    let dir = tempdir().unwrap();
    let bridge = bridge_over(dir.path());

    let reply = bridge
        .handle(save_call(json!({ "fileName": "tone.wav" })))
        .await;

    assert_eq!(expect_err_code(reply), error_codes::INVALID_ARGS);
}

#[tokio::test]
async fn unknown_method_is_not_implemented() {
    let dir = tempdir().unwrap();
    let bridge = bridge_over(dir.path());

    let reply = bridge.handle(MethodCall::new("foo", json!({}))).await;

    assert!(matches!(reply, MethodReply::NotImplemented));
}

#[tokio::test]
async fn duplicate_file_names_create_distinct_entries() {
    let dir = tempdir().unwrap();
    let bridge = bridge_over(dir.path());

    let first = expect_ok(
        bridge
            .handle(save_call(json!({ "fileName": "tone.wav", "bytes": [1] })))
            .await,
    );
    let second = expect_ok(
        bridge
            .handle(save_call(json!({ "fileName": "tone.wav", "bytes": [2] })))
            .await,
    );

    assert_ne!(first, second);
    let music = dir.path().join(AUDIO_RELATIVE_PATH);
    assert_eq!(std::fs::read(music.join("tone.wav")).unwrap(), vec![1]);
    assert_eq!(std::fs::read(music.join("tone (1).wav")).unwrap(), vec![2]);
}

#[tokio::test]
async fn default_bridge_reports_unconfigured_store() {
    let bridge = MediaStoreBridge::default();

    let reply = bridge
        .handle(save_call(json!({ "fileName": "tone.wav", "bytes": [1] })))
        .await;

    assert_eq!(expect_err_code(reply), error_codes::EXCEPTION);
}

#[test]
fn save_method_is_advertised() {
    let bridge = MediaStoreBridge::default();
    assert_eq!(bridge.method_names(), vec!["saveAudioToPublic".to_string()]);
}
