//! Saving a store and reading it back.

use confstore_lib::{Config, ErrorKind};
use serde_json::json;

use super::common::{TestEnv, fixture_path};

#[tokio::test]
async fn saves_files_asynchronously() {
  let env = TestEnv::new();
  let saved = env.path("saveAsync.json");

  let mut config = Config::new();
  config.load(fixture_path("default.json")).await.unwrap();
  config.set("Name", json!("Elizabeth")).unwrap();
  assert_eq!(config.get("Name"), Some(&json!("Elizabeth")));
  config.save(&saved).await.unwrap();
  assert!(saved.exists());

  let mut fresh = Config::new();
  fresh.load(saved).await.unwrap();
  assert_eq!(fresh.get("Name"), Some(&json!("Elizabeth")));
}

#[test]
fn saves_files_synchronously() {
  let env = TestEnv::new();
  let saved = env.path("saveSync.json");

  let mut config = Config::new();
  config.load_sync(fixture_path("default.json")).unwrap();
  config.set("Name", json!("Elizabeth")).unwrap();
  config.save_sync(&saved).unwrap();

  let mut fresh = Config::new();
  fresh.load_sync(saved).unwrap();
  assert_eq!(fresh.get("Name"), Some(&json!("Elizabeth")));
  assert_eq!(fresh.get("Values"), Some(&json!([1, 2, 3, 9, 7, 8])));
}

#[test]
fn saved_file_keeps_key_order() {
  let env = TestEnv::new();
  let saved = env.path("ordered.json");

  let mut config = Config::new();
  config.load_sync(fixture_path("default.json")).unwrap();
  config.save_sync(&saved).unwrap();

  let text = std::fs::read_to_string(&saved).unwrap();
  let name = text.find("\"Name\"").unwrap();
  let float = text.find("\"Float\"").unwrap();
  assert!(name < float);
  assert!(text.starts_with("{\n  \"Name\": \"John\""));
}

#[test]
fn failed_save_leaves_store_writable() {
  let env = TestEnv::new();

  let mut config = Config::new();
  config.load_sync(fixture_path("default.json")).unwrap();
  let err = config.save_sync(env.path("no/such/dir/out.json")).unwrap_err();

  assert_eq!(err.kind(), ErrorKind::Io);
  config.set("Float", json!(1.5)).unwrap();
  assert_eq!(config.get("Float"), Some(&json!(1.5)));
}
