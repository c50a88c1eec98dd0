//! Loading fixtures from disk and from the environment.

use std::sync::Arc;

use confstore_lib::consts::{ENV_VAR_CONFIG_DIR, ENV_VAR_ENVIRONMENT, ENV_VAR_INSTANCE};
use confstore_lib::{Config, ConfigEnv, ErrorKind, LoadOrigin, Source};
use serde_json::json;
use serial_test::serial;
use tokio::sync::Mutex;

use super::common::{TestEnv, fixture_path};

#[tokio::test]
async fn loads_files_asynchronously() {
  let mut config = Config::new();
  config.load(fixture_path("default.json")).await.unwrap();
  assert_eq!(config.get("Name"), Some(&json!("John")));
}

#[test]
fn loads_files_synchronously() {
  let mut config = Config::new();
  config.load_sync(fixture_path("default.json")).unwrap();
  assert_eq!(config.get("Name"), Some(&json!("John")));
}

#[tokio::test]
async fn accesses_objects_and_arrays() {
  let mut config = Config::new();
  config.load(fixture_path("default.json")).await.unwrap();

  assert_eq!(config.get("Object.Name"), Some(&json!("Jake")));
  assert_eq!(config.get("Values"), Some(&json!([1, 2, 3, 9, 7, 8])));
  assert_eq!(config.get("Values.3"), Some(&json!(9)));
  assert_eq!(config.get("Float"), Some(&json!(0.01)));
}

#[tokio::test]
async fn denies_setting_when_locked() {
  let mut config = Config::new();
  config.load(fixture_path("default.json")).await.unwrap();

  config.lock();
  config.set("Float", json!(23.4)).unwrap();
  assert_eq!(config.get("Float"), Some(&json!(0.01)));

  config.unlock();
  config.set("Float", json!(23.4)).unwrap();
  assert_eq!(config.get("Float"), Some(&json!(23.4)));
}

#[test]
fn layers_environment_file_over_defaults() {
  let mut config = Config::new();
  config.load_sync(fixture_path("default.json")).unwrap();
  config.load_sync(fixture_path("production.json")).unwrap();

  assert_eq!(config.get("Name"), Some(&json!("Finn")));
  assert_eq!(config.get("Object.Name"), Some(&json!("Jake")));
  assert_eq!(config.get("Database.Port"), Some(&json!(5432)));

  let origins: Vec<LoadOrigin> = config.log().iter().map(|event| event.origin).collect();
  assert_eq!(origins, vec![LoadOrigin::File, LoadOrigin::File]);
}

#[test]
fn malformed_fixture_fails_without_touching_data() {
  let mut config = Config::new();
  config.load_sync(fixture_path("default.json")).unwrap();
  let before = config.all().clone();

  let err = config.load_sync(fixture_path("malformed.json")).unwrap_err();

  assert_eq!(err.kind(), ErrorKind::Parse);
  assert_eq!(config.all(), &before);
}

#[test]
#[serial]
fn default_source_follows_environment_variables() {
  let env = TestEnv::new();
  env.copy_fixture("production.json", "production-2.json");

  temp_env::with_vars(
    [
      (ENV_VAR_ENVIRONMENT, Some("production")),
      (ENV_VAR_CONFIG_DIR, Some(env.dir().to_str().unwrap())),
      (ENV_VAR_INSTANCE, Some("2")),
    ],
    || {
      let mut config = Config::from_env();
      config.load_sync(Source::Default).unwrap();
      assert_eq!(config.get("Database.Host"), Some(&json!("db.internal")));
    },
  );
}

#[tokio::test]
async fn default_source_reports_missing_file() {
  let env = TestEnv::new();
  let mut config = Config::with_env(ConfigEnv::default().with_config_dir(env.dir()));

  let err = config.load(Source::Default).await.unwrap_err();

  assert_eq!(err.kind(), ErrorKind::Io);
}

#[tokio::test]
async fn shared_store_serializes_concurrent_loads() {
  let env = TestEnv::new();
  let first = env.copy_fixture("default.json", "first.json");
  let second = env.copy_fixture("production.json", "second.json");

  let shared = Arc::new(Mutex::new(Config::new()));
  let tasks = [first, second].into_iter().map(|path| {
    let shared = Arc::clone(&shared);
    tokio::spawn(async move { shared.lock().await.load(path).await })
  });
  for task in tasks.collect::<Vec<_>>() {
    task.await.unwrap().unwrap();
  }

  let config = shared.lock().await;
  assert_eq!(config.log().len(), 2);
  assert_eq!(config.get("Object.Name"), Some(&json!("Jake")));
  assert_eq!(config.get("Database.Port"), Some(&json!(5432)));
  let winner = config.log()[1].contents["Name"].clone();
  assert_eq!(config.get("Name"), Some(&winner));
}
