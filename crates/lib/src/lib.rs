//! confstore-lib: JSON configuration store
//!
//! This crate provides:
//! - `Config`: a store that overlays JSON sources and exposes dotted-path
//!   get/set/delete/has, a mutation lock and async/blocking load and save
//! - `Passthrough`: a minimal holder with dotted-path access only
//! - `ConfigEnv`: the settings that locate the default config file

pub mod consts;
pub mod env;
pub mod error;
pub mod loader;
pub mod overlay;
pub mod passthrough;
pub mod path;
pub mod store;

pub use env::ConfigEnv;
pub use error::{ConfigError, ErrorKind};
pub use loader::Source;
pub use passthrough::Passthrough;
pub use store::{Config, LoadEvent, LoadOrigin};
