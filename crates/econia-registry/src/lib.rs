//! Typed read-only queries against the Econia market registry.
//!
//! Every query issues one view function call through a [`ViewCaller`],
//! then decodes the returned JSON into an explicit Rust type:
//! - protocol constants and market IDs as `u64`
//! - `MarketCounts` and `MarketInfo` records
//! - Move `Option<u64>` as `Option<u64>`
//!
//! The transport behind `ViewCaller` is supplied by the caller. Failures it
//! reports are returned unchanged; nothing is cached or retried.

pub mod decode;
pub mod error;
pub mod reader;
pub mod types;
pub mod view;

pub use error::{RegistryError, RegistryResult};
pub use reader::{RegistryReader, NO_CUSTODIAN, NO_UNDERWRITER};
pub use types::{AccountAddress, MarketCounts, MarketInfo, TypeInfo};
pub use view::{BoxFuture, DynViewCaller, MockViewCaller, ViewCaller, ViewFunction, REGISTRY_MODULE};
