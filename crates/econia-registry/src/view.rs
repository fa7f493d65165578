//! View function call abstraction.
//!
//! The registry reader never talks to a node directly. It hands a
//! [`ViewFunction`] to a [`ViewCaller`] and decodes whatever JSON values come
//! back. This allows for:
//! - Plugging in any node transport (REST, indexer, local VM)
//! - Unit testing with [`MockViewCaller`]

use std::collections::HashMap;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RegistryError, RegistryResult};

/// Move module holding the registry view functions.
pub const REGISTRY_MODULE: &str = "registry";

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// One view function invocation.
///
/// Arguments are positional. Value arguments are passed as strings: Move
/// `u64` values in decimal, Move `String` values verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewFunction {
    /// Module name (e.g., "registry").
    pub module: String,
    /// Function name (e.g., "get_market_info").
    pub function: String,
    /// Fully qualified type arguments (e.g., "0x1::aptos_coin::AptosCoin").
    pub type_arguments: Vec<String>,
    /// Value arguments.
    pub arguments: Vec<String>,
}

impl ViewFunction {
    /// Create a call with no arguments.
    pub fn new(module: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            function: function.into(),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Create a call into the registry module.
    pub fn registry(function: impl Into<String>) -> Self {
        Self::new(REGISTRY_MODULE, function)
    }

    /// Set positional type arguments.
    pub fn with_type_arguments<I, S>(mut self, type_arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_arguments = type_arguments.into_iter().map(Into::into).collect();
        self
    }

    /// Set positional value arguments.
    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for ViewFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.function)
    }
}

/// Collaborator that evaluates view functions on the ledger.
///
/// Implementations resolve the module address, encode the request, and
/// return the raw JSON return values in order. Network failures, reverts,
/// and malformed responses are reported as `RegistryError` and passed to the
/// caller untouched.
pub trait ViewCaller: Send + Sync {
    /// Evaluate a view function and return its JSON return values.
    fn get_returns(&self, function: ViewFunction) -> BoxFuture<'_, RegistryResult<Vec<Value>>>;
}

/// Arc wrapper for ViewCaller trait objects.
pub type DynViewCaller = Arc<dyn ViewCaller>;

/// Mock view caller for testing.
///
/// Returns canned values keyed by function name and records every call.
#[derive(Debug, Default)]
pub struct MockViewCaller {
    /// Recorded calls for verification.
    calls: Mutex<Vec<ViewFunction>>,
    /// Canned return values by function name.
    returns: Mutex<HashMap<String, Vec<Value>>>,
    /// Error returned by the next call, if set.
    next_error: Mutex<Option<RegistryError>>,
}

impl MockViewCaller {
    /// Create a new mock caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values returned for a function.
    pub fn set_returns(&self, function: &str, returns: Vec<Value>) {
        self.returns.lock().insert(function.to_string(), returns);
    }

    /// Fail the next call with `error`.
    pub fn fail_next(&self, error: RegistryError) {
        *self.next_error.lock() = Some(error);
    }

    /// Get recorded calls.
    pub fn get_calls(&self) -> Vec<ViewFunction> {
        self.calls.lock().clone()
    }

    /// Get the most recent call.
    pub fn last_call(&self) -> Option<ViewFunction> {
        self.calls.lock().last().cloned()
    }
}

impl ViewCaller for MockViewCaller {
    fn get_returns(&self, function: ViewFunction) -> BoxFuture<'_, RegistryResult<Vec<Value>>> {
        Box::pin(async move {
            let name = function.function.clone();
            self.calls.lock().push(function);

            if let Some(error) = self.next_error.lock().take() {
                return Err(error);
            }
            self.returns.lock().get(&name).cloned().ok_or_else(|| {
                RegistryError::Transport(format!("no canned response for {name}"))
            })
        })
    }
}
