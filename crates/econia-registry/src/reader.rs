//! Registry view function queries.
//!
//! One method per `registry` view function. Each method issues exactly one
//! call and decodes its first return value. Errors from the caller are
//! returned as-is.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::decode::{decode_first, MoveOption, MoveU64};
use crate::error::RegistryResult;
use crate::types::{MarketCounts, MarketInfo};
use crate::view::{DynViewCaller, ViewFunction};

/// Custodian ID flag for no custodian.
pub const NO_CUSTODIAN: u64 = 0;

/// Underwriter ID flag for no underwriter.
pub const NO_UNDERWRITER: u64 = 0;

/// Read-only client for the on-chain market registry.
#[derive(Clone)]
pub struct RegistryReader {
    view: DynViewCaller,
}

impl RegistryReader {
    /// Create a reader over a view caller.
    pub fn new(view: DynViewCaller) -> Self {
        Self { view }
    }

    async fn call<T: DeserializeOwned>(&self, function: ViewFunction) -> RegistryResult<T> {
        debug!(
            function = %function,
            type_arguments = ?function.type_arguments,
            arguments = ?function.arguments,
            "Calling view function"
        );
        let returns = self.view.get_returns(function.clone()).await?;
        decode_first(&function, returns)
    }

    async fn call_u64(&self, function: ViewFunction) -> RegistryResult<u64> {
        self.call::<MoveU64>(function).await.map(u64::from)
    }

    async fn call_option_u64(&self, function: ViewFunction) -> RegistryResult<Option<u64>> {
        let option: MoveOption<MoveU64> = self.call(function.clone()).await?;
        Ok(option.into_option(&function)?.map(u64::from))
    }

    /// Maximum number of characters in a generic asset name.
    pub async fn get_max_characters_generic(&self) -> RegistryResult<u64> {
        self.call_u64(ViewFunction::registry("get_MAX_CHARACTERS_GENERIC"))
            .await
    }

    /// Minimum number of characters in a generic asset name.
    pub async fn get_min_characters_generic(&self) -> RegistryResult<u64> {
        self.call_u64(ViewFunction::registry("get_MIN_CHARACTERS_GENERIC"))
            .await
    }

    /// On-chain custodian ID flag for no custodian.
    pub async fn get_no_custodian(&self) -> RegistryResult<u64> {
        self.call_u64(ViewFunction::registry("get_NO_CUSTODIAN")).await
    }

    /// On-chain underwriter ID flag for no underwriter.
    pub async fn get_no_underwriter(&self) -> RegistryResult<u64> {
        self.call_u64(ViewFunction::registry("get_NO_UNDERWRITER")).await
    }

    /// Total and recognized market counts.
    pub async fn get_market_counts(&self) -> RegistryResult<MarketCounts> {
        self.call(ViewFunction::registry("get_market_counts")).await
    }

    /// Parameters of a registered market.
    pub async fn get_market_info(&self, market_id: u64) -> RegistryResult<MarketInfo> {
        self.call(
            ViewFunction::registry("get_market_info").with_arguments([market_id.to_string()]),
        )
        .await
    }

    /// Recognized market ID for a pure coin pair.
    ///
    /// The registry aborts when no recognized market exists; that failure is
    /// returned as the caller's error.
    pub async fn get_recognized_market_id_base_coin(
        &self,
        base_coin_type: &str,
        quote_coin_type: &str,
    ) -> RegistryResult<u64> {
        self.call_u64(
            ViewFunction::registry("get_recognized_market_id_base_coin")
                .with_type_arguments([base_coin_type, quote_coin_type]),
        )
        .await
    }

    /// Recognized market ID for a generic base asset and quote coin.
    pub async fn get_recognized_market_id_base_generic(
        &self,
        quote_coin_type: &str,
    ) -> RegistryResult<u64> {
        self.call_u64(
            ViewFunction::registry("get_recognized_market_id_base_generic")
                .with_type_arguments([quote_coin_type]),
        )
        .await
    }

    /// Whether a recognized market exists for a pure coin pair.
    pub async fn has_recognized_market_base_coin_by_type(
        &self,
        base_coin_type: &str,
        quote_coin_type: &str,
    ) -> RegistryResult<bool> {
        self.call(
            ViewFunction::registry("has_recognized_market_base_coin_by_type")
                .with_type_arguments([base_coin_type, quote_coin_type]),
        )
        .await
    }

    /// Whether a recognized market exists for a generic base asset.
    pub async fn has_recognized_market_base_generic_by_type(
        &self,
        quote_coin_type: &str,
        base_name_generic: &str,
    ) -> RegistryResult<bool> {
        self.call(
            ViewFunction::registry("has_recognized_market_base_generic_by_type")
                .with_type_arguments([quote_coin_type])
                .with_arguments([base_name_generic]),
        )
        .await
    }

    /// Market ID for a pure coin market with the given parameters.
    ///
    /// Returns `None` when no such market is registered.
    pub async fn get_market_id_base_coin(
        &self,
        base_coin_type: &str,
        quote_coin_type: &str,
        lot_size: u64,
        tick_size: u64,
        min_size: u64,
    ) -> RegistryResult<Option<u64>> {
        self.call_option_u64(
            ViewFunction::registry("get_market_id_base_coin")
                .with_type_arguments([base_coin_type, quote_coin_type])
                .with_arguments([
                    lot_size.to_string(),
                    tick_size.to_string(),
                    min_size.to_string(),
                ]),
        )
        .await
    }

    /// Market ID for a generic market with the given parameters.
    ///
    /// `underwriter_id` defaults to [`NO_UNDERWRITER`]. Returns `None` when no
    /// such market is registered.
    pub async fn get_market_id_base_generic(
        &self,
        quote_coin_type: &str,
        base_name_generic: &str,
        lot_size: u64,
        tick_size: u64,
        min_size: u64,
        underwriter_id: Option<u64>,
    ) -> RegistryResult<Option<u64>> {
        let underwriter_id = underwriter_id.unwrap_or(NO_UNDERWRITER);
        self.call_option_u64(
            ViewFunction::registry("get_market_id_base_generic")
                .with_type_arguments([quote_coin_type])
                .with_arguments([
                    base_name_generic.to_string(),
                    lot_size.to_string(),
                    tick_size.to_string(),
                    min_size.to_string(),
                    underwriter_id.to_string(),
                ]),
        )
        .await
    }
}
