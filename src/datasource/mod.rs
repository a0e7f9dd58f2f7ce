pub mod live;
pub mod synthetic;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;

/// A non-lovelace asset carried by a transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub policy_id: String,
    /// Hex-encoded asset name as it appears on chain (the part of the unit
    /// after the 56-char policy id). May be empty.
    pub asset_name: String,
    pub quantity: String,
}

impl AssetEntry {
    /// Split a Blockfrost asset unit into policy id and asset name. Units are
    /// hex ASCII on a well-behaved API; anything where byte 56 is not a char
    /// boundary is kept whole as the policy id rather than panicking.
    pub fn from_unit(unit: &str, quantity: String) -> Self {
        let idx = unit.len().min(56);
        let (policy_id, asset_name) = if unit.is_char_boundary(idx) {
            unit.split_at(idx)
        } else {
            (unit, "")
        };
        Self {
            policy_id: policy_id.to_string(),
            asset_name: asset_name.to_string(),
            quantity,
        }
    }
}

/// Request-scoped on-chain context for one (transaction, wallet) pair.
/// Fetched fresh per analysis, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnchainContext {
    /// Sum of the lovelace output amounts of the transaction.
    pub total_lovelace: u64,
    /// Non-lovelace assets across all transaction outputs.
    pub assets: Vec<AssetEntry>,
    /// Prior transaction hashes for the wallet address, newest first.
    pub prior_txs: Vec<String>,
}

/// Strategy seam between the live Blockfrost gateway and the deterministic
/// synthetic generator. Selected once at startup from configuration.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_context(
        &self,
        tx_hash: &str,
        wallet_address: &str,
    ) -> eyre::Result<OnchainContext>;
}

/// Build the data source the configuration asks for.
pub fn from_config(config: &Config) -> eyre::Result<Arc<dyn DataSource>> {
    match config.blockfrost.project_id {
        Some(_) => {
            let source = live::BlockfrostSource::new(&config.blockfrost)?;
            tracing::info!(network = %config.blockfrost.network, "Using Blockfrost data source");
            Ok(Arc::new(source))
        }
        None => {
            tracing::warn!(
                "No Blockfrost project id configured, serving synthetic on-chain data"
            );
            Ok(Arc::new(synthetic::SyntheticSource))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_asset_entry_unit_split() {
        let unit = "b0d07d45fe9514f80213f4020e5a61241458be626841cde717cb38a76e7574636f696e";
        let entry = AssetEntry::from_unit(unit, "12".to_string());
        assert_eq!(entry.policy_id.len(), 56);
        assert_eq!(
            entry.asset_name,
            "6e7574636f696e" // hex for "nutcoin"
        );
        assert_eq!(entry.quantity, "12");
    }

    #[test]
    fn test_asset_entry_multibyte_unit_does_not_panic() {
        // Byte 56 falls inside the two-byte 'é'.
        let unit = format!("{}é-and-a-tail", "a".repeat(55));
        assert!(!unit.is_char_boundary(56));
        let entry = AssetEntry::from_unit(&unit, "1".to_string());
        assert_eq!(entry.policy_id, unit);
        assert_eq!(entry.asset_name, "");
    }

    #[test]
    fn test_asset_entry_short_unit() {
        let entry = AssetEntry::from_unit("synthetic_token_3", "1".to_string());
        assert_eq!(entry.policy_id, "synthetic_token_3");
        assert_eq!(entry.asset_name, "");
    }

    #[test]
    fn test_from_config_without_credential_is_synthetic() {
        let config = Config::default();
        assert!(config.blockfrost.project_id.is_none());
        assert!(from_config(&config).is_ok());
    }
}
