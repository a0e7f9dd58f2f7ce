use std::time::Duration;

use serde::Deserialize;

use crate::config::BlockfrostConfig;

/// One entry of an output amount list. `unit` is either "lovelace" or the
/// concatenation of a 56-char policy id and the hex-encoded asset name.
#[derive(Debug, Clone, Deserialize)]
pub struct Amount {
    pub unit: String,
    pub quantity: String,
}

/// Subset of `GET /txs/{hash}` we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct TxInfo {
    #[serde(default)]
    pub output_amount: Vec<Amount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TxOutput {
    #[serde(default)]
    pub amount: Vec<Amount>,
}

/// Subset of `GET /txs/{hash}/utxos`.
#[derive(Debug, Clone, Deserialize)]
pub struct TxUtxos {
    #[serde(default)]
    pub outputs: Vec<TxOutput>,
}

/// One entry of `GET /addresses/{address}/transactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressTx {
    pub tx_hash: String,
}

/// Minimal Blockfrost client for the Cardano networks.
///
/// See: https://docs.blockfrost.io
pub struct BlockfrostClient {
    client: reqwest::Client,
    base_url: String,
}

fn base_url_for(network: &str) -> &'static str {
    match network {
        "preprod" => "https://cardano-preprod.blockfrost.io/api/v0",
        "preview" => "https://cardano-preview.blockfrost.io/api/v0",
        _ => "https://cardano-mainnet.blockfrost.io/api/v0",
    }
}

impl BlockfrostClient {
    pub fn new(config: &BlockfrostConfig) -> eyre::Result<Self> {
        let project_id = config
            .project_id
            .as_deref()
            .ok_or_else(|| eyre::eyre!("Blockfrost project id is required"))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "project_id",
            project_id
                .parse()
                .map_err(|_| eyre::eyre!("Blockfrost project id is not a valid header value"))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| eyre::eyre!("Failed to build Blockfrost HTTP client: {}", e))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| base_url_for(&config.network).to_string());

        Ok(Self { client, base_url })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> eyre::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| eyre::eyre!("Blockfrost request to {} failed: {}", path, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(eyre::eyre!(
                "Blockfrost returned {} for {}: {}",
                status,
                path,
                body
            ));
        }

        resp.json::<T>()
            .await
            .map_err(|e| eyre::eyre!("Failed to decode Blockfrost response for {}: {}", path, e))
    }

    /// Basic transaction info, including the aggregated output amounts.
    pub async fn get_transaction(&self, tx_hash: &str) -> eyre::Result<TxInfo> {
        self.get_json(&format!("/txs/{}", tx_hash)).await
    }

    /// Per-output UTXO breakdown, including native assets.
    pub async fn get_transaction_utxos(&self, tx_hash: &str) -> eyre::Result<TxUtxos> {
        self.get_json(&format!("/txs/{}/utxos", tx_hash)).await
    }

    /// Recent transactions for an address, newest first.
    pub async fn get_address_txs(
        &self,
        address: &str,
        count: u32,
    ) -> eyre::Result<Vec<AddressTx>> {
        self.get_json(&format!(
            "/addresses/{}/transactions?order=desc&count={}",
            address, count
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_per_network() {
        assert!(base_url_for("mainnet").contains("cardano-mainnet"));
        assert!(base_url_for("preprod").contains("cardano-preprod"));
        assert!(base_url_for("preview").contains("cardano-preview"));
    }

    #[test]
    fn test_decode_tx_info() {
        let json = r#"{
            "hash": "abc",
            "output_amount": [
                {"unit": "lovelace", "quantity": "42000000"},
                {"unit": "b0d07d45fe9514f80213f4020e5a61241458be626841cde717cb38a76e7574636f696e", "quantity": "12"}
            ]
        }"#;
        let info: TxInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.output_amount.len(), 2);
        assert_eq!(info.output_amount[0].unit, "lovelace");
        assert_eq!(info.output_amount[0].quantity, "42000000");
    }

    #[test]
    fn test_decode_address_txs() {
        let json = r#"[{"tx_hash": "deadbeef", "tx_index": 0, "block_height": 1}]"#;
        let txs: Vec<AddressTx> = serde_json::from_str(json).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].tx_hash, "deadbeef");
    }
}
