use serde_json::Value as JsonValue;

use crate::datasource::AssetEntry;

pub const LOVELACE_PER_ADA: u64 = 1_000_000;

/// Asset names longer than this (in unit characters) count as obfuscated.
const SUSPICIOUS_NAME_LEN: usize = 32;
/// Distinct asset count above which a transaction is flagged.
const HIGH_TOKEN_COUNT: usize = 50;
/// Address history size above which the wallet counts as high frequency.
const HIGH_FREQUENCY_TX_COUNT: usize = 500;
/// Address history size below which the wallet counts as low activity.
const LOW_ACTIVITY_TX_COUNT: usize = 5;

/// One fired heuristic: a human-readable issue and the score penalty it
/// carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub issue: &'static str,
    pub penalty: u32,
}

/// Flag unusually large transfers. Bands are mutually exclusive, checked
/// high to low, so exactly one fires at most.
pub fn check_amount(total_lovelace: u64) -> Option<RuleHit> {
    let ada_amount = total_lovelace as f64 / LOVELACE_PER_ADA as f64;

    if ada_amount > 1_000_000.0 {
        Some(RuleHit {
            issue: "Extremely large transfer amount",
            penalty: 40,
        })
    } else if ada_amount > 100_000.0 {
        Some(RuleHit {
            issue: "Very large transfer amount",
            penalty: 25,
        })
    } else if ada_amount > 10_000.0 {
        Some(RuleHit {
            issue: "Unusually large transfer amount",
            penalty: 10,
        })
    } else {
        None
    }
}

/// Flag suspicious token composition. The two checks are independent and
/// both may fire; each fires at most once regardless of asset count.
pub fn check_assets(assets: &[AssetEntry]) -> Vec<RuleHit> {
    let mut hits = Vec::new();
    if assets.is_empty() {
        return hits;
    }

    if assets.len() > HIGH_TOKEN_COUNT {
        hits.push(RuleHit {
            issue: "Transaction transfers a very high number of distinct tokens",
            penalty: 10,
        });
    }

    if assets
        .iter()
        .any(|a| a.asset_name.len() > SUSPICIOUS_NAME_LEN)
    {
        hits.push(RuleHit {
            issue: "Suspicious or obfuscated token names detected",
            penalty: 10,
        });
    }

    hits
}

/// Flag wallets whose prior transaction count is outside the normal band.
pub fn check_address_activity(tx_count: usize) -> Option<RuleHit> {
    if tx_count == 0 {
        Some(RuleHit {
            issue: "New or inactive wallet address",
            penalty: 15,
        })
    } else if tx_count < LOW_ACTIVITY_TX_COUNT {
        Some(RuleHit {
            issue: "Low activity wallet",
            penalty: 5,
        })
    } else if tx_count > HIGH_FREQUENCY_TX_COUNT {
        Some(RuleHit {
            issue: "High frequency transaction pattern",
            penalty: 10,
        })
    } else {
        None
    }
}

/// Flag wallets without an off-chain KYC attestation in the caller-supplied
/// metadata. Anything but an explicit `kycVerified: true` fires.
pub fn check_kyc(metadata: &JsonValue) -> Option<RuleHit> {
    let verified = metadata
        .get("kycVerified")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false);

    if verified {
        None
    } else {
        Some(RuleHit {
            issue: "Wallet not KYC verified",
            penalty: 10,
        })
    }
}
