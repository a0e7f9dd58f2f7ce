use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::datasource::DataSource;

use super::recommendations::derive_recommendations;
use super::rules::{self, RuleHit};

/// Neutral starting point before any heuristic adjustment.
const BASE_SCORE: i64 = 80;

/// Three-tier risk label derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Low
        } else if score >= 50 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Result of one analysis: score, tier and the supporting breakdown.
#[derive(Debug, Clone)]
pub struct RiskReport {
    pub compliance_score: u8,
    pub risk_level: RiskLevel,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Orchestrates one analysis: fetches the on-chain context, runs every
/// heuristic rule and aggregates the hits into a clamped 0-100 score.
pub struct RiskEngine {
    source: Arc<dyn DataSource>,
}

impl RiskEngine {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub async fn analyze(
        &self,
        tx_hash: &str,
        wallet_address: &str,
        metadata: &JsonValue,
    ) -> eyre::Result<RiskReport> {
        let context = self.source.fetch_context(tx_hash, wallet_address).await?;

        tracing::debug!(
            total_lovelace = context.total_lovelace,
            assets = context.assets.len(),
            prior_txs = context.prior_txs.len(),
            "Fetched on-chain context"
        );

        let mut hits: Vec<RuleHit> = Vec::new();
        hits.extend(rules::check_amount(context.total_lovelace));
        hits.extend(rules::check_assets(&context.assets));
        hits.extend(rules::check_address_activity(context.prior_txs.len()));
        hits.extend(rules::check_kyc(metadata));

        let mut score = BASE_SCORE;
        let mut issues = Vec::with_capacity(hits.len());
        for hit in hits {
            score = (score - hit.penalty as i64).max(0);
            issues.push(hit.issue.to_string());
        }
        let score = score.clamp(0, 100) as u8;

        let risk_level = RiskLevel::from_score(score);
        let recommendations = derive_recommendations(&issues);

        tracing::info!(
            score,
            risk_level = risk_level.as_str(),
            issue_count = issues.len(),
            "Transaction analyzed"
        );

        Ok(RiskReport {
            compliance_score: score,
            risk_level,
            issues,
            recommendations,
        })
    }
}
