use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::risk::engine::RiskLevel;
use crate::risk::RiskReport;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTransactionRequest {
    /// Cardano transaction hash. Opaque, never parsed.
    pub tx_hash: String,
    /// Wallet address of interest.
    pub wallet_address: String,
    /// Optional off-chain / app-level metadata (e.g. `kycVerified`).
    #[serde(default)]
    pub metadata: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTransactionResponse {
    pub tx_hash: String,
    pub compliance_score: u8,
    pub risk_level: RiskLevel,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalyzeTransactionResponse {
    pub fn from_report(tx_hash: String, report: RiskReport) -> Self {
        Self {
            tx_hash,
            compliance_score: report.compliance_score,
            risk_level: report.risk_level,
            issues: report.issues,
            recommendations: report.recommendations,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: String,
    pub endpoint: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
