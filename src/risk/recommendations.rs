/// Recommended follow-up actions, keyword-matched from the detected issues.
/// Fixed priority order, at most one recommendation per category, deduplicated
/// preserving first occurrence.
pub fn derive_recommendations(issues: &[String]) -> Vec<String> {
    let lowered: Vec<String> = issues.iter().map(|i| i.to_lowercase()).collect();
    let matches = |needle: &str| lowered.iter().any(|i| i.contains(needle));

    let mut recs: Vec<String> = Vec::new();
    if matches("large transfer") {
        recs.push("Perform enhanced due diligence on source and destination of funds".to_string());
    }
    if matches("inactive wallet") || matches("new") {
        recs.push("Obtain additional identity/KYC information for the wallet owner".to_string());
    }
    if matches("token") {
        recs.push("Review token policy IDs against internal and public blocklists".to_string());
    }
    if matches("high frequency") {
        recs.push("Monitor wallet for potential structuring or layering patterns".to_string());
    }

    if recs.is_empty() {
        recs.push("No critical issues detected; maintain standard monitoring".to_string());
    }

    let mut seen = std::collections::HashSet::new();
    recs.retain(|r| seen.insert(r.clone()));
    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_when_no_issues() {
        let recs = derive_recommendations(&[]);
        assert_eq!(
            recs,
            vec!["No critical issues detected; maintain standard monitoring"]
        );
    }

    #[test]
    fn test_large_transfer_maps_to_due_diligence() {
        let recs = derive_recommendations(&issues(&["Extremely large transfer amount"]));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("enhanced due diligence"));
    }

    #[test]
    fn test_one_recommendation_per_category() {
        // Two amount issues cannot happen in practice, but the deriver must
        // still emit the category only once.
        let recs = derive_recommendations(&issues(&[
            "Very large transfer amount",
            "Unusually large transfer amount",
        ]));
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_priority_order() {
        let recs = derive_recommendations(&issues(&[
            "High frequency transaction pattern",
            "Extremely large transfer amount",
            "New or inactive wallet address",
        ]));
        assert!(recs[0].contains("due diligence"));
        assert!(recs[1].contains("identity/KYC"));
        assert!(recs[2].contains("structuring or layering"));
    }

    #[test]
    fn test_no_duplicates_and_never_empty() {
        let recs = derive_recommendations(&issues(&[
            "Suspicious or obfuscated token names detected",
            "Transaction transfers a very high number of distinct tokens",
        ]));
        assert!(!recs.is_empty());
        let mut deduped = recs.clone();
        deduped.dedup();
        assert_eq!(recs, deduped);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let recs = derive_recommendations(&issues(&["EXTREMELY LARGE TRANSFER AMOUNT"]));
        assert!(recs[0].contains("due diligence"));
    }
}
