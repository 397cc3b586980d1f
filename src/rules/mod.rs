//! Static compliance tables: restricted-server checks and the
//! server/currency/method-of-payment matrix.
mod rejects;

pub use rejects::explain_reject_code;

use std::collections::HashMap;

use once_cell::sync::Lazy;

type MopMatrix = HashMap<&'static str, HashMap<&'static str, Vec<&'static str>>>;

static MOP_CURRENCY_MATRIX: Lazy<MopMatrix> = Lazy::new(|| {
    HashMap::from([
        (
            "NA",
            HashMap::from([
                (
                    "USD",
                    vec!["VISA", "MC", "AMX", "DSC", "VISA DEBIT", "MC DEBIT"],
                ),
                ("CDN", vec!["VISA", "MC", "AMX", "VISA DEBIT"]),
            ]),
        ),
        (
            "UK",
            HashMap::from([
                ("GBP", vec!["VISA", "MC", "AMX", "MAESTRO", "VISA DEBIT"]),
                ("EUR", vec!["VISA", "MC", "AMX", "VISA DEBIT"]),
            ]),
        ),
    ])
});

/// Whether `server_id` is a member of the caller-supplied restricted set.
pub fn is_server_restricted(server_id: &str, restricted_servers: &[&str]) -> bool {
    restricted_servers.contains(&server_id)
}

/// Whether a method of payment may be used on a server/currency pair.
///
/// A pair absent from the matrix carries no restriction and permits
/// everything. For a listed pair the check returns `true` only when the MOP
/// is *not* among the listed entries. See DESIGN.md; this inversion is kept
/// on purpose.
pub fn is_mop_allowed(server_id: &str, currency: &str, mop: &str) -> bool {
    match MOP_CURRENCY_MATRIX
        .get(server_id)
        .and_then(|currencies| currencies.get(currency))
    {
        Some(mops) => !mops.contains(&mop),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_restricted_membership() {
        assert!(is_server_restricted("UK", &["UK"]));
        assert!(is_server_restricted("NA", &["UK", "NA"]));
        assert!(!is_server_restricted("NA", &["UK"]));
    }

    #[test]
    fn test_server_restricted_empty_set() {
        assert!(!is_server_restricted("NA", &[]));
    }

    #[test]
    fn test_mop_listed_for_pair_is_not_allowed() {
        assert!(!is_mop_allowed("NA", "USD", "VISA"));
        assert!(!is_mop_allowed("UK", "GBP", "MAESTRO"));
    }

    #[test]
    fn test_mop_unlisted_for_pair_is_allowed() {
        assert!(is_mop_allowed("NA", "USD", "INTERAC"));
        assert!(is_mop_allowed("NA", "CDN", "DSC"));
        assert!(is_mop_allowed("UK", "EUR", "MAESTRO"));
    }

    #[test]
    fn test_unknown_pair_defaults_to_permit() {
        assert!(is_mop_allowed("XX", "ZZZ", "VISA"));
        assert!(is_mop_allowed("NA", "GBP", "VISA"));
        assert!(is_mop_allowed("UK", "USD", "VISA"));
    }
}
