use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line item in the server-side cart listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub fish_id: String,
    #[serde(default)]
    pub name: String,
    pub price: u64,
}

/// A discount code: a percentage off, capped at a maximum amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    pub code: String,
    pub discount_percentage: u32,
    pub max_discount: u64,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Voucher {
    /// Apply this voucher to a monetary total.
    ///
    /// The discount is `total * percentage / 100`, clamped to `max_discount`
    /// and never more than the total itself, so the result is never negative.
    pub fn apply(&self, total: u64) -> u64 {
        let percentage_cut = total.saturating_mul(u64::from(self.discount_percentage)) / 100;
        let discount = percentage_cut.min(self.max_discount).min(total);
        total - discount
    }

    /// Whether the voucher has expired relative to `now`. Vouchers without an
    /// expiration date never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expiration_date {
            Some(expiry) => expiry < now,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn voucher(pct: u32, cap: u64) -> Voucher {
        Voucher {
            id: "v1".to_string(),
            code: "KOI50".to_string(),
            discount_percentage: pct,
            max_discount: cap,
            expiration_date: None,
        }
    }

    #[test]
    fn test_discount_clamped_to_max() {
        // 50% of 1,000,000 is 500,000 but the cap is 100,000
        assert_eq!(voucher(50, 100_000).apply(1_000_000), 900_000);
    }

    #[test]
    fn test_discount_below_cap_applies_percentage() {
        // 10% of 500,000 = 50,000, under the 100,000 cap
        assert_eq!(voucher(10, 100_000).apply(500_000), 450_000);
    }

    #[test]
    fn test_result_never_negative() {
        // Even a nonsensical 200% voucher with a huge cap cannot go below zero
        assert_eq!(voucher(200, u64::MAX).apply(1_000), 0);
        assert_eq!(voucher(100, u64::MAX).apply(0), 0);
    }

    #[test]
    fn test_zero_percentage_is_identity() {
        assert_eq!(voucher(0, 100_000).apply(750_000), 750_000);
    }

    #[test]
    fn test_expiry() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut v = voucher(10, 1_000);
        assert!(!v.is_expired(now));

        v.expiration_date = Some(Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap());
        assert!(v.is_expired(now));

        v.expiration_date = Some(Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap());
        assert!(!v.is_expired(now));
    }
}
