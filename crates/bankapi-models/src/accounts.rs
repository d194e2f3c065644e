//! Account listing filters and records.

use bankapi_core::{filter_params, wire_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Lifecycle status of a payment account.
    pub enum AccountStatus {
        /// Opening requested, not yet approved.
        Pending => "PENDING",
        /// Open and operational.
        Active => "ACTIVE",
        /// Temporarily blocked for debits and credits.
        Blocked => "BLOCKED",
        /// Closed permanently.
        Closed => "CLOSED",
    }
}

filter_params! {
    /// Query parameters supported by the account listing endpoint.
    pub struct AccountListParams {
        /// Filter by account status.
        status: AccountStatus => "status",
        /// Filter by holder CPF/CNPJ (digits only).
        document: String => "document",
        /// Filter by holder name.
        name: String => "name",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}

/// Representation of an account as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier.
    pub id: String,
    /// Branch number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Account number, including the check digit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Current status.
    pub status: AccountStatus,
    /// Holder CPF/CNPJ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Holder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Available balance in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankapi_core::QueryString;

    #[test]
    fn test_unset_params_encode_empty() {
        assert_eq!(AccountListParams::default().query_string(), "");
    }

    #[test]
    fn test_full_params_encode_in_declaration_order() {
        let params = AccountListParams::new()
            .status(AccountStatus::Active)
            .document("12345678901")
            .name("John Doe")
            .first(10)
            .max(50);
        assert_eq!(
            params.query_string(),
            "?status=ACTIVE&document=12345678901&name=John+Doe&first=10&max=50"
        );
    }

    #[test]
    fn test_zero_offset_is_kept() {
        let params = AccountListParams {
            first: Some(0),
            max: Some(100),
            ..AccountListParams::default()
        };
        assert_eq!(params.query_string(), "?first=0&max=100");
    }

    #[test]
    fn test_status_parses_from_wire() {
        assert_eq!("BLOCKED".parse::<AccountStatus>().unwrap(), AccountStatus::Blocked);
        assert!("blocked".parse::<AccountStatus>().is_err());
    }
}
