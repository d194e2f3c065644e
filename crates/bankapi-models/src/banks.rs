//! Bank directory listing filters and records.

use bankapi_core::filter_params;
use serde::{Deserialize, Serialize};

filter_params! {
    /// Query parameters supported by the bank listing endpoint.
    pub struct BankListParams {
        /// Filter by bank name.
        name: String => "name",
        /// Filter by COMPE code.
        code: String => "code",
        /// Filter by ISPB identifier.
        ispb: String => "ispb",
        /// Only institutions that do (or do not) take part in PIX.
        is_pix: bool => "isPix",
        /// Only institutions that do (or do not) settle through STR.
        is_str: bool => "isStr",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}

/// Representation of a financial institution in the bank directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// ISPB identifier (8 digits).
    pub ispb: String,
    /// Institution name.
    pub name: String,
    /// COMPE code, absent for PIX-only institutions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Takes part in PIX.
    #[serde(default)]
    pub is_pix: bool,
    /// Settles through STR.
    #[serde(default)]
    pub is_str: bool,
}
