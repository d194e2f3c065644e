//! Statement listing filters.

use bankapi_core::{filter_params, wire_enum};
use chrono::NaiveDate;

wire_enum! {
    /// Direction of a statement entry.
    pub enum EntryType {
        /// Money in.
        Credit => "CREDIT",
        /// Money out.
        Debit => "DEBIT",
    }
}

filter_params! {
    /// Query parameters supported by the account statement endpoint.
    ///
    /// Amounts are in cents.
    pub struct StatementListParams {
        /// First day of the period (inclusive).
        start_date: NaiveDate => "startDate",
        /// Last day of the period (inclusive).
        end_date: NaiveDate => "endDate",
        /// Only credits or only debits.
        entry_type: EntryType => "type",
        /// Lower bound on the entry amount.
        min_amount: i64 => "minAmount",
        /// Upper bound on the entry amount.
        max_amount: i64 => "maxAmount",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}
