//! Deposit order (boleto and PIX charge) listing filters.

use bankapi_core::{filter_params, wire_enum};

wire_enum! {
    /// Deposit order status.
    pub enum DepositOrderStatus {
        /// Issued and waiting for payment.
        Open => "OPEN",
        /// Paid in full.
        Paid => "PAID",
        /// Past due date without payment.
        Expired => "EXPIRED",
        /// Cancelled by the issuer.
        Canceled => "CANCELED",
    }
}

filter_params! {
    /// Query parameters supported by the deposit order listing endpoint.
    pub struct DepositOrderListParams {
        /// Filter by receiving account.
        account_id: String => "accountId",
        /// Filter by order status.
        status: DepositOrderStatus => "status",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}
