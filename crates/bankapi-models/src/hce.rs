//! Host card emulation (tokenized wallet device) listing filters.

use bankapi_core::{filter_params, wire_enum};

wire_enum! {
    /// Provisioning status of a tokenized device.
    pub enum HceDeviceStatus {
        /// Token requested, not yet usable.
        Pending => "PENDING",
        /// Token usable for payments.
        Active => "ACTIVE",
        /// Token suspended.
        Suspended => "SUSPENDED",
        /// Token removed from the device.
        Deleted => "DELETED",
    }
}

wire_enum! {
    /// Wallet holding the token.
    pub enum WalletProvider {
        /// Google Pay.
        GooglePay => "GOOGLE_PAY",
        /// Apple Pay.
        ApplePay => "APPLE_PAY",
        /// Samsung Pay.
        SamsungPay => "SAMSUNG_PAY",
    }
}

filter_params! {
    /// Query parameters supported by the HCE device listing endpoint.
    pub struct HceDeviceListParams {
        /// Filter by tokenized card.
        card_id: String => "cardId",
        /// Filter by token status.
        status: HceDeviceStatus => "status",
        /// Filter by wallet.
        wallet: WalletProvider => "wallet",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}
