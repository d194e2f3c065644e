//! Card listing and search filters.

use bankapi_core::{filter_params, wire_enum};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Card lifecycle status.
    pub enum CardStatus {
        /// Issued, waiting for activation.
        Created => "CREATED",
        /// Usable.
        Active => "ACTIVE",
        /// Temporarily blocked by the holder.
        Blocked => "BLOCKED",
        /// Cancelled permanently.
        Canceled => "CANCELED",
    }
}

wire_enum! {
    /// Physical or virtual card.
    pub enum CardType {
        /// Plastic card.
        Physical => "PHYSICAL",
        /// Card number for online use only.
        Virtual => "VIRTUAL",
    }
}

filter_params! {
    /// Query parameters supported by the card listing endpoint.
    pub struct CardListParams {
        /// Filter by owning account.
        account_id: String => "accountId",
        /// Filter by card status.
        status: CardStatus => "status",
        /// Filter by card type.
        card_type: CardType => "type",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}

filter_params! {
    /// Query parameters supported by the card search endpoint.
    pub struct CardSearchParams {
        /// Filter by holder CPF.
        document: String => "document",
        /// Filter by printed name.
        name: String => "name",
        /// Filter by the last four digits of the card number.
        last_four_digits: String => "lastFourDigits",
        /// Filter by card status.
        status: CardStatus => "status",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}

/// Representation of a card as returned by listing and search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Card type.
    #[serde(rename = "type")]
    pub card_type: CardType,
    /// Current status.
    pub status: CardStatus,
    /// Masked card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_number: Option<String>,
    /// Printed holder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed_name: Option<String>,
}
