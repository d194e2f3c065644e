//! Request filters, enumerations and listing records for the banking platform API.
//!
//! Every listing or search endpoint has a filter parameter set declared with
//! [`bankapi_core::filter_params!`]. Encode one with
//! [`QueryString::query_string`]; an unset set, or `None`, encodes to `""`.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod accounts;
pub mod banks;
pub mod cards;
pub mod common;
pub mod deposits;
pub mod hce;
pub mod pix;
pub mod proposals;
pub mod statements;

pub use accounts::{Account, AccountListParams, AccountStatus};
pub use banks::{Bank, BankListParams};
pub use bankapi_core::{encode_query, QueryString};
pub use cards::{Card, CardListParams, CardSearchParams, CardStatus, CardType};
pub use common::PagedResponse;
pub use deposits::{DepositOrderListParams, DepositOrderStatus};
pub use hce::{HceDeviceListParams, HceDeviceStatus, WalletProvider};
pub use pix::{
    AutomaticPixListParams, AutomaticPixStatus, InfractionReportListParams, InfractionStatus,
    Periodicity, PixKeyType, RefundListParams, RefundReason, RefundStatus, ReporterRole,
};
pub use proposals::{ProposalListParams, ProposalStatus, ProposalType};
pub use statements::{EntryType, StatementListParams};
