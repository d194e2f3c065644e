//! Account-opening proposal listing filters.

use bankapi_core::{filter_params, wire_enum};
use chrono::NaiveDate;

wire_enum! {
    /// Onboarding proposal status.
    pub enum ProposalStatus {
        /// Submitted, waiting for analysis.
        Pending => "PENDING",
        /// Under KYC analysis.
        InAnalysis => "IN_ANALYSIS",
        /// Documents requested from the applicant.
        PendingDocumentation => "PENDING_DOCUMENTATION",
        /// Approved; the account was opened.
        Approved => "APPROVED",
        /// Rejected.
        Rejected => "REJECTED",
    }
}

wire_enum! {
    /// Kind of applicant.
    pub enum ProposalType {
        /// Natural person (CPF).
        Individual => "PF",
        /// Legal entity (CNPJ).
        Company => "PJ",
    }
}

filter_params! {
    /// Query parameters supported by the proposal listing endpoint.
    pub struct ProposalListParams {
        /// Filter by proposal status.
        status: ProposalStatus => "status",
        /// Filter by applicant CPF/CNPJ.
        document: String => "document",
        /// Filter by applicant kind.
        proposal_type: ProposalType => "type",
        /// Created on or after this day.
        created_from: NaiveDate => "createdFrom",
        /// Created on or before this day.
        created_to: NaiveDate => "createdTo",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}
