//! PIX filters: infraction reports, refunds and automatic PIX, plus the key-type catalog.

use bankapi_core::{filter_params, wire_enum};
use chrono::NaiveDate;

wire_enum! {
    /// Kind of PIX key.
    pub enum PixKeyType {
        /// Individual taxpayer number.
        Cpf => "CPF",
        /// Company taxpayer number.
        Cnpj => "CNPJ",
        /// E-mail address.
        Email => "EMAIL",
        /// Mobile phone number.
        Phone => "PHONE",
        /// Random key.
        Evp => "EVP",
    }
}

wire_enum! {
    /// Status of a fraud infraction report.
    pub enum InfractionStatus {
        /// Opened, waiting for the counterpart.
        Open => "OPEN",
        /// Acknowledged by the counterpart.
        Acknowledged => "ACKNOWLEDGED",
        /// Analysed and closed.
        Closed => "CLOSED",
        /// Withdrawn by the reporter.
        Canceled => "CANCELED",
    }
}

wire_enum! {
    /// Side of the transaction that filed the report.
    pub enum ReporterRole {
        /// Reported by this institution.
        Debited => "DEBITED_PARTICIPANT",
        /// Reported against this institution.
        Credited => "CREDITED_PARTICIPANT",
    }
}

filter_params! {
    /// Query parameters supported by the infraction report listing endpoint.
    pub struct InfractionReportListParams {
        /// Filter by report status.
        status: InfractionStatus => "status",
        /// Filter by the end-to-end id of the reported payment.
        end_to_end_id: String => "endToEndId",
        /// Filter by reporter side.
        role: ReporterRole => "role",
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

wire_enum! {
    /// Status of a PIX refund (devolução).
    pub enum RefundStatus {
        /// Requested, not yet settled.
        Processing => "PROCESSING",
        /// Settled.
        Completed => "COMPLETED",
        /// Refused by the counterpart or by SPI.
        Rejected => "REJECTED",
    }
}

wire_enum! {
    /// Reason code of a PIX refund.
    pub enum RefundReason {
        /// Bank error.
        BankError => "BE08",
        /// Fraud.
        Fraud => "FR01",
        /// Requested by the payee.
        CustomerRequest => "MD06",
        /// Cash withdrawal error.
        CashWithdrawal => "SL02",
    }
}

filter_params! {
    /// Query parameters supported by the refund listing endpoint.
    pub struct RefundListParams {
        /// Filter by refund status.
        status: RefundStatus => "status",
        /// Filter by the end-to-end id of the original payment.
        end_to_end_id: String => "endToEndId",
        /// Filter by reason code.
        reason: RefundReason => "reason",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}

wire_enum! {
    /// Status of an automatic PIX recurrence.
    pub enum AutomaticPixStatus {
        /// Created, waiting for payer approval.
        Created => "CREATED",
        /// Approved by the payer.
        Approved => "APPROVED",
        /// Rejected by the payer.
        Rejected => "REJECTED",
        /// Cancelled by either side.
        Canceled => "CANCELED",
        /// Past its end date.
        Expired => "EXPIRED",
    }
}

wire_enum! {
    /// Charging period of an automatic PIX recurrence.
    pub enum Periodicity {
        /// Every week.
        Weekly => "WEEKLY",
        /// Every month.
        Monthly => "MONTHLY",
        /// Every three months.
        Quarterly => "QUARTERLY",
        /// Every six months.
        Semiannual => "SEMIANNUAL",
        /// Every year.
        Annual => "ANNUAL",
    }
}

filter_params! {
    /// Query parameters supported by the automatic PIX listing endpoint.
    pub struct AutomaticPixListParams {
        /// Filter by recurrence status.
        status: AutomaticPixStatus => "status",
        /// Filter by recurrence id.
        recurrence_id: String => "recurrenceId",
        /// Filter by payer CPF/CNPJ.
        payer_document: String => "payerDocument",
        /// Filter by charging period.
        periodicity: Periodicity => "periodicity",
        /// Offset of the first record.
        first: i32 => "first",
        /// Maximum number of records.
        max: i32 => "max",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankapi_core::QueryString;

    #[test]
    fn test_refund_reason_uses_code_not_name() {
        let params = RefundListParams::new().reason(RefundReason::Fraud);
        assert_eq!(params.query_string(), "?reason=FR01");
    }

    #[test]
    fn test_end_to_end_id_is_plain_alphanumeric() {
        let id = "E12345678202401011200abcdefghijk";
        let params = InfractionReportListParams::new()
            .end_to_end_id(id)
            .role(ReporterRole::Credited);
        assert_eq!(
            params.query_string(),
            format!("?endToEndId={id}&role=CREDITED_PARTICIPANT")
        );
    }

    #[test]
    fn test_pix_key_types_round_trip_through_serde() {
        for key_type in PixKeyType::ALL {
            let json = serde_json::to_string(key_type).unwrap();
            assert_eq!(json, format!("\"{}\"", key_type.as_str()));
            let parsed: PixKeyType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *key_type);
        }
    }
}
