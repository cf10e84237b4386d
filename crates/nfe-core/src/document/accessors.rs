//! Named accessors over the field catalog.
//!
//! Coded fields come back as `"<code> - <label>"` (the bare code when the
//! code is unknown). Everything returns `None` when the document does not
//! carry the element.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;
use tracing::warn;

use crate::fields::catalog::*;
use crate::fields::Field;

use super::Nfe;

/// Offset assumed for timestamps written without one (Brasília time).
const BRASILIA_OFFSET_SECS: i32 = -3 * 3600;

impl Nfe {
    // Identification

    /// Issuer state abbreviation (`cUF`), e.g. `"SP"`.
    pub fn issuer_state(&self) -> Option<String> {
        self.field(&ISSUER_STATE)
    }

    /// Numeric code composing the access key (`cNF`).
    pub fn numeric_code(&self) -> Option<String> {
        self.field(&NUMERIC_CODE)
    }

    /// Nature of the operation (`natOp`).
    pub fn operation_nature(&self) -> Option<String> {
        self.field(&OPERATION_NATURE)
    }

    /// Payment indicator (`indPag`).
    pub fn payment_indicator(&self) -> Option<String> {
        self.field(&PAYMENT_INDICATOR)
    }

    /// Document model (`mod`): 55 for NF-e, 65 for NFC-e.
    pub fn document_model(&self) -> Option<String> {
        self.field(&DOCUMENT_MODEL)
    }

    pub fn series(&self) -> Option<String> {
        self.field(&SERIES)
    }

    pub fn number(&self) -> Option<String> {
        self.field(&NUMBER)
    }

    /// Issue date and time (`dhEmi`).
    pub fn issued_at(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp(&ISSUED_AT)
    }

    /// Departure (or, for inbound invoices, entry) date and time (`dhSaiEnt`).
    pub fn departed_at(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp(&DEPARTED_AT)
    }

    /// Inbound or outbound operation (`tpNF`).
    pub fn operation_type(&self) -> Option<String> {
        self.field(&OPERATION_TYPE)
    }

    /// Internal, interstate or foreign operation (`idDest`).
    pub fn destination(&self) -> Option<String> {
        self.field(&DESTINATION)
    }

    /// Municipality of the taxable event (`cMunFG`), as `"<code> - <name>"`.
    pub fn taxable_event_municipality(&self) -> Option<String> {
        self.field(&TAXABLE_EVENT_MUNICIPALITY)
    }

    pub fn danfe_format(&self) -> Option<String> {
        self.field(&DANFE_FORMAT)
    }

    pub fn emission_type(&self) -> Option<String> {
        self.field(&EMISSION_TYPE)
    }

    /// Access key check digit (`cDV`).
    pub fn check_digit(&self) -> Option<String> {
        self.field(&CHECK_DIGIT)
    }

    /// Production or homologation environment (`tpAmb`).
    pub fn environment(&self) -> Option<String> {
        self.field(&ENVIRONMENT)
    }

    /// Purpose of issue (`finNFe`).
    pub fn purpose(&self) -> Option<String> {
        self.field(&PURPOSE)
    }

    /// Final consumer indicator (`indFinal`).
    pub fn final_consumer(&self) -> Option<String> {
        self.field(&FINAL_CONSUMER)
    }

    /// Buyer presence at the time of the operation (`indPres`).
    pub fn presence(&self) -> Option<String> {
        self.field(&PRESENCE)
    }

    pub fn emission_process(&self) -> Option<String> {
        self.field(&EMISSION_PROCESS)
    }

    /// Version of the issuing application (`verProc`).
    pub fn process_version(&self) -> Option<String> {
        self.field(&PROCESS_VERSION)
    }

    /// 44-digit access key, taken from the `infNFe` `Id` attribute.
    pub fn access_key(&self) -> Option<String> {
        self.field(&ACCESS_KEY_ID)
            .map(|id| id.strip_prefix("NFe").map(str::to_string).unwrap_or(id))
    }

    /// Layout version of the invoice (`infNFe` `versao`).
    pub fn layout_version(&self) -> Option<String> {
        self.field(&LAYOUT_VERSION)
    }

    // Issuer

    pub fn issuer_cnpj(&self) -> Option<String> {
        self.field(&ISSUER_CNPJ)
    }

    pub fn issuer_cpf(&self) -> Option<String> {
        self.field(&ISSUER_CPF)
    }

    pub fn issuer_name(&self) -> Option<String> {
        self.field(&ISSUER_NAME)
    }

    pub fn issuer_trade_name(&self) -> Option<String> {
        self.field(&ISSUER_TRADE_NAME)
    }

    /// State registration (`IE`).
    pub fn issuer_state_registration(&self) -> Option<String> {
        self.field(&ISSUER_STATE_REGISTRATION)
    }

    /// Municipal registration (`IM`).
    pub fn issuer_municipal_registration(&self) -> Option<String> {
        self.field(&ISSUER_MUNICIPAL_REGISTRATION)
    }

    /// Tax regime code (`CRT`).
    pub fn issuer_tax_regime(&self) -> Option<String> {
        self.field(&ISSUER_TAX_REGIME)
    }

    pub fn issuer_street(&self) -> Option<String> {
        self.field(&ISSUER_STREET)
    }

    pub fn issuer_street_number(&self) -> Option<String> {
        self.field(&ISSUER_STREET_NUMBER)
    }

    pub fn issuer_complement(&self) -> Option<String> {
        self.field(&ISSUER_COMPLEMENT)
    }

    pub fn issuer_district(&self) -> Option<String> {
        self.field(&ISSUER_DISTRICT)
    }

    /// `"<code> - <name>"`; the name comes from `xMun` or the municipality table.
    pub fn issuer_municipality(&self) -> Option<String> {
        self.field(&ISSUER_MUNICIPALITY)
    }

    pub fn issuer_address_state(&self) -> Option<String> {
        self.field(&ISSUER_ADDRESS_STATE)
    }

    pub fn issuer_postal_code(&self) -> Option<String> {
        self.field(&ISSUER_POSTAL_CODE)
    }

    pub fn issuer_country(&self) -> Option<String> {
        self.field(&ISSUER_COUNTRY)
    }

    pub fn issuer_phone(&self) -> Option<String> {
        self.field(&ISSUER_PHONE)
    }

    // Recipient

    pub fn recipient_cnpj(&self) -> Option<String> {
        self.field(&RECIPIENT_CNPJ)
    }

    pub fn recipient_cpf(&self) -> Option<String> {
        self.field(&RECIPIENT_CPF)
    }

    pub fn recipient_name(&self) -> Option<String> {
        self.field(&RECIPIENT_NAME)
    }

    /// ICMS taxpayer status of the recipient (`indIEDest`).
    pub fn recipient_state_registration_indicator(&self) -> Option<String> {
        self.field(&RECIPIENT_STATE_REGISTRATION_INDICATOR)
    }

    pub fn recipient_state_registration(&self) -> Option<String> {
        self.field(&RECIPIENT_STATE_REGISTRATION)
    }

    pub fn recipient_municipal_registration(&self) -> Option<String> {
        self.field(&RECIPIENT_MUNICIPAL_REGISTRATION)
    }

    pub fn recipient_email(&self) -> Option<String> {
        self.field(&RECIPIENT_EMAIL)
    }

    pub fn recipient_street(&self) -> Option<String> {
        self.field(&RECIPIENT_STREET)
    }

    pub fn recipient_street_number(&self) -> Option<String> {
        self.field(&RECIPIENT_STREET_NUMBER)
    }

    pub fn recipient_complement(&self) -> Option<String> {
        self.field(&RECIPIENT_COMPLEMENT)
    }

    pub fn recipient_district(&self) -> Option<String> {
        self.field(&RECIPIENT_DISTRICT)
    }

    /// Same format as [`Nfe::issuer_municipality`].
    pub fn recipient_municipality(&self) -> Option<String> {
        self.field(&RECIPIENT_MUNICIPALITY)
    }

    pub fn recipient_address_state(&self) -> Option<String> {
        self.field(&RECIPIENT_ADDRESS_STATE)
    }

    pub fn recipient_postal_code(&self) -> Option<String> {
        self.field(&RECIPIENT_POSTAL_CODE)
    }

    pub fn recipient_country(&self) -> Option<String> {
        self.field(&RECIPIENT_COUNTRY)
    }

    pub fn recipient_phone(&self) -> Option<String> {
        self.field(&RECIPIENT_PHONE)
    }

    // Totals

    /// Total value of products and services (`vProd`).
    pub fn products_amount(&self) -> Option<Decimal> {
        self.amount(&PRODUCTS_AMOUNT)
    }

    /// Invoice total (`vNF`).
    pub fn total_amount(&self) -> Option<Decimal> {
        self.amount(&TOTAL_AMOUNT)
    }

    // Authorization protocol

    pub fn protocol_version(&self) -> Option<String> {
        self.field(&PROTOCOL_VERSION)
    }

    pub fn protocol_environment(&self) -> Option<String> {
        self.field(&PROTOCOL_ENVIRONMENT)
    }

    pub fn protocol_application_version(&self) -> Option<String> {
        self.field(&PROTOCOL_APPLICATION_VERSION)
    }

    pub fn protocol_access_key(&self) -> Option<String> {
        self.field(&PROTOCOL_ACCESS_KEY)
    }

    /// When the tax authority received the invoice (`dhRecbto`).
    pub fn protocol_received_at(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp(&PROTOCOL_RECEIVED_AT)
    }

    pub fn protocol_number(&self) -> Option<String> {
        self.field(&PROTOCOL_NUMBER)
    }

    /// Digest value of the authorized invoice (`digVal`).
    pub fn protocol_digest(&self) -> Option<String> {
        self.field(&PROTOCOL_DIGEST)
    }

    /// Status code (`cStat`), e.g. `"100"` for an authorized invoice.
    pub fn protocol_status_code(&self) -> Option<String> {
        self.field(&PROTOCOL_STATUS_CODE)
    }

    /// Status message (`xMotivo`).
    pub fn protocol_status(&self) -> Option<String> {
        self.field(&PROTOCOL_STATUS)
    }

    fn timestamp(&self, field: &Field) -> Option<DateTime<FixedOffset>> {
        let text = self.field(field)?;
        let parsed = parse_timestamp(&text);
        if parsed.is_none() {
            warn!("Ignoring unparseable {} value: {}", field.name, text);
        }
        parsed
    }

    fn amount(&self, field: &Field) -> Option<Decimal> {
        let text = self.field(field)?;
        match Decimal::from_str(text.trim()) {
            Ok(amount) => Some(amount),
            Err(e) => {
                warn!("Ignoring unparseable {} value {}: {}", field.name, text, e);
                None
            }
        }
    }
}

/// Parse an NF-e timestamp. Layouts before 3.10 omit the UTC offset.
fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp);
    }

    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").ok()?;
    FixedOffset::east_opt(BRASILIA_OFFSET_SECS)?
        .from_local_datetime(&naive)
        .single()
}
