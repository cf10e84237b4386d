//! Catalog of NF-e fields exposed by [`crate::Nfe`].

use super::codes;
use super::Field;

use super::Anchor::{Document, Invoice};

// Identification (ide)
pub static ISSUER_STATE: Field =
    Field::label("issuer_state", Invoice, &["infNFe", "ide", "cUF"], &codes::UF);
pub static NUMERIC_CODE: Field = Field::raw("numeric_code", Invoice, &["infNFe", "ide", "cNF"]);
pub static OPERATION_NATURE: Field =
    Field::raw("operation_nature", Invoice, &["infNFe", "ide", "natOp"]);
pub static PAYMENT_INDICATOR: Field = Field::described(
    "payment_indicator",
    Invoice,
    &["infNFe", "ide", "indPag"],
    &codes::PAYMENT_INDICATOR,
);
pub static DOCUMENT_MODEL: Field =
    Field::described("document_model", Invoice, &["infNFe", "ide", "mod"], &codes::DOCUMENT_MODEL);
pub static SERIES: Field = Field::raw("series", Invoice, &["infNFe", "ide", "serie"]);
pub static NUMBER: Field = Field::raw("number", Invoice, &["infNFe", "ide", "nNF"]);
pub static ISSUED_AT: Field = Field::raw("issued_at", Invoice, &["infNFe", "ide", "dhEmi"]);
pub static DEPARTED_AT: Field = Field::raw("departed_at", Invoice, &["infNFe", "ide", "dhSaiEnt"]);
pub static OPERATION_TYPE: Field =
    Field::described("operation_type", Invoice, &["infNFe", "ide", "tpNF"], &codes::OPERATION_TYPE);
pub static DESTINATION: Field =
    Field::described("destination", Invoice, &["infNFe", "ide", "idDest"], &codes::DESTINATION);
pub static TAXABLE_EVENT_MUNICIPALITY: Field =
    Field::municipality("taxable_event_municipality", Invoice, &["infNFe", "ide", "cMunFG"], None);
pub static DANFE_FORMAT: Field =
    Field::described("danfe_format", Invoice, &["infNFe", "ide", "tpImp"], &codes::DANFE_FORMAT);
pub static EMISSION_TYPE: Field =
    Field::described("emission_type", Invoice, &["infNFe", "ide", "tpEmis"], &codes::EMISSION_TYPE);
pub static CHECK_DIGIT: Field = Field::raw("check_digit", Invoice, &["infNFe", "ide", "cDV"]);
pub static ENVIRONMENT: Field =
    Field::described("environment", Invoice, &["infNFe", "ide", "tpAmb"], &codes::ENVIRONMENT);
pub static PURPOSE: Field =
    Field::described("purpose", Invoice, &["infNFe", "ide", "finNFe"], &codes::PURPOSE);
pub static FINAL_CONSUMER: Field = Field::described(
    "final_consumer",
    Invoice,
    &["infNFe", "ide", "indFinal"],
    &codes::FINAL_CONSUMER,
);
pub static PRESENCE: Field =
    Field::described("presence", Invoice, &["infNFe", "ide", "indPres"], &codes::PRESENCE);
pub static EMISSION_PROCESS: Field = Field::described(
    "emission_process",
    Invoice,
    &["infNFe", "ide", "procEmi"],
    &codes::EMISSION_PROCESS,
);
pub static PROCESS_VERSION: Field =
    Field::raw("process_version", Invoice, &["infNFe", "ide", "verProc"]);

// infNFe attributes
pub static ACCESS_KEY_ID: Field = Field::raw("access_key", Invoice, &["infNFe", "Id"]);
pub static LAYOUT_VERSION: Field = Field::raw("layout_version", Invoice, &["infNFe", "versao"]);

// Issuer (emit)
pub static ISSUER_CNPJ: Field = Field::raw("issuer_cnpj", Invoice, &["infNFe", "emit", "CNPJ"]);
pub static ISSUER_CPF: Field = Field::raw("issuer_cpf", Invoice, &["infNFe", "emit", "CPF"]);
pub static ISSUER_NAME: Field = Field::raw("issuer_name", Invoice, &["infNFe", "emit", "xNome"]);
pub static ISSUER_TRADE_NAME: Field =
    Field::raw("issuer_trade_name", Invoice, &["infNFe", "emit", "xFant"]);
pub static ISSUER_STATE_REGISTRATION: Field =
    Field::raw("issuer_state_registration", Invoice, &["infNFe", "emit", "IE"]);
pub static ISSUER_MUNICIPAL_REGISTRATION: Field =
    Field::raw("issuer_municipal_registration", Invoice, &["infNFe", "emit", "IM"]);
pub static ISSUER_TAX_REGIME: Field =
    Field::described("issuer_tax_regime", Invoice, &["infNFe", "emit", "CRT"], &codes::TAX_REGIME);
pub static ISSUER_STREET: Field =
    Field::raw("issuer_street", Invoice, &["infNFe", "emit", "enderEmit", "xLgr"]);
pub static ISSUER_STREET_NUMBER: Field =
    Field::raw("issuer_street_number", Invoice, &["infNFe", "emit", "enderEmit", "nro"]);
pub static ISSUER_COMPLEMENT: Field =
    Field::raw("issuer_complement", Invoice, &["infNFe", "emit", "enderEmit", "xCpl"]);
pub static ISSUER_DISTRICT: Field =
    Field::raw("issuer_district", Invoice, &["infNFe", "emit", "enderEmit", "xBairro"]);
pub static ISSUER_MUNICIPALITY: Field = Field::municipality(
    "issuer_municipality",
    Invoice,
    &["infNFe", "emit", "enderEmit", "cMun"],
    Some("xMun"),
);
pub static ISSUER_ADDRESS_STATE: Field =
    Field::raw("issuer_address_state", Invoice, &["infNFe", "emit", "enderEmit", "UF"]);
pub static ISSUER_POSTAL_CODE: Field =
    Field::raw("issuer_postal_code", Invoice, &["infNFe", "emit", "enderEmit", "CEP"]);
pub static ISSUER_COUNTRY: Field =
    Field::raw("issuer_country", Invoice, &["infNFe", "emit", "enderEmit", "xPais"]);
pub static ISSUER_PHONE: Field =
    Field::raw("issuer_phone", Invoice, &["infNFe", "emit", "enderEmit", "fone"]);

// Recipient (dest)
pub static RECIPIENT_CNPJ: Field =
    Field::raw("recipient_cnpj", Invoice, &["infNFe", "dest", "CNPJ"]);
pub static RECIPIENT_CPF: Field = Field::raw("recipient_cpf", Invoice, &["infNFe", "dest", "CPF"]);
pub static RECIPIENT_NAME: Field =
    Field::raw("recipient_name", Invoice, &["infNFe", "dest", "xNome"]);
pub static RECIPIENT_STATE_REGISTRATION_INDICATOR: Field = Field::described(
    "recipient_state_registration_indicator",
    Invoice,
    &["infNFe", "dest", "indIEDest"],
    &codes::STATE_REGISTRATION_INDICATOR,
);
pub static RECIPIENT_STATE_REGISTRATION: Field =
    Field::raw("recipient_state_registration", Invoice, &["infNFe", "dest", "IE"]);
pub static RECIPIENT_MUNICIPAL_REGISTRATION: Field =
    Field::raw("recipient_municipal_registration", Invoice, &["infNFe", "dest", "IM"]);
pub static RECIPIENT_EMAIL: Field =
    Field::raw("recipient_email", Invoice, &["infNFe", "dest", "email"]);
pub static RECIPIENT_STREET: Field =
    Field::raw("recipient_street", Invoice, &["infNFe", "dest", "enderDest", "xLgr"]);
pub static RECIPIENT_STREET_NUMBER: Field =
    Field::raw("recipient_street_number", Invoice, &["infNFe", "dest", "enderDest", "nro"]);
pub static RECIPIENT_COMPLEMENT: Field =
    Field::raw("recipient_complement", Invoice, &["infNFe", "dest", "enderDest", "xCpl"]);
pub static RECIPIENT_DISTRICT: Field =
    Field::raw("recipient_district", Invoice, &["infNFe", "dest", "enderDest", "xBairro"]);
pub static RECIPIENT_MUNICIPALITY: Field = Field::municipality(
    "recipient_municipality",
    Invoice,
    &["infNFe", "dest", "enderDest", "cMun"],
    Some("xMun"),
);
pub static RECIPIENT_ADDRESS_STATE: Field =
    Field::raw("recipient_address_state", Invoice, &["infNFe", "dest", "enderDest", "UF"]);
pub static RECIPIENT_POSTAL_CODE: Field =
    Field::raw("recipient_postal_code", Invoice, &["infNFe", "dest", "enderDest", "CEP"]);
pub static RECIPIENT_COUNTRY: Field =
    Field::raw("recipient_country", Invoice, &["infNFe", "dest", "enderDest", "xPais"]);
pub static RECIPIENT_PHONE: Field =
    Field::raw("recipient_phone", Invoice, &["infNFe", "dest", "enderDest", "fone"]);

// Totals (total/ICMSTot)
pub static PRODUCTS_AMOUNT: Field =
    Field::raw("products_amount", Invoice, &["infNFe", "total", "ICMSTot", "vProd"]);
pub static TOTAL_AMOUNT: Field =
    Field::raw("total_amount", Invoice, &["infNFe", "total", "ICMSTot", "vNF"]);

// Authorization protocol (protNFe)
pub static PROTOCOL_VERSION: Field =
    Field::raw("protocol_version", Document, &["protNFe", "versao"]);
pub static PROTOCOL_ENVIRONMENT: Field = Field::described(
    "protocol_environment",
    Document,
    &["protNFe", "infProt", "tpAmb"],
    &codes::ENVIRONMENT,
);
pub static PROTOCOL_APPLICATION_VERSION: Field =
    Field::raw("protocol_application_version", Document, &["protNFe", "infProt", "verAplic"]);
pub static PROTOCOL_ACCESS_KEY: Field =
    Field::raw("protocol_access_key", Document, &["protNFe", "infProt", "chNFe"]);
pub static PROTOCOL_RECEIVED_AT: Field =
    Field::raw("protocol_received_at", Document, &["protNFe", "infProt", "dhRecbto"]);
pub static PROTOCOL_NUMBER: Field =
    Field::raw("protocol_number", Document, &["protNFe", "infProt", "nProt"]);
pub static PROTOCOL_DIGEST: Field =
    Field::raw("protocol_digest", Document, &["protNFe", "infProt", "digVal"]);
pub static PROTOCOL_STATUS_CODE: Field =
    Field::raw("protocol_status_code", Document, &["protNFe", "infProt", "cStat"]);
pub static PROTOCOL_STATUS: Field =
    Field::raw("protocol_status", Document, &["protNFe", "infProt", "xMotivo"]);

/// Every field, in presentation order.
pub static ALL: &[&Field] = &[
    &ISSUER_STATE,
    &NUMERIC_CODE,
    &OPERATION_NATURE,
    &PAYMENT_INDICATOR,
    &DOCUMENT_MODEL,
    &SERIES,
    &NUMBER,
    &ISSUED_AT,
    &DEPARTED_AT,
    &OPERATION_TYPE,
    &DESTINATION,
    &TAXABLE_EVENT_MUNICIPALITY,
    &DANFE_FORMAT,
    &EMISSION_TYPE,
    &CHECK_DIGIT,
    &ENVIRONMENT,
    &PURPOSE,
    &FINAL_CONSUMER,
    &PRESENCE,
    &EMISSION_PROCESS,
    &PROCESS_VERSION,
    &ACCESS_KEY_ID,
    &LAYOUT_VERSION,
    &ISSUER_CNPJ,
    &ISSUER_CPF,
    &ISSUER_NAME,
    &ISSUER_TRADE_NAME,
    &ISSUER_STATE_REGISTRATION,
    &ISSUER_MUNICIPAL_REGISTRATION,
    &ISSUER_TAX_REGIME,
    &ISSUER_STREET,
    &ISSUER_STREET_NUMBER,
    &ISSUER_COMPLEMENT,
    &ISSUER_DISTRICT,
    &ISSUER_MUNICIPALITY,
    &ISSUER_ADDRESS_STATE,
    &ISSUER_POSTAL_CODE,
    &ISSUER_COUNTRY,
    &ISSUER_PHONE,
    &RECIPIENT_CNPJ,
    &RECIPIENT_CPF,
    &RECIPIENT_NAME,
    &RECIPIENT_STATE_REGISTRATION_INDICATOR,
    &RECIPIENT_STATE_REGISTRATION,
    &RECIPIENT_MUNICIPAL_REGISTRATION,
    &RECIPIENT_EMAIL,
    &RECIPIENT_STREET,
    &RECIPIENT_STREET_NUMBER,
    &RECIPIENT_COMPLEMENT,
    &RECIPIENT_DISTRICT,
    &RECIPIENT_MUNICIPALITY,
    &RECIPIENT_ADDRESS_STATE,
    &RECIPIENT_POSTAL_CODE,
    &RECIPIENT_COUNTRY,
    &RECIPIENT_PHONE,
    &PRODUCTS_AMOUNT,
    &TOTAL_AMOUNT,
    &PROTOCOL_VERSION,
    &PROTOCOL_ENVIRONMENT,
    &PROTOCOL_APPLICATION_VERSION,
    &PROTOCOL_ACCESS_KEY,
    &PROTOCOL_RECEIVED_AT,
    &PROTOCOL_NUMBER,
    &PROTOCOL_DIGEST,
    &PROTOCOL_STATUS_CODE,
    &PROTOCOL_STATUS,
];
