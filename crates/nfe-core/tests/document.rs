//! End-to-end tests over a complete authorized invoice.

use std::str::FromStr;

use nfe_core::{Anchor, MunicipalityTable, Nfe, NfeConfig, NfeError, Value};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

const NFE_PROC: &str = include_str!("fixtures/nfe_proc.xml");

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_inline_and_file_sources_agree() {
    let inline = Nfe::load(NFE_PROC).unwrap();
    let file = Nfe::load(&fixture("nfe_proc.xml")).unwrap();

    assert_eq!(inline.root_name(), "nfeProc");
    assert_eq!(inline.to_map(), file.to_map());
}

#[test]
fn test_identification_fields() {
    let nfe = Nfe::load(NFE_PROC).unwrap();

    assert_eq!(nfe.issuer_state().as_deref(), Some("SP"));
    assert_eq!(nfe.numeric_code().as_deref(), Some("00000001"));
    assert_eq!(nfe.operation_nature().as_deref(), Some("Venda de mercadoria"));
    assert_eq!(nfe.payment_indicator().as_deref(), Some("0 - Pagamento à vista"));
    assert_eq!(
        nfe.document_model().as_deref(),
        Some("55 - NF-e emitida em substituição a Nota Fiscal modelo 1/1A")
    );
    assert_eq!(nfe.series().as_deref(), Some("1"));
    assert_eq!(nfe.number().as_deref(), Some("1"));
    assert_eq!(nfe.operation_type().as_deref(), Some("1 - Saída"));
    assert_eq!(nfe.destination().as_deref(), Some("2 - Operação interestadual"));
    assert_eq!(nfe.danfe_format().as_deref(), Some("1 - DANFE normal, Retrato"));
    assert_eq!(
        nfe.emission_type().as_deref(),
        Some("1 - Emissão normal (não em contingência)")
    );
    assert_eq!(nfe.check_digit().as_deref(), Some("0"));
    assert_eq!(nfe.environment().as_deref(), Some("2 - Homologação"));
    assert_eq!(nfe.purpose().as_deref(), Some("1 - NF-e normal"));
    assert_eq!(nfe.final_consumer().as_deref(), Some("1 - Consumidor final"));
    assert_eq!(
        nfe.presence().as_deref(),
        Some("2 - Operação não presencial, pela Internet")
    );
    assert_eq!(
        nfe.emission_process().as_deref(),
        Some("0 - Emissão de NF-e com aplicativo do contribuinte")
    );
    assert_eq!(nfe.process_version().as_deref(), Some("ERP 3.2"));
    assert_eq!(
        nfe.access_key().as_deref(),
        Some("35170112345678000199550010000000011000000010")
    );
    assert_eq!(nfe.layout_version().as_deref(), Some("4.00"));
}

#[test]
fn test_timestamps() {
    let nfe = Nfe::load(NFE_PROC).unwrap();

    assert_eq!(
        nfe.issued_at().map(|t| t.to_rfc3339()).as_deref(),
        Some("2017-01-10T09:30:00-02:00")
    );
    assert_eq!(
        nfe.departed_at().map(|t| t.to_rfc3339()).as_deref(),
        Some("2017-01-10T14:00:00-02:00")
    );
    assert_eq!(
        nfe.protocol_received_at().map(|t| t.to_rfc3339()).as_deref(),
        Some("2017-01-10T09:31:05-02:00")
    );
}

#[test]
fn test_issuer_fields() {
    let nfe = Nfe::load(NFE_PROC).unwrap();

    assert_eq!(nfe.issuer_cnpj().as_deref(), Some("12345678000199"));
    assert_eq!(nfe.issuer_cpf(), None);
    assert_eq!(nfe.issuer_name().as_deref(), Some("Comercio de Teste LTDA"));
    assert_eq!(nfe.issuer_trade_name().as_deref(), Some("Loja Teste"));
    assert_eq!(nfe.issuer_state_registration().as_deref(), Some("111222333444"));
    assert_eq!(nfe.issuer_municipal_registration(), None);
    assert_eq!(nfe.issuer_tax_regime().as_deref(), Some("3 - Regime Normal"));
    assert_eq!(nfe.issuer_street().as_deref(), Some("Avenida Paulista"));
    assert_eq!(nfe.issuer_street_number().as_deref(), Some("1000"));
    assert_eq!(nfe.issuer_complement(), None);
    assert_eq!(nfe.issuer_district().as_deref(), Some("Bela Vista"));
    assert_eq!(nfe.issuer_municipality().as_deref(), Some("3550308 - SAO PAULO"));
    assert_eq!(nfe.issuer_address_state().as_deref(), Some("SP"));
    assert_eq!(nfe.issuer_postal_code().as_deref(), Some("01310100"));
    assert_eq!(nfe.issuer_country().as_deref(), Some("BRASIL"));
    assert_eq!(nfe.issuer_phone().as_deref(), Some("1133334444"));
}

#[test]
fn test_recipient_fields() {
    let nfe = Nfe::load(NFE_PROC).unwrap();

    assert_eq!(nfe.recipient_cnpj(), None);
    assert_eq!(nfe.recipient_cpf().as_deref(), Some("12345678909"));
    assert_eq!(nfe.recipient_name().as_deref(), Some("Maria da Silva"));
    assert_eq!(
        nfe.recipient_state_registration_indicator().as_deref(),
        Some("9 - Não Contribuinte, que pode ou não possuir Inscrição Estadual no Cadastro de Contribuintes do ICMS")
    );
    assert_eq!(nfe.recipient_state_registration(), None);
    assert_eq!(nfe.recipient_municipal_registration(), None);
    assert_eq!(nfe.recipient_email().as_deref(), Some("maria@example.com"));
    assert_eq!(nfe.recipient_street().as_deref(), Some("Rua XV de Novembro"));
    assert_eq!(nfe.recipient_street_number().as_deref(), Some("50"));
    assert_eq!(nfe.recipient_complement().as_deref(), Some("Apto 12"));
    assert_eq!(nfe.recipient_district().as_deref(), Some("Centro"));
    assert_eq!(nfe.recipient_address_state().as_deref(), Some("PR"));
    assert_eq!(nfe.recipient_postal_code().as_deref(), Some("80020310"));
    assert_eq!(nfe.recipient_country().as_deref(), Some("BRASIL"));
    assert_eq!(nfe.recipient_phone(), None);
}

#[test]
fn test_municipalities_from_bundled_table() {
    let nfe = Nfe::load(NFE_PROC).unwrap();

    // No xMun in the recipient address: the name comes from the table
    assert_eq!(nfe.recipient_municipality().as_deref(), Some("4106902 - Curitiba"));
    assert_eq!(
        nfe.taxable_event_municipality().as_deref(),
        Some("3550308 - São Paulo")
    );
}

#[test]
fn test_municipalities_from_configured_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("municipios.json");
    std::fs::write(&path, r#"{"4106902": "CURITIBA/PR"}"#).unwrap();

    let config = NfeConfig::default().with_municipality_table(&path);
    let nfe = Nfe::load_with_config(NFE_PROC, config).unwrap();

    assert_eq!(nfe.recipient_municipality().as_deref(), Some("4106902 - CURITIBA/PR"));
    assert_eq!(nfe.taxable_event_municipality().as_deref(), Some("3550308"));
}

#[test]
fn test_bundled_table_covers_non_capitals() {
    let table = MunicipalityTable::bundled().unwrap();

    assert_eq!(table.name("3304904"), Some("São Gonçalo"));
    assert_eq!(table.name("3106705"), Some("Betim"));
    assert_eq!(table.name("4209102"), Some("Joinville"));
    assert!(table.len() > 200);
}

#[test]
fn test_latin1_document() {
    let nfe = Nfe::load(&fixture("nfe_latin1.xml")).unwrap();

    assert_eq!(
        nfe.operation_nature().as_deref(),
        Some("Venda de produção do estabelecimento")
    );
    assert_eq!(nfe.issuer_name().as_deref(), Some("Confecções São Gonçalo LTDA"));
    assert_eq!(nfe.issuer_street().as_deref(), Some("Rua Doutor Nilo Peçanha"));
    assert_eq!(nfe.recipient_name().as_deref(), Some("João Araújo"));
    assert_eq!(
        nfe.resolve(Anchor::Invoice, &["infNFe", "infAdic", "infCpl"]),
        Some("Pedido 421 entrega agendada pela manhã")
    );

    // No xMun anywhere: names come from the bundled table
    assert_eq!(
        nfe.taxable_event_municipality().as_deref(),
        Some("3304904 - São Gonçalo")
    );
    assert_eq!(nfe.issuer_municipality().as_deref(), Some("3304904 - São Gonçalo"));
    assert_eq!(nfe.recipient_municipality().as_deref(), Some("3106705 - Betim"));
}

#[test]
fn test_totals() {
    let nfe = Nfe::load(NFE_PROC).unwrap();

    assert_eq!(nfe.products_amount(), Some(Decimal::from_str("35.50").unwrap()));
    assert_eq!(nfe.total_amount(), Some(Decimal::from_str("35.50").unwrap()));
}

#[test]
fn test_protocol_fields() {
    let nfe = Nfe::load(NFE_PROC).unwrap();

    assert_eq!(nfe.protocol_version().as_deref(), Some("4.00"));
    assert_eq!(nfe.protocol_environment().as_deref(), Some("2 - Homologação"));
    assert_eq!(nfe.protocol_application_version().as_deref(), Some("SP_NFE_PL009_V4"));
    assert_eq!(
        nfe.protocol_access_key().as_deref(),
        Some("35170112345678000199550010000000011000000010")
    );
    assert_eq!(nfe.protocol_number().as_deref(), Some("135170000000001"));
    assert_eq!(nfe.protocol_digest().as_deref(), Some("abc123="));
    assert_eq!(nfe.protocol_status_code().as_deref(), Some("100"));
    assert_eq!(nfe.protocol_status().as_deref(), Some("Autorizado o uso da NF-e"));
}

#[test]
fn test_missing_protocol_section() {
    let nfe = Nfe::from_xml_str(
        "<NFe><infNFe><ide><cUF>35</cUF><tpAmb>1</tpAmb></ide></infNFe></NFe>",
    )
    .unwrap();

    assert_eq!(nfe.protocol_version(), None);
    assert_eq!(nfe.protocol_environment(), None);
    assert_eq!(nfe.protocol_application_version(), None);
    assert_eq!(nfe.protocol_access_key(), None);
    assert_eq!(nfe.protocol_received_at(), None);
    assert_eq!(nfe.protocol_number(), None);
    assert_eq!(nfe.protocol_digest(), None);
    assert_eq!(nfe.protocol_status_code(), None);
    assert_eq!(nfe.protocol_status(), None);
    assert_eq!(nfe.issuer_name(), None);
    assert_eq!(nfe.recipient_municipality(), None);
    assert_eq!(nfe.issued_at(), None);
    assert_eq!(nfe.total_amount(), None);
}

#[test]
fn test_normalized_structure() {
    let nfe = Nfe::load(NFE_PROC).unwrap();
    let json = nfe.to_json_value().unwrap();

    assert_eq!(json["versao"], "4.00");
    assert_eq!(json["NFe"]["infNFe"]["Id"], "NFe35170112345678000199550010000000011000000010");
    assert_eq!(json["NFe"]["infNFe"]["det"][0]["nItem"], "1");
    assert_eq!(json["NFe"]["infNFe"]["det"][1]["prod"]["xProd"], "Caderno & capa");
    assert_eq!(
        json["NFe"]["Signature"]["SignedInfo"]["Reference"]["URI"],
        "#NFe35170112345678000199550010000000011000000010"
    );
    assert_eq!(json["protNFe"]["infProt"]["Id"], "ID135170000000001");

    // Attribute keys come before child elements
    let inf_nfe = nfe.to_map()["NFe"].get("infNFe").and_then(Value::as_map).unwrap();
    let keys: Vec<_> = inf_nfe.keys().take(3).map(String::as_str).collect();
    assert_eq!(keys, vec!["Id", "versao", "ide"]);

    assert!(!nfe.to_json().unwrap().contains("@attributes"));
    assert!(nfe.raw().contains_key_deep("@attributes"));
}

#[test]
fn test_json_roundtrip_is_stable() {
    let nfe = Nfe::load(NFE_PROC).unwrap();
    let reparsed: Value = serde_json::from_str(&nfe.to_json().unwrap()).unwrap();

    assert_eq!(nfe_core::normalize(reparsed.clone()), reparsed);
    assert_eq!(reparsed, Value::Map(nfe.to_map().clone()));
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        Nfe::load("not an invoice"),
        Err(NfeError::InvalidInput(_))
    ));
    assert!(matches!(
        Nfe::load(r#"<?xml version="1.0"?><NFe><infNFe></NFe>"#),
        Err(NfeError::Parse(_))
    ));
    assert!(matches!(
        Nfe::load("file:///definitely/not/here.xml"),
        Err(NfeError::InvalidInput(_))
    ));
}
