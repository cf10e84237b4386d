//! Static code tables for enumerated NF-e fields.

/// Mapping from an enumerated code to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTable {
    /// Name of the field the table belongs to.
    pub name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Label for `code`, if known.
    pub fn label(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// `"<code> - <label>"`, or the bare code when it is not in the table.
    pub fn describe(&self, code: &str) -> String {
        match self.label(code) {
            Some(label) => format!("{} - {}", code, label),
            None => code.to_string(),
        }
    }

    /// All entries in table order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// IBGE state codes to UF abbreviations.
pub static UF: CodeTable = CodeTable::new(
    "cUF",
    &[
        ("11", "RO"),
        ("12", "AC"),
        ("13", "AM"),
        ("14", "RR"),
        ("15", "PA"),
        ("16", "AP"),
        ("17", "TO"),
        ("21", "MA"),
        ("22", "PI"),
        ("23", "CE"),
        ("24", "RN"),
        ("25", "PB"),
        ("26", "PE"),
        ("27", "AL"),
        ("28", "SE"),
        ("29", "BA"),
        ("31", "MG"),
        ("32", "ES"),
        ("33", "RJ"),
        ("35", "SP"),
        ("41", "PR"),
        ("42", "SC"),
        ("43", "RS"),
        ("50", "MS"),
        ("51", "MT"),
        ("52", "GO"),
        ("53", "DF"),
    ],
);

pub static PAYMENT_INDICATOR: CodeTable = CodeTable::new(
    "indPag",
    &[
        ("0", "Pagamento à vista"),
        ("1", "Pagamento a prazo"),
        ("2", "Outros"),
    ],
);

pub static DOCUMENT_MODEL: CodeTable = CodeTable::new(
    "mod",
    &[
        ("55", "NF-e emitida em substituição a Nota Fiscal modelo 1/1A"),
        (
            "65",
            "NFC-e, utilizada nas operações de vendas no varejo, onde não for exigida a NF-e por dispositivo legal",
        ),
    ],
);

pub static OPERATION_TYPE: CodeTable =
    CodeTable::new("tpNF", &[("0", "Entrada"), ("1", "Saída")]);

pub static DESTINATION: CodeTable = CodeTable::new(
    "idDest",
    &[
        ("1", "Operação interna"),
        ("2", "Operação interestadual"),
        ("3", "Operação com exterior"),
    ],
);

pub static DANFE_FORMAT: CodeTable = CodeTable::new(
    "tpImp",
    &[
        ("0", "Sem geração de DANFE"),
        ("1", "DANFE normal, Retrato"),
        ("2", "DANFE normal, Paisagem"),
        ("3", "DANFE Simplificado"),
        ("4", "DANFE NFC-e"),
        ("5", "DANFE NFC-e em mensagem eletrônica"),
    ],
);

pub static EMISSION_TYPE: CodeTable = CodeTable::new(
    "tpEmis",
    &[
        ("1", "Emissão normal (não em contingência)"),
        ("2", "Contingência FS-IA, com impressão do DANFE em formulário de segurança"),
        ("3", "Contingência SCAN (Sistema de Contingência do Ambiente Nacional)"),
        ("4", "Contingência DPEC (Declaração Prévia da Emissão em Contingência)"),
        ("5", "Contingência FS-DA, com impressão do DANFE em formulário de segurança"),
        ("6", "Contingência SVC-AN (SEFAZ Virtual de Contingência do AN)"),
        ("7", "Contingência SVC-RS (SEFAZ Virtual de Contingência do RS)"),
        ("9", "Contingência off-line da NFC-e"),
    ],
);

pub static ENVIRONMENT: CodeTable =
    CodeTable::new("tpAmb", &[("1", "Produção"), ("2", "Homologação")]);

pub static PURPOSE: CodeTable = CodeTable::new(
    "finNFe",
    &[
        ("1", "NF-e normal"),
        ("2", "NF-e complementar"),
        ("3", "NF-e de ajuste"),
        ("4", "Devolução de mercadoria"),
    ],
);

// Schema values: 0 = normal, 1 = final consumer. Some older tooling labels
// these 1 = normal, 2 = final consumer; that numbering is not used here.
pub static FINAL_CONSUMER: CodeTable =
    CodeTable::new("indFinal", &[("0", "Normal"), ("1", "Consumidor final")]);

pub static PRESENCE: CodeTable = CodeTable::new(
    "indPres",
    &[
        ("0", "Não se aplica"),
        ("1", "Operação presencial"),
        ("2", "Operação não presencial, pela Internet"),
        ("3", "Operação não presencial, Teleatendimento"),
        ("4", "NFC-e em operação com entrega em domicílio"),
        ("9", "Operação não presencial, outros"),
    ],
);

pub static EMISSION_PROCESS: CodeTable = CodeTable::new(
    "procEmi",
    &[
        ("0", "Emissão de NF-e com aplicativo do contribuinte"),
        ("1", "Emissão de NF-e avulsa pelo Fisco"),
        (
            "2",
            "Emissão de NF-e avulsa, pelo contribuinte com seu certificado digital, através do site do Fisco",
        ),
        ("3", "Emissão NF-e pelo contribuinte com aplicativo fornecido pelo Fisco"),
    ],
);

pub static TAX_REGIME: CodeTable = CodeTable::new(
    "CRT",
    &[
        ("1", "Simples Nacional"),
        ("2", "Simples Nacional, excesso sublimite de receita bruta"),
        ("3", "Regime Normal"),
    ],
);

pub static STATE_REGISTRATION_INDICATOR: CodeTable = CodeTable::new(
    "indIEDest",
    &[
        ("1", "Contribuinte ICMS"),
        ("2", "Contribuinte isento de Inscrição no cadastro de Contribuintes do ICMS"),
        (
            "9",
            "Não Contribuinte, que pode ou não possuir Inscrição Estadual no Cadastro de Contribuintes do ICMS",
        ),
    ],
);
