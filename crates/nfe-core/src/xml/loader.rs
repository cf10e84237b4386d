//! Source detection and document loading.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::config::LoaderConfig;
use crate::error::{NfeError, Result};

use super::{parse_bytes, parse_str, XmlElement};

lazy_static! {
    static ref XML_DECLARATION: Regex = Regex::new(r"(?i)<\?xml").unwrap();
}

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Remote document fetched over HTTP(S).
    Url(Url),
    /// Markup passed inline.
    Inline(String),
    /// Local file.
    File(PathBuf),
}

impl Source {
    /// Classify a document reference.
    ///
    /// Checked in order: absolute URL, markup with an XML declaration,
    /// existing file path.
    pub fn detect(input: &str) -> Result<Self> {
        if let Some(source) = Self::from_url(input) {
            return Ok(source);
        }

        if XML_DECLARATION.is_match(input) {
            return Ok(Source::Inline(input.to_string()));
        }

        let path = Path::new(input);
        if path.is_file() {
            return Ok(Source::File(path.to_path_buf()));
        }

        Err(NfeError::InvalidInput(describe_input(input)))
    }

    fn from_url(input: &str) -> Option<Self> {
        let url = Url::parse(input.trim()).ok()?;
        match url.scheme() {
            "file" => url
                .to_file_path()
                .ok()
                .filter(|path| path.is_file())
                .map(Source::File),
            _ if url.has_host() => Some(Source::Url(url)),
            _ => None,
        }
    }

    /// Short name of the source kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Url(_) => "url",
            Source::Inline(_) => "inline",
            Source::File(_) => "file",
        }
    }

    /// Read the raw bytes behind this source.
    pub fn read(&self, config: &LoaderConfig) -> Result<Vec<u8>> {
        match self {
            Source::Url(url) => fetch(url, config),
            Source::Inline(xml) => Ok(xml.as_bytes().to_vec()),
            Source::File(path) => Ok(std::fs::read(path)?),
        }
    }
}

/// Detect the source kind of `input`, read it and parse it.
///
/// File and remote documents are decoded by their declared encoding;
/// inline markup is already text and is parsed as is.
pub fn load(input: &str, config: &LoaderConfig) -> Result<XmlElement> {
    let source = Source::detect(input)?;
    let root = match &source {
        Source::Inline(xml) => {
            debug!("Parsing {} bytes of inline markup", xml.len());
            parse_str(xml)?
        }
        _ => {
            let bytes = source.read(config)?;
            debug!("Loaded {} bytes from {} source", bytes.len(), source.kind());
            parse_bytes(&bytes)?
        }
    };
    Ok(root)
}

#[cfg(feature = "remote")]
fn fetch(url: &Url, config: &LoaderConfig) -> Result<Vec<u8>> {
    debug!("Fetching document from {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|e| NfeError::Fetch(e.to_string()))?;

    client
        .get(url.as_str())
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map(|body| body.to_vec())
        .map_err(|e| NfeError::Fetch(format!("{}: {}", url, e)))
}

#[cfg(not(feature = "remote"))]
fn fetch(url: &Url, _config: &LoaderConfig) -> Result<Vec<u8>> {
    Err(NfeError::Fetch(format!(
        "{}: remote loading is disabled (enable the `remote` feature)",
        url
    )))
}

fn describe_input(input: &str) -> String {
    let preview: String = input.chars().take(40).collect();
    if preview.len() < input.len() {
        format!("not a URL, XML document or existing file: {}...", preview)
    } else {
        format!("not a URL, XML document or existing file: {}", preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_url() {
        let source = Source::detect("https://example.com/nfe/35170.xml").unwrap();
        assert!(matches!(source, Source::Url(_)));
        assert_eq!(source.kind(), "url");
    }

    #[test]
    fn test_detect_inline_case_insensitive() {
        let source = Source::detect(r#"<?XML version="1.0"?><NFe/>"#).unwrap();
        assert!(matches!(source, Source::Inline(_)));
    }

    #[test]
    fn test_detect_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<NFe/>").unwrap();

        let input = file.path().to_str().unwrap();
        assert_eq!(
            Source::detect(input).unwrap(),
            Source::File(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_markup_without_declaration_is_invalid() {
        let err = Source::detect("<NFe><infNFe/></NFe>").unwrap_err();
        assert!(matches!(err, NfeError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_file_is_invalid() {
        let err = Source::detect("/definitely/not/here.xml").unwrap_err();
        assert!(matches!(err, NfeError::InvalidInput(_)));
    }

    #[test]
    fn test_file_url() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let url = Url::from_file_path(file.path()).unwrap();

        assert_eq!(
            Source::detect(url.as_str()).unwrap(),
            Source::File(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_missing_file_url_is_invalid() {
        let err = Source::detect("file:///definitely/not/here.xml").unwrap_err();
        assert!(matches!(err, NfeError::InvalidInput(_)));
    }

    #[test]
    fn test_load_latin1_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"<?xml version="1.0" encoding="ISO-8859-1"?>"#).unwrap();
        file.write_all(b"\n<NFe><infNFe><emit>").unwrap();
        file.write_all(b"<xNome>Jo\xE3o Gon\xE7alves</xNome></emit></infNFe></NFe>\n")
            .unwrap();

        let root = load(file.path().to_str().unwrap(), &LoaderConfig::default()).unwrap();
        let name = root
            .child("infNFe")
            .and_then(|n| n.child("emit"))
            .and_then(|n| n.child("xNome"))
            .and_then(|n| n.text.as_deref());
        assert_eq!(name, Some("João Gonçalves"));
    }

    #[test]
    fn test_inline_ignores_declared_encoding() {
        let root = load(
            r#"<?xml version="1.0" encoding="ISO-8859-1"?><xMun>São Paulo</xMun>"#,
            &LoaderConfig::default(),
        )
        .unwrap();
        assert_eq!(root.text.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<NFe><infNFe><ide><cUF>35</cUF></ide></infNFe></NFe>").unwrap();

        let root = load(file.path().to_str().unwrap(), &LoaderConfig::default()).unwrap();
        assert_eq!(root.name, "NFe");
    }

    #[test]
    fn test_load_malformed_inline() {
        let err = load(r#"<?xml version="1.0"?><NFe><a></NFe>"#, &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, NfeError::Parse(_)));
    }
}
