//! XML element tree built on top of quick-xml.

mod loader;

pub use loader::{load, Source};

use indexmap::IndexMap;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::ParseError;

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A parsed XML element.
///
/// Names are local names: namespace prefixes are stripped and namespace
/// declarations are not kept as attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Local element name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
    /// Text content with CDATA included, trimmed at both ends.
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// True when the element has neither attributes, children nor text.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty() && self.text.is_none()
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Trim the collected text once the element is closed.
    fn finish_text(&mut self) {
        self.text = self
            .text
            .take()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
    }
}

/// Parse XML markup into its root element.
///
/// The markup is already Unicode, so any `encoding` in its declaration is
/// ignored.
pub fn parse_str(xml: &str) -> Result<XmlElement> {
    build_tree(Reader::from_str(xml))
}

/// Parse raw document bytes, decoding them by their byte order mark or the
/// `encoding` declared in the XML prologue (UTF-8 when neither is present).
pub fn parse_bytes(bytes: &[u8]) -> Result<XmlElement> {
    build_tree(Reader::from_reader(bytes))
}

fn build_tree(mut reader: Reader<&[u8]>) -> Result<XmlElement> {
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(ParseError::Malformed {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                });
            }
        };
        let position = reader.buffer_position() as u64;
        let decoder = reader.decoder();

        match event {
            Event::Start(start) => {
                stack.push(element_from_start(&start, decoder, position)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start, decoder, position)?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::End(_) => {
                // quick-xml already verified the end name against the open tag
                let mut element = stack.pop().ok_or_else(|| ParseError::Malformed {
                    position,
                    message: "unexpected closing tag".to_string(),
                })?;
                element.finish_text();
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| malformed(position, e))?;
                push_text(&mut stack, &text, position)?;
            }
            Event::CData(data) => {
                let data = decoder.decode(&data).map_err(|e| malformed(position, e))?;
                push_text(&mut stack, &data, position)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no data
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(ParseError::UnclosedElement(open.name));
    }

    let root = root.ok_or(ParseError::NoRootElement)?;
    debug!(
        "Parsed <{}> ({}) with {} child elements",
        root.name,
        reader.decoder().encoding().name(),
        root.children.len()
    );
    Ok(root)
}

fn malformed(position: u64, error: impl std::fmt::Display) -> ParseError {
    ParseError::Malformed {
        position,
        message: error.to_string(),
    }
}

fn element_from_start(
    start: &BytesStart<'_>,
    decoder: Decoder,
    position: u64,
) -> Result<XmlElement> {
    let local_name = start.local_name();
    let name = decoder
        .decode(local_name.as_ref())
        .map_err(|e| malformed(position, e))?;
    let mut element = XmlElement::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| malformed(position, e))?;

        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }

        let name = decoder
            .decode(attr.key.local_name().as_ref())
            .map_err(|e| malformed(position, e))?
            .into_owned();
        let value = attr
            .decode_and_unescape_value(decoder)
            .map_err(|e| malformed(position, e))?;
        element.attributes.insert(name, value.into_owned());
    }

    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
    position: u64,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(ParseError::ContentOutsideRoot { position });
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str, position: u64) -> Result<()> {
    match stack.last_mut() {
        Some(current) => {
            current.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ParseError::ContentOutsideRoot { position }),
    }
}
