//! Field extraction for Brazilian electronic invoices (NF-e).
//!
//! This crate provides:
//! - Document loading from URLs, inline XML or files
//! - Normalization of the XML tree into an attribute-free key-value map
//! - Named field accessors with code-to-label translation
//!
//! ```no_run
//! use nfe_core::Nfe;
//!
//! let nfe = Nfe::load("invoices/35170112345678000199550010000000011000000010-procNFe.xml")?;
//! println!("{:?} {:?}", nfe.issuer_name(), nfe.environment());
//! # Ok::<(), nfe_core::NfeError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod xml;

pub use config::{LoaderConfig, MunicipalityConfig, NfeConfig};
pub use document::Nfe;
pub use error::{NfeError, ParseError, ResourceError, Result};
pub use fields::{Anchor, CodeTable, Decode, Field, MunicipalityTable};
pub use normalize::{normalize, to_raw, Map, Value};
pub use xml::{load, parse_bytes, parse_str, Source, XmlElement};
