//! Microdata markup for reStructuredText-style documents.
//!
//! This crate turns `itemscope`/`itempropblock` directives and the inline
//! `itemprop` role into HTML carrying microdata attributes
//! (`itemscope`, `itemtype`, `itemprop`).
//!
//! # Architecture
//!
//! - [`directive::DocumentParser`] parses source text into a [`Document`],
//!   dispatching directives and roles to injected handlers.
//! - [`microdata::MicrodataExtension`] registers the microdata handlers.
//! - [`PropertyReference`] parses the compact `value <name|info|tag>` syntax.
//! - The tag emission rules ([`property_element`], [`scope_element`],
//!   [`block_element`]) decide elements and attributes.
//! - [`HtmlRenderer`] walks the document, suppressing the paragraph wrapper
//!   inside compact scopes.
//!
//! # Example
//!
//! ```
//! use microdata_renderer::{AttributeOrder, RenderOptions};
//! use microdata_renderer::microdata::MicrodataExtension;
//!
//! let options = RenderOptions::new().with_attribute_order(AttributeOrder::Sorted);
//! let result = MicrodataExtension::new(options)
//!     .render_rst(":itemprop:`Test <url|http://somewhere/>`")
//!     .unwrap();
//!
//! assert_eq!(result.html, r#"<p><a href="http://somewhere/" itemprop="url">Test</a></p>"#);
//! ```

pub mod directive;
mod error;
mod html;
pub mod microdata;
mod node;
mod options;
mod property;
mod renderer;
mod rules;
mod scope;

pub use error::MicrodataError;
pub use html::{Attribute, AttributeOrder, Element, escape_html};
pub use node::{Document, Inline, Node};
pub use options::{DEFAULT_VOCABULARY_BASE, RenderOptions};
pub use property::{DEFAULT_TAG, EmptyValuePolicy, PropertyReference};
pub use renderer::{HtmlRenderer, RenderResult};
pub use rules::{ImageGate, Payload, block_element, payload, property_element, scope_element};
pub use scope::{DEFAULT_BLOCK_TAG, PropertyBlock, ScopeDeclaration, type_uri};
