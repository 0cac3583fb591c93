//! Generic nested tree built from feed XML.
//!
//! Elements become mappings keyed by child name, repeated children become
//! sequences, and leaf elements become text. The shape mirrors what a
//! dictionary-style XML reader produces, so the extractor can search it
//! without knowing the exact nesting of the feed:
//!
//! - attributes are stored first, as `@name` entries;
//! - child elements follow in document order;
//! - a repeated child name turns its entry into a sequence, kept at the
//!   position of the first occurrence;
//! - character data of an element that also has attributes or children is
//!   stored under `#text`;
//! - an element with no attributes, no children and no text is [`Node::Empty`].

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::error::{FeedError, Result};

/// Key prefix for attribute entries.
pub const ATTRIBUTE_PREFIX: &str = "@";

/// Key for character data stored alongside attributes or children.
pub const TEXT_KEY: &str = "#text";

/// One value in the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with no attributes, children or text.
    Empty,
    /// Leaf text (trimmed), or an attribute value.
    Text(String),
    /// Element with attributes and/or child elements.
    Mapping(Mapping),
    /// Repeated sibling elements sharing one name.
    Sequence(Vec<Node>),
}

impl Node {
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text carried by this node: leaf text, or the `#text` of a mapping.
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Mapping(mapping) => mapping.get(TEXT_KEY).and_then(Node::as_text),
            _ => None,
        }
    }
}

/// Ordered key/value entries of one element. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, node)| node)
    }

    /// Entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a value under `key`. A second value for an existing key turns
    /// the entry into a sequence in place.
    pub fn append(&mut self, key: impl Into<String>, node: Node) {
        let key = key.into();
        let Some(slot) = self
            .entries
            .iter_mut()
            .find(|(name, _)| *name == key)
            .map(|(_, existing)| existing)
        else {
            self.entries.push((key, node));
            return;
        };
        match slot {
            Node::Sequence(items) => items.push(node),
            existing => {
                let first = std::mem::replace(existing, Node::Empty);
                *existing = Node::Sequence(vec![first, node]);
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, node) in iter {
            mapping.append(key, node);
        }
        mapping
    }
}

/// Element being assembled while its content is read.
struct OpenElement {
    name: String,
    entries: Mapping,
    text: String,
}

impl OpenElement {
    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let mut entries = Mapping::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(xml_error)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref());
            let value = attribute.unescape_value().map_err(xml_error)?;
            entries.append(
                format!("{ATTRIBUTE_PREFIX}{key}"),
                Node::Text(value.into_owned()),
            );
        }
        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            entries,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Node) {
        let text = self.text.trim();
        let node = if self.entries.is_empty() {
            if text.is_empty() {
                Node::Empty
            } else {
                Node::Text(text.to_string())
            }
        } else {
            let mut entries = self.entries;
            if !text.is_empty() {
                entries.append(TEXT_KEY, Node::Text(text.to_string()));
            }
            Node::Mapping(entries)
        };
        (self.name, node)
    }
}

/// Tree assembly state: open elements plus the finished root.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<OpenElement>,
    root: Option<(String, Node)>,
}

impl TreeBuilder {
    fn finish_element(&mut self, element: OpenElement) -> Result<()> {
        let (name, node) = element.close();
        if let Some(parent) = self.stack.last_mut() {
            parent.entries.append(name, node);
            return Ok(());
        }
        if self.root.is_some() {
            return Err(FeedError::Xml(format!(
                "second root element <{name}> after the document element"
            )));
        }
        self.root = Some((name, node));
        Ok(())
    }

    fn push_text(&mut self, text: &str) -> Result<()> {
        match self.stack.last_mut() {
            Some(element) => {
                element.text.push_str(text);
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(FeedError::Xml(
                "text outside of the document element".to_string(),
            )),
        }
    }

    fn finish(self) -> Result<Node> {
        if let Some(element) = self.stack.last() {
            return Err(FeedError::Xml(format!(
                "document ended inside <{}>",
                element.name
            )));
        }
        let (name, node) = self
            .root
            .ok_or_else(|| FeedError::Xml("no root element found".to_string()))?;
        Ok(Node::Mapping(Mapping::from_iter([(name, node)])))
    }
}

/// Parse XML text into a [`Node::Mapping`] holding the document element.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] for malformed markup, mismatched or unclosed
/// tags, unknown entities, a missing root, more than one root, or text
/// outside the root element.
pub fn parse_xml(text: &str) -> Result<Node> {
    let mut reader = Reader::from_str(text.trim_start_matches('\u{feff}'));
    let mut builder = TreeBuilder::default();

    loop {
        match reader.read_event()? {
            Event::Start(start) => builder.stack.push(OpenElement::open(&start)?),
            Event::Empty(start) => {
                let element = OpenElement::open(&start)?;
                builder.finish_element(element)?;
            }
            Event::End(end) => {
                let element = builder.stack.pop().ok_or_else(|| {
                    FeedError::Xml(format!(
                        "closing tag </{}> without an open element",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                builder.finish_element(element)?;
            }
            Event::Text(chunk) => {
                let decoded = chunk.decode().map_err(xml_error)?;
                builder.push_text(&decoded)?;
            }
            Event::CData(chunk) => {
                let decoded = chunk.decode().map_err(xml_error)?;
                builder.push_text(&decoded)?;
            }
            Event::GeneralRef(reference) => {
                let resolved = resolve_reference(&reference)?;
                builder.push_text(&resolved)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype.
            _ => {}
        }
    }

    builder.finish()
}

/// Expand `&name;` or `&#NN;` into its text.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String> {
    if let Some(ch) = reference.resolve_char_ref().map_err(xml_error)? {
        return Ok(ch.to_string());
    }
    let name = reference.decode().map_err(xml_error)?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| FeedError::Xml(format!("undefined entity &{name};")))
}

fn xml_error(err: impl std::fmt::Display) -> FeedError {
    FeedError::Xml(err.to_string())
}
