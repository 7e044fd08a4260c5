//! Generic markup tree and its text form
//!
//! [`XmlNode`] is the neutral representation both codec directions work on:
//! the decoder reads it, the encoder produces it, and extension slots keep
//! unknown content as `XmlNode` values. Turning text into a tree and a tree
//! into indented text is delegated to `quick-xml`.
//!
//! Namespace declarations are resolved while parsing. Every element and
//! attribute carries the namespace URI it resolved to, and the declarations
//! written on an element are kept in [`XmlNode::namespaces`] rather than in
//! its attribute list. When formatting, declarations missing from scope are
//! added on the element that needs them.

use crate::error::{KmlError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Namespace bound to the reserved `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A namespace declaration (`xmlns` or `xmlns:prefix`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceDecl {
    /// Declared prefix, `None` for the default namespace
    pub prefix: Option<String>,
    /// Namespace URI (empty string undeclares the default namespace)
    pub uri: String,
}

impl NamespaceDecl {
    /// Create a declaration
    #[inline]
    #[must_use]
    pub fn new(prefix: Option<&str>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            uri: uri.into(),
        }
    }
}

/// An attribute of an [`XmlNode`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XmlAttribute {
    /// Prefix as written
    pub prefix: Option<String>,
    /// Resolved namespace URI (unprefixed attributes have none)
    pub namespace: Option<String>,
    /// Local name
    pub name: String,
    /// Unescaped value
    pub value: String,
}

impl XmlAttribute {
    /// Name as written in markup (`prefix:name` or `name`)
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A generic element: tag, attributes, children and text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XmlNode {
    /// Resolved namespace URI
    pub namespace: Option<String>,
    /// Prefix as written
    pub prefix: Option<String>,
    /// Local name
    pub name: String,
    /// Namespace declarations written on this element
    pub namespaces: Vec<NamespaceDecl>,
    /// Attributes other than namespace declarations, in document order
    pub attributes: Vec<XmlAttribute>,
    /// Child elements in document order
    pub children: Vec<XmlNode>,
    /// Character data (text and CDATA concatenated)
    pub text: Option<String>,
}

impl XmlNode {
    /// Create an element without namespace
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Place the element in a namespace, written with the given prefix
    #[must_use]
    pub fn in_namespace(mut self, uri: impl Into<String>, prefix: Option<&str>) -> Self {
        self.namespace = Some(uri.into());
        self.prefix = prefix.map(str::to_string);
        self
    }

    /// Add a namespace declaration on this element
    #[must_use]
    pub fn with_namespace_decl(mut self, decl: NamespaceDecl) -> Self {
        self.namespaces.push(decl);
        self
    }

    /// Add an unprefixed attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(XmlAttribute {
            prefix: None,
            namespace: None,
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a child element
    #[must_use]
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Name as written in markup (`prefix:name` or `name`)
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Drop the namespace declarations of this subtree
    ///
    /// Namespaces stay resolved on every element and attribute, and the
    /// formatter declares them again where they are not in scope. Detached
    /// subtrees compare equal regardless of where their declarations sat.
    #[must_use]
    pub fn without_declarations(mut self) -> Self {
        self.namespaces.clear();
        self.children = self
            .children
            .into_iter()
            .map(XmlNode::without_declarations)
            .collect();
        self
    }

    /// Value of an unprefixed attribute
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.prefix.is_none() && attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// First child with the given namespace and local name
    #[must_use]
    pub fn child(&self, namespace: Option<&str>, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.is(namespace, name))
    }

    /// Text content, empty when absent
    #[inline]
    #[must_use]
    pub fn text_content(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Whether the element has this namespace and local name
    #[inline]
    #[must_use]
    pub fn is(&self, namespace: Option<&str>, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == namespace
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse markup bytes into a tree
///
/// A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns an error if the bytes are not UTF-8 or the markup is not well-formed.
pub fn parse_bytes(bytes: &[u8]) -> Result<XmlNode> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    parse_str(std::str::from_utf8(bytes)?)
}

/// Parse markup text into a tree
///
/// Whitespace-only text between child elements is dropped; text of leaf
/// elements is kept as written.
///
/// # Errors
///
/// Returns [`KmlError::Xml`] for token-level errors and
/// [`KmlError::Malformed`] for unbalanced or empty documents.
pub fn parse_str(text: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(text);
    let mut scopes: Vec<Vec<NamespaceDecl>> = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let node = open_element(&e, &mut scopes)?;
                stack.push(node);
            }
            Event::Empty(e) => {
                let node = open_element(&e, &mut scopes)?;
                scopes.pop();
                attach(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| KmlError::Malformed("unexpected closing tag".to_string()))?;
                scopes.pop();
                attach(close_element(node), &mut stack, &mut root)?;
            }
            Event::Text(e) => {
                let content = e.unescape()?;
                match stack.last_mut() {
                    Some(node) => append_text(node, &content),
                    None if content.trim().is_empty() => {}
                    None => {
                        return Err(KmlError::Malformed(
                            "text outside of the root element".to_string(),
                        ))
                    }
                }
            }
            Event::CData(e) => {
                if let Some(node) = stack.last_mut() {
                    append_text(node, &String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(KmlError::Malformed(format!(
            "unclosed element <{}>",
            open.qualified_name()
        )));
    }
    root.ok_or_else(|| KmlError::Malformed("document has no root element".to_string()))
}

fn open_element(e: &BytesStart<'_>, scopes: &mut Vec<Vec<NamespaceDecl>>) -> Result<XmlNode> {
    let qname = std::str::from_utf8(e.name().as_ref())?.to_string();

    let mut declarations = Vec::new();
    let mut raw_attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| KmlError::Malformed(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        if key == "xmlns" {
            declarations.push(NamespaceDecl { prefix: None, uri: value });
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            declarations.push(NamespaceDecl::new(Some(prefix), value));
        } else {
            raw_attributes.push((key, value));
        }
    }
    scopes.push(declarations.clone());

    let (prefix, name) = split_qname(&qname);
    let namespace = lookup(scopes, prefix.as_deref());
    let attributes = raw_attributes
        .into_iter()
        .map(|(key, value)| {
            let (prefix, name) = split_qname(&key);
            let namespace = prefix.as_deref().and_then(|p| lookup(scopes, Some(p)));
            XmlAttribute {
                prefix,
                namespace,
                name,
                value,
            }
        })
        .collect();

    Ok(XmlNode {
        namespace,
        prefix,
        name,
        namespaces: declarations,
        attributes,
        children: Vec::new(),
        text: None,
    })
}

fn close_element(mut node: XmlNode) -> XmlNode {
    if !node.children.is_empty() && node.text.as_deref().is_some_and(|t| t.trim().is_empty()) {
        node.text = None;
    }
    node
}

fn attach(node: XmlNode, stack: &mut [XmlNode], root: &mut Option<XmlNode>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(KmlError::Malformed(format!(
            "second root element <{}>",
            node.qualified_name()
        )));
    }
    *root = Some(node);
    Ok(())
}

#[inline]
fn append_text(node: &mut XmlNode, content: &str) {
    node.text.get_or_insert_with(String::new).push_str(content);
}

fn split_qname(qname: &str) -> (Option<String>, String) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
        None => (None, qname.to_string()),
    }
}

/// Resolve a prefix against the open scopes, innermost first
fn lookup(scopes: &[Vec<NamespaceDecl>], prefix: Option<&str>) -> Option<String> {
    if prefix == Some("xml") {
        return Some(XML_NAMESPACE.to_string());
    }
    scopes
        .iter()
        .rev()
        .flat_map(|scope| scope.iter().rev())
        .find(|decl| decl.prefix.as_deref() == prefix)
        .filter(|decl| !decl.uri.is_empty())
        .map(|decl| decl.uri.clone())
}

// =============================================================================
// Formatting
// =============================================================================

/// Format a tree as markup text
///
/// `indent` is the indentation width; `None` writes everything on one line.
///
/// # Errors
///
/// Returns [`KmlError::Format`] if the writer fails.
pub fn to_string(node: &XmlNode, indent: Option<usize>, declaration: bool) -> Result<String> {
    let mut buffer = Vec::new();
    write_tree(node, &mut buffer, indent, declaration)?;
    String::from_utf8(buffer).map_err(|e| KmlError::Format(e.to_string()))
}

/// Format a tree as markup into a sink
///
/// # Errors
///
/// Returns [`KmlError::Format`] if the sink fails.
pub fn write_tree<W: Write>(
    node: &XmlNode,
    sink: W,
    indent: Option<usize>,
    declaration: bool,
) -> Result<()> {
    match indent {
        Some(width) => emit_document(&mut Writer::new_with_indent(sink, b' ', width), node, declaration),
        None => emit_document(&mut Writer::new(sink), node, declaration),
    }
}

fn emit_document<W: Write>(writer: &mut Writer<W>, node: &XmlNode, declaration: bool) -> Result<()> {
    if declaration {
        emit(writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    let mut scopes = Vec::new();
    emit_node(writer, node, &mut scopes)
}

fn emit_node<W: Write>(
    writer: &mut Writer<W>,
    node: &XmlNode,
    scopes: &mut Vec<Vec<NamespaceDecl>>,
) -> Result<()> {
    let mixed = !node.children.is_empty() && node.text.as_deref().is_some_and(|t| !t.is_empty());
    if mixed {
        emit_unindented(writer, node, scopes)
    } else {
        emit_element(writer, node, scopes)
    }
}

/// Write an element with both text and children on one line
///
/// Indentation inside mixed content would become part of its text.
fn emit_unindented<W: Write>(
    writer: &mut Writer<W>,
    node: &XmlNode,
    scopes: &mut Vec<Vec<NamespaceDecl>>,
) -> Result<()> {
    let mut buffer = Vec::new();
    emit_element(&mut Writer::new(&mut buffer), node, scopes)?;
    writer
        .get_mut()
        .write_all(&buffer)
        .map_err(|e| KmlError::Format(e.to_string()))
}

fn emit_element<W: Write>(
    writer: &mut Writer<W>,
    node: &XmlNode,
    scopes: &mut Vec<Vec<NamespaceDecl>>,
) -> Result<()> {
    let mut declarations = node.namespaces.clone();
    ensure_bound(
        &mut declarations,
        scopes,
        node.prefix.as_deref(),
        node.namespace.as_deref(),
    );
    for attr in &node.attributes {
        if let (Some(prefix), Some(namespace)) = (attr.prefix.as_deref(), attr.namespace.as_deref()) {
            if prefix != "xml" {
                ensure_bound(&mut declarations, scopes, Some(prefix), Some(namespace));
            }
        }
    }

    let qname = node.qualified_name();
    let mut start = BytesStart::new(qname.as_str());
    for decl in &declarations {
        let key = match &decl.prefix {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        start.push_attribute((key.as_str(), decl.uri.as_str()));
    }
    for attr in &node.attributes {
        let key = attr.qualified_name();
        start.push_attribute((key.as_str(), attr.value.as_str()));
    }
    scopes.push(declarations);

    let text = node.text.as_deref().filter(|t| !t.is_empty());
    if node.children.is_empty() && text.is_none() {
        emit(writer, Event::Empty(start))?;
    } else {
        emit(writer, Event::Start(start))?;
        if let Some(text) = text {
            emit(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &node.children {
            emit_node(writer, child, scopes)?;
        }
        emit(writer, Event::End(BytesEnd::new(qname.as_str())))?;
    }

    scopes.pop();
    Ok(())
}

/// Add a declaration for `prefix` unless it already resolves to `namespace`
fn ensure_bound(
    declarations: &mut Vec<NamespaceDecl>,
    scopes: &[Vec<NamespaceDecl>],
    prefix: Option<&str>,
    namespace: Option<&str>,
) {
    let bound = declarations
        .iter()
        .rev()
        .find(|decl| decl.prefix.as_deref() == prefix)
        .map(|decl| Some(decl.uri.clone()).filter(|uri| !uri.is_empty()))
        .unwrap_or_else(|| lookup(scopes, prefix));

    match (namespace, bound) {
        (Some(ns), Some(bound)) if bound == ns => {}
        (Some(ns), _) => declarations.push(NamespaceDecl::new(prefix, ns)),
        (None, Some(_)) if prefix.is_none() => {
            declarations.push(NamespaceDecl::new(None, String::new()));
        }
        (None, _) => {}
    }
}

#[inline]
fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| KmlError::Format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GX: &str = "http://www.google.com/kml/ext/2.2";

    #[test]
    fn test_parse_resolves_prefixes() {
        let xml = r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
            <gx:Tour id="t1"><name>Tour</name></gx:Tour>
        </kml>"#;
        let root = parse_str(xml).unwrap();
        assert_eq!(root.name, "kml");
        assert_eq!(root.namespaces.len(), 2);
        assert!(root.attributes.is_empty(), "xmlns must not become attributes");

        let tour = &root.children[0];
        assert!(tour.is(Some(GX), "Tour"));
        assert_eq!(tour.prefix.as_deref(), Some("gx"));
        assert_eq!(tour.attribute("id"), Some("t1"));
        assert_eq!(
            tour.children[0].namespace.as_deref(),
            Some("http://www.opengis.net/kml/2.2")
        );
        assert_eq!(tour.children[0].text_content(), "Tour");
        assert_eq!(root.text, None, "indentation between children is dropped");
    }

    #[test]
    fn test_parse_cdata_and_entities() {
        let root = parse_str("<d>a &amp; b<![CDATA[<b>bold</b>]]></d>").unwrap();
        assert_eq!(root.text_content(), "a & b<b>bold</b>");
    }

    #[test]
    fn test_parse_rejects_unclosed() {
        let err = parse_str("<kml><Placemark></kml>");
        assert!(err.is_err());
        let err = parse_str("<kml><Placemark>");
        assert!(matches!(err, Err(KmlError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_str("   "), Err(KmlError::Malformed(_))));
    }

    #[test]
    fn test_parse_bytes_strips_bom() {
        let root = parse_bytes(b"\xEF\xBB\xBF<kml/>").unwrap();
        assert_eq!(root.name, "kml");
    }

    #[test]
    fn test_format_declares_missing_namespaces() {
        let node = XmlNode::new("Wait")
            .in_namespace(GX, Some("gx"))
            .with_child(XmlNode::new("duration").in_namespace(GX, Some("gx")).with_text("2.5"));
        let text = to_string(&node, None, false).unwrap();
        assert_eq!(
            text,
            r#"<gx:Wait xmlns:gx="http://www.google.com/kml/ext/2.2"><gx:duration>2.5</gx:duration></gx:Wait>"#
        );
    }

    #[test]
    fn test_format_escapes_text_and_attributes() {
        let node = XmlNode::new("name")
            .with_attribute("title", "a \"b\"")
            .with_text("x < y & z");
        let text = to_string(&node, None, false).unwrap();
        let back = parse_str(&text).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_format_then_parse_preserves_tree() {
        let xml = r#"<root xmlns:ext="urn:example:ext"><ext:thing ext:flag="yes" plain="1"><inner>text</inner></ext:thing><empty/></root>"#;
        let tree = parse_str(xml).unwrap();
        let text = to_string(&tree, Some(2), true).unwrap();
        assert!(text.starts_with("<?xml"));
        assert_eq!(parse_str(&text).unwrap(), tree);
    }

    #[test]
    fn test_indented_mixed_content_is_stable() {
        let tree = parse_str(
            r#"<root xmlns:x="urn:example:x"><a>1</a><x:note>hello <x:b>world</x:b></x:note><c/></root>"#,
        )
        .unwrap();
        let text = to_string(&tree, Some(2), false).unwrap();
        assert!(text.contains("<x:note>hello <x:b>world</x:b></x:note>"));

        let back = parse_str(&text).unwrap();
        assert_eq!(back, tree);
        let again = parse_str(&to_string(&back, Some(4), true).unwrap()).unwrap();
        assert_eq!(again, tree);
    }
}
