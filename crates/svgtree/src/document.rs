use crate::element::{SvgElement, SvgNode};
use crate::error::SvgTreeError;
use crate::serialize;
use platen_types::ElementId;
use roxmltree::Node;

/// A parsed SVG template document.
///
/// Parsed once per archetype and treated as a read-only blueprint; every
/// rendered page works on a [`clone`](Clone::clone) of it. The clone owns
/// its whole tree, so binding one page can never affect another.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    root: SvgElement,
}

impl SvgDocument {
    /// Parses an SVG document from its textual form.
    ///
    /// Comments and processing instructions are dropped; the default
    /// namespace declaration on the root element is preserved so that the
    /// serialized output stays a valid standalone SVG.
    pub fn parse(text: &str) -> Result<Self, SvgTreeError> {
        let doc = roxmltree::Document::parse(text)?;
        let root = convert(doc.root_element());
        Ok(Self { root })
    }

    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut SvgElement {
        &mut self.root
    }

    pub fn find_by_id(&self, id: &ElementId) -> Option<&SvgElement> {
        self.root.find_by_id(id)
    }

    pub fn find_by_id_mut(&mut self, id: &ElementId) -> Option<&mut SvgElement> {
        self.root.find_by_id_mut(id)
    }

    pub fn contains_id(&self, id: &ElementId) -> bool {
        self.root.find_by_id(id).is_some()
    }

    /// Serializes the document back to SVG markup.
    pub fn serialize(&self) -> String {
        serialize::write_document(&self.root)
    }
}

fn convert(node: Node<'_, '_>) -> SvgElement {
    let mut element = SvgElement::new(node.tag_name().name());

    // roxmltree strips namespace declarations from the attribute list;
    // re-emit the default one so output documents remain self-contained.
    if node.parent().is_some_and(|p| p.is_root())
        && let Some(ns) = node.tag_name().namespace()
    {
        element.set_attr("xmlns", ns);
    }

    for attr in node.attributes() {
        element.set_attr(attr.name(), attr.value());
    }

    for child in node.children() {
        if child.is_element() {
            element.push_child(SvgNode::Element(convert(child)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.push_child(SvgNode::Text(text.to_string()));
            }
        }
    }
    element
}
