use crate::element::{SvgElement, SvgNode};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Writes an element tree to SVG markup with escaped text and attributes.
pub fn write_document(root: &SvgElement) -> String {
    let mut out = String::new();
    write_element(&mut out, root);
    out
}

fn write_element(out: &mut String, element: &SvgElement) {
    let _ = write!(out, "<{}", element.name());
    for (name, value) in element.attrs() {
        let _ = write!(out, " {}=\"{}\"", name, escape(value.as_str()));
    }

    if element.children().is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in element.children() {
        match child {
            SvgNode::Element(e) => write_element(out, e),
            SvgNode::Text(t) => out.push_str(&escape(t.as_str())),
        }
    }
    let _ = write!(out, "</{}>", element.name());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let mut e = SvgElement::new("rect");
        e.set_attr("width", "10");
        assert_eq!(write_document(&e), "<rect width=\"10\"/>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut e = SvgElement::new("text");
        e.set_attr("data-label", "a<b>&c");
        let out = write_document(&e);
        assert!(out.contains("data-label=\"a&lt;b&gt;&amp;c\""));
    }

    #[test]
    fn test_nested_round_trip() {
        let mut row = SvgElement::new("g");
        let mut cell = SvgElement::new("text");
        cell.set_text("42");
        row.push_child(SvgNode::Element(cell));

        assert_eq!(write_document(&row), "<g><text>42</text></g>");
    }
}
