use platen_types::ElementId;

/// A child of an [`SvgElement`]: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

/// An owned SVG element: tag name, ordered attributes and children.
///
/// Attribute order is preserved from the parsed source so serialized output
/// stays stable across renders of the same template.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<SvgNode> {
        &mut self.children
    }

    pub fn push_child(&mut self, child: SvgNode) {
        self.children.push(child);
    }

    /// Returns the value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    /// Parses an attribute as a float (e.g. `x`, `y`, `font-size`).
    ///
    /// A trailing unit suffix such as `mm` or `px` is ignored.
    pub fn attr_f32(&self, name: &str) -> Option<f32> {
        let raw = self.attr(name)?;
        let numeric: &str = raw
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
        numeric.parse().ok()
    }

    /// The element id (`id` attribute), if any.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Concatenated text content of this element's direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                SvgNode::Text(t) => Some(t.as_str()),
                SvgNode::Element(_) => None,
            })
            .collect()
    }

    /// Replaces all children with a single text run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.children.push(SvgNode::Text(text.into()));
    }

    /// Depth-first search for a descendant (or self) with the given id.
    pub fn find_by_id(&self, id: &ElementId) -> Option<&SvgElement> {
        if self.id() == Some(id.as_str()) {
            return Some(self);
        }
        self.children.iter().find_map(|c| match c {
            SvgNode::Element(e) => e.find_by_id(id),
            SvgNode::Text(_) => None,
        })
    }

    /// Mutable variant of [`find_by_id`](Self::find_by_id).
    pub fn find_by_id_mut(&mut self, id: &ElementId) -> Option<&mut SvgElement> {
        if self.id() == Some(id.as_str()) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| match c {
            SvgNode::Element(e) => e.find_by_id_mut(id),
            SvgNode::Text(_) => None,
        })
    }

    /// Removes an attribute if present.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    /// Replaces the element with the given id by a sequence of elements,
    /// spliced in at its position. Returns the replaced original, or `None`
    /// if no such element exists.
    pub fn replace_by_id(
        &mut self,
        id: &ElementId,
        replacements: Vec<SvgElement>,
    ) -> Option<SvgElement> {
        let pos = self.children.iter().position(|c| {
            matches!(c, SvgNode::Element(e) if e.id() == Some(id.as_str()))
        });
        if let Some(pos) = pos {
            let removed = match self.children.remove(pos) {
                SvgNode::Element(e) => e,
                SvgNode::Text(_) => unreachable!(),
            };
            for (offset, replacement) in replacements.into_iter().enumerate() {
                self.children
                    .insert(pos + offset, SvgNode::Element(replacement));
            }
            return Some(removed);
        }
        self.children.iter_mut().find_map(|c| match c {
            SvgNode::Element(e) => e.replace_by_id(id, replacements.clone()),
            SvgNode::Text(_) => None,
        })
    }

    /// Detaches and returns the subtree rooted at the element with the given
    /// id, searching recursively. Returns `None` if no such element exists.
    pub fn remove_by_id(&mut self, id: &ElementId) -> Option<SvgElement> {
        let pos = self.children.iter().position(|c| {
            matches!(c, SvgNode::Element(e) if e.id() == Some(id.as_str()))
        });
        if let Some(pos) = pos {
            match self.children.remove(pos) {
                SvgNode::Element(e) => return Some(e),
                SvgNode::Text(_) => unreachable!(),
            }
        }
        self.children.iter_mut().find_map(|c| match c {
            SvgNode::Element(e) => e.remove_by_id(id),
            SvgNode::Text(_) => None,
        })
    }

    /// Translates this element vertically by composing a `translate` with
    /// any transform already present. The new translation applies in the
    /// parent coordinate system, so it is prepended.
    pub fn translate_y(&mut self, dy: f32) {
        let translate = format!("translate(0 {dy})");
        let combined = match self.attr("transform") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{translate} {existing}")
            }
            _ => translate,
        };
        self.set_attr("transform", combined);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(id: &str, text: &str) -> SvgElement {
        let mut e = SvgElement::new("text");
        e.set_attr("id", id);
        e.set_text(text);
        e
    }

    #[test]
    fn test_find_by_id_nested() {
        let mut root = SvgElement::new("g");
        let mut inner = SvgElement::new("g");
        inner.push_child(SvgNode::Element(labeled("target", "hello")));
        root.push_child(SvgNode::Element(inner));

        let found = root.find_by_id(&ElementId::new("target")).unwrap();
        assert_eq!(found.text_content(), "hello");
        assert!(root.find_by_id(&ElementId::new("missing")).is_none());
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut e = SvgElement::new("text");
        e.set_attr("font-size", "3.5");
        e.set_attr("x", "10");
        e.set_attr("font-size", "2.8");

        assert_eq!(e.attr("font-size"), Some("2.8"));
        // Order is stable: font-size stays first.
        assert_eq!(e.attrs()[0].0, "font-size");
    }

    #[test]
    fn test_attr_f32_strips_units() {
        let mut e = SvgElement::new("rect");
        e.set_attr("width", "85mm");
        e.set_attr("y", " 12.5 ");
        assert_eq!(e.attr_f32("width"), Some(85.0));
        assert_eq!(e.attr_f32("y"), Some(12.5));
    }

    #[test]
    fn test_remove_by_id_detaches_subtree() {
        let mut root = SvgElement::new("g");
        root.push_child(SvgNode::Element(labeled("keep", "a")));
        root.push_child(SvgNode::Element(labeled("row-group", "b")));

        let removed = root.remove_by_id(&ElementId::new("row-group")).unwrap();
        assert_eq!(removed.text_content(), "b");
        assert!(root.find_by_id(&ElementId::new("row-group")).is_none());
        assert!(root.find_by_id(&ElementId::new("keep")).is_some());
    }

    #[test]
    fn test_replace_by_id_splices_in_place() {
        let mut root = SvgElement::new("g");
        root.push_child(SvgNode::Element(labeled("before", "x")));
        root.push_child(SvgNode::Element(labeled("row-group", "template")));
        root.push_child(SvgNode::Element(labeled("after", "y")));

        let rows = vec![labeled("", "r0"), labeled("", "r1")];
        let original = root
            .replace_by_id(&ElementId::new("row-group"), rows)
            .unwrap();
        assert_eq!(original.text_content(), "template");

        let texts: Vec<String> = root
            .children()
            .iter()
            .filter_map(|c| match c {
                SvgNode::Element(e) => Some(e.text_content()),
                SvgNode::Text(_) => None,
            })
            .collect();
        assert_eq!(texts, vec!["x", "r0", "r1", "y"]);
    }

    #[test]
    fn test_translate_composes_with_existing_transform() {
        let mut e = SvgElement::new("g");
        e.translate_y(8.5);
        assert_eq!(e.attr("transform"), Some("translate(0 8.5)"));

        let mut scaled = SvgElement::new("g");
        scaled.set_attr("transform", "scale(2)");
        scaled.translate_y(17.0);
        assert_eq!(scaled.attr("transform"), Some("translate(0 17) scale(2)"));
    }
}
