//! The structured tree a view renders into.
//!
//! Views never paint directly. They build a [`Node`] tree which the rendering layer
//! (see [`crate::markup`]) turns into its final form.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    /// attributes in the order they were set
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// `<i class="fa fa-{name} icon" aria-hidden="true">`
pub fn icon(name: &str) -> Element {
    Element::new("i")
        .class(format!("fa fa-{} icon", name))
        .attr("aria-hidden", "true")
}

/// A labelled metadata entry: icon, `title` label, then the value text.
pub fn meta_info(icon_name: &str, title: &str, value: impl Into<String>) -> Element {
    Element::new("span")
        .class("meta-info")
        .child(icon(icon_name))
        .child(Element::new("span").class("title").text(title))
        .text(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_queries() {
        let node: Node = Element::new("span")
            .class("meta-info title")
            .child(Element::new("i").class("icon"))
            .text("hello ")
            .child(Element::new("b").text("world"))
            .into();

        let span = node.as_element().unwrap();
        assert!(span.has_class("title"));
        assert!(!span.has_class("meta"));
        assert_eq!(span.elements().count(), 2);
        assert_eq!(node.text_content(), "hello world");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let node: Node = Element::new("p").attr("id", "x").text("hi").into();
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"kind":"element","tag":"p","attrs":[["id","x"]],"children":[{"kind":"text","text":"hi"}]}"#
        );
    }
}
