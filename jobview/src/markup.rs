use crate::view::{Element, Node};

/// Paint a tree as HTML. No whitespace is added between elements.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => {
            html_escape::encode_text_to_string(text, out);
        }
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        html_escape::encode_double_quoted_attribute_to_string(value, out);
        out.push('"');
    }
    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    // always close explicitly, `<i/>` is not valid html
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}
