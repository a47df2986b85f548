// src/document.rs
//
// Owned, typed view of a parsed HTML page. `scraper` (html5ever) builds the
// tree; it is then copied into plain `Node`/`Element` values so lookups are
// ordinary traversals over known types.

use ego_tree::NodeRef;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-case local name, e.g. `table`, `tr`, `th`.
    pub name: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

/// The whole page: top-level nodes in document order (normally one `<html>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    /// Parse HTML text. Never fails; html5ever recovers from any markup and
    /// the recovery notes are only logged.
    #[instrument(level = "debug", skip(html), fields(len = html.len()))]
    pub fn parse(html: &str) -> Self {
        let parsed = scraper::Html::parse_document(html);
        if !parsed.errors.is_empty() {
            debug!(count = parsed.errors.len(), "html parse recovered from errors");
        }
        let nodes = parsed.tree.root().children().filter_map(convert).collect();
        Self { nodes }
    }

    /// Every element in document (pre-)order.
    pub fn elements(&self) -> Elements<'_> {
        Elements::over(&self.nodes)
    }

    /// First element named `name` anywhere in the page.
    pub fn find_first(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Descendant elements (not `self`) in document order.
    pub fn descendants(&self) -> Elements<'_> {
        Elements::over(&self.children)
    }

    pub fn find_first(&self, name: &str) -> Option<&Element> {
        self.descendants().find(|el| el.name == name)
    }

    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |el| el.name == name)
    }

    /// Each descendant text node trimmed, empty ones dropped, the rest
    /// joined with no separator: `<td> 70% <b> dark </b></td>` gives `70%dark`.
    pub fn stripped_text(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(t) => out.push_str(t.trim_matches(is_space)),
                Node::Element(el) => stack.extend(el.children.iter().rev()),
            }
        }
        out
    }
}

/// Unicode `White_Space` plus the information separators U+001C..=U+001F,
/// which `char::is_whitespace` leaves out.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Pre-order walk yielding elements only.
pub struct Elements<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Elements<'a> {
    fn over(nodes: &'a [Node]) -> Self {
        Self {
            stack: nodes.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Node::Element(el) = node {
                self.stack.extend(el.children.iter().rev());
                return Some(el);
            }
        }
        None
    }
}

/// Elements and text survive; comments, doctypes and processing
/// instructions are dropped.
fn convert(node: NodeRef<'_, scraper::Node>) -> Option<Node> {
    match node.value() {
        scraper::Node::Element(el) => Some(Node::Element(Element {
            name: el.name().to_string(),
            attrs: el
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: node.children().filter_map(convert).collect(),
        })),
        scraper::Node::Text(text) => Some(Node::Text(text.text.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_typed_tree_with_implied_elements() {
        let doc = Document::parse("<p id=intro>hi</p>");
        // html5ever supplies html/head/body
        let names: Vec<&str> = doc.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["html", "head", "body", "p"]);

        let p = doc.find_first("p").unwrap();
        assert_eq!(p.attr("id"), Some("intro"));
        assert_eq!(p.children, vec![Node::Text("hi".into())]);
    }

    #[test]
    fn tag_names_are_lower_cased() {
        let doc = Document::parse("<TABLE><TR><TH>X</TH></TR></TABLE>");
        assert!(doc.find_first("table").is_some());
        assert!(doc.find_first("th").is_some());
    }

    #[test]
    fn comments_are_dropped() {
        let doc = Document::parse("<div><!-- note -->text</div>");
        let div = doc.find_first("div").unwrap();
        assert_eq!(div.children, vec![Node::Text("text".into())]);
    }

    #[test]
    fn find_all_is_in_document_order_and_recursive() {
        let doc = Document::parse(
            "<div><span>a</span><p><span>b</span></p><span>c</span></div>",
        );
        let div = doc.find_first("div").unwrap();
        let texts: Vec<String> = div.find_all("span").map(Element::stripped_text).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn descendants_exclude_self() {
        let doc = Document::parse("<div><div id=inner></div></div>");
        let outer = doc.find_first("div").unwrap();
        let inner = outer.find_first("div").unwrap();
        assert_eq!(inner.attr("id"), Some("inner"));
    }

    #[test]
    fn stripped_text_trims_each_piece_and_joins() {
        let doc = Document::parse("<p>  70% <b> dark </b>\n chocolate \n</p>");
        let p = doc.find_first("p").unwrap();
        assert_eq!(p.stripped_text(), "70%darkchocolate");
    }

    #[test]
    fn information_separators_are_trimmed() {
        let doc = Document::parse("<p>\u{1c}\u{1f} Ghana\u{1d}\u{a0}</p>");
        assert_eq!(doc.find_first("p").unwrap().stripped_text(), "Ghana");
    }

    #[test]
    fn whitespace_only_element_has_empty_text() {
        let doc = Document::parse("<p>  \n\t </p>");
        assert_eq!(doc.find_first("p").unwrap().stripped_text(), "");
    }
}
