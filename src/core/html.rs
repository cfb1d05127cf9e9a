// src/core/html.rs
// DOM helpers over `scraper`. Text extraction approximates what a browser's
// `innerText` returns for the markup the portal serves: line breaks for <br>
// and block elements, nothing from script/style.

use scraper::{ElementRef, Node, Selector};

const BREAKING: &[&str] = &[
    "br", "p", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6",
];
const HIDDEN: &[&str] = &["script", "style", "noscript", "template"];

/// Compile a selector literal. Only ever called with constants.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector literal {css:?}: {e:?}"))
}

/// Rendered text of `el`, untrimmed and uncollapsed.
pub fn inner_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    for node in el.descendants() {
        match node.value() {
            Node::Text(text) => {
                let hidden = node
                    .ancestors()
                    .filter_map(|a| a.value().as_element())
                    .any(|e| HIDDEN.contains(&e.name()));
                if !hidden {
                    out.push_str(text);
                }
            }
            Node::Element(e) if BREAKING.contains(&e.name()) => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Attribute lookup, case-insensitive on the name as HTML is.
pub fn attr<'a>(el: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value()
        .attrs()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        doc.select(&selector(css)).next().unwrap()
    }

    #[test]
    fn br_becomes_newline() {
        let doc = Html::parse_fragment("<table><tr><td>Intro<br>to <b>CS</b></td></tr></table>");
        assert_eq!(inner_text(first(&doc, "td")), "Intro\nto CS");
    }

    #[test]
    fn script_text_is_skipped() {
        let doc = Html::parse_fragment("<div>a<script>var x = 1;</script>b</div>");
        assert_eq!(inner_text(first(&doc, "div")).trim(), "ab");
    }

    #[test]
    fn entities_are_decoded() {
        let doc = Html::parse_fragment("<span>R&amp;D&nbsp;Lab</span>");
        assert_eq!(inner_text(first(&doc, "span")), "R&D\u{a0}Lab");
    }

    #[test]
    fn attr_is_case_insensitive() {
        let doc = Html::parse_fragment(r#"<input NAME="username" value="x">"#);
        let input = first(&doc, "input");
        assert_eq!(attr(&input, "name"), Some("username"));
        assert_eq!(attr(&input, "id"), None);
    }
}
