//! Virtual DOM → HTML serialization.
//!
//! Events cannot be expressed in static markup, so they are written as
//! `data-action` / `data-on-error` attributes for a host script to bind.

use crate::actions::Event;
use crate::vdom::VNode;

/// Options for HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
        }
    }
}

struct Context<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.buffer.push('\n');
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a node (and its subtree) to HTML
pub fn to_html(node: &VNode, options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    write_node(node, &mut ctx);
    ctx.get_output()
}

/// Serialize nodes as a complete HTML document
pub fn to_html_document(title: &str, nodes: &[VNode], options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    for node in nodes {
        write_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context<'_>) {
    match node {
        VNode::Element {
            tag,
            attributes,
            classes,
            children,
            key: _,
            on_click,
            on_error,
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            if !classes.is_empty() {
                write_attribute("class", &classes.join(" "), ctx);
            }
            for (name, value) in attributes {
                write_attribute(name, value, ctx);
            }
            if let Some(event) = on_click {
                write_event("data-action", event, ctx);
            }
            if let Some(event) = on_error {
                write_event("data-on-error", event, ctx);
            }

            if children.is_empty() && is_self_closing(tag) {
                ctx.add(" />");
                ctx.newline();
                return;
            }

            ctx.add(">");

            // Text-only children stay inline so whitespace is preserved verbatim
            let block_children = has_element_children(children);
            if block_children {
                ctx.newline();
                ctx.indent();
                for child in children {
                    write_node(child, ctx);
                }
                ctx.dedent();
                if ctx.options.pretty {
                    ctx.add_indent();
                }
            } else {
                for child in children {
                    write_inline(child, ctx);
                }
            }

            ctx.add(&format!("</{}>", tag));
            ctx.newline();
        }

        VNode::Text { content } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&escape_html(content));
            ctx.newline();
        }

        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", escape_comment(content)));
        }
    }
}

fn write_inline(node: &VNode, ctx: &mut Context<'_>) {
    match node {
        VNode::Text { content } => ctx.add(&escape_html(content)),
        VNode::Comment { content } => ctx.add(&format!("<!-- {} -->", escape_comment(content))),
        VNode::Element { .. } => write_node(node, ctx),
    }
}

fn write_attribute(name: &str, value: &str, ctx: &mut Context<'_>) {
    ctx.add(" ");
    ctx.add(name);
    ctx.add("=\"");
    ctx.add(&escape_html(value));
    ctx.add("\"");
}

fn write_event(attribute: &str, event: &Event, ctx: &mut Context<'_>) {
    write_attribute(attribute, event.name(), ctx);
    if let Event::OpenUrl { url } = event {
        write_attribute("data-target-url", url, ctx);
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn escape_comment(text: &str) -> String {
    text.replace("--", "- -")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| matches!(child, VNode::Element { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_children_stay_inline() {
        let node = VNode::element("div")
            .with_class("note")
            .with_child(VNode::text("line one\n  line two"));

        let html = to_html(&node, &HtmlOptions::default());
        assert_eq!(html, "<div class=\"note\">line one\n  line two</div>\n");
    }

    #[test]
    fn test_nested_elements_are_indented() {
        let node = VNode::element("ul").with_child(VNode::element("li").with_child(VNode::text("a")));

        let html = to_html(&node, &HtmlOptions::default());
        assert_eq!(html, "<ul>\n  <li>a</li>\n</ul>\n");
    }

    #[test]
    fn test_compact_output() {
        let node = VNode::element("p")
            .with_child(VNode::element("img").with_attr("src", "a.png"))
            .with_child(VNode::text("caption"));

        let html = to_html(&node, &HtmlOptions::compact());
        assert_eq!(html, "<p><img src=\"a.png\" />caption</p>");
    }

    #[test]
    fn test_attributes_and_events_are_escaped() {
        let node = VNode::element("a")
            .with_attr("title", "Tom & \"Jerry\"")
            .on_click(Some(Event::open("https://x.test/?a=1&b=2")));

        let html = to_html(&node, &HtmlOptions::compact());
        assert!(html.contains("title=\"Tom &amp; &quot;Jerry&quot;\""));
        assert!(html.contains("data-action=\"open-url\""));
        assert!(html.contains("data-target-url=\"https://x.test/?a=1&amp;b=2\""));
    }

    #[test]
    fn test_document_wrapper() {
        let html = to_html_document("My <Page>", &[VNode::element("main")], &HtmlOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>My &lt;Page&gt;</title>"));
        assert!(html.contains("    <main></main>\n"));
    }
}
