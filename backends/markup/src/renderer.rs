use core::fmt;

use crate::Node;

/// Rendered markup, one entry per output line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    lines: Vec<RenderLine>,
}

impl RenderFrame {
    fn push_line(&mut self, indent: usize, content: String) {
        self.lines.push(RenderLine { indent, content });
    }

    /// The lines of this frame.
    #[must_use]
    pub fn lines(&self) -> &[RenderLine] {
        &self.lines
    }

    /// Whether nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for RenderFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A single line of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    indent: usize,
    content: String,
}

impl RenderLine {
    /// Nesting depth.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// The line without indentation.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}{}", "", self.content, width = self.indent * 2)
    }
}

/// Walks markup nodes and produces indented lines.
///
/// Elements without children render on one line. Fragments and empty nodes add no line
/// of their own.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    /// Creates a new renderer instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders `node` into a [`RenderFrame`].
    #[must_use]
    pub fn render(&self, node: &Node) -> RenderFrame {
        let mut frame = RenderFrame::default();
        Self::render_node(&mut frame, 0, node);
        frame
    }

    fn render_node(frame: &mut RenderFrame, indent: usize, node: &Node) {
        match node {
            Node::Empty => {}
            Node::Text(text) => frame.push_line(indent, escape(text)),
            Node::Comment(text) => frame.push_line(indent, format!("<!-- {} -->", escape(text))),
            Node::Fragment(children) => {
                for child in children {
                    Self::render_node(frame, indent, child);
                }
            }
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                let mut open = format!("<{tag}");
                for (name, value) in attrs {
                    open.push_str(&format!(" {name}=\"{}\"", escape(value)));
                }
                if children.iter().all(Node::is_empty) {
                    open.push_str(" />");
                    frame.push_line(indent, open);
                    return;
                }
                open.push('>');
                frame.push_line(indent, open);
                for child in children {
                    Self::render_node(frame, indent + 1, child);
                }
                frame.push_line(indent, format!("</{tag}>"));
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
