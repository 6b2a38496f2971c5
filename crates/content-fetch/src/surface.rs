//! Display surfaces that decoded content is mounted onto.

use crate::media::ObjectUrl;

/// A single mounted element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Image {
        src: ObjectUrl,
        mime: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    Paragraph {
        text: String,
    },
}

impl Element {
    pub fn tag(&self) -> &'static str {
        match self {
            Element::Image { .. } => "img",
            Element::Paragraph { .. } => "p",
        }
    }
}

/// A rendering target that elements are appended to, in order.
pub trait DisplaySurface {
    fn append(&mut self, element: Element);

    /// Number of elements mounted so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Records appended elements in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    elements: Vec<Element>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl DisplaySurface for MemorySurface {
    fn append(&mut self, element: Element) {
        self.elements.push(element);
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Collects elements into the body of a standalone HTML5 document.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    body: Vec<Element>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.body
    }

    /// Render the full document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_text(&self.title)));
        out.push_str("</head>\n<body>\n");
        for element in &self.body {
            out.push_str(&render_element(element));
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl DisplaySurface for HtmlPage {
    fn append(&mut self, element: Element) {
        self.body.push(element);
    }

    fn len(&self) -> usize {
        self.body.len()
    }
}

fn render_element(element: &Element) -> String {
    match element {
        Element::Image {
            src, width, height, ..
        } => {
            let mut tag = format!("<img src=\"{}\"", escape_attr(src.as_str()));
            if let Some(w) = width {
                tag.push_str(&format!(" width=\"{w}\""));
            }
            if let Some(h) = height {
                tag.push_str(&format!(" height=\"{h}\""));
            }
            tag.push('>');
            tag
        }
        Element::Paragraph { text } => format!("<p>{}</p>", escape_text(text)),
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
