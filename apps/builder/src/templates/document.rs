//! The renderer's output: a layout-ready document tree.
//!
//! The tree is pure data. Long-form text arrives pre-wrapped into lines
//! (via `layout::wrap_text`), so a rasterizer only positions and paints —
//! it never re-measures body text. The whole tree is serializable so hosts
//! can ship it across a boundary (worker, IPC) unchanged.

use serde::{Deserialize, Serialize};

use crate::layout::FontFamily;
use crate::templates::TemplateId;

/// 8-bit sRGB accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How a variant draws its name/contact header. Each template variant keeps
/// a distinct header treatment even where variants share a body layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderStyle {
    /// Name over a heavy accent rule (professional).
    RuleBelow,
    /// Name inside a dark left sidebar (modern).
    Sidebar,
    /// Centered name on an accent banner (creative).
    Banner,
    /// Centered lightweight name with a hairline rule (minimalist).
    CenteredRule,
    /// Name inside an accent-bordered box (tech).
    Boxed,
    /// Thin accent rule above an oversized light name (executive).
    RuleAbove,
    /// Centered serif name, no rule (academic).
    Centered,
    /// Name on a filled accent block (startup).
    FilledBanner,
    /// Name against a thick accent left border (consultant).
    LeftBar,
    /// Name beside a leading accent marker (international).
    Inline,
}

/// Visual treatment shared by every node in one rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub typeface: FontFamily,
    pub accent: Color,
    pub header: HeaderStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub level: String,
    pub category: String,
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Section or name heading. Level 1 is the person's name.
    Heading { level: u8, text: String },
    /// Body text, pre-wrapped into lines.
    Paragraph { lines: Vec<String> },
    /// Contact fields and present social links, in display order.
    ContactRow { items: Vec<String> },
    /// Title line of an experience/education style entry.
    EntryHeader {
        title: String,
        subtitle: String,
        date_range: String,
    },
    /// Bulleted list; each item is pre-wrapped into lines.
    Bullets { items: Vec<Vec<String>> },
    /// Skill entries in insertion order.
    SkillList { items: Vec<SkillItem> },
    /// Short inline tags (interests, technologies).
    TagRow { tags: Vec<String> },
    /// Two-column body (modern layout).
    Columns { left: Vec<Node>, right: Vec<Node> },
    /// Horizontal rule in the accent color.
    Rule,
}

/// A rendered resume document for one template variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub template: TemplateId,
    pub theme: Theme,
    pub nodes: Vec<Node>,
}

impl Document {
    /// Depth-first iterator over all nodes, descending into columns.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        fn push<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
            for node in nodes {
                out.push(node);
                if let Node::Columns { left, right } = node {
                    push(left, out);
                    push(right, out);
                }
            }
        }
        let mut flat = Vec::new();
        push(&self.nodes, &mut flat);
        flat.into_iter()
    }

    /// All heading texts in document order (section titles and the name).
    pub fn headings(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|n| match n {
                Node::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
