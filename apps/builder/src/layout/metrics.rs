//! Static font metrics for the template typefaces.
//!
//! Character widths are in em units (relative to font size) and cover ASCII
//! 0x20..=0x7E. This is an intentional approximation: a real rasterizer uses
//! exact glyph metrics, but static tables are enough to decide where body
//! text wraps, and small residual error only moves a word across a line
//! boundary, never breaks the document structure.
//!
//! One base width table (a humanist sans-serif) is scaled per family rather
//! than keeping a table per font; the proportional families track the base
//! within a few percent, and the mono family has a single fixed advance.

use serde::{Deserialize, Serialize};

/// The typefaces used across the ten template variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Clean humanist sans-serif — professional/startup layouts.
    Inter,
    /// Old-style serif — academic and executive layouts.
    EbGaramond,
    /// Geometric humanist sans-serif — modern/consultant layouts.
    Lato,
    /// Condensed display sans-serif — creative layout headers.
    Oswald,
    /// Monospace — the terminal-styled tech layout.
    JetBrainsMono,
}

impl FontFamily {
    /// Width multiplier applied to the base table.
    fn scale(&self) -> f32 {
        match self {
            FontFamily::Inter => 1.0,
            FontFamily::EbGaramond => 0.85,
            FontFamily::Lato => 1.05,
            FontFamily::Oswald => 0.68,
            // Unused for the mono family; every glyph is FIXED_MONO_ADVANCE.
            FontFamily::JetBrainsMono => 1.0,
        }
    }

    fn is_monospace(&self) -> bool {
        matches!(self, FontFamily::JetBrainsMono)
    }
}

const FIXED_MONO_ADVANCE: f32 = 0.60;

/// Base character-width table (Inter at 1em). `BASE_WIDTHS[i]` is the width
/// of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
#[rustfmt::skip]
static BASE_WIDTHS: [f32; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
    // 0     1     2     3     4     5     6     7     8     9
    0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
    // :     ;     <     =     >     ?     @
    0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
    0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
    0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
    // [     \     ]     ^     _     `
    0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
    // {     |     }     ~
    0.33, 0.26, 0.33, 0.59,
];

const BASE_AVERAGE_WIDTH: f32 = 0.52;
const BASE_SPACE_WIDTH: f32 = 0.25;

/// Measurement handle for one font family.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pub family: FontFamily,
}

impl FontMetrics {
    pub fn for_family(family: FontFamily) -> Self {
        Self { family }
    }

    /// Width of a single character in em units. Non-ASCII characters fall
    /// back to the scaled average width.
    pub fn char_width(&self, c: char) -> f32 {
        if self.family.is_monospace() {
            return FIXED_MONO_ADVANCE;
        }
        let scale = self.family.scale();
        let code = c as usize;
        if (32..=126).contains(&code) {
            BASE_WIDTHS[code - 32] * scale
        } else {
            BASE_AVERAGE_WIDTH * scale
        }
    }

    pub fn space_width(&self) -> f32 {
        if self.family.is_monospace() {
            FIXED_MONO_ADVANCE
        } else {
            BASE_SPACE_WIDTH * self.family.scale()
        }
    }

    /// Rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}

/// Layout parameters for one page.
///
/// `text_width_em` is the usable text width in em units at the given font
/// size. A4 portrait, 18mm margins, 11pt: 174mm = 6.85in × (72.27pt/in ÷
/// 11pt) ≈ 45.0em.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub font: FontFamily,
    pub font_size_pt: u8,
    pub text_width_em: f32,
    pub margin_mm: f32,
}

/// Default page config: A4 portrait, 11pt body text, 18mm margins.
pub fn default_page_config(font: FontFamily) -> PageConfig {
    PageConfig {
        font,
        font_size_pt: 11,
        text_width_em: 45.0,
        margin_mm: 18.0,
    }
}

/// Greedy word-wrap. Returns the wrapped lines (whitespace-normalized);
/// an empty or all-whitespace input returns no lines.
///
/// A single word wider than `max_width_em` gets a line of its own rather
/// than being split mid-word.
pub fn wrap_text(text: &str, metrics: FontMetrics, max_width_em: f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_w = metrics.measure_str(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
            continue;
        }

        let space_w = metrics.space_width();
        if current_width + space_w + word_w > max_width_em {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    lines.push(current);
    lines
}
