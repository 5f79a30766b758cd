//! Headline text layout: canvas constants and greedy word wrap.
//!
//! The wrap is a pure function over (text, font metrics, max width) so it can
//! be tested without any image or network I/O. Font measurement sits behind
//! the [`MeasureText`] trait; production code measures real glyph advances,
//! tests use a fixed-advance fake.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};

/// Side length of the square card canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1080;
/// Left/right/bottom margin of the text block, in pixels.
pub const MARGIN: u32 = 40;
/// Vertical advance per wrapped line, in pixels.
pub const LINE_HEIGHT: u32 = 50;
/// Headline font size, in pixels.
pub const FONT_SIZE: f32 = 42.0;
/// Alpha of the uniform black overlay blended onto the photo (out of 255).
pub const OVERLAY_ALPHA: u8 = 100;

/// Widest a wrapped line may render: canvas width minus both side margins.
pub const MAX_LINE_WIDTH: u32 = CANVAS_SIZE - 2 * MARGIN;

/// Measures the rendered pixel width of a line of text.
pub trait MeasureText {
    /// Width in pixels of `line` at the measurer's fixed font and size.
    fn width_of(&self, line: &str) -> u32;
}

/// Glyph-advance measurement over a loaded font at a fixed scale.
pub struct GlyphMeasure<'a> {
    font: &'a FontArc,
    scale: PxScale,
}

impl<'a> GlyphMeasure<'a> {
    pub fn new(font: &'a FontArc, scale: PxScale) -> Self {
        Self { font, scale }
    }
}

impl MeasureText for GlyphMeasure<'_> {
    fn width_of(&self, line: &str) -> u32 {
        let font = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut prev = None;
        for c in line.chars() {
            let glyph = font.glyph_id(c);
            if let Some(prev) = prev {
                width += font.kern(prev, glyph);
            }
            width += font.h_advance(glyph);
            prev = Some(glyph);
        }
        width.ceil() as u32
    }
}

/// Greedily wrap a headline into lines no wider than `max_width`.
///
/// Words (whitespace-delimited tokens) are accumulated into the current
/// line; before a word is added, the candidate line is measured, and if it
/// would exceed `max_width` the current line is closed without the word and
/// the word starts a new line. The final in-progress line is appended after
/// all words are consumed.
///
/// Invariants:
/// - no word is ever dropped;
/// - two consecutive words whose joined width fits `max_width` are never
///   split across lines (greedy single-line packing);
/// - a single word wider than `max_width` still gets a line of its own;
/// - lines are joined with single spaces and carry no leading or trailing
///   whitespace; empty input yields zero lines.
pub fn wrap_headline(text: &str, measure: &impl MeasureText, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure.width_of(&candidate) > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
