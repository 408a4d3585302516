//! Text fitting: auto-size text to fill a region without overflow.
//!
//! The fitter word-wraps a message to its region's width, clips the resulting
//! block to the region's height, places each line according to the alignment
//! flags, and reports the largest font size (in abstract units, capped by
//! [`FitOptions::max_font_size`]) the block can occupy.
//!
//! Terminal cells cannot scale glyphs, so the font size is advisory for
//! terminal surfaces: it describes the vertical band each line may occupy.
//! GUI backends implementing [`crate::surface::BannerSurface`] can honor it
//! literally.

use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Font units per terminal cell row.
///
/// A line granted `n` rows of vertical space corresponds to a font size of
/// `n * UNITS_PER_ROW`.
pub const UNITS_PER_ROW: u16 = 8;

/// Configuration for a fit pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOptions {
    /// Center the line block vertically (otherwise top-aligned).
    pub align_vert: bool,
    /// Center each line horizontally (otherwise left-aligned).
    pub align_horiz: bool,
    /// Allow wrapping onto multiple lines (otherwise a single clipped line).
    pub multi_line: bool,
    /// Re-measure even if the surface already holds a cached fit.
    ///
    /// Consumed by surfaces as a cache-invalidation flag; the fitter itself
    /// is stateless.
    pub re_process: bool,
    /// Ceiling for the computed font size, in font units.
    pub max_font_size: u16,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            align_vert: true,
            align_horiz: true,
            multi_line: true,
            re_process: true,
            max_font_size: 120,
        }
    }
}

/// One positioned line of fitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedLine {
    /// Line content.
    pub text: String,
    /// X coordinate (column) of the first cell.
    pub x: u16,
    /// Y coordinate (row) of the line.
    pub y: u16,
}

/// Result of fitting a message into a region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fitted {
    /// Computed font size in font units, capped by the fit options.
    pub font_size: u16,
    /// Positioned lines, top to bottom.
    pub lines: Vec<FittedLine>,
}

impl Fitted {
    /// Check whether the fit produced any visible text.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Fit `text` into `rect` according to `options`.
///
/// Returns an empty [`Fitted`] when the region has no area or the text is
/// blank.
pub fn fit_text(text: &str, rect: Rect, options: &FitOptions) -> Fitted {
    if rect.is_empty() || text.trim().is_empty() {
        return Fitted::default();
    }

    let max_width = usize::from(rect.width);
    let mut lines = if options.multi_line {
        wrap_words(text, max_width)
    } else {
        vec![clip_line(text, max_width)]
    };

    // Overflowing lines are clipped, never shrunk below one row per line.
    lines.truncate(usize::from(rect.height));
    if lines.is_empty() {
        return Fitted::default();
    }

    #[allow(clippy::cast_possible_truncation)]
    let line_count = lines.len() as u16;
    let band_rows = rect.height / line_count;
    let font_size = (band_rows * UNITS_PER_ROW).min(options.max_font_size);

    let y0 = if options.align_vert {
        rect.y + (rect.height - line_count) / 2
    } else {
        rect.y
    };

    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            #[allow(clippy::cast_possible_truncation)]
            let line_width = (text.width() as u16).min(rect.width);
            let x = if options.align_horiz {
                rect.x + (rect.width - line_width) / 2
            } else {
                rect.x
            };
            #[allow(clippy::cast_possible_truncation)]
            let y = y0 + i as u16;
            FittedLine { text, x, y }
        })
        .collect();

    Fitted { font_size, lines }
}

/// Greedy word wrap by display width.
///
/// Words wider than `max_width` are hard-broken at grapheme boundaries.
fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > max_width {
            // Flush the open line, then hard-break the oversized word.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for grapheme in word.graphemes(true) {
                let gw = grapheme.width();
                if current_width + gw > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += gw;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Collapse whitespace and clip to a single line of at most `max_width` cells.
fn clip_line(text: &str, max_width: usize) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut line = String::new();
    let mut width = 0usize;
    for grapheme in joined.graphemes(true) {
        let gw = grapheme.width();
        if width + gw > max_width {
            break;
        }
        line.push_str(grapheme);
        width += gw;
    }
    line
}
