//! Fixed-geometry paginator for the PDF export.
//!
//! Hard-wraps each source line into fixed-width chunks (by character count,
//! not word boundaries) and flows them down an A4 canvas. A chunk whose
//! cursor sits below the bottom margin opens a fresh page before it is
//! written, so no content ever lands outside the page bounds. Blank source
//! lines advance the cursor by a small gap and emit nothing.

/// Page geometry in PDF points (1/72 inch), origin at the bottom-left corner.
///
/// Vertical positions are expressed as offsets from the top edge: the title
/// baseline sits at `height - title_offset_pt`, body text starts at
/// `height - body_start_offset_pt` on page 1 and `height - page_start_offset_pt`
/// on every page after (the title is only drawn once).
#[derive(Debug, Clone)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    /// Left margin; every chunk is written at this x position.
    pub margin_x_pt: f32,
    pub bottom_margin_pt: f32,
    pub title_offset_pt: f32,
    pub body_start_offset_pt: f32,
    pub page_start_offset_pt: f32,
    pub line_height_pt: f32,
    /// Cursor advance for a blank source line.
    pub blank_gap_pt: f32,
    /// Hard-wrap width in characters.
    pub wrap_cols: usize,
    pub title_size_pt: f32,
    pub body_size_pt: f32,
}

/// A4 geometry: 18pt bold title at 50pt from the top, 12pt body on a 14pt
/// line height, 90-column wrap, 50pt bottom margin.
pub fn default_geometry() -> PageGeometry {
    PageGeometry {
        width_pt: 595.28,
        height_pt: 841.89,
        margin_x_pt: 50.0,
        bottom_margin_pt: 50.0,
        title_offset_pt: 50.0,
        body_start_offset_pt: 80.0,
        page_start_offset_pt: 50.0,
        line_height_pt: 14.0,
        blank_gap_pt: 12.0,
        wrap_cols: 90,
        title_size_pt: 18.0,
        body_size_pt: 12.0,
    }
}

/// One wrapped chunk of text placed on a page. The x position is always the
/// left margin, so only the baseline height is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    text: String,
    y_pt: f32,
}

impl TextChunk {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn y_pt(&self) -> f32 {
        self.y_pt
    }
}

/// One assembled page. Write-once: built by `paginate`, read via accessors.
#[derive(Debug, Clone)]
pub struct Page {
    chunks: Vec<TextChunk>,
}

impl Page {
    pub fn chunks(&self) -> &[TextChunk] {
        &self.chunks
    }
}

/// The finished paginated document, ready for serialization.
#[derive(Debug, Clone)]
pub struct PaginatedDocument {
    title: String,
    geometry: PageGeometry,
    pages: Vec<Page>,
}

impl PaginatedDocument {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

/// Flows `text` into pages. Lossless and order-preserving: every non-blank
/// source line's wrapped content appears on exactly one page, in order.
/// Always yields at least one page (the title page), even for empty text.
pub fn paginate(text: &str, title: &str, geometry: &PageGeometry) -> PaginatedDocument {
    let mut pages: Vec<Page> = Vec::new();
    let mut current: Vec<TextChunk> = Vec::new();
    let mut cursor = geometry.height_pt - geometry.body_start_offset_pt;

    for line in text.lines() {
        if line.trim().is_empty() {
            cursor -= geometry.blank_gap_pt;
            continue;
        }

        for chunk in wrap_chars(line, geometry.wrap_cols) {
            if cursor < geometry.bottom_margin_pt {
                pages.push(Page {
                    chunks: std::mem::take(&mut current),
                });
                cursor = geometry.height_pt - geometry.page_start_offset_pt;
            }
            current.push(TextChunk { text: chunk, y_pt: cursor });
            cursor -= geometry.line_height_pt;
        }
    }

    pages.push(Page { chunks: current });

    PaginatedDocument {
        title: title.to_string(),
        geometry: geometry.clone(),
        pages,
    }
}

/// Splits a line into chunks of at most `cols` characters. Works on chars,
/// not bytes, so multi-byte text never splits inside a code point.
fn wrap_chars(line: &str, cols: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(cols.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
