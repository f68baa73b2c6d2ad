//! Fixed-position page layout.
//!
//! Templates draw onto a [`Canvas`] the same way one would use a classic PDF
//! canvas: select a font, then place strings at absolute coordinates measured
//! in points from the bottom-left corner of the page.  The canvas only records
//! the calls; [`crate::builder::PdfBuilder`] turns the resulting
//! [`PageLayout`] into PDF bytes.  Keeping the two steps apart lets the
//! placement be inspected without decoding a PDF.
//!
//! Nothing is wrapped or paginated.  A string placed below the page edge is
//! kept in the layout and simply falls outside the visible area when painted.

use crate::fonts::FontFace;

/// Width of a US letter page in points.
pub const LETTER_WIDTH_PT: f64 = 612.0;
/// Height of a US letter page in points.
pub const LETTER_HEIGHT_PT: f64 = 792.0;

const DEFAULT_FONT_SIZE_PT: f64 = 12.0;

/// A position on the page in points, origin at the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single string drawn with one font at one position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    text: String,
    face: FontFace,
    size: f64,
    origin: Point,
}

impl TextRun {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn face(&self) -> FontFace {
        self.face
    }

    /// Font size in points.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Baseline start of the string.
    pub fn origin(&self) -> Point {
        self.origin
    }
}

/// The finished content of one page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    title: String,
    width: f64,
    height: f64,
    runs: Vec<TextRun>,
}

impl PageLayout {
    /// Document title stored in the PDF metadata.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Page width in points.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page height in points.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Text runs in drawing order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Iterates over the drawn strings in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(TextRun::text)
    }

    /// Returns the first run whose text equals `text`.
    pub fn find(&self, text: &str) -> Option<&TextRun> {
        self.runs.iter().find(|run| run.text == text)
    }
}

/// Records text placement for a single page.
#[derive(Clone, Debug)]
pub struct Canvas {
    title: String,
    width: f64,
    height: f64,
    face: FontFace,
    size: f64,
    runs: Vec<TextRun>,
}

impl Canvas {
    /// Creates a canvas for a page of the given size in points.
    pub fn new(title: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            face: FontFace::default(),
            size: DEFAULT_FONT_SIZE_PT,
            runs: Vec::new(),
        }
    }

    /// Creates a canvas for a US letter page.
    pub fn letter(title: impl Into<String>) -> Self {
        Self::new(title, LETTER_WIDTH_PT, LETTER_HEIGHT_PT)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Selects the font used by subsequent [`Canvas::draw_string`] calls.
    pub fn set_font(&mut self, face: FontFace, size: f64) {
        self.face = face;
        self.size = size;
    }

    /// Places `text` with its baseline starting at `(x, y)`.
    pub fn draw_string(&mut self, x: f64, y: f64, text: impl Into<String>) {
        self.runs.push(TextRun {
            text: text.into(),
            face: self.face,
            size: self.size,
            origin: Point::new(x, y),
        });
    }

    /// Finishes the page.
    pub fn finish(self) -> PageLayout {
        PageLayout {
            title: self.title,
            width: self.width,
            height: self.height,
            runs: self.runs,
        }
    }
}

/// Tracks the baseline of the next row while a template walks down the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    y: f64,
}

impl Cursor {
    pub fn at(y: f64) -> Self {
        Self { y }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Moves the cursor `distance` points down the page.
    pub fn advance(&mut self, distance: f64) {
        self.y -= distance;
    }
}
