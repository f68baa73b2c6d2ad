//! Page templates for the sample documents.
//!
//! Both templates share the same skeleton: a two-line bold banner naming the
//! collection, a bold title line, four labelled fields and a list section.
//! Coordinates are absolute points on a letter page.

pub mod poem;
pub mod recipe;

use crate::fonts::FontFace;
use crate::layout::{Canvas, Cursor, PageLayout};
use crate::model::SampleRecord;

/// Left edge of banners, titles, fields and section headers.
pub(crate) const LABEL_X: f64 = 100.0;
/// Left edge of list rows.
pub(crate) const LIST_X: f64 = 120.0;
/// Vertical distance between the labelled header fields.
pub(crate) const FIELD_PITCH: f64 = 20.0;

const BANNER_SIZE: f64 = 16.0;
const TITLE_SIZE: f64 = 14.0;
const FIELD_SIZE: f64 = 12.0;
const SECTION_SIZE: f64 = 12.0;

const BANNER_OFFSET: f64 = 100.0;
const SUBTITLE_OFFSET: f64 = 120.0;
const TITLE_OFFSET: f64 = 160.0;
const FIELDS_OFFSET: f64 = 200.0;
const FIELDS_TO_SECTION_GAP: f64 = 40.0;

/// Lays out `record` on a fresh letter page.
pub fn layout<R: SampleRecord>(record: &R) -> PageLayout {
    let mut canvas = Canvas::letter(record.title());
    record.draw(&mut canvas);
    canvas.finish()
}

/// Draws the banner and title line shared by all templates.
pub(crate) fn draw_heading(canvas: &mut Canvas, banner: [&str; 2], title: String) {
    let top = canvas.height();
    canvas.set_font(FontFace::Bold, BANNER_SIZE);
    canvas.draw_string(LABEL_X, top - BANNER_OFFSET, banner[0]);
    canvas.draw_string(LABEL_X, top - SUBTITLE_OFFSET, banner[1]);

    canvas.set_font(FontFace::Bold, TITLE_SIZE);
    canvas.draw_string(LABEL_X, top - TITLE_OFFSET, title);
}

/// Draws `label: value` rows and returns a cursor positioned on the first section header.
pub(crate) fn draw_fields(canvas: &mut Canvas, fields: &[(&str, String)]) -> Cursor {
    let mut cursor = Cursor::at(canvas.height() - FIELDS_OFFSET);
    canvas.set_font(FontFace::Regular, FIELD_SIZE);
    for (index, (label, value)) in fields.iter().enumerate() {
        if index > 0 {
            cursor.advance(FIELD_PITCH);
        }
        canvas.draw_string(LABEL_X, cursor.y(), format!("{label}: {value}"));
    }
    cursor.advance(FIELDS_TO_SECTION_GAP);
    cursor
}

/// Draws a bold section header at the cursor without moving it.
pub(crate) fn draw_section_header(canvas: &mut Canvas, cursor: &Cursor, header: &str) {
    canvas.set_font(FontFace::Bold, SECTION_SIZE);
    canvas.draw_string(LABEL_X, cursor.y(), format!("{header}:"));
}
