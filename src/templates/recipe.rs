//! Recipe page template.

use crate::fonts::FontFace;
use crate::layout::Canvas;
use crate::model::{DocumentKind, Recipe, SampleRecord};

use super::{draw_fields, draw_heading, draw_section_header, LIST_X};

pub const BANNER: [&str; 2] = ["RECIPE COLLECTION", "Traditional Cooking Methods"];
pub const INGREDIENTS_HEADER: &str = "INGREDIENTS";
pub const INSTRUCTIONS_HEADER: &str = "INSTRUCTIONS";

/// Marker drawn in front of every ingredient.
pub const BULLET: char = '\u{2022}';

const LIST_SIZE: f64 = 10.0;
const LIST_PITCH: f64 = 15.0;
const HEADER_TO_LIST: f64 = 20.0;
const LIST_TO_HEADER: f64 = 20.0;

impl SampleRecord for Recipe {
    const KIND: DocumentKind = DocumentKind::Recipe;

    fn title(&self) -> &str {
        self.name()
    }

    fn draw(&self, canvas: &mut Canvas) {
        draw_heading(canvas, BANNER, format!("Recipe: {}", self.name()));

        let mut cursor = draw_fields(
            canvas,
            &[
                ("Region", self.region().to_owned()),
                ("Cooking Time", self.time().to_owned()),
                ("Difficulty", self.difficulty().to_string()),
                ("Serves", self.serves().to_owned()),
            ],
        );

        draw_section_header(canvas, &cursor, INGREDIENTS_HEADER);
        cursor.advance(HEADER_TO_LIST);
        canvas.set_font(FontFace::Regular, LIST_SIZE);
        for ingredient in self.ingredients() {
            canvas.draw_string(LIST_X, cursor.y(), format!("{BULLET} {ingredient}"));
            cursor.advance(LIST_PITCH);
        }

        cursor.advance(LIST_TO_HEADER);
        draw_section_header(canvas, &cursor, INSTRUCTIONS_HEADER);
        cursor.advance(HEADER_TO_LIST);
        canvas.set_font(FontFace::Regular, LIST_SIZE);
        for (step, instruction) in self.instructions().iter().enumerate() {
            canvas.draw_string(LIST_X, cursor.y(), format!("{}. {instruction}", step + 1));
            cursor.advance(LIST_PITCH);
        }
    }
}
