//! Poem page template.

use crate::fonts::FontFace;
use crate::layout::Canvas;
use crate::model::{DocumentKind, Poem, SampleRecord};

use super::{draw_fields, draw_heading, draw_section_header, LIST_X};

pub const BANNER: [&str; 2] = ["POETRY ANTHOLOGY", "Literary Works Collection"];
pub const TEXT_HEADER: &str = "POEM TEXT";

const LINE_SIZE: f64 = 11.0;
const LINE_PITCH: f64 = 20.0;
const HEADER_TO_TEXT: f64 = 30.0;

impl SampleRecord for Poem {
    const KIND: DocumentKind = DocumentKind::Poem;

    fn title(&self) -> &str {
        Poem::title(self)
    }

    fn draw(&self, canvas: &mut Canvas) {
        draw_heading(canvas, BANNER, format!("Title: {}", self.title()));

        let mut cursor = draw_fields(
            canvas,
            &[
                ("Author", self.author().to_owned()),
                ("Era", self.era().to_string()),
                ("Style", self.style().to_string()),
                ("Theme", self.theme().to_string()),
            ],
        );

        draw_section_header(canvas, &cursor, TEXT_HEADER);
        cursor.advance(HEADER_TO_TEXT);
        canvas.set_font(FontFace::Regular, LINE_SIZE);
        for line in self.lines() {
            canvas.draw_string(LIST_X, cursor.y(), line.as_str());
            cursor.advance(LINE_PITCH);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fonts::FontFace;
    use crate::layout::{Point, LETTER_HEIGHT_PT};
    use crate::model::{Era, Poem, PoemStyle, Theme};
    use crate::templates::layout;

    const TOP: f64 = LETTER_HEIGHT_PT;

    fn city_lights() -> Poem {
        Poem::new(
            "City Lights",
            "Michael Chen",
            Era::Modern,
            PoemStyle::Narrative,
            Theme::UrbanLife,
        )
        .with_lines(["Neon signs flicker and glow", "In the city far below"])
    }

    #[test]
    fn header_fields_follow_fixed_order() {
        let page = layout(&city_lights());
        let texts: Vec<_> = page.texts().collect();
        assert_eq!(
            texts,
            [
                "POETRY ANTHOLOGY",
                "Literary Works Collection",
                "Title: City Lights",
                "Author: Michael Chen",
                "Era: Modern",
                "Style: Narrative",
                "Theme: Urban Life",
                "POEM TEXT:",
                "Neon signs flicker and glow",
                "In the city far below",
            ]
        );
    }

    #[test]
    fn lines_are_verbatim_with_twenty_point_pitch() {
        let page = layout(&city_lights());

        let title = page.find("Title: City Lights").expect("title drawn");
        assert_eq!(title.origin(), Point::new(100.0, TOP - 160.0));
        assert_eq!(title.size(), 14.0);

        let header = page.find("POEM TEXT:").expect("poem header");
        assert_eq!(header.origin().y, TOP - 300.0);

        let first = page.find("Neon signs flicker and glow").expect("first line");
        let second = page.find("In the city far below").expect("second line");
        assert_eq!(first.origin(), Point::new(120.0, TOP - 330.0));
        assert_eq!(second.origin(), Point::new(120.0, TOP - 350.0));
        assert_eq!(first.face(), FontFace::Regular);
        assert_eq!(first.size(), 11.0);
    }

    #[test]
    fn poem_without_lines_renders_header_only() {
        let poem = Poem::new("Silence", "Nobody", Era::Medieval, PoemStyle::Haiku, Theme::Loss);
        let page = layout(&poem);
        assert_eq!(page.runs().len(), 8);
        assert_eq!(page.texts().last(), Some("POEM TEXT:"));
    }
}
