use lopdf::content::Content;
use lopdf::{Document, Object};
use sample_pdfs::builder::PdfBuilder;
use sample_pdfs::model::{Difficulty, Era, Poem, PoemStyle, Recipe, Theme};
use sample_pdfs::samples::recipes::canonical_recipes;
use sample_pdfs::templates;

fn render(page: &sample_pdfs::layout::PageLayout) -> Vec<u8> {
    PdfBuilder::new().render(page).expect("render pdf").bytes
}

/// Returns the page count and the strings shown with `Tj` on the first page,
/// decoded with the WinAnsi encoding the built-in fonts declare.
fn shown_strings(bytes: &[u8]) -> (usize, Vec<String>) {
    let document = Document::load_mem(bytes).expect("parse rendered pdf");
    let pages = document.get_pages();
    let first = *pages.get(&1).expect("first page");
    let data = document.get_page_content(first).expect("page content");
    let content = Content::decode(&data).expect("decode content stream");

    let strings = content
        .operations
        .iter()
        .filter(|operation| operation.operator == "Tj")
        .filter_map(|operation| match operation.operands.first() {
            Some(Object::String(bytes, _)) => {
                Some(Document::decode_text(Some("WinAnsiEncoding"), bytes))
            }
            _ => None,
        })
        .collect();
    (pages.len(), strings)
}

#[test]
fn recipe_pdf_contains_banner_fields_and_lists() {
    let recipe = canonical_recipes()[0].clone();
    let (pages, strings) = shown_strings(&render(&templates::layout(&recipe)));

    assert_eq!(pages, 1);
    for expected in [
        "RECIPE COLLECTION",
        "Traditional Cooking Methods",
        "Recipe: Beef Goulash",
        "Region: Eastern Europe",
        "Cooking Time: 2 hours",
        "Difficulty: Medium",
        "Serves: 4-6",
        "INGREDIENTS:",
        "INSTRUCTIONS:",
        "\u{2022} 3 tbsp paprika",
        "1. Brown the beef in oil",
        "4. Simmer for 1.5 hours",
    ] {
        assert!(
            strings.iter().any(|shown| shown == expected),
            "missing {expected:?} in {strings:?}"
        );
    }
}

#[test]
fn poem_pdf_contains_lines_verbatim() {
    let poem = Poem::new(
        "Ocean Waves",
        "Emma Rodriguez",
        Era::Contemporary,
        PoemStyle::Lyrical,
        Theme::Seascape,
    )
    .with_lines(["Waves crash upon the shore", "Holds secrets it will keep"]);
    let (pages, strings) = shown_strings(&render(&templates::layout(&poem)));

    assert_eq!(pages, 1);
    assert_eq!(
        strings,
        [
            "POETRY ANTHOLOGY",
            "Literary Works Collection",
            "Title: Ocean Waves",
            "Author: Emma Rodriguez",
            "Era: Contemporary",
            "Style: Lyrical",
            "Theme: Seascape",
            "POEM TEXT:",
            "Waves crash upon the shore",
            "Holds secrets it will keep",
        ]
    );
}

#[test]
fn empty_recipe_renders_headers_only() {
    let recipe = Recipe::new("Water", "Everywhere", "1 minute", Difficulty::Easy, "1");
    let (pages, strings) = shown_strings(&render(&templates::layout(&recipe)));

    assert_eq!(pages, 1);
    assert_eq!(strings.len(), 9);
    assert_eq!(strings.last().map(String::as_str), Some("INSTRUCTIONS:"));
}

#[test]
fn overflowing_recipe_stays_on_one_page() {
    let steps: Vec<String> = (1..=80).map(|step| format!("Stir batch {step}")).collect();
    let recipe = Recipe::new("Long Stew", "Northern China", "2 hours", Difficulty::Hard, "8-10")
        .with_instructions(steps);
    let (pages, strings) = shown_strings(&render(&templates::layout(&recipe)));

    assert_eq!(pages, 1);
    assert!(strings.iter().any(|shown| shown == "80. Stir batch 80"));
}
