use log::debug;
use rand::Rng;

use super::{pick, variant_number, CANONICAL_COUNT, RECORDS_PER_KIND};
use crate::model::{Era, Poem, PoemStyle, Theme};

/// Authors a variant can be credited to.
pub const AUTHORS: &[&str] = &[
    "Sarah Johnson",
    "Michael Chen",
    "Emma Rodriguez",
    "David Kim",
    "Lisa Thompson",
    "Robert Wilson",
    "Maria Garcia",
    "James Anderson",
    "Jennifer Lee",
    "Thomas Brown",
];

/// The hand-written poems that open every generated list.
pub fn canonical_poems() -> [Poem; CANONICAL_COUNT] {
    [
        Poem::new(
            "Morning Dewdrops",
            "Sarah Johnson",
            Era::Contemporary,
            PoemStyle::FreeVerse,
            Theme::Nature,
        )
        .with_lines([
            "The morning dew glistens bright",
            "On petals soft and white",
            "A gentle breeze whispers low",
            "As flowers dance to and fro",
        ]),
        Poem::new(
            "City Lights",
            "Michael Chen",
            Era::Modern,
            PoemStyle::Narrative,
            Theme::UrbanLife,
        )
        .with_lines([
            "Neon signs flicker and glow",
            "In the city far below",
            "People hurry through the night",
            "Searching for that perfect light",
        ]),
        Poem::new(
            "Ocean Waves",
            "Emma Rodriguez",
            Era::Contemporary,
            PoemStyle::Lyrical,
            Theme::Seascape,
        )
        .with_lines([
            "Waves crash upon the shore",
            "With sounds like never before",
            "The ocean vast and deep",
            "Holds secrets it will keep",
        ]),
        Poem::new(
            "Autumn Leaves",
            "David Kim",
            Era::Classical,
            PoemStyle::Sonnet,
            Theme::Seasons,
        )
        .with_lines([
            "Golden leaves fall from the tree",
            "Dancing in the autumn breeze",
            "Nature paints with colors bold",
            "Stories that will never grow old",
        ]),
        Poem::new(
            "Mountain Peak",
            "Lisa Thompson",
            Era::Romantic,
            PoemStyle::Ballad,
            Theme::Adventure,
        )
        .with_lines([
            "High above the clouds so white",
            "Stands a peak of mighty height",
            "Reaching for the endless sky",
            "Where eagles soar and spirits fly",
        ]),
    ]
}

/// Builds the derived poem for list position `index` from its canonical base.
///
/// Author, era, style and theme are drawn in that order.
pub fn derive_poem<R>(base: &Poem, index: usize, rng: &mut R) -> Poem
where
    R: Rng + ?Sized,
{
    let title = format!("{} Part {}", base.title(), variant_number(index));
    let author = *pick(rng, AUTHORS);
    let era = *pick(rng, Era::ALL);
    let style = *pick(rng, PoemStyle::ALL);
    let theme = *pick(rng, Theme::ALL);
    debug!("Derived poem '{title}': author={author}, era={era}, style={style}, theme={theme}");

    base.clone()
        .with_title(title)
        .with_author(author)
        .with_era(era)
        .with_style(style)
        .with_theme(theme)
}

/// Returns the canonical poems followed by randomized parts.
pub fn generate_poems<R>(rng: &mut R) -> Vec<Poem>
where
    R: Rng + ?Sized,
{
    let canonical = canonical_poems();
    let mut poems = Vec::with_capacity(RECORDS_PER_KIND);
    poems.extend(canonical.iter().cloned());
    for index in CANONICAL_COUNT..RECORDS_PER_KIND {
        let base = &canonical[index % CANONICAL_COUNT];
        poems.push(derive_poem(base, index, rng));
    }
    poems
}
