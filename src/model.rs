//! Records describing the content of a generated sample document.
//!
//! Each record feeds exactly one rendered PDF.  The types keep their fields
//! private and expose accessors plus `with_*` setters so that derived variants
//! can be produced by cloning a canonical sample and overriding a handful of
//! fields.

use std::fmt;

use crate::layout::Canvas;

/// The two families of sample documents produced by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A cooking recipe.
    Recipe,
    /// A short poem.
    Poem,
}

impl DocumentKind {
    /// Prefix used for generated file names, e.g. `recipe_01_...pdf`.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Poem => "poem",
        }
    }

    /// Name of the directory, relative to the output root, that receives the documents.
    pub fn directory_name(self) -> &'static str {
        match self {
            Self::Recipe => "recipes",
            Self::Poem => "poems",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_prefix())
    }
}

/// A record that can be laid out onto a single page.
pub trait SampleRecord {
    /// The document family this record belongs to.
    const KIND: DocumentKind;

    /// Primary title, used for the file name and the PDF document title.
    fn title(&self) -> &str;

    /// Draws the record onto the provided canvas.
    fn draw(&self, canvas: &mut Canvas);
}

/// Declares a fieldless enum whose variants render as fixed labels.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label printed on the page.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labeled_enum! {
    /// Effort required to cook a recipe.
    pub enum Difficulty {
        Easy => "Easy",
        Medium => "Medium",
        Hard => "Hard",
    }
}

labeled_enum! {
    /// Literary period a poem is attributed to.
    pub enum Era {
        Contemporary => "Contemporary",
        Modern => "Modern",
        Classical => "Classical",
        Romantic => "Romantic",
        Victorian => "Victorian",
        Medieval => "Medieval",
    }
}

labeled_enum! {
    /// Poetic form.
    pub enum PoemStyle {
        FreeVerse => "Free Verse",
        Narrative => "Narrative",
        Lyrical => "Lyrical",
        Sonnet => "Sonnet",
        Ballad => "Ballad",
        Haiku => "Haiku",
    }
}

labeled_enum! {
    /// Subject matter of a poem.
    pub enum Theme {
        Nature => "Nature",
        UrbanLife => "Urban Life",
        Seascape => "Seascape",
        Seasons => "Seasons",
        Adventure => "Adventure",
        Love => "Love",
        Loss => "Loss",
        Hope => "Hope",
    }
}

/// A cooking recipe rendered by [`crate::templates::recipe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    region: String,
    time: String,
    difficulty: Difficulty,
    serves: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl Recipe {
    /// Creates a recipe with the scalar fields set and no ingredients or instructions.
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        time: impl Into<String>,
        difficulty: Difficulty,
        serves: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            time: time.into(),
            difficulty,
            serves: serves.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Total cooking time, e.g. `"45 minutes"`.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of servings as a range such as `"4-6"`.
    pub fn serves(&self) -> &str {
        &self.serves
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Sets the name and returns the updated recipe.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the region and returns the updated recipe.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the cooking time and returns the updated recipe.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets the difficulty and returns the updated recipe.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replaces the ingredient list and returns the updated recipe.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the instruction list and returns the updated recipe.
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }
}

/// A poem rendered by [`crate::templates::poem`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poem {
    title: String,
    author: String,
    era: Era,
    style: PoemStyle,
    theme: Theme,
    lines: Vec<String>,
}

impl Poem {
    /// Creates a poem with the scalar fields set and no lines.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        era: Era,
        style: PoemStyle,
        theme: Theme,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            era,
            style,
            theme,
            lines: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn style(&self) -> PoemStyle {
        self.style
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Sets the title and returns the updated poem.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the author and returns the updated poem.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the era and returns the updated poem.
    pub fn with_era(mut self, era: Era) -> Self {
        self.era = era;
        self
    }

    /// Sets the style and returns the updated poem.
    pub fn with_style(mut self, style: PoemStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the theme and returns the updated poem.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replaces the poem text and returns the updated poem.
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, DocumentKind, PoemStyle, Recipe, Theme};

    #[test]
    fn labels_use_display_spelling() {
        assert_eq!(PoemStyle::FreeVerse.to_string(), "Free Verse");
        assert_eq!(Theme::UrbanLife.to_string(), "Urban Life");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn all_lists_variants_in_declaration_order() {
        assert_eq!(
            Difficulty::ALL,
            &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
        assert_eq!(Theme::ALL.len(), 8);
        assert_eq!(Theme::ALL.last(), Some(&Theme::Hope));
    }

    #[test]
    fn kind_names_prefix_and_directory() {
        assert_eq!(DocumentKind::Recipe.file_prefix(), "recipe");
        assert_eq!(DocumentKind::Recipe.directory_name(), "recipes");
        assert_eq!(DocumentKind::Poem.file_prefix(), "poem");
        assert_eq!(DocumentKind::Poem.directory_name(), "poems");
    }

    #[test]
    fn setters_leave_other_fields_untouched() {
        let base = Recipe::new("Soup", "Nowhere", "1 hour", Difficulty::Easy, "2-3")
            .with_ingredients(["water"]);
        let renamed = base.clone().with_name("Soup Variation 1");

        assert_eq!(renamed.name(), "Soup Variation 1");
        assert_eq!(renamed.region(), base.region());
        assert_eq!(renamed.ingredients(), base.ingredients());
    }
}
