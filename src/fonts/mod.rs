//! Font handling for the sample documents.
//!
//! Every document is set in the built-in Helvetica family so no font files
//! have to be shipped or discovered at runtime.

use printpdf::{BuiltinFont, Error, IndirectFontRef, PdfDocumentReference};

/// The faces of the default family that the templates draw with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

impl FontFace {
    /// Maps the face to the corresponding PDF standard font.
    pub fn builtin(self) -> BuiltinFont {
        match self {
            Self::Regular => BuiltinFont::Helvetica,
            Self::Bold => BuiltinFont::HelveticaBold,
        }
    }
}

/// Font references registered with a single `printpdf` document.
pub struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl FontSet {
    /// Returns the registered reference for `face`.
    pub fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
        }
    }
}

/// Adds the default Helvetica faces to the given document and returns their references.
pub fn install_default_fonts(document: &PdfDocumentReference) -> Result<FontSet, Error> {
    Ok(FontSet {
        regular: document.add_builtin_font(FontFace::Regular.builtin())?,
        bold: document.add_builtin_font(FontFace::Bold.builtin())?,
    })
}
