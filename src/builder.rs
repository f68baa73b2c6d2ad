//! Painting page layouts into PDF documents with `printpdf`.

use std::fmt;
use std::io::{self, BufWriter};

use printpdf::{CustomPdfConformance, Mm, PdfConformance, PdfDocument, Pt};

use crate::fonts;
use crate::layout::PageLayout;

const LAYER_NAME: &str = "Layer 1";

/// Plain PDF without the print-production extras (ICC output intent, XMP
/// metadata) that printpdf's default PDF/X-3 conformance embeds.
fn plain_conformance() -> PdfConformance {
    PdfConformance::Custom(CustomPdfConformance {
        requires_icc_profile: false,
        requires_xmp_metadata: false,
        ..CustomPdfConformance::default()
    })
}

/// Errors raised while turning a [`PageLayout`] into PDF bytes.
#[derive(Debug)]
pub enum PdfBuildError {
    /// A built-in font could not be registered with the document.
    FontLoad(printpdf::Error),
    /// `printpdf` failed to serialize the document.
    Render(printpdf::Error),
    /// Writing the serialized document failed.
    Io(io::Error),
}

impl From<io::Error> for PdfBuildError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for PdfBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontLoad(err) => write!(f, "Failed to register built-in fonts: {err}"),
            Self::Render(err) => write!(f, "Failed to serialize PDF document: {err}"),
            Self::Io(err) => write!(f, "Failed to write PDF output: {err}"),
        }
    }
}

impl std::error::Error for PdfBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontLoad(err) | Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

/// A rendered PDF held in memory.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    /// The complete PDF file contents.
    pub bytes: Vec<u8>,
}

/// Paints single-page layouts with the built-in Helvetica faces.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfBuilder;

impl PdfBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Renders the page into an in-memory PDF.
    pub fn render(&self, page: &PageLayout) -> Result<RenderedPdf, PdfBuildError> {
        let (document, page_index, layer_index) = PdfDocument::new(
            page.title(),
            to_mm(page.width()),
            to_mm(page.height()),
            LAYER_NAME,
        );
        let document = document.with_conformance(plain_conformance());
        let fonts = fonts::install_default_fonts(&document).map_err(PdfBuildError::FontLoad)?;
        let layer = document.get_page(page_index).get_layer(layer_index);

        for run in page.runs() {
            let origin = run.origin();
            layer.use_text(
                run.text(),
                run.size(),
                to_mm(origin.x),
                to_mm(origin.y),
                fonts.get(run.face()),
            );
        }

        let mut writer = BufWriter::new(Vec::new());
        document.save(&mut writer).map_err(PdfBuildError::Render)?;
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(RenderedPdf { bytes })
    }
}

fn to_mm(points: f64) -> Mm {
    Mm::from(Pt(points))
}
