//! Batch driver that writes every sample document to disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use rand::Rng;

use crate::builder::{PdfBuildError, PdfBuilder};
use crate::model::{DocumentKind, SampleRecord};
use crate::samples::{generate_poems, generate_recipes};
use crate::templates;

/// Which document kinds a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Recipes,
    Poems,
}

impl Selection {
    /// Returns whether documents of `kind` are part of the selection.
    pub fn includes(self, kind: DocumentKind) -> bool {
        match self {
            Self::All => true,
            Self::Recipes => kind == DocumentKind::Recipe,
            Self::Poems => kind == DocumentKind::Poem,
        }
    }
}

/// Settings for a generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    output_root: PathBuf,
    selection: Selection,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            selection: Selection::All,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration that writes both kinds below the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Sets the directory that receives the `recipes/` and `poems/` folders.
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// Restricts the run to the given document kinds.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Directory that receives documents of `kind`.
    pub fn directory_for(&self, kind: DocumentKind) -> PathBuf {
        self.output_root.join(kind.directory_name())
    }
}

/// Errors that abort a generation run.
#[derive(Debug)]
pub enum GenerateError {
    /// An output directory could not be created.
    CreateDirectory { path: PathBuf, source: io::Error },
    /// A document could not be rendered.
    Render {
        path: PathBuf,
        source: PdfBuildError,
    },
    /// A rendered document could not be written to disk.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDirectory { path, .. } => {
                write!(f, "Failed to create output directory {}", path.display())
            }
            Self::Render { path, .. } => write!(f, "Failed to render {}", path.display()),
            Self::Write { path, .. } => write!(f, "Failed to write {}", path.display()),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Render { source, .. } => Some(source),
        }
    }
}

/// Paths written by a run, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub recipes: Vec<PathBuf>,
    pub poems: Vec<PathBuf>,
}

impl GenerationSummary {
    /// Total number of documents written.
    pub fn total(&self) -> usize {
        self.recipes.len() + self.poems.len()
    }
}

/// Lowercases `title` and replaces spaces with underscores.
pub fn slug(title: &str) -> String {
    title.replace(' ', "_").to_lowercase()
}

/// File name for the record at 1-based position `index`, e.g. `recipe_01_beef_goulash.pdf`.
pub fn file_name(kind: DocumentKind, index: usize, title: &str) -> String {
    format!("{}_{:02}_{}.pdf", kind.file_prefix(), index, slug(title))
}

/// Generates the selected record lists and writes one PDF per record.
///
/// Directories are created if missing and existing files with the same name
/// are overwritten.  The first failure stops the run; documents written
/// before it stay on disk.
pub fn run<R>(config: &GeneratorConfig, rng: &mut R) -> Result<GenerationSummary, GenerateError>
where
    R: Rng + ?Sized,
{
    let builder = PdfBuilder::new();
    let mut summary = GenerationSummary::default();

    if config.selection().includes(DocumentKind::Recipe) {
        println!("Generating recipe PDFs...");
        let recipes = generate_recipes(rng);
        summary.recipes = write_records(&builder, config, &recipes)?;
    }

    if config.selection().includes(DocumentKind::Poem) {
        if !summary.recipes.is_empty() {
            println!();
        }
        println!("Generating poem PDFs...");
        let poems = generate_poems(rng);
        summary.poems = write_records(&builder, config, &poems)?;
    }

    println!(
        "\nSuccessfully generated {} recipe PDFs and {} poem PDFs!",
        summary.recipes.len(),
        summary.poems.len()
    );
    Ok(summary)
}

fn write_records<T: SampleRecord>(
    builder: &PdfBuilder,
    config: &GeneratorConfig,
    records: &[T],
) -> Result<Vec<PathBuf>, GenerateError> {
    let directory = config.directory_for(T::KIND);
    ensure_directory(&directory)?;

    let mut written = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let path = directory.join(file_name(T::KIND, index + 1, record.title()));
        let page = templates::layout(record);
        let pdf = builder
            .render(&page)
            .map_err(|source| GenerateError::Render {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, &pdf.bytes).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;

        info!("Wrote {} ({} bytes)", path.display(), pdf.bytes.len());
        println!("Created: {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn ensure_directory(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Output directory ready: {}", path.display());
    Ok(())
}
