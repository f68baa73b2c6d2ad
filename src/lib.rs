//! Core entry point for the sample_pdfs crate.
//!
//! Generates recipe and poem PDFs that serve as fixtures for document
//! processing tests.  See [`generate::run`] for the batch driver.

pub mod builder;
pub mod fonts;
pub mod generate;
pub mod layout;
pub mod model;
pub mod samples;
pub mod templates;
