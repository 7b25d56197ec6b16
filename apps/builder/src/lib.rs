//! Resume builder core: a structured resume model, a ten-variant template
//! renderer, a two-slot inline editor, an A4 PDF exporter, and four intake
//! adapters that normalize heterogeneous input into the shared model.
//!
//! The flow is one-directional: intake produces a validated [`ResumeData`],
//! the editor stages edits against it, the renderer projects it into a
//! [`templates::Document`] tree, and the exporter rasterizes and packages
//! that tree into a PDF download.

pub mod config;
pub mod editor;
pub mod errors;
pub mod export;
pub mod intake;
pub mod layout;
pub mod models;
pub mod templates;

pub use config::Config;
pub use editor::{ResumeEditor, ResumePatch};
pub use errors::BuilderError;
pub use export::{pdf_file_name, Exporter, Rasterizer};
pub use intake::IntakeAdapter;
pub use models::ResumeData;
pub use templates::{render, Document, TemplateId};
