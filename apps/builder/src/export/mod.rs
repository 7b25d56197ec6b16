//! Document exporter: rendered document tree → rasterized bitmap → A4 PDF
//! → local download file.
//!
//! Rasterization is an injected capability ([`Rasterizer`]) so the export
//! flow is testable without a real rendering surface; hosts plug in whatever
//! surface they render with. PDF assembly is CPU-bound and runs inside
//! `tokio::task::spawn_blocking`.
//!
//! Failure policy: any rasterization or assembly error is caught here,
//! logged, and surfaced as a single error. No partial file is left behind,
//! and the exporter holds no retry state — a failed export is re-triggered
//! by the user.

pub mod packager;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use image::RgbaImage;
use tracing::{error, info};

use crate::errors::BuilderError;
use crate::models::PersonalInfo;
use crate::templates::Document;

pub use packager::{PdfPackager, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// Upscaling factor rasterizer implementations should apply for
/// print-quality output.
pub const RASTER_SCALE: u32 = 2;

/// Capability that paints a document tree into a bitmap.
///
/// Implementations own the rendering surface (headless browser, canvas,
/// native painter). The call is not abortable: once an export starts there
/// is no cancellation path, only completion or error.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, document: &Document) -> Result<RgbaImage, BuilderError>;
}

/// Download file name: `{first}_{last}.pdf`, substituting `Resume` /
/// `Document` for empty name fields.
pub fn pdf_file_name(info: &PersonalInfo) -> String {
    let first = if info.first_name.trim().is_empty() {
        "Resume"
    } else {
        info.first_name.trim()
    };
    let last = if info.last_name.trim().is_empty() {
        "Document"
    } else {
        info.last_name.trim()
    };
    format!("{first}_{last}.pdf")
}

pub struct Exporter {
    rasterizer: Arc<dyn Rasterizer>,
    packager: PdfPackager,
}

impl Exporter {
    pub fn new(rasterizer: Arc<dyn Rasterizer>) -> Self {
        Self {
            rasterizer,
            packager: PdfPackager::default(),
        }
    }

    /// Exports the document as a PDF download into `out_dir` and returns the
    /// written path. The file name derives from the resume owner's name.
    pub async fn export_to_pdf(
        &self,
        document: &Document,
        info: &PersonalInfo,
        out_dir: &Path,
    ) -> Result<PathBuf, BuilderError> {
        match self.run(document, info, out_dir).await {
            Ok(path) => {
                info!(path = %path.display(), "resume PDF exported");
                Ok(path)
            }
            Err(e) => {
                error!("resume export failed: {e}");
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        document: &Document,
        info: &PersonalInfo,
        out_dir: &Path,
    ) -> Result<PathBuf, BuilderError> {
        let bitmap = self.rasterizer.rasterize(document).await?;

        let packager = self.packager.clone();
        let bytes = tokio::task::spawn_blocking(move || packager.package(&bitmap))
            .await
            .map_err(|e| {
                BuilderError::Internal(anyhow::anyhow!("PDF assembly task failed: {e}"))
            })??;

        let path = out_dir.join(pdf_file_name(info));
        // Stage under a temporary name so a failed write never leaves a
        // partial artifact at the download path.
        let staged = path.with_extension("pdf.part");
        if let Err(e) = tokio::fs::write(&staged, &bytes).await {
            let _ = tokio::fs::remove_file(&staged).await;
            return Err(BuilderError::Io(e));
        }
        tokio::fs::rename(&staged, &path).await?;
        Ok(path)
    }
}
