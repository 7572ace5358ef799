//! Export seam. Nothing is generated or transferred by the built-in exporter.

use crate::categories::CategoryFlags;
use crate::document::Document;
use crate::error::Result;

pub struct ExportRequest<'a> {
    pub document: &'a Document,
    pub categories: CategoryFlags,
}

pub trait DocumentExporter {
    fn export(&mut self, request: &ExportRequest<'_>) -> Result<()>;
}

/// Accepts every request and does nothing with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExporter;

impl DocumentExporter for NoopExporter {
    fn export(&mut self, _request: &ExportRequest<'_>) -> Result<()> {
        Ok(())
    }
}
