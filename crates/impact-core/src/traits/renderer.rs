use crate::errors::ImpactResult;
use crate::models::{AssessmentRecord, ReportSummary};

/// A pre-rendered chart handed to the renderer as an opaque image.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartImage {
    pub title: String,
    /// Encoded image bytes (PNG or whatever the renderer accepts).
    pub bytes: Vec<u8>,
}

/// Output of a renderer: a paginated document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Turns a computed assessment into a document.
///
/// The renderer owns page geometry, fonts, and watermarking. It receives the
/// record, the narrative, and pre-formatted figures only.
pub trait IReportRenderer {
    fn render(
        &self,
        record: &AssessmentRecord,
        summary: &ReportSummary,
        charts: &[ChartImage],
    ) -> ImpactResult<RenderedReport>;
}
