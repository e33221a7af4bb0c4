//! Interfaces of the external collaborators the engine consumes.

mod archive;
mod ledger;
mod renderer;

pub use archive::ICaseArchive;
pub use ledger::IResourceLedger;
pub use renderer::{ChartImage, IReportRenderer, RenderedReport};
