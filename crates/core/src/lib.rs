pub mod catalog;
pub mod error;
pub mod ids;
pub mod index;
pub mod pdf;
pub mod predicate;

pub use catalog::Catalog;
pub use error::CoreError;
pub use ids::SnapshotId;
pub use index::Index;
pub use pdf::{Directory, FileSize, Pdf, PdfName, Tag};
pub use predicate::PdfPredicate;
