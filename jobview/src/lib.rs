pub mod error;
pub mod markup;
pub mod row;
pub mod status;
pub mod timing;
pub mod types;
pub mod view;

pub use row::{JobRowProps, JobRowView, OnDelete, ResourceLine, ResourceStrip};
pub use status::{SeverityClassifier, StatusClassifier};
pub use timing::{RunTimingPanel, TimingPanel};
pub use types::{decode_jobs, JobId, JobRecord, ResourceSpec, Resources};
pub use view::{Element, Node};
