//! Date-range detection and rewrite engine for Word documents.
//!
//! The pipeline: an uploaded archive is opened into a [`ShiftSession`],
//! which detects date-range expressions per document, computes one
//! replacement per unique expression under the selected policy, and
//! rewrites each document's markup by exact whole-string substitution,
//! producing a new archive with one entry per input document.

pub mod dates;
pub mod detector;
pub mod error;
pub mod patterns;
pub mod planner;
pub mod session;
pub mod substitute;

pub use detector::detect_ranges;
pub use error::ShiftError;
pub use patterns::find_date_ranges;
pub use planner::{apply_plan, plan_replacements};
pub use session::{ProcessOutput, SessionDocument, ShiftSession};
