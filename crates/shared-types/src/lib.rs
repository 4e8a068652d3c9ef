pub mod types;

pub use types::{
    DetectedRange, DocumentRecord, DocumentStatus, PatternKind, ProcessOutcome, ReplacementPolicy,
    TextContainer,
};
