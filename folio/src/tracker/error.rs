//! Error types for the tracker module

use super::section::SectionId;
use thiserror::Error;

/// Errors raised while constructing tracker state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// No sections were declared
    #[error("Section list must contain at least one section")]
    EmptySectionList,

    /// A section id is empty or whitespace
    #[error("Section ids must not be blank")]
    BlankSectionId,

    /// The same id was declared twice
    #[error("Section '{0}' is declared more than once")]
    DuplicateSection(SectionId),

    /// The configured initial section is not part of the section list
    #[error("Initial section '{0}' is not one of the declared sections")]
    UnknownInitialSection(SectionId),

    /// Activation offset is NaN or infinite
    #[error("Activation offset must be a finite number, got {0}")]
    InvalidActivationOffset(f64),
}

/// Errors reported by a geometry provider while sampling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The element exists but is no longer attached to the layout
    #[error("Section '{0}' is detached from the layout")]
    Detached(SectionId),

    /// The provider produced NaN or infinite bounds
    #[error("Section '{0}' reported non-finite bounds")]
    NonFinite(SectionId),
}
