//! Download the Fama-French 12 industry portfolio returns and save one section
//! (monthly or annual, value- or equal-weighted) as a CSV of decimal fractions.

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod process;
pub mod write;

pub use error::{ArchiveError, Error, FetchError, Result};
pub use process::{ParsedTable, Period, SectionSelector, Weighting};
