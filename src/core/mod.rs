//! Core building blocks shared by the tools

pub mod batch;
pub mod catalog;
pub mod confirm;
pub mod pagination;
pub mod taxonomy;

pub use batch::{BatchConfig, BatchDriver, BatchObserver, BatchSummary};
pub use catalog::{Product, ProductGenerator};
pub use confirm::{AutoConfirm, ConfirmationProvider, TerminalConfirmation};
pub use pagination::{FetchOutcome, PaginationReader};
pub use taxonomy::{Classifier, Taxonomy};
