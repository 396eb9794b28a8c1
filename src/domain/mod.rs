//! Storage-agnostic domain types.

pub mod result_set;
pub mod stats;
pub mod table;
pub mod timestamp;

pub use result_set::{ResultSet, TableRow};
pub use table::{Section, StudyTable};
pub use timestamp::ColumnKind;
