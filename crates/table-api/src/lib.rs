//! Client-side table engine: fuzzy search, equality filters, sorting,
//! pagination, row selection and column visibility over an in-memory record
//! collection.

pub mod column;
pub mod descriptors;
pub mod engine;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod sort;
pub mod value;
pub mod visibility;

pub use column::{Align, CellRenderer, ColumnDescriptor};
pub use descriptors::{SearchField, TableDescriptor, TableUiDefinition};
pub use engine::{PageRow, SortControl, TableEngine, TableObserver, TableOptions, TableView};
pub use error::TableError;
pub use filter::{EqualityFilter, FilterPipeline};
pub use pagination::{PageSummary, PaginationState};
pub use search::{SearchConfig, SearchHit, SearchIndex};
pub use selection::SelectionTracker;
pub use sort::{SortDirection, SortState};
pub use value::{FieldRef, Record, TableRecord, Value};
pub use visibility::ColumnVisibility;
