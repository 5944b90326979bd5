pub mod bulk_delete;
pub mod selection;
pub mod test_board;

pub use bulk_delete::{delete_many, BulkDeleteReport};
pub use selection::Selection;
pub use test_board::{BulkDeleteOutcome, MutationOutcome, ReorderOutcome, TestBoard};
