pub mod account;
pub mod attempt;
pub mod display_list;
pub mod envelope;
pub mod item;
pub mod part;
pub mod test_detail;
pub mod vocabulary;

pub use account::User;
pub use attempt::AttemptSummary;
pub use display_list::DisplayList;
pub use envelope::{ApiResponse, PageData};
pub use item::{ItemId, OrderedItem, PartItem};
pub use part::{PartDescriptor, PartKey};
pub use test_detail::TestDetail;
pub use vocabulary::{VocabCategory, VocabWord};
