pub mod elearning_client;
pub mod submission_api;
pub mod test_api;
pub mod user_api;
pub mod vocabulary_api;

pub use elearning_client::ElearningClient;
