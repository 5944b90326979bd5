pub mod notifier;
pub mod part_backend;

pub use notifier::{Notifier, TracingNotifier};
pub use part_backend::PartBackend;
