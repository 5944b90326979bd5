pub mod logging;
pub mod media;
pub mod payload;

pub use media::resolve_media_url;
pub use payload::load_json_payload;
