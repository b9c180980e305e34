pub mod classifier;
pub mod map_url;
pub mod prompts;
pub mod providers;

pub use classifier::classify;
pub use map_url::{build_map_url, build_map_url_with_base};
