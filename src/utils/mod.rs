pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{link_path, local_filename};
