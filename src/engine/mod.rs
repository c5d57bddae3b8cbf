pub mod config;
pub mod error;
pub mod timing;

pub use config::{ReaderConfig, WindowConfig};
pub use error::{ReaderError, Result};
pub use timing::{is_end_of_sentence, wpm_to_milliseconds};
