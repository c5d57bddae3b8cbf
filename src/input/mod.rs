pub mod args;
pub mod text;

pub use args::{open_source, parse_args, Launch, LaunchOptions, SourceArg, USAGE};
pub use text::{split_words, words_from_file};
