mod error;
mod io;
mod key;

pub use error::{ParseError, ParseErrorKind};
pub use io::{collect_scripts_from_directory, is_script_file_name, parse_version_from_file_name, SCRIPT_EXTENSION};
pub use key::{Token, VersionKey};
