use std::error::Error;
use std::fmt;
use std::path::PathBuf;


#[derive(Debug)]
#[non_exhaustive]
pub struct ParseError {
    pub kind: ParseErrorKind
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.kind)
    }
}

impl Error for ParseError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.kind)
	}
}

#[derive(Debug)]
pub enum ParseErrorKind {
    FileNotFound(PathBuf),
    InvalidDirectory(PathBuf),
    InvalidVersionNumber(String),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: '{}'", path.display()),
            Self::InvalidDirectory(path) => write!(f, "Directory does not exist or is not a directory: '{}'", path.display()),
            Self::InvalidVersionNumber(name) => write!(f, "Invalid version number: '{name}'"),
            Self::Io { path, source } => write!(f, "Failed to read '{}': {source}", path.display()),
        }
    }
}

impl Error for ParseErrorKind {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Io { source, .. } => Some(source),
			_ => None,
		}
	}
}

impl ParseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParseError { kind: ParseErrorKind::Io { path: path.into(), source } }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn parse_error_display_formats_correctly() {
        let path = PathBuf::from("/tmp/dbscripts");

        let cases: Vec<(ParseErrorKind, &str)> = vec![
            (ParseErrorKind::FileNotFound(path.join("7.sql")), "File not found: '/tmp/dbscripts/7.sql'"),
            (ParseErrorKind::InvalidDirectory(path.clone()), "does not exist or is not a directory"),
            (ParseErrorKind::InvalidVersionNumber("99999999999999999999.sql".into()), "Invalid version number"),
            (
                ParseErrorKind::Io { path: path.clone(), source: io::Error::new(io::ErrorKind::PermissionDenied, "denied") },
                "Failed to read '/tmp/dbscripts': denied",
            ),
        ];

        for (kind, expect) in cases {
            let text = kind.to_string();
            assert!(text.contains(expect), "Expected `{}` in `{}`", expect, text);
        }
    }

    #[test]
    fn parse_error_source_chain_works() {
        let err = ParseError::io("/tmp/x", io::Error::new(io::ErrorKind::Other, "disk gone"));
        let kind = err.source().unwrap();
        assert!(kind.source().unwrap().to_string().contains("disk gone"));
    }
}
