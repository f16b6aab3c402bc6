use std::error::Error;
use std::fmt;


#[derive(Debug)]
#[non_exhaustive]
pub struct EngineError {
    pub kind: EngineErrorKind
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EngineError: {}", self.kind)
    }
}

impl Error for EngineError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.kind)
	}
}

#[derive(Debug)]
pub enum EngineErrorKind {
    MalformedVersion(String),
    NegativeVersion(i64),
    SQLX(sqlx::Error),
    VersionRowMissing(&'static str),
}

impl fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedVersion(value) => write!(f, "Stored version is not an integer: '{value}'"),
            Self::NegativeVersion(version) => write!(f, "Stored version is negative: {version}"),
            Self::SQLX(e) => write!(f, "{e}"),
            Self::VersionRowMissing(table) => write!(f, "Version table '{table}' has no row"),
        }
    }
}

impl Error for EngineErrorKind {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::SQLX(source) => Some(source),
			_ => None,
		}
	}
}

impl From<sqlx::Error> for EngineError {
    fn from(error: sqlx::Error) -> Self {
        EngineError { kind: EngineErrorKind::SQLX(error) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_display_formats_correctly() {
        let cases: Vec<(EngineErrorKind, &str)> = vec![
            (EngineErrorKind::MalformedVersion("12abc".into()), "Stored version is not an integer: '12abc'"),
            (EngineErrorKind::NegativeVersion(-3), "Stored version is negative: -3"),
            (EngineErrorKind::SQLX(sqlx::Error::RowNotFound), "no rows returned"),
            (EngineErrorKind::VersionRowMissing("versionTable"), "Version table 'versionTable' has no row"),
        ];

        for (kind, expect) in cases {
            let text = kind.to_string();
            assert!(text.contains(expect), "Expected `{}` in `{}`", expect, text);
        }
    }

    #[test]
    fn engine_error_from_sqlx() {
        let e: EngineError = sqlx::Error::PoolTimedOut.into();

        assert!(matches!(e.kind, EngineErrorKind::SQLX(_)));
        assert!(e.kind.source().is_some());
    }
}
