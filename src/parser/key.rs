use std::cmp::Ordering;
use std::fmt;


/// A single piece of a split filename: either a run of non-digit text or a run of digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Number(String),
}

impl Token {
    /// Digit runs compare by value: strip leading zeros, then shorter is smaller,
    /// then compare digit by digit. No integer parsing, so any length works.
    fn cmp_numeric(a: &str, b: &str) -> Ordering {
        let a_trim = a.trim_start_matches('0');
        let b_trim = b.trim_start_matches('0');

        a_trim.len()
            .cmp(&b_trim.len())
            .then_with(|| a_trim.cmp(b_trim))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            (Token::Number(a), Token::Number(b)) => Token::cmp_numeric(a, b),
            // Only reachable when comparing a digit-led name with a text-led one.
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) | Token::Number(s) => write!(f, "{s}"),
        }
    }
}


/// Natural sort key of a filename: "045.createtable.sql" -> [45, ".createtable.sql"].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionKey {
    tokens: Vec<Token>,
}

impl VersionKey {
    /// Split `name` on every maximal run of ASCII digits.
    ///
    /// Empty text between two digit runs cannot occur (runs are maximal), but the
    /// trailing text is always kept, even when empty, so keys alternate strictly.
    /// A name starting with a digit yields a number as its first token.
    pub fn parse(name: &str) -> Self {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_digits = name.starts_with(|c: char| c.is_ascii_digit());

        for c in name.chars() {
            if c.is_ascii_digit() != in_digits {
                let run = std::mem::take(&mut current);
                tokens.push(if in_digits { Token::Number(run) } else { Token::Text(run) });
                in_digits = !in_digits;
            }
            current.push(c);
        }

        if in_digits {
            tokens.push(Token::Number(current));
            tokens.push(Token::Text(String::new()));
        } else {
            tokens.push(Token::Text(current));
        }

        VersionKey { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The first digit run in the name, if any.
    pub fn first_number(&self) -> Option<&str> {
        self.tokens.iter().find_map(|token| match token {
            Token::Number(digits) => Some(digits.as_str()),
            Token::Text(_) => None,
        })
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tokens
            .cmp(&other.tokens)
            // "5.sql" and "05.sql" tie on value; fall back to the literal name.
            .then_with(|| self.to_string().cmp(&other.to_string()))
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    #[test]
    fn splits_on_digit_runs() {
        let cases: Vec<(&str, Vec<Token>)> = vec![
            ("045.createtable.sql", vec![number("045"), text(".createtable.sql")]),
            ("7.sql", vec![number("7"), text(".sql")]),
            ("120-add-index.sql", vec![number("120"), text("-add-index.sql")]),
            ("1a2", vec![number("1"), text("a"), number("2"), text("")]),
            ("readme.sql", vec![text("readme.sql")]),
            ("v2.sql", vec![text("v"), number("2"), text(".sql")]),
            ("", vec![text("")]),
        ];

        for (name, expected) in cases {
            assert_eq!(VersionKey::parse(name).tokens(), expected.as_slice(), "Wrong tokens for {name:?}");
        }
    }

    #[test]
    fn display_restores_the_name() {
        for name in ["045.createtable.sql", "1a2", "readme.sql", "10_20_30.sql"] {
            assert_eq!(VersionKey::parse(name).to_string(), name);
        }
    }

    #[test]
    fn first_number_is_leading_digit_run() {
        assert_eq!(VersionKey::parse("045.createtable.sql").first_number(), Some("045"));
        assert_eq!(VersionKey::parse("7.sql").first_number(), Some("7"));
        assert_eq!(VersionKey::parse("readme.sql").first_number(), None);
    }

    #[test]
    fn orders_numerically_not_lexically() {
        let mut names = vec!["9.sql", "10.sql", "2.sql"];
        names.sort_by_key(|name| VersionKey::parse(name));
        assert_eq!(names, vec!["2.sql", "9.sql", "10.sql"]);
    }

    #[test]
    fn compares_remaining_tokens_when_leading_numbers_tie() {
        let mut names = vec!["5b10.sql", "5b9.sql", "5a.sql", "4z.sql"];
        names.sort_by_key(|name| VersionKey::parse(name));
        assert_eq!(names, vec!["4z.sql", "5a.sql", "5b9.sql", "5b10.sql"]);
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert!(VersionKey::parse("045.sql") < VersionKey::parse("46.sql"));
        assert!(VersionKey::parse("0100.sql") > VersionKey::parse("99.sql"));
        assert_ne!(VersionKey::parse("5.sql"), VersionKey::parse("05.sql"));
    }

    #[test]
    fn handles_digit_runs_longer_than_any_integer() {
        let big = "123456789012345678901234567890.sql";
        let bigger = "923456789012345678901234567890.sql";
        assert!(VersionKey::parse(big) < VersionKey::parse(bigger));
        assert!(VersionKey::parse("99.sql") < VersionKey::parse(big));
    }
}
