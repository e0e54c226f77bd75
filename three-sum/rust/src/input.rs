use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("'{token}' is not a valid 32-bit integer")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("sequence has an opening or closing bracket without its pair")]
    UnbalancedBracket,
}

type Error = InputError;
type Result<T> = std::result::Result<T, Error>;

/// Parses a sequence such as `[-1, 0, 1]`, `-1,0,1` or `-1 0 1`
///
/// ```
/// use three_sum::input::parse_sequence;
///
/// assert_eq!(vec![-1, 0, 1], parse_sequence("[-1, 0, 1]").unwrap());
/// assert!(parse_sequence("[]").unwrap().is_empty());
/// ```
pub fn parse_sequence(s: &str) -> Result<Vec<i32>> {
    let s = s.trim();
    let body = match (s.strip_prefix('['), s.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => s,
        _ => return Err(Error::UnbalancedBracket),
    };

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|source| Error::InvalidInteger {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed() {
        let result = parse_sequence("[-1, 0, 1, 2, -1, -4]").unwrap();
        assert_eq!(vec![-1, 0, 1, 2, -1, -4], result);
    }

    #[test]
    fn bare_commas() {
        assert_eq!(vec![-2, 0, 1], parse_sequence("-2,0,1").unwrap());
    }

    #[test]
    fn whitespace_separated() {
        assert_eq!(vec![0, 0, 0], parse_sequence("  0 0\t0 ").unwrap());
    }

    #[test]
    fn empty() {
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence("[]").unwrap().is_empty());
        assert!(parse_sequence("[ ]").unwrap().is_empty());
    }

    #[test]
    fn invalid_token() {
        let err = parse_sequence("[1, x, 2]").unwrap_err();
        assert!(matches!(err, InputError::InvalidInteger { ref token, .. } if token == "x"));
        assert_eq!("'x' is not a valid 32-bit integer", err.to_string());
    }

    #[test]
    fn out_of_range() {
        let err = parse_sequence("2147483648").unwrap_err();
        assert!(matches!(err, InputError::InvalidInteger { .. }));
    }

    #[test]
    fn unbalanced() {
        assert_eq!(Err(InputError::UnbalancedBracket), parse_sequence("[1, 2"));
        assert_eq!(Err(InputError::UnbalancedBracket), parse_sequence("1, 2]"));
    }
}
