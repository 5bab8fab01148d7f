//! Token classification for command-line arguments.
//!
//! Each raw argument is classified into exactly one [`Token`] variant. The
//! grammar is:
//!
//! ```text
//! short    := "-" ident [ "=" value ]
//! long     := "--" ident [ "=" value ]
//! ident    := alnum [ (alnum | "." | "_" | "-")* alnum ]
//! value    := one or more characters
//! ```
//!
//! Anything else is [`Token::Malformed`].

use command_less_core::is_identifier;

/// A classified argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `-a`
    ShortSingle(char),
    /// `-abc`: flags processed left to right.
    ShortCombined(Vec<char>),
    /// `-o=value`: the key is the first character after the dash.
    ShortEq { key: char, value: String },
    /// `--name=value`
    LongEq { key: String, value: String },
    /// `--name`
    LongBare(String),
    /// Matches neither grammar.
    Malformed(String),
}

/// Classifies a single argument.
pub fn classify(arg: &str) -> Token {
    if let Some(body) = arg.strip_prefix("--") {
        return classify_long(arg, body);
    }
    if let Some(body) = arg.strip_prefix('-') {
        return classify_short(arg, body);
    }
    Token::Malformed(arg.to_string())
}

fn classify_short(arg: &str, body: &str) -> Token {
    if let Some((name, value)) = body.split_once('=') {
        return match name.chars().next() {
            Some(key) if is_identifier(name) && !value.is_empty() => Token::ShortEq {
                key,
                value: value.to_string(),
            },
            _ => Token::Malformed(arg.to_string()),
        };
    }

    if !is_identifier(body) {
        return Token::Malformed(arg.to_string());
    }

    let mut chars: Vec<char> = body.chars().collect();
    if chars.len() == 1 {
        Token::ShortSingle(chars.remove(0))
    } else {
        Token::ShortCombined(chars)
    }
}

fn classify_long(arg: &str, body: &str) -> Token {
    if let Some((name, value)) = body.split_once('=') {
        if is_identifier(name) && !value.is_empty() {
            return Token::LongEq {
                key: name.to_string(),
                value: value.to_string(),
            };
        }
        return Token::Malformed(arg.to_string());
    }

    if is_identifier(body) {
        Token::LongBare(body.to_string())
    } else {
        Token::Malformed(arg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(arg: &str) -> Token {
        Token::Malformed(arg.to_string())
    }

    #[test]
    fn test_short_single() {
        assert_eq!(classify("-a"), Token::ShortSingle('a'));
        assert_eq!(classify("-7"), Token::ShortSingle('7'));
    }

    #[test]
    fn test_short_combined() {
        assert_eq!(classify("-abc"), Token::ShortCombined(vec!['a', 'b', 'c']));
        assert_eq!(
            classify("-option-name"),
            Token::ShortCombined("option-name".chars().collect())
        );
    }

    #[test]
    fn test_short_with_value() {
        assert_eq!(
            classify("-o=5"),
            Token::ShortEq {
                key: 'o',
                value: "5".to_string()
            }
        );
        assert_eq!(
            classify("-option_name=val.ues."),
            Token::ShortEq {
                key: 'o',
                value: "val.ues.".to_string()
            }
        );
    }

    #[test]
    fn test_value_keeps_everything_after_first_equals() {
        assert_eq!(
            classify("--define=key=value"),
            Token::LongEq {
                key: "define".to_string(),
                value: "key=value".to_string()
            }
        );
        assert_eq!(
            classify("-f=/tmp/history"),
            Token::ShortEq {
                key: 'f',
                value: "/tmp/history".to_string()
            }
        );
    }

    #[test]
    fn test_long_forms() {
        assert_eq!(
            classify("--history-file"),
            Token::LongBare("history-file".to_string())
        );
        assert_eq!(
            classify("--flag=5"),
            Token::LongEq {
                key: "flag".to_string(),
                value: "5".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_tokens() {
        for arg in ["-", "--", "---x", "-=x", "--=x", "-a=", "--a=", "word", "", "-a b", "-a_"] {
            assert_eq!(classify(arg), malformed(arg), "{arg:?}");
        }
    }
}
