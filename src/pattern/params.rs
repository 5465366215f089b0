//! Printf-style placeholders in parameterized test titles.
//!
//! `it.each` / `describe.each` titles carry tokens such as `%i` or `%s` that
//! the runner substitutes per case. A filter built from the template title has
//! to accept any substituted value, so each recognised token becomes a
//! wildcard sub-pattern.
//!
//! | token        | replacement     |
//! |--------------|-----------------|
//! | `%i`, `%#`   | `\d*`           |
//! | `%d`, `%f`   | `\d*(\.\d*)?`   |
//! | `%p`, `%s`, `%j`, `%o` | `.*`  |
//!
//! `%%` and unknown tokens are left as they are.

/// A placeholder recognised by [`translate_parameter_tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterToken {
    /// `%i`
    Integer,
    /// `%#`, the index of the case.
    Index,
    /// `%d`
    Number,
    /// `%f`
    Float,
    /// `%p`, pretty-formatted value.
    Pretty,
    /// `%s`
    String,
    /// `%j`
    Json,
    /// `%o`
    Object,
}

const INTEGER_PATTERN: &str = r"\d*";
const DECIMAL_PATTERN: &str = r"\d*(\.\d*)?";
const ANY_PATTERN: &str = ".*";

impl ParameterToken {
    /// Maps the character following `%` to its token. Case-sensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::Integer),
            '#' => Some(Self::Index),
            'd' => Some(Self::Number),
            'f' => Some(Self::Float),
            'p' => Some(Self::Pretty),
            's' => Some(Self::String),
            'j' => Some(Self::Json),
            'o' => Some(Self::Object),
            _ => None,
        }
    }

    /// The regex fragment accepting every value the runner can substitute.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Integer | Self::Index => INTEGER_PATTERN,
            Self::Number | Self::Float => DECIMAL_PATTERN,
            Self::Pretty | Self::String | Self::Json | Self::Object => ANY_PATTERN,
        }
    }
}

/// Replaces parameter tokens in an already escaped title fragment.
///
/// The escaper turns `#` into `\#`, so `%\#` is read as the `%#` token. The
/// result must not be escaped again.
pub fn translate_parameter_tokens(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('%'),
            Some('\\') if chars.peek() == Some(&'#') => {
                chars.next();
                out.push_str(ParameterToken::Index.pattern());
            }
            // `%%` lands here too, which keeps its second `%` from starting a token.
            Some(next) => match ParameterToken::from_char(next) {
                Some(token) => out.push_str(token.pattern()),
                None => {
                    out.push('%');
                    out.push(next);
                }
            },
        }
    }
    out
}

/// Escapes a raw title and then translates its parameter tokens.
pub fn title_pattern(raw: &str) -> String {
    translate_parameter_tokens(&regex::escape(raw))
}
