use std::fmt;

/// Byte value reserved for the `ZERO` padding sentinel.
pub const ZERO_CHAR: char = '\u{0}';
/// Byte value reserved for the `START` sentinel.
pub const START_CHAR: char = '\u{2}';
/// Byte value reserved for the `END` sentinel.
pub const END_CHAR: char = '\u{3}';

/// A single slot of a context key.
///
/// Sentinels are their own variants, so no corpus word can ever be mistaken
/// for one of them, whatever bytes it contains.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	/// Padding for positions more than one step before the start of a line.
	Zero,
	/// Position immediately before the first word of a line.
	Start,
	/// Position immediately after the last word of a line.
	End,
	/// A sanitized corpus word (may be empty).
	Word(String),
}

impl Token {
	/// Returns the word carried by this token, if any.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Token::Word(w) => Some(w),
			_ => None,
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Zero => f.write_str("<zero>"),
			Token::Start => f.write_str("<start>"),
			Token::End => f.write_str("<end>"),
			Token::Word(w) => f.write_str(w),
		}
	}
}

fn is_sentinel(c: char) -> bool {
	matches!(c, ZERO_CHAR | START_CHAR | END_CHAR)
}

/// Removes every reserved sentinel character from a word.
pub fn sanitize(word: &str) -> String {
	word.chars().filter(|c| !is_sentinel(*c)).collect()
}

/// Splits a corpus line on whitespace and sanitizes each word.
///
/// Words made only of sentinel characters survive as empty strings.
pub fn tokenize(line: &str) -> Vec<String> {
	line.split_whitespace().map(sanitize).collect()
}
