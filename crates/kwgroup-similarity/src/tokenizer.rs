//! Query tokenization with script-aware minimum token length.

/// Characters (besides whitespace) that split tokens.
pub const TOKEN_SEPARATORS: &[char] = &[
    ' ', '-', '_', ',', ';', ':', '.', '!', '?', '(', ')', '[', ']', '{', '}', '\'', '"',
];

/// Minimum token length for Latin and other space-delimited scripts.
pub const MIN_TOKEN_LEN: usize = 2;

/// Minimum token length when the text contains CJK characters.
pub const MIN_TOKEN_LEN_CJK: usize = 1;

/// Han, Hiragana, Katakana, or Hangul.
pub fn is_cjk_char(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{20000}'..='\u{2A6DF}' // Extension B
        | '\u{F900}'..='\u{FAFF}'   // Compatibility Ideographs
        | '\u{3040}'..='\u{309F}'   // Hiragana
        | '\u{30A0}'..='\u{30FF}'   // Katakana
        | '\u{31F0}'..='\u{31FF}'   // Katakana Phonetic Extensions
        | '\u{AC00}'..='\u{D7AF}'   // Hangul Syllables
        | '\u{1100}'..='\u{11FF}'   // Hangul Jamo
        | '\u{3130}'..='\u{318F}'   // Hangul Compatibility Jamo
    )
}

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_char)
}

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || TOKEN_SEPARATORS.contains(&c)
}

/// Lowercase and split on whitespace and separators, dropping empty pieces.
/// No length filter.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokens used for the token-Jaccard signal.
///
/// CJK text keeps single-character tokens, since a lone ideograph is often a
/// whole word; other scripts drop tokens shorter than two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let min_len = if contains_cjk(text) {
        MIN_TOKEN_LEN_CJK
    } else {
        MIN_TOKEN_LEN
    };
    split_tokens(text)
        .into_iter()
        .filter(|t| t.chars().count() >= min_len)
        .collect()
}
