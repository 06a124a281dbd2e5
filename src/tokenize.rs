//! Text to word tokenization: lowercase, then emit maximal runs of word characters.

use crate::count::WordCount;

/// Word characters are letters, digits and underscore; everything else delimits.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase words, in order of appearance.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in lowered.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                words.push(lowered[s..i].to_string());
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(lowered[s..].to_string());
    }
    words
}

/// Count the words of a single fragment.
pub fn tokenize(fragment: &str) -> WordCount {
    let mut counts = WordCount::new();
    for word in words(fragment) {
        counts.add(word);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_strips_punctuation() {
        let counts = tokenize("Hello, hello world!");
        assert_eq!(counts.get("hello"), 2);
        assert_eq!(counts.get("world"), 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn digits_and_underscores_are_word_characters() {
        assert_eq!(words("snake_case 42nd--x"), vec!["snake_case", "42nd", "x"]);
    }

    #[test]
    fn non_ascii_letters_stay_inside_words() {
        assert_eq!(words("Привіт, СВІТ! café"), vec!["привіт", "світ", "café"]);
    }

    #[test]
    fn delimiters_only_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t,.;!? -").is_empty());
    }

    #[test]
    fn same_fragment_tokenizes_identically() {
        let fragment = "The quick brown fox.\nThe lazy dog; the END";
        assert_eq!(tokenize(fragment), tokenize(fragment));
        assert_eq!(tokenize(fragment).get("the"), 3);
    }
}
