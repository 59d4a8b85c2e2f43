/// Reduces raw text-field input to the single uppercase letter the
/// engine accepts, mirroring a one-character entry box: anything
/// non-alphabetic is stripped and only the most recent letter counts.
///
/// Returns `None` when no letter survives, which the caller should
/// treat as "nothing submitted".
pub fn normalize_guess(raw: &str) -> Option<char> {
    raw.chars()
        .rev()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(normalize_guess(""), None);
    }

    #[test]
    fn single_letter_is_uppercased() {
        assert_eq!(normalize_guess("a"), Some('A'));
        assert_eq!(normalize_guess("Z"), Some('Z'));
    }

    #[test]
    fn last_letter_wins() {
        assert_eq!(normalize_guess("ab"), Some('B'));
        assert_eq!(normalize_guess("CAT"), Some('T'));
    }

    #[test]
    fn non_alphabetic_characters_are_stripped() {
        assert_eq!(normalize_guess("3!?"), None);
        assert_eq!(normalize_guess("a1"), Some('A'));
        assert_eq!(normalize_guess(" q "), Some('Q'));
    }

    #[test]
    fn non_ascii_letters_are_rejected() {
        assert_eq!(normalize_guess("é"), None);
    }
}
