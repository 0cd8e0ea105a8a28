const PLACEHOLDER: char = '_';

/// Masked rendering of a word: its first character plus one placeholder per
/// remaining character, e.g. `"a _ _ _ _"` for `"apple"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub masked: String,
    pub char_count: usize,
}

impl Hint {
    #[must_use]
    pub fn for_word(word: &str) -> Self {
        let mut chars = word.chars();
        let mut masked = String::with_capacity(word.len() * 2);
        let mut char_count = 0;

        if let Some(first) = chars.next() {
            masked.push(first);
            char_count = 1;
        }
        for _ in chars {
            masked.push(' ');
            masked.push(PLACEHOLDER);
            char_count += 1;
        }

        Self { masked, char_count }
    }
}
