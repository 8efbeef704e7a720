/// Splits `text` on runs of ASCII space (byte `0x20`). Leading, trailing, and
/// consecutive spaces never produce empty tokens. Returned slices alias
/// `text` and allocate nothing beyond the result vector itself.
pub fn split(text: &str) -> Vec<&str> {
    text.split(' ').filter(|token| !token.is_empty()).collect()
}
