/// Comma-separated string tokeniser
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTokeniser;

impl StringTokeniser {
    pub fn new() -> Self {
        Self
    }

    /// Splits on `,`, trims surrounding whitespace and drops empty tokens.
    pub fn tokenise(&self, input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }
}
