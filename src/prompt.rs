//! Single-line path prompt for loading data files.

/// Prompt state.
#[derive(Debug, Default)]
pub struct PromptState {
    is_active: bool,
    buffer: String,
    last: String,
}

impl PromptState {
    /// Create an inactive prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the prompt is accepting input.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Open the prompt, prefilled with the last submitted path.
    pub fn start(&mut self) {
        self.is_active = true;
        self.buffer = self.last.clone();
    }

    /// Add a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Close the prompt and return the trimmed path, if any was typed.
    pub fn submit(&mut self) -> Option<String> {
        self.is_active = false;
        let path = self.buffer.trim().to_string();
        self.buffer.clear();
        if path.is_empty() {
            return None;
        }
        self.last.clone_from(&path);
        Some(path)
    }

    /// Close the prompt without submitting.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.buffer.clear();
    }

    /// Get the text typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_returns_trimmed_path() {
        let mut p = PromptState::new();
        p.start();
        for c in " data.txt ".chars() {
            p.input(c);
        }
        assert_eq!(p.submit().as_deref(), Some("data.txt"));
        assert!(!p.is_active());
    }

    #[test]
    fn reopening_prefills_last_path() {
        let mut p = PromptState::new();
        p.start();
        p.input('a');
        p.submit();
        p.start();
        assert_eq!(p.buffer(), "a");
        p.backspace();
        assert_eq!(p.submit(), None);
    }

    #[test]
    fn cancel_discards_input() {
        let mut p = PromptState::new();
        p.start();
        p.input('x');
        p.cancel();
        assert!(!p.is_active());
        assert_eq!(p.buffer(), "");
    }
}
