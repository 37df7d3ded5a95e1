use crossterm::event::KeyCode;

/// Longest label the rename prompt accepts
pub const MAX_LABEL_LEN: usize = 40;

/// Manages text input cursor state
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    cursor_pos: usize, // Character index (0 = before first char)
}

impl TextInputState {
    pub fn new() -> Self {
        Self { cursor_pos: 0 }
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn set_cursor_to_end(&mut self, text: &str) {
        self.cursor_pos = text.chars().count();
    }

    /// Handle a key press against `current_value`.
    /// Returns Some(new_value) if text changed, None if only the cursor moved.
    pub fn handle_key(&mut self, key: KeyCode, current_value: &str, max_length: Option<usize>) -> Option<String> {
        let char_count = current_value.chars().count();

        match key {
            KeyCode::Char(c) => {
                if max_length.is_some_and(|max| char_count >= max) {
                    return None;
                }
                let mut chars: Vec<char> = current_value.chars().collect();
                chars.insert(self.cursor_pos, c);
                self.cursor_pos += 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Backspace => {
                if self.cursor_pos == 0 {
                    return None;
                }
                let mut chars: Vec<char> = current_value.chars().collect();
                chars.remove(self.cursor_pos - 1);
                self.cursor_pos -= 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Delete => {
                if self.cursor_pos >= char_count {
                    return None;
                }
                let mut chars: Vec<char> = current_value.chars().collect();
                chars.remove(self.cursor_pos);
                Some(chars.into_iter().collect())
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_pos < char_count {
                    self.cursor_pos += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                None
            }
            KeyCode::End => {
                self.cursor_pos = char_count;
                None
            }
            _ => None,
        }
    }
}

/// What a rename prompt will rename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameTarget {
    Category(usize),
    Item { category: usize, item: usize },
}

/// In-progress rename of one tab
#[derive(Debug, Clone)]
pub struct RenamePrompt {
    target: RenameTarget,
    value: String,
    input: TextInputState,
}

impl RenamePrompt {
    /// Start editing with the current label, cursor at the end
    pub fn new(target: RenameTarget, current_label: &str) -> Self {
        let mut input = TextInputState::new();
        input.set_cursor_to_end(current_label);
        Self {
            target,
            value: current_label.to_string(),
            input,
        }
    }

    pub fn target(&self) -> RenameTarget {
        self.target
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.input.cursor_pos()
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(value) = self.input.handle_key(key, &self.value, Some(MAX_LABEL_LEN)) {
            self.value = value;
        }
    }
}
