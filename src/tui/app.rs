use crossterm::event::KeyCode;
use log::{debug, warn};
use ratatui::layout::Rect;

use super::prompt::{RenamePrompt, RenameTarget};
use super::render::screen_layout;
use super::theme::Theme;
use crate::nav::AreaController;

/// Interactive state of the navigation screen
pub struct NavApp {
    controller: AreaController,
    theme: Theme,
    prompt: Option<RenamePrompt>,
    status: Option<String>,
    quit: bool,
}

impl NavApp {
    pub fn new(controller: AreaController, theme: Theme) -> Self {
        Self {
            controller,
            theme,
            prompt: None,
            status: None,
            quit: false,
        }
    }

    pub fn controller(&self) -> &AreaController {
        &self.controller
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn prompt(&self) -> Option<&RenamePrompt> {
        self.prompt.as_ref()
    }

    /// Last warning shown in the footer
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Lay the areas out for a terminal of the given size
    pub fn resize(&mut self, area: Rect) {
        let layout = screen_layout(area, self.controller.area_count());
        for (id, rect) in layout.areas.iter().enumerate() {
            self.controller.set_geometry(id, *rect);
        }
    }

    /// Handle a key press. Returns true if the key did something.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return true;
        }

        self.status = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
                true
            }
            KeyCode::Right => self.controller.next_category(),
            KeyCode::Left => self.controller.prev_category(),
            KeyCode::Tab => self.controller.next_item(),
            KeyCode::BackTab => self.controller.prev_item(),
            KeyCode::Char(c @ '1'..='9') => {
                let id = c as usize - '1' as usize;
                self.controller.activate(id)
            }
            KeyCode::F(2) => self.begin_item_rename(),
            KeyCode::F(3) => self.begin_category_rename(),
            _ => false,
        }
    }

    fn begin_item_rename(&mut self) -> bool {
        let tree = self.controller.tree();
        let Some((category, item)) = tree.current() else {
            return false;
        };
        let label = tree.item_label(category, item).unwrap_or_default();
        self.prompt = Some(RenamePrompt::new(RenameTarget::Item { category, item }, label));
        true
    }

    fn begin_category_rename(&mut self) -> bool {
        let tree = self.controller.tree();
        let Some(category) = tree.current_category() else {
            return false;
        };
        let label = tree.category_label(category).unwrap_or_default();
        self.prompt = Some(RenamePrompt::new(RenameTarget::Category(category), label));
        true
    }

    fn handle_prompt_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                debug!("Rename cancelled");
                self.prompt = None;
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.commit_rename(prompt);
                }
            }
            other => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.handle_key(other);
                }
            }
        }
    }

    fn commit_rename(&mut self, prompt: RenamePrompt) {
        let label = prompt.value().trim();
        if label.is_empty() {
            self.status = Some("Tab labels cannot be empty".to_string());
            return;
        }

        let renamed = match prompt.target() {
            RenameTarget::Category(category) => self.controller.rename_category(category, label),
            RenameTarget::Item { category, item } => self.controller.rename_item(category, item, label),
        };

        if !renamed {
            warn!("Rename to '{}' rejected", label);
            self.status = Some(format!("'{}' is already in use", label));
        }
    }
}
