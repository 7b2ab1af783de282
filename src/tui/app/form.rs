//! Create-form state.

/// Field focus within the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    TargetUrl,
    ShortCode,
}

impl EditingField {
    pub fn next(self) -> EditingField {
        match self {
            EditingField::TargetUrl => EditingField::ShortCode,
            EditingField::ShortCode => EditingField::TargetUrl,
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            EditingField::TargetUrl => "Long URL",
            EditingField::ShortCode => "Custom code (optional)",
        }
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    pub url: String,
    pub code: String,
    pub editing: EditingField,
    /// Inline error shown in the popup (validation, conflict, failure).
    pub error: Option<String>,
}

impl FormState {
    pub fn new() -> FormState {
        FormState::default()
    }

    pub fn clear(&mut self) {
        self.url.clear();
        self.code.clear();
        self.editing = EditingField::default();
        self.error = None;
    }

    pub fn toggle_field(&mut self) {
        self.editing = self.editing.next();
    }

    pub fn push_char(&mut self, c: char) {
        match self.editing {
            EditingField::TargetUrl => self.url.push(c),
            EditingField::ShortCode => self.code.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.editing {
            EditingField::TargetUrl => {
                self.url.pop();
            }
            EditingField::ShortCode => {
                self.code.pop();
            }
        }
    }

    /// The only client-side guard: the target URL must be non-empty
    /// after trimming. Everything beyond that is the backend's call.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.url.trim().is_empty() {
            Err("Long URL is required".to_string())
        } else {
            Ok(())
        }
    }
}
