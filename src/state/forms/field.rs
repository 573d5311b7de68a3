//! Form field value objects

/// Identifier of every input the submission form owns (the project type
/// radio group is modelled separately as [`super::ProjectType`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ProjectName,
    ClientName,
    ClientEmail,
    CompanyName,
    PhoneNumber,
    ProjectDescription,
    Timeline,
    Budget,
    AdditionalInfo,
    HowFound,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 10] = [
        FieldId::ProjectName,
        FieldId::ClientName,
        FieldId::ClientEmail,
        FieldId::CompanyName,
        FieldId::PhoneNumber,
        FieldId::ProjectDescription,
        FieldId::Timeline,
        FieldId::Budget,
        FieldId::AdditionalInfo,
        FieldId::HowFound,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::ProjectName => "Project Name *",
            FieldId::ClientName => "Your Name *",
            FieldId::ClientEmail => "Email Address *",
            FieldId::CompanyName => "Company",
            FieldId::PhoneNumber => "Phone Number",
            FieldId::ProjectDescription => "Project Description *",
            FieldId::Timeline => "Timeline",
            FieldId::Budget => "Budget",
            FieldId::AdditionalInfo => "Additional Information",
            FieldId::HowFound => "How did you hear about us?",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed option list, `None` until the user picks one
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form input with its configuration, value and inline error
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub required: bool,
    pub is_multiline: bool,
    error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId, required: bool, is_multiline: bool) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Text(String::new()),
            required,
            is_multiline,
            error: None,
        }
    }

    /// Create a new choice field over a fixed option list
    pub fn choice(id: FieldId, options: &'static [&'static str]) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            required: false,
            is_multiline: false,
            error: None,
        }
    }

    /// Raw value: the typed text or the selected option (empty if none)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                selected.and_then(|i| options.get(i).copied()).unwrap_or("")
            }
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Whether the value is empty once surrounding whitespace is removed
    pub fn is_blank(&self) -> bool {
        self.as_text().trim().is_empty()
    }

    /// Set the text value (ignored for choice fields)
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Push a character to a text value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Append pasted text, flattening newlines for single-line fields
    pub fn push_str(&mut self, text: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            if self.is_multiline {
                s.push_str(text);
            } else {
                s.extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
            }
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Move a choice to the next option, wrapping around
    pub fn select_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move a choice to the previous option, wrapping around
    pub fn select_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(0) | None => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Inline error annotation, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Annotate the field as invalid. Empty messages are never stored.
    pub fn set_error(&mut self, message: &str) {
        if !message.is_empty() {
            self.error = Some(message.to_string());
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { selected: None, .. } => "Select an option".to_string(),
            FieldValue::Choice { .. } => format!("‹ {} ›", self.as_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[&str] = &["S", "M", "L"];

    #[test]
    fn test_text_field_starts_empty_and_valid() {
        let field = FormField::text(FieldId::ProjectName, true, false);
        assert_eq!(field.as_text(), "");
        assert!(field.is_blank());
        assert!(!field.has_error());
        assert_eq!(field.label, "Project Name *");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text(FieldId::ClientName, true, false);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut field = FormField::text(FieldId::ClientName, true, false);
        field.set_text("   \t ");
        assert!(field.is_blank());
    }

    #[test]
    fn test_push_str_flattens_newlines_on_single_line() {
        let mut field = FormField::text(FieldId::ProjectName, true, false);
        field.push_str("a\nb");
        assert_eq!(field.as_text(), "a b");

        let mut multi = FormField::text(FieldId::ProjectDescription, true, true);
        multi.push_str("a\nb");
        assert_eq!(multi.as_text(), "a\nb");
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        let mut field = FormField::choice(FieldId::Budget, SIZES);
        assert_eq!(field.as_text(), "");
        field.select_next();
        assert_eq!(field.as_text(), "S");
        field.select_prev();
        assert_eq!(field.as_text(), "L");
        field.select_next();
        assert_eq!(field.as_text(), "S");
    }

    #[test]
    fn test_choice_ignores_typed_text() {
        let mut field = FormField::choice(FieldId::Timeline, SIZES);
        field.push_char('x');
        field.set_text("y");
        assert_eq!(field.as_text(), "");
        assert!(field.is_choice());
    }

    #[test]
    fn test_empty_error_message_is_not_stored() {
        let mut field = FormField::text(FieldId::ClientEmail, true, false);
        field.set_error("");
        assert!(!field.has_error());
        field.set_error("bad");
        assert_eq!(field.error(), Some("bad"));
        field.clear_error();
        assert!(field.error().is_none());
    }
}
