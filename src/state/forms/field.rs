//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new, empty tag list field
    pub fn tags(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Tags(Vec::new()),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for tag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Tags(_) => "",
        }
    }

    /// Get the selected tags (empty for text fields)
    pub fn as_tags(&self) -> &[String] {
        match &self.value {
            FieldValue::Tags(tags) => tags,
            FieldValue::Text(_) => &[],
        }
    }

    /// Mutable access to the tag list, if this is a tag field
    pub fn tags_mut(&mut self) -> Option<&mut Vec<String>> {
        match &mut self.value {
            FieldValue::Tags(tags) => Some(tags),
            FieldValue::Text(_) => None,
        }
    }

    /// Set the text value
    #[cfg(test)]
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Tags(_) => {
                // Tags are picked from a closed set, not typed
            }
        }
    }

    /// Remove the last character, or the last tag for tag fields
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Tags(tags) => {
                tags.pop();
            }
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Tags(tags) => tags.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Tags(tags) => tags.is_empty(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Tags(tags) => tags.join(", "),
        }
    }
}
