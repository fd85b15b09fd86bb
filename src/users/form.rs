//! Password form construction
//!
//! Builds the serialized field structure the edit page consumes: field
//! descriptors split into hidden and visible elements, with the CSRF token
//! injected as a hidden field.

use serde::Serialize;

/// Kinds of form fields the builder knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Password,
    Csrf,
}

/// Validation rules rendered into the field markup
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldRules {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minlength: Option<usize>,
}

/// One form field descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_name: Option<String>,
    pub value: String,
    pub rules: FieldRules,
}

impl Field {
    fn is_hidden(&self) -> bool {
        matches!(self.field_type, FieldType::Csrf)
    }
}

/// A form split into hidden and visible elements
#[derive(Debug, Clone, Serialize)]
pub struct PreparedForm {
    pub hidden: Vec<Field>,
    pub visible: Vec<Field>,
}

/// Builds the password-edit form
pub struct FormBuilder;

impl FormBuilder {
    /// Create the password form fields with the session's CSRF token
    pub fn password_form(csrf_token: &str, min_length: usize) -> Vec<Field> {
        let rules = FieldRules {
            required: true,
            minlength: Some(min_length),
        };

        vec![
            Field {
                field_type: FieldType::Password,
                id: "edit_password".to_string(),
                name: "edit_password".to_string(),
                translated_name: Some("New password".to_string()),
                value: String::new(),
                rules: rules.clone(),
            },
            Field {
                field_type: FieldType::Password,
                id: "repeat_password".to_string(),
                name: "repeat_password".to_string(),
                translated_name: Some("Repeat password".to_string()),
                value: String::new(),
                rules,
            },
            Field {
                field_type: FieldType::Csrf,
                id: "csrf_token".to_string(),
                name: "csrf_token".to_string(),
                translated_name: None,
                value: csrf_token.to_string(),
                rules: FieldRules::default(),
            },
        ]
    }

    /// Split fields into the hidden/visible shape the template consumes
    pub fn prepare_form(fields: Vec<Field>) -> PreparedForm {
        let (hidden, visible) = fields.into_iter().partition(Field::is_hidden);
        PreparedForm { hidden, visible }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_form_fields() {
        let fields = FormBuilder::password_form("tok-123", 8);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name, "edit_password");
        assert_eq!(fields[0].rules.minlength, Some(8));
        assert_eq!(fields[2].field_type, FieldType::Csrf);
        assert_eq!(fields[2].value, "tok-123");
    }

    #[test]
    fn test_prepare_form_splits_hidden_and_visible() {
        let prepared = FormBuilder::prepare_form(FormBuilder::password_form("tok", 8));
        assert_eq!(prepared.hidden.len(), 1);
        assert_eq!(prepared.visible.len(), 2);
        assert_eq!(prepared.hidden[0].name, "csrf_token");
    }

    #[test]
    fn test_field_serialization_shape() {
        let prepared = FormBuilder::prepare_form(FormBuilder::password_form("tok", 8));
        let json = serde_json::to_value(&prepared).unwrap();
        assert_eq!(json["visible"][0]["type"], "password");
        assert_eq!(json["visible"][0]["rules"]["minlength"], 8);
        assert_eq!(json["hidden"][0]["type"], "csrf");
    }
}
