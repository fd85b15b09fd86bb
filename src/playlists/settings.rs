//! Parameter bag for playlist settings forms
//!
//! A typed, insertion-ordered collection of the parameters a settings request
//! may carry. The bag starts with the base set every playlist form has and
//! grows feature parameters on demand.

use indexmap::IndexMap;
use serde_json::Value;

pub const PARAMETER_PLAYLIST_NAME: &str = "playlist_name";
pub const PARAMETER_UID: &str = "UID";
pub const PARAMETER_PLAYLIST_MODE: &str = "playlist_mode";
pub const PARAMETER_PLAYLIST_ID: &str = "playlist_id";
pub const PARAMETER_TIME_LIMIT: &str = "time_limit";

/// Scalar type a parameter value is coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Int,
}

/// One declared parameter with its type and default
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: &'static str,
    pub scalar_type: ScalarType,
    pub default: Value,
    pub value: Option<Value>,
}

impl Parameter {
    fn new(name: &'static str, scalar_type: ScalarType, default: Value) -> Self {
        Self {
            name,
            scalar_type,
            default,
            value: None,
        }
    }

    /// The set value, falling back to the default
    pub fn effective(&self) -> &Value {
        self.value.as_ref().unwrap_or(&self.default)
    }
}

/// The parameter bag for the playlists module
pub struct Parameters {
    module_name: &'static str,
    current: IndexMap<&'static str, Parameter>,
}

impl Parameters {
    /// Base set: playlist name and acting user id
    pub fn new() -> Self {
        let mut current = IndexMap::new();
        current.insert(
            PARAMETER_PLAYLIST_NAME,
            Parameter::new(PARAMETER_PLAYLIST_NAME, ScalarType::String, Value::from("")),
        );
        current.insert(
            PARAMETER_UID,
            Parameter::new(PARAMETER_UID, ScalarType::Int, Value::from(0)),
        );
        Self {
            module_name: "playlists",
            current,
        }
    }

    pub fn module_name(&self) -> &'static str {
        self.module_name
    }

    pub fn current_parameters(&self) -> &IndexMap<&'static str, Parameter> {
        &self.current
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.current.contains_key(name)
    }

    pub fn add_playlist_mode(&mut self) {
        self.add(PARAMETER_PLAYLIST_MODE, ScalarType::String, Value::from("master"));
    }

    pub fn add_playlist_id(&mut self) {
        self.add(PARAMETER_PLAYLIST_ID, ScalarType::Int, Value::from(0));
    }

    pub fn add_time_limit(&mut self) {
        self.add(PARAMETER_TIME_LIMIT, ScalarType::Int, Value::from(0));
    }

    /// Set a parameter's value; unknown names are ignored
    pub fn set_value(&mut self, name: &str, value: Value) {
        if let Some(parameter) = self.current.get_mut(name) {
            parameter.value = Some(value);
        }
    }

    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.current.get(name).map(|p| p.effective())
    }

    fn add(&mut self, name: &'static str, scalar_type: ScalarType, default: Value) {
        self.current.insert(name, Parameter::new(name, scalar_type, default));
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new()
    }
}
