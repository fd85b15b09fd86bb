//! User administration: accounts, password editing, form construction

mod form;
mod password;
mod service;

pub use form::{Field, FieldRules, FieldType, FormBuilder, PreparedForm};
pub use password::{apply_password_change, PasswordChangeInput, UserError, MIN_PASSWORD_LENGTH};
pub use service::{UserRecord, UsersService};
