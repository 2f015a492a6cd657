//! Port for reading and writing form fields.

use crate::domain::foundation::FieldKey;

/// Access to the workbench's input form, one field at a time.
///
/// Fields are named by [`FieldKey`], never by element selectors. A key that
/// maps to no control on the current page is not an error: reads return
/// `None` and writes report `false`, so callers can degrade quietly the way
/// the page itself does.
pub trait FormFields: Send + Sync {
    /// Current value of the field, or `None` when the field is absent.
    fn field_value(&self, key: FieldKey) -> Option<String>;

    /// Writes a value into the field. Returns `false` when the field is
    /// absent and the write was skipped.
    fn set_field_value(&self, key: FieldKey, value: &str) -> bool;
}
