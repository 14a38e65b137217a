//! Editable form state

use zeroize::Zeroize;

use crate::credentials::Credentials;

/// Addressable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }

    /// Whether the input is rendered masked
    pub fn is_masked(self) -> bool {
        matches!(self, Field::Password)
    }
}

/// Current value of both inputs
///
/// Starts empty. Setters replace a value unconditionally and never fail;
/// there is no length or charset validation. A value being replaced is wiped
/// before its buffer is released, including when a push outgrows it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: Credentials,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the username
    pub fn set_username(&mut self, value: impl Into<String>) {
        replace_wiped(&mut self.values.username, value.into());
    }

    /// Replace the password
    pub fn set_password(&mut self, value: impl Into<String>) {
        replace_wiped(&mut self.values.password, value.into());
    }

    /// Append a character to `field` in place
    pub fn push(&mut self, field: Field, c: char) {
        let value = self.buffer_mut(field);
        reserve_wiped(value, c.len_utf8());
        value.push(c);
    }

    /// Remove the last character of `field`, if any
    ///
    /// The freed bytes stay in spare capacity until the value is replaced or
    /// dropped, both of which wipe the whole buffer.
    pub fn pop(&mut self, field: Field) -> Option<char> {
        self.buffer_mut(field).pop()
    }

    /// Replace the value of `field`
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Username => self.set_username(value),
            Field::Password => self.set_password(value),
        }
    }

    pub fn username(&self) -> &str {
        &self.values.username
    }

    pub fn password(&self) -> &str {
        &self.values.password
    }

    /// Current value of `field`
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => self.username(),
            Field::Password => self.password(),
        }
    }

    /// Owned copy of both values as they stand right now
    pub fn snapshot(&self) -> Credentials {
        self.values.clone()
    }

    fn buffer_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.values.username,
            Field::Password => &mut self.values.password,
        }
    }
}

/// Swap in `next`, wiping the old contents first
fn replace_wiped(slot: &mut String, next: String) {
    slot.zeroize();
    *slot = next;
}

/// Make room for `additional` bytes without freeing unwiped memory
fn reserve_wiped(value: &mut String, additional: usize) {
    if value.capacity() - value.len() >= additional {
        return;
    }

    let wanted = (value.len() + additional).max(value.capacity() * 2).max(16);
    let mut grown = String::with_capacity(wanted);
    grown.push_str(value);
    replace_wiped(value, grown);
}
