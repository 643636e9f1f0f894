//! Sign-up form fields and their raw values

/// Fields of the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Phone,
}

/// Number of fields in the form
pub const FIELD_COUNT: usize = Field::ALL.len();

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Phone,
    ];

    /// Position of this field in display order
    pub fn index(&self) -> usize {
        match self {
            Field::FullName => 0,
            Field::Email => 1,
            Field::Password => 2,
            Field::ConfirmPassword => 3,
            Field::Age => 4,
            Field::Phone => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Age => "Age",
            Field::Phone => "Phone (optional)",
        }
    }

    /// Example value shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FullName => "Jane Doe",
            Field::Email => "name@example.com",
            Field::Password => "at least 8 characters",
            Field::ConfirmPassword => "repeat your password",
            Field::Age => "13-120",
            Field::Phone => "(123) 456-7890",
        }
    }

    /// Required fields gate submission; optional ones never do
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone)
    }

    /// Values that are masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// Raw text values for every field
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    full_name: String,
    email: String,
    password: String,
    confirm_password: String,
    age: String,
    phone: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Age => &self.age,
            Field::Phone => &self.phone,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Age => &mut self.age,
            Field::Phone => &mut self.phone,
        }
    }

    /// Replace a field's value wholesale
    #[allow(dead_code)]
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Append a character to the field value
    pub fn push_char(&mut self, field: Field, c: char) {
        self.get_mut(field).push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self, field: Field) {
        self.get_mut(field).pop();
    }

    /// Clear every field
    pub fn clear_all(&mut self) {
        for field in Field::ALL {
            self.get_mut(field).clear();
        }
    }
}
