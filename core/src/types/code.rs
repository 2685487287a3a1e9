use std::fmt::Display;

/// Generated source text (Java or XML) on its way to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(String);

impl From<String> for Code {
    fn from(value: String) -> Self {
        Code(value)
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        Code(value.to_string())
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Code {
    pub fn new(value: String) -> Self {
        Code(value)
    }

    pub fn blank() -> Self {
        Code(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_str(&mut self, value: &Code) {
        self.0.push_str(&value.0);
    }

    /// Appends a raw line of source followed by a newline.
    pub fn push_line(&mut self, value: &str) {
        self.0.push_str(value);
        self.0.push('\n');
    }
}
