use std::{
    fs,
    fs::File,
    io::Write,
    path::Path,
};

/// Converts a snake_case database identifier to the lowerCamelCase Java
/// property MyBatis binds it to. Everything is lowercased except the first
/// letter after each underscore, so SHOUTING identifiers normalize too.
pub fn snake_to_camel(s: &str) -> String {
    let mut camel = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = !camel.is_empty();
        } else if capitalize_next {
            camel.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            camel.extend(c.to_lowercase());
        }
    }

    camel
}

pub fn to_pascal_case(s: &str) -> String {
    let camel = snake_to_camel(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => camel,
    }
}

/// Appends SQL map indentation, two spaces per level.
pub fn xml_indent(buffer: &mut String, level: usize) {
    for _ in 0..level {
        buffer.push_str("  ");
    }
}

/// Escapes a string for use inside an XML attribute value.
pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(thiserror::Error, Debug)]
pub enum WriteFileError {
    #[error("Could not create directory: {0}")]
    CouldNotCreateDir(std::io::Error),

    #[error("Could not write to the file: {0}")]
    CouldNotWriteToFile(std::io::Error),
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), WriteFileError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(WriteFileError::CouldNotCreateDir)?;
    }

    let mut file = File::create(path).map_err(WriteFileError::CouldNotWriteToFile)?;
    file.write_all(contents.as_bytes())
        .map_err(WriteFileError::CouldNotWriteToFile)?;

    Ok(())
}
