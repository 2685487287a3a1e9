use crate::generator::batch_insert::{
    BatchInsertStatement, GeneratedKeyHandling, SelectKey, RECORD_LIST,
};
use crate::helpers::{escape_xml, xml_indent};
use crate::types::code::Code;

pub const GENERATED_COMMENT: &str = "<!-- @mbg.generated -->";

const SQL_MAP_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE mapper PUBLIC \"-//mybatis.org//DTD Mapper 3.0//EN\" \"http://mybatis.org/dtd/mybatis-3-mapper.dtd\">";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &str, value: &str) -> Self {
        Attribute { name: name.to_string(), value: value.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Raw SQL map text, emitted verbatim (it may itself contain inline
    /// MyBatis markup such as a foreach).
    Text(String),
    Element(XmlElement),
}

/// Plain-data stand-in for a SQL map DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: &str) -> Self {
        XmlElement { name: name.to_string(), attributes: Vec::new(), children: Vec::new() }
    }

    pub fn add_attribute(&mut self, name: &str, value: &str) {
        self.attributes.push(Attribute::new(name, value));
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlNode::Text(text.into()));
    }

    pub fn add_element(&mut self, element: XmlElement) {
        self.children.push(XmlNode::Element(element));
    }
}

/// The generated mapper XML document for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlMapDocument {
    pub namespace: String,
    pub elements: Vec<XmlElement>,
}

impl SqlMapDocument {
    pub fn new(namespace: String) -> Self {
        SqlMapDocument { namespace, elements: Vec::new() }
    }
}

/// Formatting knobs for the rendering step. Wrapping is cosmetic only, the
/// statement records stay formatting-free.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Accumulated VALUES text beyond this length flushes the current
    /// INSERT/VALUES fragments as lines and starts fresh buffers.
    pub wrap_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { wrap_width: 80 }
    }
}

fn apply_generated_key(element: &mut XmlElement, statement: &BatchInsertStatement) {
    match &statement.generated_key {
        Some(GeneratedKeyHandling::JdbcStandard { key_property }) => {
            element.add_attribute("useGeneratedKeys", "true");
            element.add_attribute("keyProperty", key_property);
        }
        Some(GeneratedKeyHandling::SelectKey(select_key)) => {
            element.add_element(select_key_element(select_key));
        }
        None => {}
    }
}

fn select_key_element(select_key: &SelectKey) -> XmlElement {
    let mut element = XmlElement::new("selectKey");
    element.add_attribute("resultType", &select_key.result_type);
    element.add_attribute("keyProperty", &select_key.key_property);
    element.add_attribute("order", select_key.order.as_str());
    element.add_text(select_key.statement.clone());
    element
}

/// Lowers a full batch insert statement to its SQL map element. The VALUES
/// tuple is wrapped in a foreach so one parenthesized tuple is expanded per
/// element of recordList.
pub fn batch_insert_element(
    statement: &BatchInsertStatement,
    config: &RenderConfig,
) -> XmlElement {
    let mut answer = XmlElement::new("insert");
    answer.add_attribute("id", &statement.id);
    answer.add_attribute("parameterType", &statement.parameter_type);

    apply_generated_key(&mut answer, statement);

    let mut insert_clause = String::new();
    let mut values_clause = String::new();

    insert_clause.push_str("insert into ");
    insert_clause.push_str(&statement.table_name);
    insert_clause.push_str(" (");

    values_clause.push_str(&format!(
        "values <foreach collection=\"{}\" item=\"item\" index=\"index\" separator=\",\">(",
        RECORD_LIST
    ));

    let mut values_clauses: Vec<String> = Vec::new();
    let mut entries = statement.entries.iter().peekable();
    while let Some(entry) = entries.next() {
        insert_clause.push_str(&entry.column);
        values_clause.push_str(&entry.placeholder);

        if entries.peek().is_some() {
            insert_clause.push_str(", ");
            values_clause.push_str(", ");
        }

        // flush after completing the current column so a bind placeholder is
        // never split across lines
        if values_clause.len() > config.wrap_width {
            answer.add_text(insert_clause.clone());
            insert_clause.clear();
            xml_indent(&mut insert_clause, 1);

            values_clauses.push(values_clause.clone());
            values_clause.clear();
            xml_indent(&mut values_clause, 1);
        }
    }

    insert_clause.push(')');
    answer.add_text(insert_clause);

    values_clause.push_str(")</foreach>");
    values_clauses.push(values_clause);

    for clause in values_clauses {
        answer.add_text(clause);
    }

    answer
}

fn trim_element() -> XmlElement {
    let mut trim = XmlElement::new("trim");
    trim.add_attribute("prefix", "(");
    trim.add_attribute("suffix", ")");
    trim.add_attribute("suffixOverrides", ",");
    trim
}

/// Lowers the selective variant. Non-sequence columns are wrapped in if
/// guards inside trim elements; the column list probes the first record
/// since a multi-row VALUES needs one column set for every row.
pub fn batch_insert_selective_element(statement: &BatchInsertStatement) -> XmlElement {
    let mut answer = XmlElement::new("insert");
    answer.add_attribute("id", &statement.id);
    answer.add_attribute("parameterType", &statement.parameter_type);

    apply_generated_key(&mut answer, statement);

    answer.add_text(format!("insert into {}", statement.table_name));

    let mut columns_trim = trim_element();
    for entry in &statement.entries {
        if entry.sequence {
            columns_trim.add_text(format!("{},", entry.column));
        } else {
            let mut guard = XmlElement::new("if");
            guard.add_attribute(
                "test",
                &format!("{}[0].{} != null", RECORD_LIST, entry.property),
            );
            guard.add_text(format!("{},", entry.column));
            columns_trim.add_element(guard);
        }
    }
    answer.add_element(columns_trim);

    answer.add_text("values");

    let mut values_trim = trim_element();
    for entry in &statement.entries {
        if entry.sequence {
            values_trim.add_text(format!("{},", entry.placeholder));
        } else {
            let mut guard = XmlElement::new("if");
            guard.add_attribute("test", &format!("item.{} != null", entry.property));
            guard.add_text(format!("{},", entry.placeholder));
            values_trim.add_element(guard);
        }
    }

    let mut foreach = XmlElement::new("foreach");
    foreach.add_attribute("collection", RECORD_LIST);
    foreach.add_attribute("item", "item");
    foreach.add_attribute("index", "index");
    foreach.add_attribute("separator", ",");
    foreach.add_element(values_trim);
    answer.add_element(foreach);

    answer
}

fn render_element_into(out: &mut String, element: &XmlElement, level: usize) {
    xml_indent(out, level);
    out.push('<');
    out.push_str(&element.name);
    for attribute in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", attribute.name, escape_xml(&attribute.value)));
    }

    if element.children.is_empty() {
        out.push_str(" />\n");
        return;
    }

    out.push_str(">\n");
    for child in &element.children {
        match child {
            XmlNode::Text(text) => {
                xml_indent(out, level + 1);
                out.push_str(text);
                out.push('\n');
            }
            XmlNode::Element(child_element) => {
                render_element_into(out, child_element, level + 1);
            }
        }
    }
    xml_indent(out, level);
    out.push_str(&format!("</{}>\n", element.name));
}

pub fn render_element(element: &XmlElement) -> Code {
    let mut out = String::new();
    render_element_into(&mut out, element, 0);
    Code::new(out)
}

pub fn render_sql_map_document(document: &SqlMapDocument) -> Code {
    let mut out = String::new();
    out.push_str(SQL_MAP_HEADER);
    out.push('\n');
    out.push_str(&format!("<mapper namespace=\"{}\">\n", escape_xml(&document.namespace)));
    for element in &document.elements {
        render_element_into(&mut out, element, 1);
    }
    out.push_str("</mapper>\n");
    Code::new(out)
}
