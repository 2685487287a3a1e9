use std::collections::BTreeSet;

use crate::types::code::Code;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaParameter {
    /// Rendered annotation text, e.g. `@Param("recordList")`.
    pub annotation: Option<String>,
    pub type_: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<JavaParameter>,
    /// Javadoc body lines, empty when comments are suppressed.
    pub javadoc: Vec<String>,
}

/// The mapper interface under construction for one table. Imports are kept
/// sorted so repeated generation is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperInterface {
    pub package: String,
    pub name: String,
    pub imports: BTreeSet<String>,
    pub methods: Vec<JavaMethod>,
}

impl MapperInterface {
    pub fn new(package: &str, name: &str) -> Self {
        MapperInterface {
            package: package.to_string(),
            name: name.to_string(),
            imports: BTreeSet::new(),
            methods: Vec::new(),
        }
    }

    pub fn add_import(&mut self, import: &str) {
        self.imports.insert(import.to_string());
    }

    pub fn add_method(&mut self, method: JavaMethod) {
        self.methods.push(method);
    }
}

fn render_parameter(parameter: &JavaParameter) -> String {
    match &parameter.annotation {
        Some(annotation) => format!("{} {} {}", annotation, parameter.type_, parameter.name),
        None => format!("{} {}", parameter.type_, parameter.name),
    }
}

pub fn render_mapper_interface(interface: &MapperInterface) -> Code {
    let mut code = Code::blank();

    code.push_line(&format!("package {};", interface.package));
    code.push_line("");

    for import in &interface.imports {
        code.push_line(&format!("import {};", import));
    }
    if !interface.imports.is_empty() {
        code.push_line("");
    }

    code.push_line(&format!("public interface {} {{", interface.name));

    for (index, method) in interface.methods.iter().enumerate() {
        if index > 0 {
            code.push_line("");
        }

        if !method.javadoc.is_empty() {
            code.push_line("    /**");
            for line in &method.javadoc {
                if line.is_empty() {
                    code.push_line("     *");
                } else {
                    code.push_line(&format!("     * {}", line));
                }
            }
            code.push_line("     */");
        }

        let parameters: Vec<String> = method.parameters.iter().map(render_parameter).collect();
        code.push_line(&format!(
            "    {} {}({});",
            method.return_type,
            method.name,
            parameters.join(", ")
        ));
    }

    code.push_line("}");

    code
}
