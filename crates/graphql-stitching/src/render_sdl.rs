//! Renders the merged schema as SDL. Definitions come out in first-seen
//! order, so stitching a lone subschema reproduces it modulo formatting.

use crate::{
    stitch_ir::{MergedDefinitionIr, MergedFieldIr, StitchIr},
    subschemas::{ArgumentRecord, DefinitionKind, StringId, Subschemas, Value},
};
use itertools::Itertools;
use std::fmt;

const INDENT: &str = "  ";

pub(crate) fn render_sdl(ir: &StitchIr, subschemas: &Subschemas) -> String {
    Renderer { ir, subschemas }.to_string()
}

struct Renderer<'a> {
    ir: &'a StitchIr,
    subschemas: &'a Subschemas,
}

impl fmt::Display for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, definition) in self.ir.definitions.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            self.write_definition(definition, f)?;
        }
        Ok(())
    }
}

impl Renderer<'_> {
    fn str(&self, id: StringId) -> &str {
        &self.subschemas[id]
    }

    fn write_definition(&self, definition: &MergedDefinitionIr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_description(definition.description, "", f)?;

        let name = self.str(definition.name);

        match definition.kind {
            DefinitionKind::Scalar => writeln!(f, "scalar {name}"),
            DefinitionKind::Enum => {
                writeln!(f, "enum {name} {{")?;
                for value in &definition.enum_values {
                    writeln!(f, "{INDENT}{}", self.str(*value))?;
                }
                writeln!(f, "}}")
            }
            DefinitionKind::Union => {
                let members = definition.union_members.iter().map(|member| self.str(*member)).join(" | ");
                writeln!(f, "union {name} = {members}")
            }
            DefinitionKind::Object | DefinitionKind::Interface | DefinitionKind::InputObject => {
                let keyword = match definition.kind {
                    DefinitionKind::Object => "type",
                    DefinitionKind::Interface => "interface",
                    _ => "input",
                };

                write!(f, "{keyword} {name}")?;

                if !definition.implements.is_empty() {
                    let interfaces = definition.implements.iter().map(|interface| self.str(*interface)).join(" & ");
                    write!(f, " implements {interfaces}")?;
                }

                if definition.fields.is_empty() {
                    return writeln!(f);
                }

                writeln!(f, " {{")?;
                for field in &definition.fields {
                    self.write_field(field, f)?;
                }
                writeln!(f, "}}")
            }
        }
    }

    fn write_field(&self, field: &MergedFieldIr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_description(field.description, INDENT, f)?;

        write!(f, "{INDENT}{}", self.str(field.name))?;

        if !field.arguments.is_empty() {
            f.write_str("(")?;
            for (index, argument) in field.arguments.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                self.write_argument(argument, f)?;
            }
            f.write_str(")")?;
        }

        write!(f, ": {}", self.str(field.r#type))?;

        if let Some(default) = &field.default_value {
            f.write_str(" = ")?;
            self.write_value(default, f)?;
        }

        writeln!(f)
    }

    fn write_argument(&self, argument: &ArgumentRecord, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.str(argument.name), self.str(argument.r#type))?;

        if let Some(default) = &argument.default_value {
            f.write_str(" = ")?;
            self.write_value(default, f)?;
        }

        Ok(())
    }

    fn write_description(&self, description: Option<StringId>, indent: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(description) = description else {
            return Ok(());
        };

        writeln!(f, "{indent}\"\"\"")?;
        for line in self.str(description).lines() {
            writeln!(f, "{indent}{line}")?;
        }
        writeln!(f, "{indent}\"\"\"")
    }

    fn write_value(&self, value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match value {
            Value::Null => f.write_str("null"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => {
                f.write_str("\"")?;
                for c in self.str(*s).chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("\"")
            }
            Value::Enum(value) => f.write_str(self.str(*value)),
            Value::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    self.write_value(item, f)?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: ", self.str(*name))?;
                    self.write_value(value, f)?;
                }
                f.write_str("}")
            }
        }
    }
}
