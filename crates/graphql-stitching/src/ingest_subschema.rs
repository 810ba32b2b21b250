//! Translation of one subschema's SDL document into [Subschemas] records.
//! This is the only module that touches the GraphQL parser's type system AST.

mod fields;
mod merge_directives;

use crate::{
    StitchError, SubschemaInput,
    subschemas::{DefinitionId, DefinitionKind, StringId, SubschemaId, Subschemas, Value},
};
use cynic_parser::{ConstValue, type_system as ast};

/// _Service is a special type exposed by subschemas. It is never stitched.
const SERVICE_TYPE_NAME: &str = "_Service";

/// _Entity is a special union type exposed by subschemas. It is never stitched.
const ENTITY_UNION_NAME: &str = "_Entity";

/// The conventional name of the root query type. Merge directive resolver
/// fields are validated against it when the subschema defines one.
pub(crate) const QUERY_ROOT_NAME: &str = "Query";

/// The conventional root type names. Root types take the union of their
/// fields across subschemas without needing a merge directive.
pub(crate) const ROOT_TYPE_NAMES: [&str; 3] = [QUERY_ROOT_NAME, "Mutation", "Subscription"];

struct Context<'a> {
    document: &'a ast::TypeSystemDocument,
    subschema_id: SubschemaId,
    subschemas: &'a mut Subschemas,
}

pub(crate) fn ingest_subschema(input: &SubschemaInput, subschemas: &mut Subschemas) -> Result<(), StitchError> {
    if input.schema.trim().is_empty() {
        return Err(StitchError::MissingSchema {
            subschema: input.name.clone(),
        });
    }

    let document =
        cynic_parser::parse_type_system_document(&input.schema).map_err(|err| StitchError::SchemaSyntax {
            subschema: input.name.clone(),
            message: err.to_string(),
        })?;

    let subschema_id = subschemas.push_subschema(&input.name);

    let mut ctx = Context {
        document: &document,
        subschema_id,
        subschemas,
    };

    ingest_definitions(&mut ctx);
    merge_directives::ingest_merge_directives(&mut ctx, input)
}

fn ingest_definitions(ctx: &mut Context<'_>) {
    let subschema_id = ctx.subschema_id;

    for definition in ctx.document.definitions() {
        match definition {
            ast::Definition::Type(type_definition) | ast::Definition::TypeExtension(type_definition) => {
                let type_name = type_definition.name();

                let description = type_definition
                    .description()
                    .map(|description| ctx.subschemas.strings.intern(description.to_cow()));

                match type_definition {
                    ast::TypeDefinition::Object(_) if type_name == SERVICE_TYPE_NAME => continue,
                    ast::TypeDefinition::Union(_) if type_name == ENTITY_UNION_NAME => continue,

                    ast::TypeDefinition::Object(object) => {
                        let definition_id =
                            ctx.subschemas
                                .push_definition(subschema_id, type_name, DefinitionKind::Object, description);

                        for interface in object.implements_interfaces() {
                            let interface = ctx.subschemas.strings.intern(interface);
                            ctx.subschemas.push_implemented_interface(definition_id, interface);
                        }

                        let parent_is_query_root = type_name == QUERY_ROOT_NAME;
                        fields::ingest_fields(ctx, definition_id, object.fields(), parent_is_query_root);
                    }
                    ast::TypeDefinition::Interface(interface_type) => {
                        let definition_id = ctx.subschemas.push_definition(
                            subschema_id,
                            type_name,
                            DefinitionKind::Interface,
                            description,
                        );

                        for interface in interface_type.implements_interfaces() {
                            let interface = ctx.subschemas.strings.intern(interface);
                            ctx.subschemas.push_implemented_interface(definition_id, interface);
                        }

                        fields::ingest_fields(ctx, definition_id, interface_type.fields(), false);
                    }
                    ast::TypeDefinition::Union(union) => {
                        let definition_id =
                            ctx.subschemas
                                .push_definition(subschema_id, type_name, DefinitionKind::Union, description);

                        for member in union.members() {
                            let member = ctx.subschemas.strings.intern(member.name());
                            ctx.subschemas.push_union_member(definition_id, member);
                        }
                    }
                    ast::TypeDefinition::InputObject(input_object) => {
                        let definition_id = ctx.subschemas.push_definition(
                            subschema_id,
                            type_name,
                            DefinitionKind::InputObject,
                            description,
                        );

                        fields::ingest_input_fields(ctx, definition_id, input_object.fields());
                    }
                    ast::TypeDefinition::Scalar(_) => {
                        ctx.subschemas
                            .push_definition(subschema_id, type_name, DefinitionKind::Scalar, description);
                    }
                    ast::TypeDefinition::Enum(enum_type) => {
                        let definition_id =
                            ctx.subschemas
                                .push_definition(subschema_id, type_name, DefinitionKind::Enum, description);

                        for value in enum_type.values() {
                            let value = ctx.subschemas.strings.intern(value.value());
                            ctx.subschemas.push_enum_value(definition_id, value);
                        }
                    }
                }
            }
            // Schema definitions and directive definitions play no role in
            // stitching: roots are matched by their conventional names.
            ast::Definition::Directive(_) | ast::Definition::Schema(_) | ast::Definition::SchemaExtension(_) => (),
        }
    }
}

fn ast_value_to_value(value: ConstValue<'_>, subschemas: &mut Subschemas) -> Value {
    match &value {
        ConstValue::Null(_) => Value::Null,
        ConstValue::Int(n) => Value::Int(n.as_i64()),
        ConstValue::Float(n) => Value::Float(n.as_f64()),
        ConstValue::String(s) => Value::String(subschemas.strings.intern(s.as_str())),
        ConstValue::Boolean(b) => Value::Boolean(b.value()),
        ConstValue::Enum(e) => Value::Enum(subschemas.strings.intern(e.name())),
        ConstValue::List(l) => Value::List(l.items().map(|v| ast_value_to_value(v, subschemas)).collect()),
        ConstValue::Object(o) => Value::Object(
            o.fields()
                .map(|field| {
                    (
                        subschemas.strings.intern(field.name()),
                        ast_value_to_value(field.value(), subschemas),
                    )
                })
                .collect(),
        ),
    }
}
