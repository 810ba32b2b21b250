use super::*;
use crate::subschemas::{ArgumentRecord, FieldRecord};

pub(super) fn ingest_fields(
    ctx: &mut Context<'_>,
    definition_id: DefinitionId,
    fields: ast::iter::Iter<'_, ast::FieldDefinition<'_>>,
    parent_is_query_root: bool,
) {
    for field in fields {
        let field_name = field.name();

        // Special fields on Query exposed by subschemas.
        if parent_is_query_root && ["_entities", "_service"].contains(&field_name) {
            continue;
        }

        let description = field
            .description()
            .map(|description| ctx.subschemas.strings.intern(description.to_cow()));

        let r#type = intern_field_type(ctx, field.ty());
        let name = ctx.subschemas.strings.intern(field_name);

        let arguments = field
            .arguments()
            .map(|argument| {
                let r#type = intern_field_type(ctx, argument.ty());
                let default_value = argument
                    .default_value()
                    .map(|default| ast_value_to_value(default, ctx.subschemas));

                ArgumentRecord {
                    name: ctx.subschemas.strings.intern(argument.name()),
                    r#type,
                    default_value,
                }
            })
            .collect();

        ctx.subschemas.push_field(FieldRecord {
            parent_definition_id: definition_id,
            name,
            r#type,
            arguments,
            description,
            default_value: None,
        });
    }
}

pub(super) fn ingest_input_fields(
    ctx: &mut Context<'_>,
    definition_id: DefinitionId,
    fields: ast::iter::Iter<'_, ast::InputValueDefinition<'_>>,
) {
    for field in fields {
        let description = field
            .description()
            .map(|description| ctx.subschemas.strings.intern(description.to_cow()));

        let r#type = intern_field_type(ctx, field.ty());
        let name = ctx.subschemas.strings.intern(field.name());

        let default_value = field
            .default_value()
            .map(|default| ast_value_to_value(default, ctx.subschemas));

        ctx.subschemas.push_field(FieldRecord {
            parent_definition_id: definition_id,
            name,
            r#type,
            arguments: Vec::new(),
            description,
            default_value,
        });
    }
}

/// Renders the type with its full wrapping, e.g. `[Product!]!`, and interns
/// the result.
fn intern_field_type(ctx: &mut Context<'_>, ty: ast::Type<'_>) -> StringId {
    use cynic_parser::common::WrappingType;

    // Wrappers are returned outermost first.
    let wrappers: Vec<_> = ty.wrappers().collect();

    let mut rendered = String::new();
    for wrapper in &wrappers {
        if let WrappingType::List = wrapper {
            rendered.push('[');
        }
    }
    rendered.push_str(ty.name());
    for wrapper in wrappers.iter().rev() {
        match wrapper {
            WrappingType::NonNull => rendered.push('!'),
            WrappingType::List => rendered.push(']'),
        }
    }

    ctx.subschemas.strings.intern(rendered)
}
