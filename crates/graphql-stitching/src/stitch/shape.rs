use super::Context;
use crate::{
    StitchError,
    stitch_ir::{MergedDefinitionIr, MergedFieldIr},
    subschemas::{ArgumentRecord, DefinitionId, StringId, Subschemas, Value},
};
use itertools::Itertools;

/// Unifies same-named definitions that no merge directive reconciles: they
/// must be structurally identical duplicates, which collapse to one.
pub(super) fn unify_identical(
    ctx: &mut Context<'_>,
    type_name: StringId,
    definitions: &[DefinitionId],
) -> Result<(), StitchError> {
    let Some((first_id, rest)) = definitions.split_first() else {
        return Ok(());
    };

    let first_shape = Shape::of(ctx.subschemas, *first_id);
    for other in rest {
        if Shape::of(ctx.subschemas, *other) != first_shape {
            return Err(ctx.conflicting_type_shape(type_name, *first_id, *other));
        }
    }

    let first = ctx.subschemas.at(*first_id);
    let definition = MergedDefinitionIr {
        name: type_name,
        kind: first.kind,
        description: definitions.iter().find_map(|id| ctx.subschemas.at(*id).description),
        fields: first_id
            .fields(ctx.subschemas)
            .map(|field| MergedFieldIr {
                name: field.name,
                r#type: field.r#type,
                arguments: field.arguments.clone(),
                description: field.description,
                default_value: field.default_value.clone(),
            })
            .collect(),
        enum_values: first.enum_values.clone(),
        union_members: first.union_members.clone(),
        implements: first.implements.clone(),
    };
    ctx.insert_definition(definition);

    Ok(())
}

/// An order-insensitive structural snapshot of a definition, used to decide
/// whether duplicate declarations are the same type.
#[derive(PartialEq)]
struct Shape {
    fields: Vec<FieldShape>,
    enum_values: Vec<StringId>,
    union_members: Vec<StringId>,
    implements: Vec<StringId>,
}

#[derive(PartialEq)]
struct FieldShape {
    name: StringId,
    r#type: StringId,
    arguments: Vec<ArgumentRecord>,
    default_value: Option<Value>,
}

impl Shape {
    fn of(subschemas: &Subschemas, definition_id: DefinitionId) -> Shape {
        let definition = subschemas.at(definition_id);

        Shape {
            fields: definition_id
                .fields(subschemas)
                .map(|field| FieldShape {
                    name: field.name,
                    r#type: field.r#type,
                    arguments: field
                        .arguments
                        .iter()
                        .cloned()
                        .sorted_by_key(|argument| argument.name)
                        .collect(),
                    default_value: field.default_value.clone(),
                })
                .sorted_by_key(|field| field.name)
                .collect(),
            enum_values: definition.enum_values.iter().copied().sorted().collect(),
            union_members: definition.union_members.iter().copied().sorted().collect(),
            implements: definition.implements.iter().copied().sorted().collect(),
        }
    }
}
