use super::Context;
use crate::{
    StitchError,
    stitch_ir::{MergedDefinitionIr, MergedFieldIr, MergedTypeIr},
    subschemas::{DefinitionId, DefinitionKind, FieldRecord, MergeDirectiveRecord, StringId, SubschemaId},
};
use indexmap::IndexMap;
use itertools::Itertools;

/// Composes an object type that at least one contributor declares a merge
/// directive for: the field union, field ownership, entry points and
/// declarative targets.
pub(super) fn compose_merged_object(
    ctx: &mut Context<'_>,
    type_name: StringId,
    definitions: &[DefinitionId],
    merge_directives: &[MergeDirectiveRecord],
) -> Result<(), StitchError> {
    let fields = compose_field_union(ctx, type_name, definitions)?;

    let unique_fields = fields
        .iter()
        .filter(|(_, declared_by)| declared_by.len() == 1)
        .map(|(field, declared_by)| (field.name, declared_by[0]))
        .collect();

    let selection_sets = merge_directives
        .iter()
        .map(|directive| (directive.subschema_id, directive.selection_set))
        .collect();

    // A contributor's entry point reaches another contributor directly when
    // its key supplies all the key fields the other needs. With single-field
    // keys that means the key fields are the same; mismatches are omitted,
    // not an error.
    let declarative_targets = merge_directives
        .iter()
        .map(|directive| {
            let targets = merge_directives
                .iter()
                .filter(|other| {
                    other.subschema_id != directive.subschema_id && other.key_field == directive.key_field
                })
                .map(|other| other.subschema_id)
                .collect();
            (directive.subschema_id, targets)
        })
        .collect();

    for directive in merge_directives {
        ctx.record_field_node(directive.key_field, type_name, directive.subschema_id);
    }

    ctx.insert_merged_type(MergedTypeIr {
        type_name,
        selection_sets,
        unique_fields,
        declarative_targets,
    });

    insert_object_definition(ctx, type_name, definitions, fields);

    Ok(())
}

/// Root operation types merge by field union alone: no entry points, no
/// merged type config.
pub(super) fn compose_root_object(
    ctx: &mut Context<'_>,
    type_name: StringId,
    definitions: &[DefinitionId],
) -> Result<(), StitchError> {
    let fields = compose_field_union(ctx, type_name, definitions)?;
    insert_object_definition(ctx, type_name, definitions, fields);
    Ok(())
}

fn insert_object_definition(
    ctx: &mut Context<'_>,
    type_name: StringId,
    definitions: &[DefinitionId],
    fields: Vec<(MergedFieldIr, Vec<SubschemaId>)>,
) {
    let description = definitions
        .iter()
        .find_map(|id| ctx.subschemas.at(*id).description);

    let implements = definitions
        .iter()
        .flat_map(|id| ctx.subschemas[*id].implements.iter().copied())
        .unique()
        .collect();

    ctx.insert_definition(MergedDefinitionIr {
        name: type_name,
        kind: DefinitionKind::Object,
        description,
        fields: fields.into_iter().map(|(field, _)| field).collect(),
        enum_values: Vec::new(),
        union_members: Vec::new(),
        implements,
    });
}

/// The union of the contributors' fields in first-seen order, each paired
/// with the subschemas declaring it. A field declared more than once must
/// keep an identical signature everywhere.
fn compose_field_union(
    ctx: &Context<'_>,
    type_name: StringId,
    definitions: &[DefinitionId],
) -> Result<Vec<(MergedFieldIr, Vec<SubschemaId>)>, StitchError> {
    let mut fields: IndexMap<StringId, (MergedFieldIr, Vec<SubschemaId>)> = IndexMap::new();

    for definition_id in definitions {
        let subschema_id = ctx.subschemas.at(*definition_id).subschema_id;

        for field in definition_id.fields(ctx.subschemas) {
            match fields.get_mut(&field.name) {
                None => {
                    fields.insert(field.name, (to_merged_field(field.record), vec![subschema_id]));
                }
                Some((merged, declared_by)) => {
                    if !signatures_match(merged, field.record) {
                        return Err(ctx.field_signature_conflict(
                            type_name,
                            field.name,
                            declared_by[0],
                            subschema_id,
                        ));
                    }
                    declared_by.push(subschema_id);
                }
            }
        }
    }

    Ok(fields.into_values().collect())
}

fn to_merged_field(field: &FieldRecord) -> MergedFieldIr {
    MergedFieldIr {
        name: field.name,
        r#type: field.r#type,
        arguments: field.arguments.clone(),
        description: field.description,
        default_value: field.default_value.clone(),
    }
}

fn signatures_match(merged: &MergedFieldIr, other: &FieldRecord) -> bool {
    if merged.r#type != other.r#type || merged.default_value != other.default_value {
        return false;
    }

    // Argument order is not significant.
    let merged_arguments = merged.arguments.iter().sorted_by_key(|arg| arg.name);
    let other_arguments = other.arguments.iter().sorted_by_key(|arg| arg.name);

    merged_arguments.eq(other_arguments)
}
