//! The merge core: unifies same-named type definitions across subschemas,
//! computes field ownership and declarative routing targets, and records the
//! field selection nodes the walks observe.

mod context;
mod merged_type;
mod shape;

use self::context::Context;
use crate::{
    StitchError,
    ingest_subschema::ROOT_TYPE_NAMES,
    stitch_ir::StitchIr,
    subschemas::{DefinitionId, DefinitionKind, StringId, Subschemas},
};
use indexmap::IndexMap;

pub(crate) fn stitch(subschemas: &Subschemas) -> Result<StitchIr, StitchError> {
    let mut ctx = Context::new(subschemas);

    for (type_name, definitions) in group_definitions_by_name(subschemas) {
        stitch_definition_group(&mut ctx, type_name, &definitions)?;
    }

    Ok(ctx.into_ir())
}

/// Definitions grouped by type name, both the groups and their members in
/// first-seen order. The merged schema is rendered in this order, which makes
/// stitching a single subschema with itself the identity modulo formatting.
fn group_definitions_by_name(subschemas: &Subschemas) -> IndexMap<StringId, Vec<DefinitionId>> {
    let mut groups: IndexMap<StringId, Vec<DefinitionId>> = IndexMap::new();

    for definition in subschemas.iter_definitions() {
        groups.entry(definition.name).or_default().push(definition.id);
    }

    groups
}

fn stitch_definition_group(
    ctx: &mut Context<'_>,
    type_name: StringId,
    definitions: &[DefinitionId],
) -> Result<(), StitchError> {
    let Some((first_id, rest)) = definitions.split_first() else {
        return Ok(());
    };

    let kind = ctx.subschemas.at(*first_id).kind;

    // Contributors must agree on what kind of type this is.
    if let Some(conflicting) = rest.iter().find(|id| ctx.subschemas.at(**id).kind != kind) {
        return Err(ctx.conflicting_type_shape(type_name, *first_id, *conflicting));
    }

    let merge_directives = ctx.subschemas.merge_directives_for_type(type_name);

    match kind {
        DefinitionKind::Object if !merge_directives.is_empty() => {
            merged_type::compose_merged_object(ctx, type_name, definitions, merge_directives)
        }
        // Root types take the union of their fields without a directive: each
        // root field is resolved against the subschema that declares it.
        DefinitionKind::Object if ROOT_TYPE_NAMES.contains(&&ctx.subschemas[type_name]) => {
            merged_type::compose_root_object(ctx, type_name, definitions)
        }
        _ => shape::unify_identical(ctx, type_name, definitions),
    }
}
