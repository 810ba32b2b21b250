//! Translation of the merge result's internal subschema ids into stable,
//! name-keyed metadata. This is the only place ids cross into the public
//! output, and it refuses to emit anything it cannot resolve: incorrect
//! routing metadata is worse than no output.

use crate::{
    FieldNode, MergedType, StitchError, StitchedSchema,
    stitch_ir::StitchIr,
    subschemas::{SubschemaId, Subschemas},
};
use std::collections::BTreeMap;

pub(crate) fn emit_output(ir: StitchIr, subschemas: &Subschemas, sdl: String) -> Result<StitchedSchema, StitchError> {
    let resolve = |id: SubschemaId| -> Result<String, StitchError> {
        subschemas
            .subschema_name(id)
            .map(str::to_owned)
            .ok_or(StitchError::UnresolvedSubschemaReference { index: id.idx() })
    };

    let mut merged_types = BTreeMap::new();
    for merged in &ir.merged_types {
        let type_name = subschemas[merged.type_name].to_owned();

        let mut selection_sets = BTreeMap::new();
        for (subschema_id, selection_set) in &merged.selection_sets {
            selection_sets.insert(resolve(*subschema_id)?, subschemas[*selection_set].to_owned());
        }

        let mut unique_fields = BTreeMap::new();
        for (field_name, subschema_id) in &merged.unique_fields {
            unique_fields.insert(subschemas[*field_name].to_owned(), resolve(*subschema_id)?);
        }

        let mut declarative_targets = BTreeMap::new();
        for (subschema_id, targets) in &merged.declarative_targets {
            let targets = targets.iter().map(|target| resolve(*target)).collect::<Result<_, _>>()?;
            declarative_targets.insert(resolve(*subschema_id)?, targets);
        }

        merged_types.insert(
            type_name.clone(),
            MergedType {
                type_name,
                selection_sets,
                unique_fields,
                declarative_targets,
            },
        );
    }

    let mut field_nodes_by_type: BTreeMap<String, Vec<FieldNode>> = BTreeMap::new();
    let mut field_nodes_by_field: BTreeMap<String, BTreeMap<String, Vec<FieldNode>>> = BTreeMap::new();

    for node in &ir.field_nodes {
        // The node payload only keeps the field name, but resolving the
        // originating subschema still enforces the name closure invariant.
        resolve(node.subschema_id)?;

        let type_name = subschemas[node.type_name].to_owned();
        let field_name = subschemas[node.field_name].to_owned();

        field_nodes_by_type.entry(type_name.clone()).or_default().push(FieldNode {
            name: field_name.clone(),
        });
        field_nodes_by_field
            .entry(field_name.clone())
            .or_default()
            .entry(type_name)
            .or_default()
            .push(FieldNode { name: field_name });
    }

    Ok(StitchedSchema {
        sdl,
        field_nodes_by_type,
        field_nodes_by_field,
        merged_types,
    })
}
