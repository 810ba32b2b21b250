use crate::{
    StitchError,
    stitch_ir::{FieldNodeIr, MergedDefinitionIr, MergedTypeIr, StitchIr},
    subschemas::{DefinitionId, StringId, SubschemaId, Subschemas},
};

/// Context for one [`stitch()`](super::stitch()) pass. The IR is write-only
/// during the merge: the subschemas are the source of truth.
pub(crate) struct Context<'a> {
    pub(crate) subschemas: &'a Subschemas,
    ir: StitchIr,
}

impl<'a> Context<'a> {
    pub(crate) fn new(subschemas: &'a Subschemas) -> Self {
        Context {
            subschemas,
            ir: StitchIr::default(),
        }
    }

    pub(crate) fn into_ir(self) -> StitchIr {
        self.ir
    }

    pub(crate) fn insert_definition(&mut self, definition: MergedDefinitionIr) {
        self.ir.definitions.push(definition);
    }

    pub(crate) fn insert_merged_type(&mut self, merged_type: MergedTypeIr) {
        self.ir.merged_types.push(merged_type);
    }

    pub(crate) fn record_field_node(&mut self, field_name: StringId, type_name: StringId, subschema_id: SubschemaId) {
        self.ir.field_nodes.push(FieldNodeIr {
            field_name,
            type_name,
            subschema_id,
        });
    }

    pub(crate) fn conflicting_type_shape(
        &self,
        type_name: StringId,
        first: DefinitionId,
        second: DefinitionId,
    ) -> StitchError {
        StitchError::ConflictingTypeShape {
            type_name: self.subschemas[type_name].to_owned(),
            first_subschema: self.subschema_name_of(first),
            second_subschema: self.subschema_name_of(second),
        }
    }

    pub(crate) fn field_signature_conflict(
        &self,
        type_name: StringId,
        field_name: StringId,
        first: SubschemaId,
        second: SubschemaId,
    ) -> StitchError {
        StitchError::FieldSignatureConflict {
            type_name: self.subschemas[type_name].to_owned(),
            field_name: self.subschemas[field_name].to_owned(),
            first_subschema: self.subschemas[self.subschemas[first].name].to_owned(),
            second_subschema: self.subschemas[self.subschemas[second].name].to_owned(),
        }
    }

    fn subschema_name_of(&self, definition: DefinitionId) -> String {
        let subschema_id = self.subschemas[definition].subschema_id;
        self.subschemas[self.subschemas[subschema_id].name].to_owned()
    }
}
