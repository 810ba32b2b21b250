//! Write-once internal state produced by the merge. Everything in here is
//! still keyed by [SubschemaId]; only the metadata extractor translates ids
//! into stable subschema names.

use crate::subschemas::{ArgumentRecord, DefinitionKind, StringId, SubschemaId, Value};

#[derive(Default)]
pub(crate) struct StitchIr {
    /// Merged definitions in first-seen order. This is what the SDL renderer
    /// walks.
    pub(crate) definitions: Vec<MergedDefinitionIr>,
    /// One entry per type that at least one subschema declared a merge
    /// directive for.
    pub(crate) merged_types: Vec<MergedTypeIr>,
    /// Every field selection node observed while walking merge key selection
    /// sets, in walk order.
    pub(crate) field_nodes: Vec<FieldNodeIr>,
}

pub(crate) struct MergedDefinitionIr {
    pub(crate) name: StringId,
    pub(crate) kind: DefinitionKind,
    pub(crate) description: Option<StringId>,
    pub(crate) fields: Vec<MergedFieldIr>,
    pub(crate) enum_values: Vec<StringId>,
    pub(crate) union_members: Vec<StringId>,
    pub(crate) implements: Vec<StringId>,
}

pub(crate) struct MergedFieldIr {
    pub(crate) name: StringId,
    pub(crate) r#type: StringId,
    pub(crate) arguments: Vec<ArgumentRecord>,
    pub(crate) description: Option<StringId>,
    pub(crate) default_value: Option<Value>,
}

pub(crate) struct MergedTypeIr {
    pub(crate) type_name: StringId,
    /// Per directive-bearing contributor, the key selection set text.
    pub(crate) selection_sets: Vec<(SubschemaId, StringId)>,
    /// Fields declared by exactly one contributor.
    pub(crate) unique_fields: Vec<(StringId, SubschemaId)>,
    /// Per directive-bearing contributor, the other contributors directly
    /// reachable from it.
    pub(crate) declarative_targets: Vec<(SubschemaId, Vec<SubschemaId>)>,
}

pub(crate) struct FieldNodeIr {
    pub(crate) field_name: StringId,
    pub(crate) type_name: StringId,
    pub(crate) subschema_id: SubschemaId,
}
