use super::*;

/// All the merge directives in all the subschemas in one container.
#[derive(Default)]
pub(crate) struct MergeDirectives {
    pub(super) directives: Vec<MergeDirectiveRecord>,
}

/// One per-type, per-subschema merge configuration, with its key selection
/// already parsed down to the single field it selects.
#[derive(Debug)]
pub(crate) struct MergeDirectiveRecord {
    pub(crate) type_name: StringId,
    pub(crate) subschema_id: SubschemaId,
    /// The selection set text exactly as it appeared in the request.
    pub(crate) selection_set: StringId,
    /// The single field forming the key.
    pub(crate) key_field: StringId,
    /// The root query field that resolves an instance of the type by key.
    pub(crate) resolver_field: StringId,
}

impl Subschemas {
    pub(crate) fn push_merge_directive(&mut self, record: MergeDirectiveRecord) {
        self.merge_directives.directives.push(record);
    }

    /// Lookups through [`merge_directives_for_type()`](Self::merge_directives_for_type)
    /// are only valid after this has been called, once every subschema is
    /// ingested.
    pub(crate) fn sort_merge_directives(&mut self) {
        self.merge_directives
            .directives
            .sort_unstable_by_key(|directive| (directive.type_name, directive.subschema_id));
    }

    pub(crate) fn merge_directives_for_type(&self, type_name: StringId) -> &[MergeDirectiveRecord] {
        let directives = &self.merge_directives.directives;
        let start = directives.partition_point(|directive| directive.type_name < type_name);
        let len = directives[start..]
            .iter()
            .take_while(|directive| directive.type_name == type_name)
            .count();

        &directives[start..start + len]
    }
}
