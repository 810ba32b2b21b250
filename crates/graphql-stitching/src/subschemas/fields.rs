use super::*;

/// Fields of objects, interfaces and input objects, in one container.
#[derive(Default)]
pub(crate) struct Fields {
    pub(super) fields: Vec<FieldRecord>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldRecord {
    pub(crate) parent_definition_id: DefinitionId,
    pub(crate) name: StringId,
    /// The rendered field type, e.g. `[Product!]!`. Signatures are compared
    /// and re-rendered from this text, so wrapping survives unchanged.
    pub(crate) r#type: StringId,
    pub(crate) arguments: Vec<ArgumentRecord>,
    pub(crate) description: Option<StringId>,
    /// Input fields only.
    pub(crate) default_value: Option<Value>,
}

/// An argument on an output field.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ArgumentRecord {
    pub(crate) name: StringId,
    pub(crate) r#type: StringId,
    pub(crate) default_value: Option<Value>,
}

impl Subschemas {
    pub(crate) fn push_field(&mut self, record: FieldRecord) {
        self.fields.fields.push(record);
    }
}

impl DefinitionId {
    pub(crate) fn fields(self, subschemas: &Subschemas) -> impl Iterator<Item = View<'_, FieldId, FieldRecord>> {
        // Type extensions can make a definition's fields non-contiguous, so
        // this is a scan, not a partition point.
        subschemas
            .fields
            .fields
            .iter()
            .enumerate()
            .filter(move |(_, field)| field.parent_definition_id == self)
            .map(|(idx, record)| View {
                id: idx.into(),
                record,
            })
    }

    pub(crate) fn field_by_name(self, subschemas: &Subschemas, name: StringId) -> Option<View<'_, FieldId, FieldRecord>> {
        self.fields(subschemas).find(|field| field.name == name)
    }
}
