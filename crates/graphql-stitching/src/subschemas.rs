//! Per-invocation storage for everything ingested from a stitching request.
//!
//! Subschemas, definitions and fields are registered into indexed tables, and
//! all later bookkeeping stores the index, never a live reference. The
//! id-to-name translation happens exactly once, in the metadata extractor, so
//! in-process identity can never leak across the boundary.

mod fields;
mod merge_directives;
mod strings;
mod view;

pub(crate) use self::{
    fields::{ArgumentRecord, FieldRecord},
    merge_directives::MergeDirectiveRecord,
    strings::{StringId, Strings},
    view::View,
};

use std::{collections::HashMap, ops::Index};

macro_rules! id_newtypes {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub(crate) struct $name(usize);

            impl From<usize> for $name {
                fn from(idx: usize) -> Self {
                    $name(idx)
                }
            }

            impl $name {
                pub(crate) fn idx(self) -> usize {
                    self.0
                }
            }
        )*
    };
}

id_newtypes!(SubschemaId, DefinitionId, FieldId);

#[derive(Default)]
pub(crate) struct Subschemas {
    pub(crate) strings: Strings,
    subschemas: Vec<SubschemaRecord>,
    definitions: Vec<DefinitionRecord>,
    definitions_by_name: HashMap<(SubschemaId, StringId), DefinitionId>,
    fields: fields::Fields,
    merge_directives: merge_directives::MergeDirectives,
}

pub(crate) struct SubschemaRecord {
    pub(crate) name: StringId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DefinitionKind {
    Object,
    Interface,
    Union,
    InputObject,
    Scalar,
    Enum,
}

impl DefinitionKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Object => "object",
            DefinitionKind::Interface => "interface",
            DefinitionKind::Union => "union",
            DefinitionKind::InputObject => "input object",
            DefinitionKind::Scalar => "scalar",
            DefinitionKind::Enum => "enum",
        }
    }
}

pub(crate) struct DefinitionRecord {
    pub(crate) subschema_id: SubschemaId,
    pub(crate) name: StringId,
    pub(crate) kind: DefinitionKind,
    pub(crate) description: Option<StringId>,
    pub(crate) enum_values: Vec<StringId>,
    pub(crate) union_members: Vec<StringId>,
    pub(crate) implements: Vec<StringId>,
}

/// A constant value from a schema document, e.g. an argument default.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Value {
    Null,
    Int(i64),
    Float(f64),
    String(StringId),
    Boolean(bool),
    Enum(StringId),
    List(Vec<Value>),
    Object(Vec<(StringId, Value)>),
}

impl Subschemas {
    pub(crate) fn push_subschema(&mut self, name: &str) -> SubschemaId {
        let name = self.strings.intern(name);
        self.subschemas.push(SubschemaRecord { name });
        SubschemaId(self.subschemas.len() - 1)
    }

    /// Fallible on purpose: the extractor must treat an unknown id as an
    /// invariant violation, not index out of bounds.
    pub(crate) fn subschema_name(&self, id: SubschemaId) -> Option<&str> {
        self.subschemas.get(id.idx()).map(|record| &self[record.name])
    }

    pub(crate) fn push_definition(
        &mut self,
        subschema_id: SubschemaId,
        name: &str,
        kind: DefinitionKind,
        description: Option<StringId>,
    ) -> DefinitionId {
        let name = self.strings.intern(name);

        // `extend type` produces a second definition with the same name. It
        // folds into the first one.
        if let Some(existing) = self.definitions_by_name.get(&(subschema_id, name)) {
            return *existing;
        }

        self.definitions.push(DefinitionRecord {
            subschema_id,
            name,
            kind,
            description,
            enum_values: Vec::new(),
            union_members: Vec::new(),
            implements: Vec::new(),
        });
        let id = DefinitionId(self.definitions.len() - 1);
        self.definitions_by_name.insert((subschema_id, name), id);
        id
    }

    pub(crate) fn definition_by_name(&self, name: &str, subschema_id: SubschemaId) -> Option<DefinitionId> {
        let name = self.strings.lookup(name)?;
        self.definitions_by_name.get(&(subschema_id, name)).copied()
    }

    pub(crate) fn iter_definitions(&self) -> impl Iterator<Item = View<'_, DefinitionId, DefinitionRecord>> {
        self.definitions.iter().enumerate().map(|(idx, record)| View {
            id: idx.into(),
            record,
        })
    }

    pub(crate) fn push_enum_value(&mut self, definition_id: DefinitionId, value: StringId) {
        self.definitions[definition_id.idx()].enum_values.push(value);
    }

    pub(crate) fn push_union_member(&mut self, definition_id: DefinitionId, member: StringId) {
        self.definitions[definition_id.idx()].union_members.push(member);
    }

    pub(crate) fn push_implemented_interface(&mut self, definition_id: DefinitionId, interface: StringId) {
        self.definitions[definition_id.idx()].implements.push(interface);
    }

    pub(crate) fn at<Id>(&self, id: Id) -> View<'_, Id, <Self as Index<Id>>::Output>
    where
        Id: Copy,
        Self: Index<Id>,
    {
        View { id, record: &self[id] }
    }
}

impl Index<SubschemaId> for Subschemas {
    type Output = SubschemaRecord;

    fn index(&self, id: SubschemaId) -> &SubschemaRecord {
        &self.subschemas[id.idx()]
    }
}

impl Index<DefinitionId> for Subschemas {
    type Output = DefinitionRecord;

    fn index(&self, id: DefinitionId) -> &DefinitionRecord {
        &self.definitions[id.idx()]
    }
}

impl Index<FieldId> for Subschemas {
    type Output = FieldRecord;

    fn index(&self, id: FieldId) -> &FieldRecord {
        &self.fields.fields[id.idx()]
    }
}

impl Index<StringId> for Subschemas {
    type Output = str;

    fn index(&self, id: StringId) -> &str {
        self.strings.resolve(id)
    }
}
