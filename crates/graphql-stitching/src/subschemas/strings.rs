use indexmap::IndexSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct StringId(usize);

/// Interner for all the strings in one invocation.
#[derive(Default)]
pub(crate) struct Strings(IndexSet<Box<str>>);

impl Strings {
    pub(crate) fn intern(&mut self, s: impl AsRef<str>) -> StringId {
        StringId(self.0.insert_full(s.as_ref().into()).0)
    }

    /// Like [`intern()`](Self::intern) but never allocates a new entry.
    pub(crate) fn lookup(&self, s: &str) -> Option<StringId> {
        self.0.get_index_of(s).map(StringId)
    }

    pub(crate) fn resolve(&self, id: StringId) -> &str {
        &self.0[id.0]
    }
}
