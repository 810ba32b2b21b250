use std::ops::Deref;

/// A record in one of the [Subschemas](super::Subschemas) tables together
/// with its id.
pub(crate) struct View<'a, Id, Record: ?Sized> {
    pub(crate) id: Id,
    pub(crate) record: &'a Record,
}

impl<Id: Copy, Record: ?Sized> Clone for View<'_, Id, Record> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id: Copy, Record: ?Sized> Copy for View<'_, Id, Record> {}

impl<Id, Record: ?Sized> Deref for View<'_, Id, Record> {
    type Target = Record;

    fn deref(&self) -> &Record {
        self.record
    }
}
