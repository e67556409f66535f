/// Address of a value used for searching or sorting.
///
/// A `Reference` path follows a foreign key to another collection and reads
/// one of its fields, the way a list sorted by "Primary Instrument" orders
/// musicians by the instrument's name rather than its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Field(&'static str),
    Reference {
        field: &'static str,
        collection: &'static str,
        target: &'static str,
    },
}

impl FieldPath {
    pub const fn field(name: &'static str) -> Self {
        FieldPath::Field(name)
    }

    pub const fn reference(
        field: &'static str,
        collection: &'static str,
        target: &'static str,
    ) -> Self {
        FieldPath::Reference {
            field,
            collection,
            target,
        }
    }
}
