mod c_type;

pub use c_type::CType;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub c_type: CType,
}

impl Field {
    pub fn new(name: impl Into<String>, c_type: CType) -> Self {
        Self {
            name: name.into(),
            c_type,
        }
    }
}

/// A C struct declaration, fields in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
    pub is_packed: bool,
}

impl Record {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into_iter().collect(),
            is_packed: false,
        }
    }

    pub fn packed(self, is_packed: bool) -> Self {
        Self { is_packed, ..self }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_packed {
            f.write_str("packed ")?;
        }

        write!(f, "struct {} {{", self.name)?;
        for field in self.iter() {
            write!(f, " {} {};", field.c_type, field.name)?;
        }
        f.write_str(" }")
    }
}

/// The two demonstration records.
///
/// Both hold a `char`, a `double` and an `int`. `Order` declares them smallest-first with the
/// widest member in the middle, `OrderOptimized` declares them in descending alignment.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum RecordKind {
    Order,
    OrderOptimized,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Order, RecordKind::OrderOptimized];

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Order => "Order",
            RecordKind::OrderOptimized => "OrderOptimized",
        }
    }

    pub fn declaration(&self) -> Record {
        let fields = match self {
            RecordKind::Order => [
                Field::new("ch", CType::Char),
                Field::new("d", CType::Double),
                Field::new("i", CType::Int),
            ],
            RecordKind::OrderOptimized => [
                Field::new("d", CType::Double),
                Field::new("i", CType::Int),
                Field::new("ch", CType::Char),
            ],
        };

        Record::new(self.name(), fields)
    }
}

#[test]
fn test_records_hold_same_fields() {
    let order = RecordKind::Order.declaration();
    let optimized = RecordKind::OrderOptimized.declaration();

    let mut a = order.fields.clone();
    let mut b = optimized.fields.clone();
    a.sort_by(|x, y| x.name.cmp(&y.name));
    b.sort_by(|x, y| x.name.cmp(&y.name));

    assert_eq!(a, b);
    assert_ne!(order.fields, optimized.fields);
}

#[test]
fn test_record_display() {
    assert_eq!(
        RecordKind::Order.declaration().to_string(),
        "struct Order { char ch; double d; int i; }"
    );
    assert_eq!(
        RecordKind::OrderOptimized
            .declaration()
            .packed(true)
            .to_string(),
        "packed struct OrderOptimized { double d; int i; char ch; }"
    );
}
