use std::fmt::Display;

/// Fundamental C types whose size and alignment depend on the target ABI.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum CType {
    Char,
    Short,
    Int,
    Long,
    LongLong,
    Float,
    Double,
    Pointer,
}

impl CType {
    pub const ALL: [CType; 8] = [
        CType::Char,
        CType::Short,
        CType::Int,
        CType::Long,
        CType::LongLong,
        CType::Float,
        CType::Double,
        CType::Pointer,
    ];
}

impl Display for CType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CType::Char => "char",
            CType::Short => "short",
            CType::Int => "int",
            CType::Long => "long",
            CType::LongLong => "long long",
            CType::Float => "float",
            CType::Double => "double",
            CType::Pointer => "void *",
        })
    }
}
