use crate::{TargetLayout, type_layout::TypeLayout};
use once_map::unsync::OnceMap;
use records::CType;
use target::Target;

#[derive(Debug)]
pub struct TypeLayoutCache {
    memo: OnceMap<CType, TypeLayout>,
    pub target: Target,
}

impl TypeLayoutCache {
    pub fn new(target: Target) -> Self {
        Self {
            memo: OnceMap::new(),
            target,
        }
    }

    pub fn get(&self, c_type: CType) -> TypeLayout {
        self.memo.map_insert_ref(
            &c_type,
            |c_type| *c_type,
            |key| self.target.c_type_layout(*key),
            |_k, v| *v,
        )
    }
}
