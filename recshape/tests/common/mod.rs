#![allow(dead_code)]

use recshape::{MemoryType, MethodId, RecordShape};

pub type MemoryShape = RecordShape<MemoryType, MethodId>;

/// Components rendered as `name:type`, in order.
pub fn components(shape: &MemoryShape) -> Vec<String> {
    shape
        .components
        .iter()
        .map(|c| format!("{}:{}", c.name, c.ty))
        .collect()
}

pub const SIGNATURE_PREFIX: &str =
    "Non-static, non-default methods must take no arguments and must return a value. Bad method: ";

pub const GENERIC_PREFIX: &str = "Interface methods cannot have type parameters. Bad method: ";
