//! IDL Document Shape
//!
//! The subset of a parsed thrift document the Go backend looks at when deciding
//! imports: declarations, their fields and service linkage.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thrift {
    pub filename: String,
    pub enums: Vec<Enum>,
    pub structs: Vec<StructLike>,
    pub unions: Vec<StructLike>,
    pub exceptions: Vec<StructLike>,
    pub services: Vec<Service>,
}

impl Thrift {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Structs, unions and exceptions, in that order.
    pub fn struct_likes(&self) -> impl Iterator<Item = &StructLike> {
        self.structs
            .iter()
            .chain(self.unions.iter())
            .chain(self.exceptions.iter())
    }

    pub fn struct_like_count(&self) -> usize {
        self.structs.len() + self.unions.len() + self.exceptions.len()
    }

    /// Total number of functions over all services.
    pub fn function_count(&self) -> usize {
        self.services.iter().map(|svc| svc.functions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.struct_like_count() == 0 && self.services.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Enum {
    pub name: String,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StructLike {
    pub name: String,
    pub fields: Vec<Field>,
}

impl StructLike {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Type,
}

impl Field {
    pub fn new(id: i32, name: impl Into<String>, field_type: Type) -> Self {
        Self {
            id,
            name: name.into(),
            field_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    List(Box<Type>),
    Set(Box<Type>),
    Map(Box<Type>, Box<Type>),
    /// Reference to a declared type.
    Named(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    pub name: String,
    /// Name of the base service; `None` or empty when the service extends nothing.
    pub extends: Option<String>,
    pub functions: Vec<Function>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_base(&self) -> bool {
        self.extends.as_deref().is_some_and(|base| !base.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Function {
    pub name: String,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
