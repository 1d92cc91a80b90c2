//! Динамическое значение, в которое проецирует общий `select`,
//! и типаж `FromValue` для обратной распаковки через `unbox`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Значение с тегом типа.
///
/// Играет роль непрозрачного результата `Sequence::select`. Конкретный тип
/// восстанавливается через `Sequence::<Value>::unbox::<R>()`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Логическое значение.
    Bool(bool),
    /// Байт.
    Byte(u8),
    /// Целое платформенного размера.
    Int(isize),
    /// 64-битное целое.
    Int64(i64),
    /// 64-битное число с плавающей точкой.
    Float64(f64),
    /// Строка.
    String(String),
}

impl Value {
    /// Имя типа, хранящегося в значении. Совпадает с `FromValue::TYPE_NAME`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => bool::TYPE_NAME,
            Self::Byte(_) => u8::TYPE_NAME,
            Self::Int(_) => isize::TYPE_NAME,
            Self::Int64(_) => i64::TYPE_NAME,
            Self::Float64(_) => f64::TYPE_NAME,
            Self::String(_) => String::TYPE_NAME,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

/// Тип, который можно извлечь из `Value` без преобразования.
///
/// Извлечение строгое: `Value::Int(1)` не распаковывается в `i64`,
/// а `Value::Int64(1)` не распаковывается в `isize`.
pub trait FromValue: Sized {
    /// Имя типа для сообщений об ошибках.
    const TYPE_NAME: &'static str;

    /// Возвращает `Some`, если `value` хранит ровно этот тип.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_value_variant {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl FromValue for $ty {
            const TYPE_NAME: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_value_variant!(bool, Bool, "bool");
impl_value_variant!(u8, Byte, "byte");
impl_value_variant!(isize, Int, "int");
impl_value_variant!(i64, Int64, "int64");
impl_value_variant!(f64, Float64, "float64");
impl_value_variant!(String, String, "string");

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}
