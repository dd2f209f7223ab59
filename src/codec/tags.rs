//! Определение тегов для бинарного формата значений `Value`.
//!
//! Каждый вариант помечается однобайтовым значением в порядке
//! объявления вариантов. Используется в модулях `decode` и `encode`.

/// Null (без полезной нагрузки)
pub const TAG_NULL: u8 = 0x00;
/// Логическое значение (bool)
pub const TAG_BOOLEAN: u8 = 0x01;
/// Целое число (i64)
pub const TAG_INTEGER: u8 = 0x02;
/// Число с плавающей точкой (f64)
pub const TAG_FLOAT: u8 = 0x03;
/// Строка (UTF-8)
pub const TAG_STRING: u8 = 0x04;
/// Массив произвольных значений
pub const TAG_ARRAY: u8 = 0x05;
/// Объект (map<String, Value>)
pub const TAG_OBJECT: u8 = 0x06;

/// Байт-флаг фрейма: тело записано как есть.
pub const FLAG_RAW: u8 = 0x00;
/// Байт-флаг фрейма: тело сжато.
pub const FLAG_COMPRESSED: u8 = 0x01;

use crate::Value;

impl Value {
    /// Тег варианта в бинарном формате.
    pub fn tag(&self) -> u8 {
        match self {
            Value::Null => TAG_NULL,
            Value::Boolean(_) => TAG_BOOLEAN,
            Value::Integer(_) => TAG_INTEGER,
            Value::Float(_) => TAG_FLOAT,
            Value::String(_) => TAG_STRING,
            Value::Array(_) => TAG_ARRAY,
            Value::Object(_) => TAG_OBJECT,
        }
    }
}
