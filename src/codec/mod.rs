//! Модуль сериализации и десериализации значений `Value` в бинарный
//! формат CON.
//!
//! ## Формат
//!
//! Каждое значение начинается с однобайтового тега. За тегом следует
//! либо полезная нагрузка фиксированной ширины (`Boolean`, `Integer`,
//! `Float`), либо фрейм переменной длины (`String`, `Array`, `Object`):
//! байт-флаг (0 — как есть, 1 — сжато), 8-байтовая длина little-endian
//! и само тело. Тело контейнера — это 8-байтовый счётчик элементов и
//! рекурсивно закодированные вложенные значения.
//!
//! ## Модули
//!
//! - [`tags`] — константы тегов для типов данных
//! - [`compression`] — сжатие и распаковка тел фреймов
//! - [`encode`] — сериализация значений в бинарный формат
//! - [`decode`] — десериализация из бинарного формата

pub mod compression;
pub mod decode;
pub mod encode;
pub mod tags;

pub use compression::{compress_block, decompress_block};
pub use decode::{decode_value, read_value};
pub use encode::{encode_value, write_value};
pub use tags::*;
