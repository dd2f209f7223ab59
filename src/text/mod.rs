//! Текстовый JSON-кодек: рекурсивный парсер и принтер.
//!
//! Оба направления работают с одной и той же моделью [`Value`]: парсер
//! строит дерево из текста, принтер печатает дерево обратно в текст.
//!
//! Известное ограничение формата (сохранено намеренно, см. тесты):
//! escape-последовательности не обрабатываются ни при чтении, ни при
//! записи. Строки с кавычками или обратной косой чертой корректно
//! проходят только через бинарный кодек.
//!
//! [`Value`]: crate::Value

pub mod parser;
pub mod printer;

pub use parser::{parse_value, JsonParser};
pub use printer::{print_value, write_json};
