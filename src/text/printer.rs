//! Рекурсивный принтер дерева [`Value`] в JSON-текст.
//!
//! [`Value`]: crate::Value

use std::fmt::{self, Write};

use crate::Value;

/// Печатает значение в строку JSON-текста.
///
/// Лексические формы: `null`, `true`/`false`, целые без дробной части,
/// числа с плавающей точкой всегда с дробной частью (`3.0`, а не `3`),
/// строки в двойных кавычках **без экранирования**, массивы и объекты
/// с разделителем `", "`. Ключи объектов печатаются в отсортированном
/// порядке. Нефинитные числа печатаются в формах `Display` (`NaN`,
/// `inf`) и корректным JSON не являются — как и в исходном формате.
pub fn print_value(v: &Value) -> String {
    let mut out = String::new();
    write_json(&mut out, v).expect("formatting into a String cannot fail");
    out
}

/// Пишет JSON-представление значения в форматтер.
pub fn write_json<W: Write>(w: &mut W, v: &Value) -> fmt::Result {
    match v {
        Value::Null => w.write_str("null"),
        Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => write!(w, "{i}"),
        Value::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 {
                // иначе `3.0` напечатается как `3` и при повторном
                // разборе перестанет отличаться от целого
                write!(w, "{f:.1}")
            } else {
                write!(w, "{f}")
            }
        }
        Value::String(s) => write!(w, "\"{s}\""),
        Value::Array(items) => {
            w.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                write_json(w, item)?;
            }
            w.write_char(']')
        }
        Value::Object(map) => {
            w.write_char('{')?;
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                write!(w, "\"{key}\": ")?;
                write_json(w, value)?;
            }
            w.write_char('}')
        }
    }
}
