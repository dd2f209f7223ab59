//! Модуль для сериализации значений `Value` в бинарный формат.
//!
//! Кодирование рекурсивное, в прямом порядке: сначала тег, затем
//! полезная нагрузка. Тела `String`, `Array` и `Object` сначала
//! собираются в промежуточный буфер, после чего фреймируются байтом-флагом
//! и 8-байтовой длиной; сжатие применяется по политике из [`CodecConfig`].

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::{
    compression::compress_block,
    tags::{FLAG_COMPRESSED, FLAG_RAW},
};
use crate::{CodecConfig, EncodeError, Value};

/// Запись `Value` в поток с политикой сжатия из `config`.
pub fn write_value<W: Write>(
    w: &mut W,
    v: &Value,
    config: &CodecConfig,
) -> Result<(), EncodeError> {
    write_value_at_depth(w, v, config, 0)
}

/// Кодирует `Value` в вектор байтов.
pub fn encode_value(v: &Value, config: &CodecConfig) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    write_value(&mut buf, v, config)?;
    Ok(buf)
}

/// Рекурсивный шаг кодирования. `depth` — глубина вложенности узла,
/// 0 — корень документа; элементы контейнера кодируются на `depth + 1`,
/// решение о сжатии самого контейнера принимается на его `depth`.
fn write_value_at_depth<W: Write>(
    w: &mut W,
    v: &Value,
    config: &CodecConfig,
    depth: u64,
) -> Result<(), EncodeError> {
    w.write_u8(v.tag())?;

    match v {
        Value::Null => Ok(()),
        Value::Boolean(b) => {
            w.write_u8(*b as u8)?;
            Ok(())
        }
        Value::Integer(i) => {
            w.write_i64::<LittleEndian>(*i)?;
            Ok(())
        }
        Value::Float(f) => {
            w.write_f64::<LittleEndian>(*f)?;
            Ok(())
        }
        Value::String(s) => write_framed(w, s.as_bytes(), config, depth),
        Value::Array(items) => {
            let mut body = Vec::new();
            body.write_u64::<LittleEndian>(items.len() as u64)?;
            for item in items {
                write_value_at_depth(&mut body, item, config, depth + 1)?;
            }
            write_framed(w, &body, config, depth)
        }
        Value::Object(map) => {
            let mut body = Vec::new();
            body.write_u64::<LittleEndian>(map.len() as u64)?;
            // BTreeMap отдаёт ключи в отсортированном порядке — порядок
            // записи детерминирован.
            for (key, value) in map {
                let kb = key.as_bytes();
                body.write_u64::<LittleEndian>(kb.len() as u64)?;
                body.write_all(kb)?;
                write_value_at_depth(&mut body, value, config, depth + 1)?;
            }
            write_framed(w, &body, config, depth)
        }
    }
}

/// Фреймирует готовое тело: флаг, 8-байтовая длина, байты тела
/// (возможно, сжатые).
fn write_framed<W: Write>(
    w: &mut W,
    body: &[u8],
    config: &CodecConfig,
    depth: u64,
) -> Result<(), EncodeError> {
    if config.should_compress(body.len(), depth) {
        let compressed = compress_block(body).map_err(EncodeError::Compression)?;
        w.write_u8(FLAG_COMPRESSED)?;
        w.write_u64::<LittleEndian>(compressed.len() as u64)?;
        w.write_all(&compressed)?;
    } else {
        w.write_u8(FLAG_RAW)?;
        w.write_u64::<LittleEndian>(body.len() as u64)?;
        w.write_all(body)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        collections::BTreeMap,
        io::{Cursor, Read},
    };

    use byteorder::ReadBytesExt;

    use super::*;
    use crate::codec::tags::*;

    fn encode(v: &Value) -> Vec<u8> {
        encode_value(v, &CodecConfig::default()).unwrap()
    }

    #[test]
    fn test_write_null() {
        assert_eq!(encode(&Value::Null), vec![TAG_NULL]);
    }

    #[test]
    fn test_write_boolean() {
        assert_eq!(encode(&Value::Boolean(true)), vec![TAG_BOOLEAN, 1]);
        assert_eq!(encode(&Value::Boolean(false)), vec![TAG_BOOLEAN, 0]);
    }

    #[test]
    fn test_write_integer() {
        let buf = encode(&Value::Integer(-123456));
        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_u8().unwrap(), TAG_INTEGER);
        assert_eq!(cursor.read_i64::<LittleEndian>().unwrap(), -123456);
    }

    #[test]
    fn test_write_float() {
        let buf = encode(&Value::Float(2.5));
        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_u8().unwrap(), TAG_FLOAT);
        assert_eq!(cursor.read_f64::<LittleEndian>().unwrap(), 2.5);
    }

    #[test]
    fn test_write_short_string_is_raw() {
        let buf = encode(&Value::String("hello".to_string()));
        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_u8().unwrap(), TAG_STRING);
        assert_eq!(cursor.read_u8().unwrap(), FLAG_RAW);
        assert_eq!(cursor.read_u64::<LittleEndian>().unwrap(), 5);
        let mut body = vec![0; 5];
        cursor.read_exact(&mut body).unwrap();
        assert_eq!(&body, b"hello");
    }

    /// Пустая строка всё равно проходит фреймирование: флаг 0, длина 0.
    #[test]
    fn test_write_empty_string_framing() {
        let buf = encode(&Value::String(String::new()));
        assert_eq!(buf[0], TAG_STRING);
        assert_eq!(buf[1], FLAG_RAW);
        assert_eq!(&buf[2..10], &[0u8; 8]);
        assert_eq!(buf.len(), 10);
    }

    /// Пустой массив: тег, флаг 0, длина 8, тело — восемь нулевых байт
    /// (счётчик 0).
    #[test]
    fn test_write_empty_array_framing() {
        let buf = encode(&Value::Array(vec![]));
        assert_eq!(buf[0], TAG_ARRAY);
        assert_eq!(buf[1], FLAG_RAW);
        assert_eq!(&buf[2..10], &8u64.to_le_bytes());
        assert_eq!(&buf[10..18], &[0u8; 8]);
        assert_eq!(buf.len(), 18);
    }

    #[test]
    fn test_write_empty_object_framing() {
        let buf = encode(&Value::Object(BTreeMap::new()));
        assert_eq!(buf[0], TAG_OBJECT);
        assert_eq!(buf[1], FLAG_RAW);
        assert_eq!(&buf[2..10], &8u64.to_le_bytes());
        assert_eq!(&buf[10..18], &[0u8; 8]);
    }

    #[test]
    fn test_write_array_body_layout() {
        let buf = encode(&Value::Array(vec![Value::Null, Value::Boolean(true)]));
        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_u8().unwrap(), TAG_ARRAY);
        assert_eq!(cursor.read_u8().unwrap(), FLAG_RAW);
        let len = cursor.read_u64::<LittleEndian>().unwrap();
        // счётчик + null(1) + boolean(2)
        assert_eq!(len, 8 + 1 + 2);
        assert_eq!(cursor.read_u64::<LittleEndian>().unwrap(), 2);
        assert_eq!(cursor.read_u8().unwrap(), TAG_NULL);
        assert_eq!(cursor.read_u8().unwrap(), TAG_BOOLEAN);
        assert_eq!(cursor.read_u8().unwrap(), 1);
    }

    #[test]
    fn test_write_object_entry_layout() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), Value::Integer(1));
        let buf = encode(&Value::Object(map));

        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_u8().unwrap(), TAG_OBJECT);
        assert_eq!(cursor.read_u8().unwrap(), FLAG_RAW);
        let _frame_len = cursor.read_u64::<LittleEndian>().unwrap();
        assert_eq!(cursor.read_u64::<LittleEndian>().unwrap(), 1); // count
        assert_eq!(cursor.read_u64::<LittleEndian>().unwrap(), 1); // keylen
        let mut key = vec![0; 1];
        cursor.read_exact(&mut key).unwrap();
        assert_eq!(&key, b"a");
        assert_eq!(cursor.read_u8().unwrap(), TAG_INTEGER);
        assert_eq!(cursor.read_i64::<LittleEndian>().unwrap(), 1);
    }

    /// Длинная строка на глубине 0 сжимается: флаг 1, длина — длина
    /// сжатых байт.
    #[test]
    fn test_write_long_string_is_compressed() {
        let s = "x".repeat(300);
        let buf = encode(&Value::String(s));
        assert_eq!(buf[0], TAG_STRING);
        assert_eq!(buf[1], FLAG_COMPRESSED);
        let len = u64::from_le_bytes(buf[2..10].try_into().unwrap()) as usize;
        assert_eq!(buf.len(), 10 + len);
        // 300 одинаковых символов сжимаются сильно
        assert!(len < 300);
    }

    /// На глубине 1 (элемент массива) строка по умолчанию не сжимается,
    /// хотя сам массив — сжимается.
    #[test]
    fn test_default_config_compresses_only_root() {
        let s = Value::String("y".repeat(300));
        let buf = encode(&Value::Array(vec![s]));
        assert_eq!(buf[0], TAG_ARRAY);
        assert_eq!(buf[1], FLAG_COMPRESSED);

        let nested = encode_value(
            &Value::Array(vec![Value::String("y".repeat(300))]),
            &CodecConfig::without_compression(),
        )
        .unwrap();
        // без сжатия внутри фрейма виден сырой вложенный фрейм строки
        assert_eq!(nested[0], TAG_ARRAY);
        assert_eq!(nested[1], FLAG_RAW);
        // тело: счётчик(8) + тег строки
        assert_eq!(nested[10 + 8], TAG_STRING);
        assert_eq!(nested[10 + 9], FLAG_RAW);
    }

    /// Диапазон глубин позволяет сжимать и вложенные узлы.
    #[test]
    fn test_depth_range_compresses_nested_string() {
        let cfg = CodecConfig::default().with_depth_range(0, 8);
        let buf = encode_value(&Value::Array(vec![Value::String("z".repeat(300))]), &cfg).unwrap();
        assert_eq!(buf[0], TAG_ARRAY);
        // сам массив тоже превысил порог и сжат на глубине 0
        assert_eq!(buf[1], FLAG_COMPRESSED);

        // распакуем тело массива и убедимся, что вложенная строка
        // сжата отдельно
        let len = u64::from_le_bytes(buf[2..10].try_into().unwrap()) as usize;
        let body = crate::codec::decompress_block(&buf[10..10 + len]).unwrap();
        assert_eq!(&body[..8], &1u64.to_le_bytes());
        assert_eq!(body[8], TAG_STRING);
        assert_eq!(body[9], FLAG_COMPRESSED);
    }
}
