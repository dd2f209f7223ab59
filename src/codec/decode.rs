//! Модуль для десериализации значений `Value` из бинарного формата.
//!
//! Каждое значение начинается с однобайтового тега; фреймированные типы
//! (`String`, `Array`, `Object`) несут байт-флаг сжатия и 8-байтовую
//! длину. Декодер работает по срезу, поэтому каждая заявленная длина
//! (длина фрейма, счётчик контейнера, длина ключа) проверяется по
//! остатку входа *до* выделения памяти: повреждённый поток с огромной
//! длиной не приводит к неограниченной аллокации.
//!
//! Неизвестный тег или флаг — это ошибка, а не значение по умолчанию.

use std::{
    collections::BTreeMap,
    io::{Cursor, Read},
};

use byteorder::{LittleEndian, ReadBytesExt};

use super::{
    compression::decompress_block,
    tags::{
        FLAG_COMPRESSED, FLAG_RAW, TAG_ARRAY, TAG_BOOLEAN, TAG_FLOAT, TAG_INTEGER, TAG_NULL,
        TAG_OBJECT, TAG_STRING,
    },
};
use crate::{DecodeError, Value};

/// Десериализует значение [`Value`] из курсора по срезу байтов.
pub fn read_value(cur: &mut Cursor<&[u8]>) -> Result<Value, DecodeError> {
    let tag = cur.read_u8()?;
    match tag {
        TAG_NULL => Ok(Value::Null),
        TAG_BOOLEAN => {
            let b = cur.read_u8()? != 0;
            Ok(Value::Boolean(b))
        }
        TAG_INTEGER => {
            let i = cur.read_i64::<LittleEndian>()?;
            Ok(Value::Integer(i))
        }
        TAG_FLOAT => {
            let f = cur.read_f64::<LittleEndian>()?;
            Ok(Value::Float(f))
        }
        TAG_STRING => {
            let body = read_framed(cur)?;
            Ok(Value::String(String::from_utf8(body)?))
        }
        TAG_ARRAY => {
            let body = read_framed(cur)?;
            read_array_body(&body)
        }
        TAG_OBJECT => {
            let body = read_framed(cur)?;
            read_object_body(&body)
        }
        other => Err(DecodeError::UnknownTag(other)),
    }
}

/// Декодирует одно значение из среза байтов.
pub fn decode_value(data: &[u8]) -> Result<Value, DecodeError> {
    read_value(&mut Cursor::new(data))
}

fn remaining(cur: &Cursor<&[u8]>) -> u64 {
    (cur.get_ref().len() as u64).saturating_sub(cur.position())
}

/// Читает фрейм: флаг, длину, тело; распаковывает тело, если флаг
/// говорит, что оно сжато.
fn read_framed(cur: &mut Cursor<&[u8]>) -> Result<Vec<u8>, DecodeError> {
    let flag = cur.read_u8()?;
    let len = cur.read_u64::<LittleEndian>()?;
    let left = remaining(cur);
    if len > left {
        return Err(DecodeError::LengthOverflow {
            declared: len,
            remaining: left,
        });
    }

    let mut body = vec![0u8; len as usize];
    cur.read_exact(&mut body)?;

    match flag {
        FLAG_RAW => Ok(body),
        FLAG_COMPRESSED => decompress_block(&body).map_err(DecodeError::Decompression),
        other => Err(DecodeError::UnknownFlag(other)),
    }
}

/// Разбирает тело массива: счётчик, затем элементы.
fn read_array_body(body: &[u8]) -> Result<Value, DecodeError> {
    let mut cur = Cursor::new(body);
    let count = cur.read_u64::<LittleEndian>()?;
    // каждый элемент занимает минимум 1 байт (тег), так что счётчик
    // больше остатка заведомо повреждён
    let left = remaining(&cur);
    if count > left {
        return Err(DecodeError::LengthOverflow {
            declared: count,
            remaining: left,
        });
    }

    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        items.push(read_value(&mut cur)?);
    }
    Ok(Value::Array(items))
}

/// Разбирает тело объекта: счётчик, затем записи
/// `длина ключа / ключ / значение`.
fn read_object_body(body: &[u8]) -> Result<Value, DecodeError> {
    let mut cur = Cursor::new(body);
    let count = cur.read_u64::<LittleEndian>()?;
    let left = remaining(&cur);
    if count > left {
        return Err(DecodeError::LengthOverflow {
            declared: count,
            remaining: left,
        });
    }

    let mut map = BTreeMap::new();
    for _ in 0..count {
        let key_len = cur.read_u64::<LittleEndian>()?;
        let left = remaining(&cur);
        if key_len > left {
            return Err(DecodeError::LengthOverflow {
                declared: key_len,
                remaining: left,
            });
        }
        let mut key_bytes = vec![0u8; key_len as usize];
        cur.read_exact(&mut key_bytes)?;
        let key = String::from_utf8(key_bytes)?;

        let value = read_value(&mut cur)?;
        map.insert(key, value);
    }
    Ok(Value::Object(map))
}
