//! Рекурсивный нисходящий парсер JSON-текста.
//!
//! Парсер работает по байтовому курсору с позицией: перед каждым
//! токеном пропускаются пробельные символы, затем ветвление по первому
//! непробельному байту. Несовпадение структуры — это [`ParseError`] с
//! ожидаемым токеном, встреченным символом и байтовой позицией;
//! частично построенное дерево наружу не выходит.
//!
//! Сохранённые причуды исходного формата:
//! - `null`, `true`, `false` распознаются по первому символу, остальные
//!   байты литерала съедаются без проверки написания;
//! - строки читаются до следующей кавычки, escape-последовательности не
//!   обрабатываются;
//! - числовой литерал читается как f64 и сохраняется как `Integer`,
//!   если он в точности равен своему усечению до i64 (`3.0` → `3`).

use std::collections::BTreeMap;

use crate::{ParseError, Value};

/// Разбирает один JSON-документ из строки.
///
/// Хвост после корневого значения не проверяется (поведение исходной
/// реализации).
pub fn parse_value(input: &str) -> Result<Value, ParseError> {
    JsonParser::new(input).parse_value()
}

/// Парсер с байтовым курсором по входной строке.
pub struct JsonParser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> JsonParser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    /// Разбирает следующее значение, начиная с текущей позиции.
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::UnexpectedEof { pos: self.pos }),
            Some(b'n') => {
                // «null»: четыре байта без проверки написания
                self.consume_literal(4)?;
                Ok(Value::Null)
            }
            Some(b't') => {
                self.consume_literal(4)?;
                Ok(Value::Boolean(true))
            }
            Some(b'f') => {
                self.consume_literal(5)?;
                Ok(Value::Boolean(false))
            }
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Result<u8, ParseError> {
        let b = self
            .peek()
            .ok_or(ParseError::UnexpectedEof { pos: self.pos })?;
        self.pos += 1;
        Ok(b)
    }

    /// Символ по байтовой позиции, для сообщений об ошибках.
    ///
    /// Съедание литерала без проверки содержимого может оставить курсор
    /// внутри многобайтового символа, поэтому позиция сначала отводится
    /// назад до ближайшей границы символа.
    fn char_at(&self, pos: usize) -> char {
        let mut pos = pos.min(self.src.len());
        while pos > 0 && !self.src.is_char_boundary(pos) {
            pos -= 1;
        }
        self.src[pos..].chars().next().unwrap_or('\u{FFFD}')
    }

    /// Пропускает пробелы и требует ровно байт `expected`.
    fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        self.skip_whitespace();
        let found = self.next_byte()?;
        if found != expected {
            return Err(ParseError::Expected {
                expected: expected as char,
                found: self.char_at(self.pos - 1),
                pos: self.pos - 1,
            });
        }
        Ok(())
    }

    /// Съедает `n` байт литерала без проверки содержимого.
    fn consume_literal(&mut self, n: usize) -> Result<(), ParseError> {
        if self.pos + n > self.bytes.len() {
            return Err(ParseError::UnexpectedEof {
                pos: self.bytes.len(),
            });
        }
        self.pos += n;
        Ok(())
    }

    /// Строковый литерал: от кавычки до следующей кавычки, без
    /// обработки escape-последовательностей.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.expect(b'"')?;
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'"' {
                let s = self.src[start..self.pos].to_string();
                self.pos += 1;
                return Ok(s);
            }
            self.pos += 1;
        }
        Err(ParseError::UnterminatedString { pos: start - 1 })
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.expect(b'[')?;
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(Vec::new()));
        }

        let mut items = Vec::new();
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.next_byte()? {
                b']' => break,
                b',' => continue,
                _ => {
                    return Err(ParseError::Expected {
                        expected: ',',
                        found: self.char_at(self.pos - 1),
                        pos: self.pos - 1,
                    })
                }
            }
        }
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.expect(b'{')?;
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(BTreeMap::new()));
        }

        let mut map = BTreeMap::new();
        loop {
            self.skip_whitespace();
            let key = self.parse_string()?;
            self.expect(b':')?;
            let value = self.parse_value()?;
            // повторный ключ: последняя запись побеждает
            map.insert(key, value);

            self.skip_whitespace();
            match self.next_byte()? {
                b'}' => break,
                b',' => continue,
                _ => {
                    return Err(ParseError::Expected {
                        expected: ',',
                        found: self.char_at(self.pos - 1),
                        pos: self.pos - 1,
                    })
                }
            }
        }
        Ok(Value::Object(map))
    }

    /// Числовой литерал: максимальная последовательность символов
    /// `0-9 + - . e E`, разобранная как f64.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E') {
                self.pos += 1;
            } else {
                break;
            }
        }

        if self.pos == start {
            // вообще не похоже на число — покажем встреченный символ
            return Err(ParseError::InvalidNumber {
                literal: self.char_at(start).to_string(),
                pos: start,
            });
        }

        let literal = &self.src[start..self.pos];
        let d: f64 = literal.parse().map_err(|_| ParseError::InvalidNumber {
            literal: literal.to_string(),
            pos: start,
        })?;

        // Целочисленная политика: значение, в точности равное своему
        // усечению до i64, сохраняется как Integer (то есть `3.0` → 3).
        let truncated = d as i64;
        if truncated as f64 == d {
            Ok(Value::Integer(truncated))
        } else {
            Ok(Value::Float(d))
        }
    }
}
