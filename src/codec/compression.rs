//! Модуль для сжатия и распаковки тел фреймов с помощью DEFLATE
//! (zlib-обёртка, crate `flate2`).
//!
//! Решение о том, *когда* применять сжатие, принимает кодек по
//! [`CodecConfig::should_compress`](crate::CodecConfig::should_compress);
//! здесь только сами преобразования байтов.

use std::io::{self, Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use tracing::debug;

/// Размер рабочего буфера при потоковой обработке.
const CHUNK_SIZE: usize = 64 * 1024;

/// Сжимает переданный срез байтов на уровне сжатия по умолчанию.
///
/// Вход подаётся кусками по 64 КиБ, так что объём входа не ограничен
/// размером непрерывного рабочего буфера. Ошибка инициализации или
/// потока возвращается как `Err`, а не как пустой буфер.
///
/// Если сжатый результат не меньше входа, выдаётся отладочное событие,
/// но результат всё равно возвращается: решение о его использовании
/// принимает кодек.
pub fn compress_block(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    for chunk in data.chunks(CHUNK_SIZE) {
        encoder.write_all(chunk)?;
    }
    let output = encoder.finish()?;

    if !data.is_empty() && output.len() >= data.len() {
        debug!(
            input = data.len(),
            output = output.len(),
            "compression did not reduce size"
        );
    }

    Ok(output)
}

/// Распаковывает блок данных, сжатых [`compress_block`].
///
/// Возвращает ровно те байты, что были переданы при сжатии, или `Err`
/// при повреждённом входе.
pub fn decompress_block(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut output = Vec::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let n = decoder.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        output.extend_from_slice(&buffer[..n]);
    }
    Ok(output)
}
