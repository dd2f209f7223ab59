//! CLI для формата CON
//!
//! Утилита командной строки поверх библиотечных кодеков: разбирает
//! JSON-текст в дерево значений, пишет его в бинарный формат CON и
//! обратно. Файлы открывает и закрывает только CLI — библиотека
//! работает со срезами байтов и абстрактными потоками записи.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use confile::{decode_value, encode_value, parse_value, print_value, CodecConfig};

#[derive(Parser)]
#[command(name = "confile")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert JSON-shaped data to and from the compact CON binary format", long_about = None)]
struct Cli {
    /// Порог сжатия в байтах: тела фреймов больше порога сжимаются
    #[arg(long, default_value_t = 256)]
    threshold: usize,
    /// Минимальная глубина, на которой применяется сжатие (0 — корень)
    #[arg(long, default_value_t = 0)]
    min_depth: u64,
    /// Максимальная глубина, на которой применяется сжатие
    #[arg(long, default_value_t = 0)]
    max_depth: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Разобрать JSON-файл и записать бинарный .con
    Encode {
        input: PathBuf,
        /// Путь результата (по умолчанию вход с расширением .con)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Прочитать бинарный .con и записать JSON-текст
    Decode {
        input: PathBuf,
        /// Путь результата (по умолчанию вход с расширением .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Прочитать бинарный .con и напечатать JSON в stdout
    Show { input: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = CodecConfig {
        compression_threshold: cli.threshold,
        compression_min_depth: cli.min_depth,
        compression_max_depth: cli.max_depth,
    };

    match cli.command {
        Commands::Encode { input, output } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let value = parse_value(&text)
                .with_context(|| format!("failed to parse {}", input.display()))?;
            let encoded = encode_value(&value, &config)?;

            let output = output.unwrap_or_else(|| input.with_extension("con"));
            debug!(
                input = %input.display(),
                output = %output.display(),
                bytes = encoded.len(),
                "encoded document"
            );
            fs::write(&output, &encoded)
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        Commands::Decode { input, output } => {
            let data =
                fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
            let value = decode_value(&data)
                .with_context(|| format!("failed to decode {}", input.display()))?;

            let output = output.unwrap_or_else(|| input.with_extension("json"));
            fs::write(&output, print_value(&value))
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        Commands::Show { input } => {
            let data =
                fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
            let value = decode_value(&data)
                .with_context(|| format!("failed to decode {}", input.display()))?;
            println!("{}", print_value(&value));
        }
    }

    Ok(())
}
