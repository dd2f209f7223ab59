pub mod types;

pub use types::{Value, ValueKind};
