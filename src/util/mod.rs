//! Cross-cutting helpers: durable key-value storage and pt-BR formatting.

pub mod format;
pub mod storage;
