// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod catalog;
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod matcher;
pub mod ops;
pub mod scanner;

// Re-export.
pub use catalog::*;
pub use common::*;
pub use log::*;
pub use matcher::*;
pub use ops::*;
pub use scanner::*;
