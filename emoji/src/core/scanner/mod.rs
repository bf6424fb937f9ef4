// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod span;
pub mod span_iter;

// Re-export.
pub use span::*;
pub use span_iter::*;
