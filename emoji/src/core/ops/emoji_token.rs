// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{Sequence, SequenceKind};

/// An emoji token found in some text, handed to the transform of
/// [`crate::Catalog::replace_all_emoji_func`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmojiToken<'c, 'a> {
    /// Zero based position of this token among the emoji tokens of the text. The
    /// transform sees `0`, `1`, `2`, etc. in that order.
    pub index: usize,
    /// The exact slice of the input that matched. This includes an absorbed trailing
    /// U+FE0F, so it can be longer than [`Sequence::as_str`].
    pub text: &'a str,
    pub start_byte_index: usize,
    pub sequence: &'c Sequence,
}

impl EmojiToken<'_, '_> {
    #[must_use]
    pub fn kind(&self) -> SequenceKind { self.sequence.kind() }

    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.start_byte_index..self.start_byte_index + self.text.len()
    }
}
