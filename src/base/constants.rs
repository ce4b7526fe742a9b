//! Domain constants shared across modules.

/// Tag stored when a constituent exists on only one side of a comparison.
pub const NOT_FOUND_TAG: &str = "#NF#";

/// Key of the lemma attribute attached to leaves by upstream annotators.
pub const LEMMA_KEY: &str = "lemma";

/// Separator placed between a lemma and its tag when filters append the tag.
pub const TAG_SUFFIX_SEPARATOR: char = '_';
