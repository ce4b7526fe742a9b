//! Common bracket-tree fixtures for tests.

// Sentences from the evaluation samples
pub const REVIVALISMO: &str = "(S (NP (ART Um) (N revivalismo) (ADJP (ADJ refrescante))))";
pub const REVIVALISMO_WRONG_TAGS: &str =
    "(S (NP (N Um) (ART revivalismo) (ADJP (CONJ refrescante))))";

// Shapes the parser has to handle
pub const SINGLE_LEAF: &str = "(N casa)";
pub const EMPTY_CATEGORY: &str = "(S (NP (N casa)) (VP))";
pub const HYPHENATED_TAGS: &str = "(S (PRON-PERS ele) (V-FIN disse) (N guarda-chuva))";
pub const BARE_WORDS: &str = "(S eu (V sei) que)";
pub const UNARY_CHAIN: &str = "(S (NP (N (PROP Lisboa))))";

pub const ANNOTATED_CORPUS: &str = r#"(S (NP (ART Um) (N revivalismo) (ADJP (ADJ refrescante))))
(S (PRON_PERS ele) (VP (V_FIN disse) (NP (ART a) (N verdade))))
(S (NP (N_PROP Lisboa)) (VP (V_FIN fica) (PP (PRP em) (NP (N_PROP Portugal)))))
"#;

/// Every well-formed fixture
pub const WELL_FORMED: &[&str] = &[
    REVIVALISMO,
    REVIVALISMO_WRONG_TAGS,
    SINGLE_LEAF,
    EMPTY_CATEGORY,
    HYPHENATED_TAGS,
    BARE_WORDS,
    UNARY_CHAIN,
];
