//! Sentiment lexicon used to turn review adjectives into 1–5 ratings.
//!
//! Entries are kept as an ordered slice rather than a map: the scorer's
//! first-match and last-match rules both depend on this exact order.

/// Keyword that opens the "service" region of a review.
pub const SERVICE_KEYWORD: &str = "atendimento";

/// Rating used when no lexicon token is found in the relevant region.
pub const NEUTRAL_SCORE: u8 = 3;

/// Ordered `(token, score)` pairs. All tokens are lowercase.
pub type Lexicon = &'static [(&'static str, u8)];

/// The built-in lexicon, grouped by score from worst to best.
pub static LEXICON: Lexicon = &[
    // 1/5
    ("horrível", 1),
    ("nojento", 1),
    ("terrível", 1),
    // 2/5
    ("ruim", 2),
    ("desagradável", 2),
    ("ofensivo", 2),
    // 3/5
    ("mediano", 3),
    ("sem graça", 3),
    ("irrelevante", 3),
    ("mediana", 3),
    // 4/5
    ("bom", 4),
    ("bons", 4),
    ("agradável", 4),
    ("satisfatório", 4),
    ("boa", 4),
    ("eficiente", 4),
    // 5/5
    ("incrível", 5),
    ("impressionante", 5),
    ("surpreendente", 5),
    ("incríveis", 5),
];
