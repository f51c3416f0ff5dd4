//! Restaurant-name resolution against a fixed registry.

/// Known restaurants, in match-priority order.
pub static KNOWN_RESTAURANTS: &[&str] = &[
    "Bob's",
    "Casa do Pão de Queijo",
    "Pastelaria do Chinês",
    "Frango Assado",
    "Madero",
    "Ráscal",
    "Paris 6",
    "KFC",
    "Café do Ponto",
    "Dona Nuvem",
    "Santo Pão",
    "Havanna Café",
    "Mexicaníssimo",
    "Madeiro",
    "Bullguer",
    "China in Box",
    "Le Pain Quotidien",
    "Mr Cheney",
    "Brasileirinho",
    "Giraffas",
];

/// Returns the first registry entry contained (case-insensitively) in `query`,
/// or an empty string when none is.
pub fn resolve(query: &str, registry: &[&str]) -> String {
    let query = query.to_lowercase();

    registry
        .iter()
        .find(|name| query.contains(&name.to_lowercase()))
        .map(|name| name.to_string())
        .unwrap_or_default()
}
