//! Test-only fixtures: token-based card construction.

use crate::cards::Card;

/// Build a card from its serde token, e.g. `"QC"` or `"TD"`.
pub fn card(token: &str) -> Card {
    serde_json::from_str(&format!("\"{token}\"")).expect("valid card token")
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}
