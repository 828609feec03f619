//! The quote bank and selector.
//!
//! The bank is embedded at compile time via `include_str!` and parsed
//! lazily on first access. Selection is a uniform random pick with bounded
//! repeat-avoidance: up to 10 re-rolls when the draw matches the previous
//! quote, accepting the last draw if every attempt collides. Best effort,
//! not a guarantee.

use rand::Rng;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::mood::Mood;

const QUOTES_JSON: &str = include_str!("../embedded/quotes.json");

/// Shown when a mood has no quotes at all
pub const FALLBACK_QUOTE: &str = "Silence. The worst advice of all.";

/// Maximum re-rolls when a draw repeats the previous quote
const MAX_REROLLS: usize = 10;

/// Get the quote bank (lazy-loaded)
pub fn quote_bank() -> &'static HashMap<Mood, Vec<String>> {
    static BANK: OnceLock<HashMap<Mood, Vec<String>>> = OnceLock::new();
    BANK.get_or_init(|| {
        serde_json::from_str(QUOTES_JSON).unwrap_or_else(|e| {
            panic!("Failed to parse quotes.json: {}", e);
        })
    })
}

/// Pick a quote for `mood`, avoiding `previous` when possible.
///
/// The random source is injected so tests can seed it.
pub fn pick(mood: Mood, previous: Option<&str>, rng: &mut impl Rng) -> String {
    let list = quote_bank().get(&mood).map(Vec::as_slice).unwrap_or(&[]);
    pick_from(list, previous, rng).to_string()
}

fn pick_from<'a>(list: &'a [String], previous: Option<&str>, rng: &mut impl Rng) -> &'a str {
    if list.is_empty() {
        return FALLBACK_QUOTE;
    }

    let mut next = list[rng.gen_range(0..list.len())].as_str();
    if list.len() > 1 {
        let mut attempts = 0;
        while previous == Some(next) && attempts < MAX_REROLLS {
            next = list[rng.gen_range(0..list.len())].as_str();
            attempts += 1;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quotes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_yields_fallback() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_from(&[], None, &mut rng), FALLBACK_QUOTE);
        assert_eq!(pick_from(&[], Some("anything"), &mut rng), FALLBACK_QUOTE);
    }

    #[test]
    fn single_quote_repeats_freely() {
        let list = quotes(&["only one"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick_from(&list, Some("only one"), &mut rng), "only one");
        }
    }

    #[test]
    fn picks_are_members_of_the_list() {
        let list = quotes(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let picked = pick_from(&list, Some("a"), &mut rng);
            assert!(list.iter().any(|q| q == picked));
        }
    }

    #[test]
    fn repeat_of_previous_is_practically_never() {
        // A repeat needs 11 straight collisions: p = 2^-11 per call with
        // two quotes. Not a hard guarantee, so the bound is statistical.
        let list = quotes(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut repeats = 0;
        for _ in 0..500 {
            if pick_from(&list, Some("a"), &mut rng) == "a" {
                repeats += 1;
            }
        }
        assert!(repeats <= 3, "improbably many repeats: {repeats}");
    }

    #[test]
    fn wider_lists_never_repeat_in_practice() {
        // Four quotes: p = 4^-11 per call. Zero expected over any run.
        let list = quotes(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            assert_ne!(pick_from(&list, Some("a"), &mut rng), "a");
        }
    }

    #[test]
    fn bank_covers_every_mood() {
        let bank = quote_bank();
        for mood in Mood::ALL {
            assert!(
                !bank.get(&mood).map(Vec::is_empty).unwrap_or(true),
                "no quotes for {mood}"
            );
        }
    }

    #[test]
    fn pick_draws_from_the_bank() {
        let mut rng = StdRng::seed_from_u64(99);
        let quote = pick(Mood::Savage, None, &mut rng);
        assert!(quote_bank()[&Mood::Savage].contains(&quote));
    }
}
