use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use crate::bot::Bot;
use crate::bots::{HumanBot, RandomBot};

/// Returns a normalized label for a seat spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

pub fn is_human_spec(spec: &str) -> bool {
    label_for_spec(spec) == "human"
}

/// Create a named seat from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - ai[:seed] (alias: random[:seed])
///
/// Unknown specs fall back to an automated player. Seats without a name are
/// called "Player N", counting from 1.
pub fn create_bot_from_spec(spec: &str, index: usize, seed: u64) -> (String, Box<dyn Bot>) {
    let default_name = format!("Player {}", index + 1);
    let argument = spec
        .split_once(':')
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty());
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = argument.map_or(default_name, str::to_string);
            let bot: Box<dyn Bot> = Box::new(HumanBot::stdio(name.clone()));
            (name, bot)
        }
        "ai" | "random" | "" => {
            let custom_seed = argument
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or_else(|| derive_seed(seed, index));
            (default_name, random_bot(custom_seed))
        }
        other => {
            warn!(spec = other, "unknown player spec, defaulting to an AI player");
            (default_name, random_bot(derive_seed(seed, index)))
        }
    }
}

fn random_bot(seed: u64) -> Box<dyn Bot> {
    Box::new(RandomBot::new(StdRng::seed_from_u64(seed)))
}

fn derive_seed(seed: u64, index: usize) -> u64 {
    seed ^ ((index as u64 + 1) * 0x9E37_79B9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_normalized() {
        assert_eq!(label_for_spec("Human:Alice"), "human");
        assert_eq!(label_for_spec(" ai:42 "), "ai");
        assert!(is_human_spec("HUMAN"));
        assert!(!is_human_spec("random:3"));
    }

    #[test]
    fn automated_seats_get_default_names() {
        let (name, _) = create_bot_from_spec("ai", 0, 1);
        assert_eq!(name, "Player 1");
        let (name, _) = create_bot_from_spec("random:99", 2, 1);
        assert_eq!(name, "Player 3");
        let (name, _) = create_bot_from_spec("wizard", 1, 1);
        assert_eq!(name, "Player 2");
    }
}
