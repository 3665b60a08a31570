//! End-of-game scoring.
//!
//! Cards left in hand count against their holder: numbers at face value,
//! action cards 20, wild cards 50. The winner collects the points left in
//! every opponent's hand.

use crate::action::PlayerId;

/// Winner's points given every seat's remaining hand points.
pub fn winner_points(remaining: &[u32], winner: PlayerId) -> u32 {
    remaining
        .iter()
        .enumerate()
        .filter(|(id, _)| *id != winner)
        .map(|(_, points)| points)
        .sum()
}

/// Seats ordered from fewest to most points left in hand.
pub fn standings(names: &[String], remaining: &[u32]) -> Vec<(String, u32)> {
    let mut table: Vec<(String, u32)> = names
        .iter()
        .cloned()
        .zip(remaining.iter().copied())
        .collect();
    table.sort_by_key(|(_, points)| *points);
    table
}
