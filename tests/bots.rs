use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::StdRng;
use unobot::{
    Bot, Card, Color, GameError, Hand, HumanBot, RandomBot, ScriptedBot, create_bot_from_spec,
};

fn num(color: Color, value: u8) -> Card {
    Card::number(color, value).unwrap()
}

#[test]
fn random_bot_always_submits_a_legal_card_when_it_has_one() -> Result<(), GameError> {
    let top = num(Color::Yellow, 4);
    for seed in 0..50u64 {
        let mut bot = RandomBot::new(StdRng::seed_from_u64(seed));
        let mut hand = Hand::from(vec![
            num(Color::Red, 1),
            num(Color::Yellow, 9),
            num(Color::Blue, 4),
            Card::skip(Color::Green),
        ]);
        let played = bot.decide_move(&mut hand, &top, Color::Yellow)?;
        assert_eq!(played.len(), 1);
        assert!(played[0].can_play_on(&top, Some(Color::Yellow))?);
        assert_eq!(hand.len(), 3);
        assert!(!hand.contains(&played[0]));
    }
    Ok(())
}

#[test]
fn random_bot_picks_colors_from_the_four_suits() -> Result<(), GameError> {
    let mut bot = RandomBot::new(StdRng::seed_from_u64(7));
    let mut seen = Vec::new();
    for _ in 0..64 {
        let color = bot.choose_color(&Hand::new())?;
        if !seen.contains(&color) {
            seen.push(color);
        }
    }
    assert_eq!(seen.len(), Color::ALL.len());
    Ok(())
}

#[test]
fn seeded_specs_are_reproducible() -> Result<(), GameError> {
    let top = num(Color::Red, 0);
    let hand_cards: Vec<Card> = (1..=9).map(|v| num(Color::Red, v)).collect();
    let mut picks = Vec::new();
    for _ in 0..2 {
        let (_, mut bot) = create_bot_from_spec("ai:1234", 0, 99);
        let mut hand = Hand::from(hand_cards.clone());
        picks.push(bot.decide_move(&mut hand, &top, Color::Red)?);
    }
    assert_eq!(picks[0], picks[1]);
    Ok(())
}

#[test]
fn human_name_comes_from_spec() {
    let (name, _) = create_bot_from_spec("human:Alice", 0, 1);
    assert_eq!(name, "Alice");
    let (name, _) = create_bot_from_spec("human", 3, 1);
    assert_eq!(name, "Player 4");
}

#[test]
fn scripted_bot_skips_cards_it_does_not_hold() -> Result<(), GameError> {
    let mut bot = ScriptedBot::new()
        .play(num(Color::Green, 8))
        .play(num(Color::Red, 3))
        .color(Color::Yellow);
    let mut hand = Hand::from(vec![num(Color::Red, 3)]);
    let top = num(Color::Red, 5);
    assert!(bot.decide_move(&mut hand, &top, Color::Red)?.is_empty());
    assert_eq!(
        bot.decide_move(&mut hand, &top, Color::Red)?,
        vec![num(Color::Red, 3)]
    );
    assert!(hand.is_empty());
    // Exhausted queues fall back to passing and to red.
    assert!(bot.decide_move(&mut hand, &top, Color::Red)?.is_empty());
    assert_eq!(bot.choose_color(&hand)?, Color::Yellow);
    assert_eq!(bot.choose_color(&hand)?, Color::Red);
    Ok(())
}

#[test]
fn human_prompt_shows_hand_and_top_card() -> Result<(), GameError> {
    let mut output = Vec::new();
    {
        let mut human = HumanBot::new("Ann", Cursor::new(b"1\n".to_vec()), &mut output);
        let mut hand = Hand::from(vec![Card::wild(), num(Color::Blue, 2)]);
        let played = human.decide_move(&mut hand, &num(Color::Blue, 6), Color::Blue)?;
        assert_eq!(played, vec![Card::wild()]);
    }
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("ANN'S CURRENT HAND"));
    assert!(transcript.contains("1. wild"));
    assert!(transcript.contains("2. 2(blue)"));
    Ok(())
}
