use schocken_engine::errors::GameError;
use schocken_engine::game::Game;
use schocken_engine::player::{Player, PlayerId};
use schocken_engine::stats::compute_scores;
use schocken_engine::strategy::Strategy;

struct KeepOnes;

impl Strategy for KeepOnes {
    fn choose_rerolls(&self, faces: &[u8], _throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
        faces
            .iter()
            .enumerate()
            .filter(|(_, &face)| face != 1)
            .map(|(index, _)| index)
            .collect()
    }

    fn name(&self) -> &str {
        "keep-ones"
    }
}

fn seeded_game(seed: u64) -> Game {
    let mut game = Game::new(Some(seed));
    for name in ["Alice", "Bob", "Carol"] {
        game.add_player(Player::new(name, Box::new(KeepOnes))).unwrap();
    }
    game
}

#[test]
fn test_player_ids_follow_join_order() {
    let mut game = seeded_game(1);
    assert_eq!(game.players()[0].id(), PlayerId(0));
    assert_eq!(game.players()[1].id(), PlayerId(1));
    assert_eq!(game.players()[2].id(), PlayerId(2));
    assert_eq!(game.player(PlayerId(1)).unwrap().name(), "Bob");
    assert!(game.player(PlayerId(9)).is_none());

    let id = game.add_player(Player::new("Dave", Box::new(KeepOnes))).unwrap();
    assert_eq!(id, PlayerId(3));
}

#[test]
fn test_duplicate_names_are_rejected() {
    let mut game = seeded_game(1);
    assert_eq!(
        game.add_player(Player::new("Alice", Box::new(KeepOnes))),
        Err(GameError::DuplicatePlayer {
            name: "Alice".to_string(),
        })
    );
    // the roster is unchanged
    assert_eq!(game.players().len(), 3);
}

#[test]
fn test_too_small_a_roster_cannot_play() {
    let mut game = Game::new(Some(1));
    game.add_player(Player::new("Alone", Box::new(KeepOnes))).unwrap();
    assert!(matches!(
        game.play_round(),
        Err(GameError::InvalidState { .. })
    ));
    assert!(game.rounds().is_empty());
}

#[test]
fn test_played_rounds_accumulate_in_the_history() {
    let mut game = seeded_game(42);
    let rounds = game.play_rounds(3).unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(game.rounds().len(), 3);
    assert_eq!(game.rounds(), &rounds[..]);
}

#[test]
fn test_scores_tally_the_round_tree() {
    let mut game = seeded_game(42);
    game.play_rounds(3).unwrap();
    let scores = game.scores();

    assert_eq!(scores.rounds_lost.values().sum::<u32>(), 3);

    let total_halves: usize = game.rounds().iter().map(|r| r.halves.len()).sum();
    assert_eq!(scores.halves_lost.values().sum::<u32>(), total_halves as u32);

    let total_minirounds: usize = game
        .rounds()
        .iter()
        .flat_map(|r| &r.halves)
        .map(|h| h.mini_rounds.len())
        .sum();
    assert_eq!(
        scores.minirounds_lost.values().sum::<u32>(),
        total_minirounds as u32
    );

    let total_turns: usize = game
        .rounds()
        .iter()
        .flat_map(|r| &r.halves)
        .flat_map(|h| &h.mini_rounds)
        .map(|mr| mr.turns.len())
        .sum();
    assert_eq!(scores.hands_played.values().sum::<u32>(), total_turns as u32);

    // the histogram covers every hand exactly once
    let histogram_total: u32 = scores
        .hand_histogram
        .values()
        .flat_map(|hands| hands.values())
        .sum();
    assert_eq!(histogram_total, total_turns as u32);
}

#[test]
fn test_scores_include_players_with_no_losses() {
    let game = seeded_game(1);
    let scores = game.scores();
    for name in ["Alice", "Bob", "Carol"] {
        assert_eq!(scores.rounds_lost.get(name), Some(&0));
        assert_eq!(scores.halves_lost.get(name), Some(&0));
        assert_eq!(scores.minirounds_lost.get(name), Some(&0));
        assert_eq!(scores.hands_played.get(name), Some(&0));
        assert!(scores.hand_histogram.contains_key(name));
    }
}

#[test]
fn test_scores_match_the_free_function() {
    let mut game = seeded_game(42);
    game.play_rounds(2).unwrap();
    assert_eq!(game.scores(), compute_scores(game.players(), game.rounds()));
}

#[test]
fn test_same_seed_reproduces_the_same_game() {
    let mut game_a = seeded_game(1234);
    let mut game_b = seeded_game(1234);
    let rounds_a = game_a.play_rounds(2).unwrap();
    let rounds_b = game_b.play_rounds(2).unwrap();
    assert_eq!(rounds_a, rounds_b);
}

#[test]
fn test_different_seeds_diverge() {
    let mut game_a = seeded_game(1);
    let mut game_b = seeded_game(2);
    let rounds_a = game_a.play_rounds(2).unwrap();
    let rounds_b = game_b.play_rounds(2).unwrap();
    // not strictly guaranteed, but two seeded games matching over two
    // full rounds would point at a broken dice stream
    assert_ne!(rounds_a, rounds_b);
}
