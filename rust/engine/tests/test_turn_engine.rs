use schocken_engine::dice::DiceCup;
use schocken_engine::errors::GameError;
use schocken_engine::hand::Category;
use schocken_engine::player::Player;
use schocken_engine::strategy::Strategy;
use schocken_engine::turn::play_turn;

struct StandPat;

impl Strategy for StandPat {
    fn choose_rerolls(&self, _faces: &[u8], _throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "stand-pat"
    }
}

struct RerollAll;

impl Strategy for RerollAll {
    fn choose_rerolls(&self, faces: &[u8], _throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
        (0..faces.len()).collect()
    }

    fn name(&self) -> &str {
        "reroll-all"
    }
}

/// Returns a fixed index set on the first decision, then stands.
struct RerollOnce(Vec<usize>);

impl Strategy for RerollOnce {
    fn choose_rerolls(&self, _faces: &[u8], throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
        if throw_number == 1 {
            self.0.clone()
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &str {
        "reroll-once"
    }
}

#[test]
fn test_standing_pat_ends_after_one_throw() {
    let player = Player::new("Alice", Box::new(StandPat));
    let mut cup = DiceCup::from_faces(vec![5, 4, 2]);
    let turn = play_turn(&player, 0, 3, &mut cup).unwrap();

    assert_eq!(turn.num_throws(), 1);
    assert_eq!(turn.throws, vec![[5, 4, 2]]);
    assert_eq!(turn.final_hand.category, Category::HighDice);
    assert_eq!(turn.final_hand.value, 542);
}

#[test]
fn test_rerolling_everything_uses_all_throws() {
    let player = Player::new("Alice", Box::new(RerollAll));
    let mut cup = DiceCup::from_faces(vec![2, 3, 4, 5, 6]);
    let turn = play_turn(&player, 0, 3, &mut cup).unwrap();

    assert_eq!(turn.num_throws(), 3);
    assert_eq!(turn.throws.len(), 3);
    // a full re-roll never marks the hand as put together
    assert_eq!(turn.throws[0], [2, 3, 4]);
}

#[test]
fn test_single_throw_limit_skips_the_strategy() {
    let player = Player::new("Alice", Box::new(RerollAll));
    let mut cup = DiceCup::from_faces(vec![6, 6, 5]);
    let turn = play_turn(&player, 0, 1, &mut cup).unwrap();

    assert_eq!(turn.num_throws(), 1);
    assert_eq!(turn.final_hand.value, 665);
}

#[test]
fn test_zero_throw_limit_is_invalid_state() {
    let player = Player::new("Alice", Box::new(StandPat));
    let mut cup = DiceCup::from_faces(vec![1, 2, 3]);
    assert!(matches!(
        play_turn(&player, 0, 0, &mut cup),
        Err(GameError::InvalidState { .. })
    ));
}

#[test]
fn test_out_of_range_index_aborts_the_turn() {
    let player = Player::new("Alice", Box::new(RerollOnce(vec![7])));
    let mut cup = DiceCup::from_faces(vec![2, 3, 5]);
    assert_eq!(
        play_turn(&player, 0, 3, &mut cup),
        Err(GameError::InvalidStrategyOutput { index: 7, dice: 3 })
    );
}

#[test]
fn test_duplicate_index_aborts_the_turn() {
    let player = Player::new("Alice", Box::new(RerollOnce(vec![0, 0])));
    let mut cup = DiceCup::from_faces(vec![2, 3, 5]);
    assert_eq!(
        play_turn(&player, 0, 3, &mut cup),
        Err(GameError::InvalidStrategyOutput { index: 0, dice: 3 })
    );
}

#[test]
fn test_kept_dice_mark_the_hand_put_together() {
    // first throw 1-5-5, the 1 is kept, the re-roll completes a 1-2-3
    let player = Player::new("Alice", Box::new(RerollOnce(vec![1, 2])));
    let mut cup = DiceCup::from_faces(vec![1, 5, 5, 2, 3]);
    let turn = play_turn(&player, 0, 3, &mut cup).unwrap();

    assert_eq!(turn.num_throws(), 2);
    assert_eq!(turn.throws[1], [1, 2, 3]);
    assert_eq!(turn.final_hand.category, Category::HighDice);
    assert_eq!(turn.final_hand.value, 321);
}

#[test]
fn test_thrown_123_stays_a_straight() {
    let player = Player::new("Alice", Box::new(RerollAll));
    let mut cup = DiceCup::from_faces(vec![4, 5, 5, 1, 2, 3, 1, 2, 3]);
    let turn = play_turn(&player, 0, 2, &mut cup).unwrap();

    // all three dice were thrown again, so nothing was put together
    assert_eq!(turn.throws[1], [1, 2, 3]);
    assert_eq!(turn.final_hand.category, Category::Straight);
}

#[test]
#[should_panic(expected = "at least one face")]
fn test_empty_scripts_are_rejected() {
    DiceCup::from_faces(Vec::new());
}

#[test]
fn test_scripted_cup_wraps_around() {
    let mut cup = DiceCup::from_faces(vec![4, 5]);
    assert_eq!(cup.throw_all(5), vec![4, 5, 4, 5, 4]);
}

#[test]
fn test_same_seed_produces_the_same_turn() {
    let player_a = Player::new("Alice", Box::new(RerollAll));
    let player_b = Player::new("Bob", Box::new(RerollAll));
    let mut cup_a = DiceCup::new_with_seed(7);
    let mut cup_b = DiceCup::new_with_seed(7);

    let turn_a = play_turn(&player_a, 0, 3, &mut cup_a).unwrap();
    let turn_b = play_turn(&player_b, 0, 3, &mut cup_b).unwrap();

    assert_eq!(turn_a.throws, turn_b.throws);
    assert_eq!(turn_a.final_hand, turn_b.final_hand);
}
