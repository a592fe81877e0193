use war_rs::cards::parse_cards;
use war_rs::game::{Game, Phase, Seat, StepOutcome};
use war_rs::hand::Hand;
use war_rs::report::NullReporter;

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

fn mk_game(first: &str, second: &str) -> Game {
    Game::with_hands("Ann", hand(first), "Bob", hand(second))
}

#[test]
fn war_commits_four_cards_each_and_builds_pile_of_eight() {
    let mut g = mk_game("7c 2c 3c 4c Ac", "7d 2d 3d 4d Kd");
    let outcome = g.step(&mut NullReporter).unwrap();

    assert_eq!(outcome, StepOutcome::War { pile: 8 });
    assert_eq!(g.player(Seat::First).hand().len(), 1);
    assert_eq!(g.player(Seat::Second).hand().len(), 1);
    assert_eq!(g.pile(), parse_cards("2c 3c 4c 2d 3d 4d 7c 7d").unwrap().as_slice());
    assert!(g.in_play().is_empty());
    assert_eq!(g.player(Seat::First).hands_won(), 0);
    assert_eq!(g.player(Seat::Second).hands_lost(), 0);
    assert_eq!(g.total_cards(), 10);
}

#[test]
fn next_clean_comparison_takes_the_whole_pile() {
    let mut g = mk_game("7c 2c 3c 4c Ac", "7d 2d 3d 4d Kd");
    let outcome = g.play_hand(&mut NullReporter).unwrap();

    assert_eq!(outcome, StepOutcome::HandWon { winner: Seat::First, cards: 10 });
    assert_eq!(
        g.player(Seat::First).hand().to_vec(),
        parse_cards("Ac Kd 2c 3c 4c 2d 3d 4d 7c 7d").unwrap()
    );
    assert!(g.player(Seat::Second).hand().is_empty());
    assert!(g.pile().is_empty());
    assert_eq!(g.hands_played(), 1);
    assert_eq!(g.wars(), 1);
    assert_eq!(g.phase(), Phase::HandResolved);
}

#[test]
fn back_to_back_wars_accumulate() {
    let mut g = mk_game("7c 2c 3c 4c 9c 2h 3h 4h Ac", "7d 2d 3d 4d 9d 5h 6h 8h Kd");

    assert_eq!(g.step(&mut NullReporter).unwrap(), StepOutcome::War { pile: 8 });
    assert_eq!(g.player(Seat::First).hand().len(), 5);
    assert_eq!(g.player(Seat::Second).hand().len(), 5);

    assert_eq!(g.step(&mut NullReporter).unwrap(), StepOutcome::War { pile: 16 });
    assert_eq!(g.wars(), 2);

    let outcome = g.step(&mut NullReporter).unwrap();
    assert_eq!(outcome, StepOutcome::HandWon { winner: Seat::First, cards: 18 });
    assert_eq!(g.player(Seat::First).hand().len(), 18);
    assert_eq!(g.player(Seat::First).hands_won(), 1);
    assert_eq!(g.player(Seat::Second).hands_lost(), 1);
}

#[test]
fn second_player_short_for_war_forfeits_everything() {
    let mut g = mk_game("5c 6c 7c 8c 9c", "5d 6d 7d");
    let outcome = g.step(&mut NullReporter).unwrap();

    assert_eq!(outcome, StepOutcome::Forfeit { loser: Seat::Second });
    assert_eq!(
        g.player(Seat::First).hand().to_vec(),
        parse_cards("9c 6c 7c 8c 5c 5d 6d 7d").unwrap()
    );
    assert!(g.player(Seat::Second).hand().is_empty());
    assert!(g.is_over());
    assert_eq!(g.winner(), Some(Seat::First));
}

#[test]
fn first_player_short_for_war_forfeits_before_second_stakes() {
    let mut g = mk_game("5c 6c", "5d 6d 7d 8d");
    let outcome = g.step(&mut NullReporter).unwrap();

    assert_eq!(outcome, StepOutcome::Forfeit { loser: Seat::First });
    assert_eq!(
        g.player(Seat::Second).hand().to_vec(),
        parse_cards("6d 7d 8d 5c 5d 6c").unwrap()
    );
    assert!(g.player(Seat::Second).is_winner());
    assert!(!g.player(Seat::First).is_winner());
    assert_eq!(g.total_cards(), 6);
}

#[test]
fn first_player_runs_dry_right_after_a_war() {
    let mut g = mk_game("7c 2c 3c 4c", "7d 2d 3d 4d 9d");
    assert_eq!(g.step(&mut NullReporter).unwrap(), StepOutcome::War { pile: 8 });
    assert!(g.player(Seat::First).hand().is_empty());

    let outcome = g.step(&mut NullReporter).unwrap();
    assert_eq!(outcome, StepOutcome::Forfeit { loser: Seat::First });
    assert_eq!(
        g.player(Seat::Second).hand().to_vec(),
        parse_cards("9d 2c 3c 4c 2d 3d 4d 7c 7d").unwrap()
    );
    assert!(g.pile().is_empty());
    assert!(g.in_play().is_empty());
    assert_eq!(g.total_cards(), 9);
    assert_eq!(g.winner(), Some(Seat::Second));
}

#[test]
fn second_player_runs_dry_after_first_has_drawn() {
    let mut g = mk_game("7c 2c 3c 4c 9c", "7d 2d 3d 4d");
    assert_eq!(g.step(&mut NullReporter).unwrap(), StepOutcome::War { pile: 8 });

    let outcome = g.step(&mut NullReporter).unwrap();
    assert_eq!(outcome, StepOutcome::Forfeit { loser: Seat::Second });
    // the pile comes first, then the face-up card that was already drawn
    assert_eq!(
        g.player(Seat::First).hand().to_vec(),
        parse_cards("2c 3c 4c 2d 3d 4d 7c 7d 9c").unwrap()
    );
    assert!(g.player(Seat::Second).hand().is_empty());
    assert!(g.in_play().is_empty());
    assert_eq!(g.total_cards(), 9);
    assert_eq!(g.hands_played(), 0);
    assert!(g.is_over());
}
