//! Property tests for the move engine over arbitrary rosters.

use proptest::prelude::*;

use rust_ludo::board::{is_safe, BoardView, Color, PATH_LEN};
use rust_ludo::core::{Player, PlayerId, TokenId};
use rust_ludo::rules::{execute_move, has_won, movable_tokens};

/// Steps from the color's entry square: base is -1, finished is 56.
fn progress(color: Color, raw: i16) -> i16 {
    match raw {
        -1 => -1,
        0..=51 => (raw - color.path_entry()).rem_euclid(PATH_LEN),
        100..=105 => 51 + (raw - 100),
        _ => 56,
    }
}

fn position(color: Color, id: i16) -> impl Strategy<Value = i16> {
    prop_oneof![
        Just(-1),
        (0i16..51).prop_map(move |rel| (color.path_entry() + rel) % PATH_LEN),
        100i16..105,
        Just(200 + id),
    ]
}

fn player(color: Color) -> impl Strategy<Value = Player> {
    (position(color, 0), position(color, 1), position(color, 2), position(color, 3))
        .prop_map(move |(a, b, c, d)| {
            Player::new(color, color.name(), false).with_positions([a, b, c, d])
        })
}

fn roster() -> impl Strategy<Value = Vec<Player>> {
    (2usize..=4).prop_flat_map(|n| Color::ALL[..n].iter().map(|&c| player(c)).collect::<Vec<_>>())
}

fn scenario() -> impl Strategy<Value = (Vec<Player>, usize, u8, u8)> {
    roster().prop_flat_map(|players| {
        let n = players.len();
        (Just(players), 0..n, 0u8..4, 1u8..=6)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_execute_never_mutates_input((players, seat, token, die) in scenario()) {
        let before = players.clone();
        let _ = execute_move(&players, PlayerId::new(seat as u8), TokenId::new(token), die);
        prop_assert_eq!(players, before);
    }

    #[test]
    fn prop_base_needs_six((players, seat, _token, die) in scenario()) {
        prop_assume!(die < 6);
        let me = &players[seat];
        for id in movable_tokens(me, die) {
            prop_assert!(me.positions()[id.index()] != -1);
        }
    }

    #[test]
    fn prop_finished_never_movable((players, seat, _token, die) in scenario()) {
        let me = &players[seat];
        for id in movable_tokens(me, die) {
            prop_assert!(me.positions()[id.index()] < 200);
        }
    }

    #[test]
    fn prop_illegal_move_is_noop((players, seat, token, die) in scenario()) {
        let id = TokenId::new(token);
        prop_assume!(!movable_tokens(&players[seat], die).contains(&id));

        let outcome = execute_move(&players, PlayerId::new(seat as u8), id, die);
        prop_assert!(!outcome.captured);
        prop_assert_eq!(outcome.players, players);
    }

    #[test]
    fn prop_mover_progresses((players, seat, token, die) in scenario()) {
        let id = TokenId::new(token);
        prop_assume!(movable_tokens(&players[seat], die).contains(&id));

        let color = players[seat].color;
        let outcome = execute_move(&players, PlayerId::new(seat as u8), id, die);
        let before = progress(color, players[seat].positions()[id.index()]);
        let after = progress(color, outcome.players[seat].positions()[id.index()]);

        prop_assert!(after > before, "{} -> {}", before, after);
        if before >= 0 {
            prop_assert_eq!(after, before + i16::from(die));
        }
        // The mover's other tokens stay put.
        for other in TokenId::all().filter(|&t| t != id) {
            prop_assert_eq!(
                outcome.players[seat].positions()[other.index()],
                players[seat].positions()[other.index()]
            );
        }
    }

    #[test]
    fn prop_capture_clears_square((players, seat, token, die) in scenario()) {
        let id = TokenId::new(token);
        prop_assume!(movable_tokens(&players[seat], die).contains(&id));

        let mover = PlayerId::new(seat as u8);
        let outcome = execute_move(&players, mover, id, die);
        let landing = outcome.players[seat].positions()[id.index()];

        if outcome.captured {
            prop_assert!((0..PATH_LEN).contains(&landing));
            prop_assert!(!is_safe(landing));
            let view = BoardView::from_players(&outcome.players);
            prop_assert!(view.foreign_occupants(landing, mover).is_empty());
        }

        // Tokens only ever leave the board by being sent home.
        for (i, (old, new)) in players.iter().zip(&outcome.players).enumerate() {
            if i == seat {
                continue;
            }
            for (a, b) in old.positions().into_iter().zip(new.positions()) {
                prop_assert!(a == b || (b == -1 && a == landing && outcome.captured));
            }
        }
    }

    #[test]
    fn prop_won_iff_all_finished(player in player(Color::Blue)) {
        let all_finished = player.positions().iter().all(|&p| p >= 200);
        prop_assert_eq!(has_won(&player), all_finished);
    }
}
