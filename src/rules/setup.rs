//! Roster initialization.
//!
//! - `VersusAi`: the human plays Red, the computer the opposing Yellow.
//! - `Offline`: two to four seats take colors in table order.

use crate::board::Color;
use crate::core::{GameMode, LudoConfig, Player, SetupError};

const VERSUS_AI_NAMES: [&str; 2] = ["You", "Computer"];

/// Build the initial roster, all tokens in base.
///
/// `names` must have one entry per seat when given; otherwise versus-AI
/// seats are named "You"/"Computer" and offline seats by color.
pub fn initialize(
    player_count: usize,
    mode: GameMode,
    names: Option<&[String]>,
) -> Result<Vec<Player>, SetupError> {
    if !mode.supports(player_count) {
        return Err(SetupError::PlayerCount { mode, count: player_count });
    }
    if let Some(names) = names {
        if names.len() != player_count {
            return Err(SetupError::NameCount {
                expected: player_count,
                actual: names.len(),
            });
        }
    }

    let seats: Vec<(Color, bool)> = match mode {
        GameMode::VersusAi => vec![(Color::Red, false), (Color::Red.opposite(), true)],
        GameMode::Offline => Color::ALL[..player_count].iter().map(|&c| (c, false)).collect(),
    };

    let players = seats
        .into_iter()
        .enumerate()
        .map(|(seat, (color, is_ai))| {
            let name = match (names, mode) {
                (Some(names), _) => names[seat].clone(),
                (None, GameMode::VersusAi) => VERSUS_AI_NAMES[seat].to_string(),
                (None, GameMode::Offline) => color.name().to_string(),
            };
            Player::new(color, name, is_ai)
        })
        .collect();

    Ok(players)
}

/// Build the roster a configuration describes, including extra computer seats.
pub fn roster(config: &LudoConfig) -> Result<Vec<Player>, SetupError> {
    config.validate()?;
    let mut players = initialize(config.player_count, config.mode, config.names.as_deref())?;
    for &seat in &config.computer_seats {
        players[seat].is_ai = true;
    }
    Ok(players)
}
