//! Turn driver: turns strategy scores into shots.

use alloc::vec::Vec;
use core::cmp::Ordering;
use rand::rngs::SmallRng;

use crate::core::common::GameError;
use crate::core::game::Game;
use crate::core::grid::Coord;
use crate::core::player::Player;
use crate::core::strategy::TargetingStrategy;

/// What happened during one player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// First cell that had not been shot before, if the walk found one.
    pub target: Option<Coord>,
    /// Whether the shot at `target` hit.
    pub hit: bool,
    /// Shots spent this turn, repeats included.
    pub attempts: usize,
}

/// Final tally for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    pub shots_fired: usize,
    /// All ships sunk, as opposed to hitting the shot cap.
    pub won: bool,
}

/// Cell indices ordered by descending score. Equal scores keep ascending
/// index order; NaN scores go last.
pub fn rank_targets(scores: &[f64]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| match (scores[a].is_nan(), scores[b].is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal),
    });
    ranked
}

/// Play one turn for `player`: score the board, then shoot down the ranked
/// list until a cell that had not been shot before is hit.
///
/// Every candidate tried counts as a shot, so a strategy that ranks old cells
/// first pays for it.
pub fn play_turn(
    player: &mut Player,
    strategy: &dyn TargetingStrategy,
    rng: &mut SmallRng,
) -> Result<TurnReport, GameError> {
    let scores = strategy.score(player.shot_record(), rng)?;
    let grid = *player.grid();
    if scores.len() != grid.cell_count() {
        return Err(GameError::DelegateShape {
            expected: grid.cell_count(),
            actual: scores.len(),
        });
    }

    let mut report = TurnReport {
        target: None,
        hit: false,
        attempts: 0,
    };
    for index in rank_targets(&scores) {
        let Some(coord) = grid.coord_at(index) else {
            continue;
        };
        let shot = player.shoot_at(coord)?;
        report.attempts += 1;
        log::trace!(
            "[{}] shoot {} -> {}{}",
            strategy.name(),
            coord,
            if shot.hit { "hit" } else { "miss" },
            if shot.already_shot { " (repeat)" } else { "" }
        );
        if !shot.already_shot {
            report.target = Some(coord);
            report.hit = shot.hit;
            break;
        }
    }
    Ok(report)
}

/// Run `game` to completion. Each round, every player still playing takes
/// one turn. Returns one outcome per player, in player order.
pub fn play_game(
    game: &mut Game,
    strategy: &dyn TargetingStrategy,
    rng: &mut SmallRng,
) -> Result<Vec<GameOutcome>, GameError> {
    let mut round = 0usize;
    while game.players_still_playing() {
        round += 1;
        for player in game.players_mut().iter_mut() {
            if player.still_playing() {
                play_turn(player, strategy, rng)?;
            }
        }
    }
    log::debug!("[{}] game finished after {} rounds", strategy.name(), round);

    let outcomes = game
        .players()
        .iter()
        .enumerate()
        .map(|(i, player)| {
            if player.overran() {
                log::warn!(
                    "[{}] player {} hit the shot cap ({} shots) with {} ships afloat",
                    strategy.name(),
                    i,
                    player.shots_fired(),
                    player.ships_alive()
                );
            }
            GameOutcome {
                shots_fired: player.shots_fired(),
                won: player.ships_alive() == 0,
            }
        })
        .collect();
    Ok(outcomes)
}
