use fleetsim::{
    CellState, Coord, FleetConfig, Game, GameError, GridConfig, Orientation, PlacementError,
    Player, Shot, Ship,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn small_player() -> Player {
    let grid = GridConfig::new(3, 3).unwrap();
    let ship = Ship::new(&grid, Coord::new(0, 0), Orientation::Vertical, 2).unwrap();
    Player::with_fleet(grid, vec![ship]).unwrap()
}

#[test]
fn test_sink_single_ship() {
    let mut player = small_player();
    assert_eq!(player.fleet()[0].cells(), &[Coord::new(0, 0), Coord::new(0, 1)]);
    assert!(player.still_playing());

    let shot = player.shoot_at(Coord::new(0, 0)).unwrap();
    assert_eq!(shot, Shot { hit: true, already_shot: false });
    assert!(player.fleet()[0].is_alive());
    assert_eq!(player.ships_alive(), 1);

    let shot = player.shoot_at(Coord::new(0, 1)).unwrap();
    assert_eq!(shot, Shot { hit: true, already_shot: false });
    assert_eq!(player.fleet()[0].hit_count(), 2);
    assert_eq!(player.ships_alive(), 0);
    assert!(!player.still_playing());
    assert!(!player.overran());
}

#[test]
fn test_repeat_shot_consumes_a_turn() {
    let mut player = small_player();
    player.shoot_at(Coord::new(0, 0)).unwrap();
    let again = player.shoot_at(Coord::new(0, 0)).unwrap();
    assert_eq!(again, Shot { hit: true, already_shot: true });
    assert_eq!(player.shots_fired(), 2);
    assert_eq!(player.cells_shot(), 1);
    assert_eq!(player.fleet()[0].hit_count(), 1);
}

#[test]
fn test_miss_recorded_and_repeated() {
    let mut player = small_player();
    let shot = player.shoot_at(Coord::new(2, 2)).unwrap();
    assert_eq!(shot, Shot { hit: false, already_shot: false });
    assert_eq!(player.shot_record().get(Coord::new(2, 2)).unwrap(), CellState::Miss);
    let shot = player.shoot_at(Coord::new(2, 2)).unwrap();
    assert_eq!(shot, Shot { hit: false, already_shot: true });
    assert_eq!(player.shot_record().get(Coord::new(2, 2)).unwrap(), CellState::Miss);
}

#[test]
fn test_shot_cap_stops_play() {
    let mut player = small_player();
    for _ in 0..9 {
        assert!(player.still_playing());
        player.shoot_at(Coord::new(2, 2)).unwrap();
    }
    assert_eq!(player.shots_fired(), 9);
    assert_eq!(player.ships_alive(), 1);
    assert!(!player.still_playing());
    assert!(player.overran());
}

#[test]
fn test_out_of_bounds() {
    let mut player = small_player();
    assert_eq!(
        player.shoot_at(Coord::new(0, 3)).unwrap_err(),
        GameError::OutOfBounds { x: 0, y: 3 }
    );
    assert_eq!(
        player.shot_record().get(Coord::new(5, 5)).unwrap_err(),
        GameError::OutOfBounds { x: 5, y: 5 }
    );
}

#[test]
fn test_with_fleet_rejects_foreign_grid() {
    let big = GridConfig::new(8, 8).unwrap();
    let ship = Ship::new(&big, Coord::new(6, 6), Orientation::Horizontal, 2).unwrap();
    let err = Player::with_fleet(GridConfig::new(3, 3).unwrap(), vec![ship]).unwrap_err();
    assert_eq!(err, GameError::Placement(PlacementError::ShipOutOfBounds));
}

#[test]
fn test_matrices() {
    let mut player = small_player();
    player.shoot_at(Coord::new(0, 1)).unwrap();
    player.shoot_at(Coord::new(1, 0)).unwrap();
    assert_eq!(
        player.ship_matrix(),
        vec![true, false, false, true, false, false, false, false, false]
    );
    assert_eq!(player.shot_matrix(), vec![0, -1, 0, 1, 0, 0, 0, 0, 0]);
    assert_eq!(player.hits(), 1);
}

#[test]
fn test_random_fleet_is_disjoint_by_default() {
    let grid = GridConfig::default();
    let fleet = FleetConfig::default();
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..50 {
        let player = Player::random(grid, &fleet, &mut rng).unwrap();
        let occupied = player.ship_matrix().iter().filter(|&&b| b).count();
        assert_eq!(occupied, fleet.total_cells());
        let lengths: Vec<_> = player.fleet().iter().map(|s| s.length()).collect();
        assert_eq!(lengths, vec![5, 4, 3, 2, 2]);
    }
}

#[test]
fn test_impossible_fleet_errors() {
    let grid = GridConfig::new(2, 2).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let fleet = FleetConfig::new(vec![2, 2, 2]).with_max_attempts(200);
    assert_eq!(
        Player::random(grid, &fleet, &mut rng).unwrap_err(),
        GameError::Placement(PlacementError::RetriesExhausted {
            length: 2,
            attempts: 200
        })
    );
    // overlap allowed makes the same fleet placeable
    let fleet = fleet.with_overlap(true);
    assert!(Player::random(grid, &fleet, &mut rng).is_ok());
}

#[test]
fn test_game_still_playing_until_all_done() {
    let grid = GridConfig::new(3, 3).unwrap();
    let mut game = Game::from_players(grid, vec![small_player(), small_player()]);
    assert!(game.players_still_playing());
    for c in [Coord::new(0, 0), Coord::new(0, 1)] {
        game.players_mut()[0].shoot_at(c).unwrap();
    }
    assert!(!game.players()[0].still_playing());
    assert!(game.players_still_playing());
    for c in [Coord::new(0, 0), Coord::new(0, 1)] {
        game.players_mut()[1].shoot_at(c).unwrap();
    }
    assert!(!game.players_still_playing());
}

#[test]
fn test_game_new_creates_players() {
    let mut rng = SmallRng::seed_from_u64(4);
    let game = Game::new(GridConfig::default(), &FleetConfig::default(), 7, &mut rng).unwrap();
    assert_eq!(game.players().len(), 7);
    assert!(game.player(6).is_some());
    assert!(game.players().iter().all(|p| p.ships_alive() == 5));
}
