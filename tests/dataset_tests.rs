use std::io::Cursor;

use fleetsim::export::{read_bincode, read_jsonl, write_records, Format};
use fleetsim::{generate_records, split_record, training_record, FleetConfig, GridConfig, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_record_layout_matches_fleet() {
    let grid = GridConfig::default();
    let mut rng = SmallRng::seed_from_u64(8);
    let player = Player::random(grid, &FleetConfig::default(), &mut rng).unwrap();
    let record = training_record(&player, 0.5, &mut rng);
    assert_eq!(record.len(), 200);

    let (occupancy, overlay) = split_record(&grid, &record).unwrap();
    let ships: Vec<i8> = player.ship_matrix().iter().map(|&b| b as i8).collect();
    assert_eq!(occupancy, ships.as_slice());
    for (o, s) in overlay.iter().zip(occupancy) {
        match o {
            1 => assert_eq!(*s, 1),
            -1 => assert_eq!(*s, 0),
            0 => {}
            other => panic!("unexpected overlay value {}", other),
        }
    }
    assert!(split_record(&grid, &record[1..]).is_none());
}

#[test]
fn test_overlay_extremes() {
    let grid = GridConfig::new(4, 4).unwrap();
    let mut rng = SmallRng::seed_from_u64(2);
    let fleet = FleetConfig::new(vec![3, 2]);
    let player = Player::random(grid, &fleet, &mut rng).unwrap();

    let hidden = training_record(&player, 0.0, &mut rng);
    assert!(hidden[16..].iter().all(|&v| v == 0));

    let revealed = training_record(&player, 1.0, &mut rng);
    let expected: Vec<i8> = revealed[..16].iter().map(|&s| if s == 1 { 1 } else { -1 }).collect();
    assert_eq!(&revealed[16..], expected.as_slice());
}

#[test]
fn test_nan_overlay_reveals_nothing() {
    let grid = GridConfig::new(4, 4).unwrap();
    let mut rng = SmallRng::seed_from_u64(13);
    let fleet = FleetConfig::new(vec![3, 2]);
    let player = Player::random(grid, &fleet, &mut rng).unwrap();
    let record = training_record(&player, f64::NAN, &mut rng);
    assert!(record[16..].iter().all(|&v| v == 0));

    let records = generate_records(grid, &fleet, 3, f64::NAN, &mut rng).unwrap();
    assert_eq!(records.len(), 3);
    for record in &records {
        let (_, overlay) = split_record(&grid, record).unwrap();
        assert!(overlay.iter().all(|&v| v == 0));
    }
}

#[test]
fn test_generate_and_export_roundtrip() {
    let grid = GridConfig::new(5, 5).unwrap();
    let fleet = FleetConfig::new(vec![3, 2]);
    let mut rng = SmallRng::seed_from_u64(30);
    let records = generate_records(grid, &fleet, 12, 0.5, &mut rng).unwrap();
    assert_eq!(records.len(), 12);
    assert!(records.iter().all(|r| r.len() == 50));
    assert!(records
        .iter()
        .all(|r| r[..25].iter().filter(|&&v| v == 1).count() == 5));

    let mut jsonl = Vec::new();
    write_records(&mut jsonl, &records, Format::Jsonl).unwrap();
    assert_eq!(String::from_utf8(jsonl.clone()).unwrap().lines().count(), 12);
    assert_eq!(read_jsonl(Cursor::new(jsonl)).unwrap(), records);

    let mut bin = Vec::new();
    write_records(&mut bin, &records, Format::Bincode).unwrap();
    assert_eq!(read_bincode(Cursor::new(bin)).unwrap(), records);
}

#[test]
fn test_malformed_jsonl_reports_line() {
    let err = read_jsonl(Cursor::new("[1,0]\nnot json\n")).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}
