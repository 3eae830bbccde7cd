//! Integration tests for the grid model.

use algovision::config::GridConfig;
use algovision::core::{CellKind, CellState, Grid, Pos, INFINITY};
use algovision::error::Error;
use algovision::search::{search, SearchAlgorithm};

#[test]
fn test_parse_ascii_layout() {
    let grid = Grid::from_ascii("S.#\n..F").unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.start(), Pos::new(0, 0));
    assert_eq!(grid.finish(), Pos::new(1, 2));
    assert_eq!(grid.get(Pos::new(0, 2)).unwrap().kind, CellKind::Wall);
    assert_eq!(grid.get(Pos::new(1, 0)).unwrap().kind, CellKind::Open);
    assert!(grid.get(Pos::new(2, 0)).is_none());
}

#[test]
fn test_ascii_layout_errors_carry_line_numbers() {
    assert!(matches!(
        Grid::from_ascii(""),
        Err(Error::InvalidGrid(_))
    ));
    assert!(matches!(
        Grid::from_ascii("S.F\n...."),
        Err(Error::Layout { line: 2, .. })
    ));
    assert!(matches!(
        Grid::from_ascii("S.\n.F\nqq"),
        Err(Error::Layout { line: 3, .. })
    ));
    assert!(matches!(
        Grid::from_ascii("SS\n.F"),
        Err(Error::Layout { line: 1, .. })
    ));
    assert!(matches!(
        Grid::from_ascii("S..\n..."),
        Err(Error::InvalidGrid(_))
    ));
}

#[test]
fn test_build_from_config() {
    let config = GridConfig {
        rows: 4,
        cols: 6,
        start: Pos::new(1, 0),
        finish: Pos::new(2, 5),
    };
    let grid = Grid::new(&config).unwrap();
    assert_eq!(grid.cells().len(), 24);
    assert_eq!(grid.get(config.start).unwrap().kind, CellKind::Start);
    assert_eq!(grid.get(config.finish).unwrap().kind, CellKind::Finish);
    assert!(grid
        .cells()
        .iter()
        .all(|c| c.state == CellState::Unvisited && c.distance == INFINITY));
}

#[test]
fn test_invalid_configs_are_rejected() {
    let out_of_bounds = GridConfig {
        finish: Pos::new(99, 0),
        ..GridConfig::default()
    };
    assert!(matches!(
        Grid::new(&out_of_bounds),
        Err(Error::InvalidGrid(_))
    ));

    let coinciding = GridConfig {
        start: Pos::new(2, 2),
        finish: Pos::new(2, 2),
        ..GridConfig::default()
    };
    assert!(matches!(Grid::new(&coinciding), Err(Error::InvalidGrid(_))));
}

#[test]
fn test_wall_edits_respect_markers() {
    let mut grid = Grid::from_ascii("S..\n..F").unwrap();
    grid.set_wall(grid.start());
    grid.toggle_wall(grid.finish());
    assert_eq!(grid.get(grid.start()).unwrap().kind, CellKind::Start);
    assert_eq!(grid.get(grid.finish()).unwrap().kind, CellKind::Finish);

    let open = Pos::new(0, 1);
    grid.toggle_wall(open);
    assert!(grid.get(open).unwrap().is_wall());
    grid.toggle_wall(open);
    assert!(!grid.get(open).unwrap().is_wall());

    // Out of bounds is ignored, not a panic.
    grid.set_wall(Pos::new(9, 9));
}

#[test]
fn test_neighbors_in_up_down_left_right_order() {
    let grid = Grid::from_ascii("S..\n...\n..F").unwrap();
    assert_eq!(
        grid.neighbors4(Pos::new(1, 1)),
        vec![
            Pos::new(0, 1),
            Pos::new(2, 1),
            Pos::new(1, 0),
            Pos::new(1, 2)
        ]
    );
    assert_eq!(
        grid.neighbors4(Pos::new(0, 0)),
        vec![Pos::new(1, 0), Pos::new(0, 1)]
    );
}

#[test]
fn test_snapshot_starts_clean() {
    let grid = Grid::from_ascii("S.F").unwrap();
    let run = search(&grid, SearchAlgorithm::Bfs);
    assert!(run.grid().get(grid.start()).unwrap().is_visited());

    let fresh = run.grid().snapshot();
    assert!(fresh
        .cells()
        .iter()
        .all(|c| c.state == CellState::Unvisited && c.previous.is_none()));
    assert_eq!(fresh.get(grid.start()).unwrap().kind, CellKind::Start);
}

#[test]
fn test_grid_config_json_round_trip() {
    let config = GridConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: GridConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rows, config.rows);
    assert_eq!(back.cols, config.cols);
    assert_eq!(back.start, config.start);
    assert_eq!(back.finish, config.finish);
}
