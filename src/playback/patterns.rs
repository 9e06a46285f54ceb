//! Preset pattern catalog

use crate::error::GridError;
use crate::life::LifeEngine;

/// A named list of seed coordinates.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Known still lifes, oscillators, and spaceships, as `(x, y)` pairs sized
/// for the default 50x50 board.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(6, 5), (7, 6), (5, 7), (6, 7), (7, 7)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(24, 25), (25, 25), (26, 25)],
    },
    Pattern {
        name: "Toad",
        cells: &[(24, 24), (25, 24), (26, 24), (23, 25), (24, 25), (25, 25)],
    },
    Pattern {
        name: "Block",
        cells: &[(24, 24), (25, 24), (24, 25), (25, 25)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (10, 10), (11, 10), (10, 11), (11, 11),
            (12, 12), (13, 12), (12, 13), (13, 13),
        ],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Upper half
            (23, 19), (24, 19), (25, 19), (29, 19), (30, 19), (31, 19),
            (21, 21), (26, 21), (28, 21), (33, 21),
            (21, 22), (26, 22), (28, 22), (33, 22),
            (21, 23), (26, 23), (28, 23), (33, 23),
            (23, 24), (24, 24), (25, 24), (29, 24), (30, 24), (31, 24),
            // Lower half, mirrored
            (23, 26), (24, 26), (25, 26), (29, 26), (30, 26), (31, 26),
            (21, 27), (26, 27), (28, 27), (33, 27),
            (21, 28), (26, 28), (28, 28), (33, 28),
            (21, 29), (26, 29), (28, 29), (33, 29),
            (23, 31), (24, 31), (25, 31), (29, 31), (30, 31), (31, 31),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(24, 23), (25, 23), (23, 24), (24, 24), (24, 25)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (0, 5), (1, 4), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Look up a catalog entry by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Paint a pattern onto the engine.
///
/// Every coordinate is forced alive. An out-of-range coordinate (a pattern
/// larger than the configured board) fails without painting further cells.
pub fn apply(engine: &mut LifeEngine, pattern: &Pattern) -> Result<(), GridError> {
    for &(x, y) in pattern.cells {
        engine.set_cell(x, y, true)?;
    }
    Ok(())
}
