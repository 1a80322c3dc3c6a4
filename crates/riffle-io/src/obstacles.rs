//! Obstacle-file reader.
//!
//! Zero or more lines of `x y flag`. The flag must be 1 (the file lists
//! blocked cells only), coordinates must be inside the grid, and any
//! malformed line is fatal. An empty file is a valid all-fluid layout.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use riffle_lattice::{Lattice, ObstacleMap};

use crate::error::ReadError;

/// Read an obstacle map from any buffered reader.
pub fn read_obstacles<R: BufRead>(reader: R, lattice: Lattice) -> Result<ObstacleMap, ReadError> {
    let mut blocked: Vec<(usize, usize)> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut tokens = line.split_whitespace();
        let Some(x_token) = tokens.next() else {
            continue;
        };
        let y_token = tokens.next().ok_or_else(|| ReadError::ObstacleLine {
            line: line_no,
            detail: "expected 3 values per line".to_string(),
        })?;
        let flag_token = tokens.next().ok_or_else(|| ReadError::ObstacleLine {
            line: line_no,
            detail: "expected 3 values per line".to_string(),
        })?;
        if tokens.next().is_some() {
            return Err(ReadError::ObstacleLine {
                line: line_no,
                detail: "expected 3 values per line".to_string(),
            });
        }

        let x: usize = x_token.parse().map_err(|_| ReadError::ObstacleLine {
            line: line_no,
            detail: format!("bad x-coordinate '{x_token}'"),
        })?;
        let y: usize = y_token.parse().map_err(|_| ReadError::ObstacleLine {
            line: line_no,
            detail: format!("bad y-coordinate '{y_token}'"),
        })?;
        let flag: i64 = flag_token.parse().map_err(|_| ReadError::ObstacleLine {
            line: line_no,
            detail: format!("bad blocked flag '{flag_token}'"),
        })?;
        if flag != 1 {
            return Err(ReadError::ObstacleFlag {
                line: line_no,
                found: flag,
            });
        }
        blocked.push((x, y));
    }
    Ok(ObstacleMap::from_blocked(lattice, &blocked)?)
}

/// Read an obstacle map from a file on disk.
pub fn load_obstacles(path: &Path, lattice: Lattice) -> Result<ObstacleMap, ReadError> {
    let file = File::open(path)?;
    read_obstacles(BufReader::new(file), lattice)
}
