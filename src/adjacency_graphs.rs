//! Keyboard adjacency graphs used by the spatial matcher (spec §4d).
//!
//! Each graph maps a key's unshifted character to its neighbor slots, one
//! `Option<char>` per direction, `None` where the keyboard has no key in
//! that slot. A companion shift map records which unshifted character
//! produces which shifted character on the same physical key, so the
//! spatial matcher can recognize a shifted key as "the same key" and
//! count it toward `shifted_count`.

use std::collections::HashMap;

pub type Graph = HashMap<char, Vec<Option<char>>>;

lazy_static! {
    pub static ref QWERTY: Graph = build_slanted_graph(&[
        "`1234567890-=",
        "qwertyuiop[]\\",
        "asdfghjkl;'",
        "zxcvbnm,./",
    ]);
    pub static ref DVORAK: Graph = build_slanted_graph(&[
        "`1234567890[]",
        "',.pyfgcrl/=\\",
        "aoeuidhtns-",
        ";qjkxbmwvz",
    ]);
    pub static ref KEYPAD: Graph = build_grid_graph(&["/*-", "789", "456", "123", "0."]);
    pub static ref MAC_KEYPAD: Graph = build_grid_graph(&["=/*", "789-", "456+", "123", "0."]);
    pub static ref QWERTY_SHIFTS: HashMap<char, char> = build_shift_map(
        &["`1234567890-=", "qwertyuiop[]\\", "asdfghjkl;'", "zxcvbnm,./"],
        &["~!@#$%^&*()_+", "QWERTYUIOP{}|", "ASDFGHJKL:\"", "ZXCVBNM<>?"],
    );
    pub static ref DVORAK_SHIFTS: HashMap<char, char> = build_shift_map(
        &["`1234567890[]", "',.pyfgcrl/=\\", "aoeuidhtns-", ";qjkxbmwvz"],
        &["~!@#$%^&*(){}", "\"<>PYFGCRL?+|", "AOEUIDHTNS_", ":QJKXBMWVZ"],
    );
}

/// Returns the keyboard graph keyed by name, for the spatial matcher to
/// iterate over the set the factory supports.
pub fn named_graphs() -> Vec<(&'static str, &'static Graph)> {
    vec![
        ("qwerty", &QWERTY),
        ("dvorak", &DVORAK),
        ("keypad", &KEYPAD),
        ("mac_keypad", &MAC_KEYPAD),
    ]
}

/// Maps a character to the character shift produces on the same key, for
/// graphs that have a shift relationship (qwerty, dvorak). Keypad graphs
/// have no shift states.
pub fn shift_map_for(graph_name: &str) -> Option<&'static HashMap<char, char>> {
    match graph_name {
        "qwerty" => Some(&QWERTY_SHIFTS),
        "dvorak" => Some(&DVORAK_SHIFTS),
        _ => None,
    }
}

/// Builds an adjacency graph for a staggered (slanted) keyboard: each
/// character's neighbors are the keys immediately left/right on the same
/// row, and up-left/up-right/down-left/down-right on adjacent rows.
fn build_slanted_graph(rows: &[&str]) -> Graph {
    let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
    let mut graph = Graph::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            let neighbors = vec![
                cell(&grid, r.wrapping_sub(1), c.wrapping_sub(1)),
                cell(&grid, r.wrapping_sub(1), c),
                cell(&grid, r, c.wrapping_sub(1)),
                cell(&grid, r, c + 1),
                cell(&grid, r + 1, c),
                cell(&grid, r + 1, c + 1),
            ];
            graph.insert(ch, neighbors);
        }
    }
    graph
}

/// Builds an adjacency graph for a grid keyboard (numeric keypad): every
/// one of the 8 surrounding cells is a neighbor.
fn build_grid_graph(rows: &[&str]) -> Graph {
    let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
    let mut graph = Graph::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            if ch == ' ' {
                continue;
            }
            let mut neighbors = Vec::with_capacity(8);
            for dr in [-1i32, 0, 1] {
                for dc in [-1i32, 0, 1] {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let rr = r as i32 + dr;
                    let cc = c as i32 + dc;
                    neighbors.push(if rr >= 0 && cc >= 0 {
                        cell(&grid, rr as usize, cc as usize)
                    } else {
                        None
                    });
                }
            }
            graph.entry(ch).or_insert(neighbors);
        }
    }
    graph
}

fn cell(grid: &[Vec<char>], r: usize, c: usize) -> Option<char> {
    if r == usize::MAX || c == usize::MAX {
        return None;
    }
    grid.get(r).and_then(|row| row.get(c)).copied()
}

fn build_shift_map(unshifted_rows: &[&str], shifted_rows: &[&str]) -> HashMap<char, char> {
    let mut map = HashMap::new();
    for (u_row, s_row) in unshifted_rows.iter().zip(shifted_rows.iter()) {
        for (u, s) in u_row.chars().zip(s_row.chars()) {
            map.insert(u, s);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qwerty_has_adjacent_keys() {
        let neighbors = &QWERTY["g"
            .chars()
            .next()
            .unwrap()];
        assert!(neighbors.iter().any(|n| *n == Some('f')));
        assert!(neighbors.iter().any(|n| *n == Some('h')));
    }

    #[test]
    fn shift_map_round_trips_known_pairs() {
        assert_eq!(QWERTY_SHIFTS.get(&'1'), Some(&'!'));
        assert_eq!(QWERTY_SHIFTS.get(&'a'), Some(&'A'));
    }

    #[test]
    fn keypad_grid_is_symmetric() {
        let neighbors = &KEYPAD[&'5'];
        assert!(neighbors.iter().any(|n| *n == Some('4')));
        assert!(neighbors.iter().any(|n| *n == Some('8')));
    }
}
