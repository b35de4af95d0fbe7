//! The eight winning lines and the opponent's adjacency table.

/// A line of three cell indices.
pub type Line = [usize; 3];

/// Every winning line, in evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Preferred follow-up cells for each cell, in the order they are tried.
///
/// Not a geometric neighbourhood: corners reach along their row and
/// column first, then the centre and the far corner.
pub const ADJACENT: [&[usize]; 9] = [
    &[1, 2, 3, 6, 4, 8],
    &[0, 2, 4, 7],
    &[0, 1, 5, 8, 4, 6],
    &[0, 6, 4, 5],
    &[0, 8, 2, 6, 1, 7, 3, 5],
    &[2, 8, 3, 4],
    &[0, 3, 7, 8, 2, 4],
    &[1, 4, 6, 8],
    &[0, 4, 2, 6, 5, 7],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_is_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_centre_is_on_four_lines() {
        assert_eq!(LINES.iter().filter(|l| l.contains(&4)).count(), 4);
    }

    #[test]
    fn test_adjacency_never_lists_itself() {
        for (cell, neighbours) in ADJACENT.iter().enumerate() {
            assert!(!neighbours.contains(&cell), "cell {} lists itself", cell);
            assert!(neighbours.iter().all(|&n| n < 9));
        }
    }
}
