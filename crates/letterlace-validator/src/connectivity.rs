//! Connectivity of placed letters.
//!
//! A board is only worth validating if its letters form one connected group
//! under orthogonal adjacency. Traversal is depth-first with an explicit stack
//! that visits neighbours in up, down, left, right order, the same order a
//! recursive search would use.

use std::collections::HashSet;

use letterlace_core::{Grid, Position, TileId};

/// Returns `true` if every tile holding a letter is reachable from every other
/// one through orthogonally adjacent occupied tiles.
///
/// An empty board is not a connected region and yields `false`. Tiles are the
/// unit of counting, so two tiles with the same character are both counted.
///
/// # Examples
///
/// ```
/// use letterlace_core::Grid;
/// use letterlace_validator::is_single_connected_region;
///
/// let joined: Grid = "ab.\n.c.\n...".parse()?;
/// let split: Grid = "a..\n...\n..b".parse()?;
///
/// assert!(is_single_connected_region(&joined));
/// assert!(!is_single_connected_region(&split));
/// # Ok::<(), letterlace_core::GridParseError>(())
/// ```
#[must_use]
pub fn is_single_connected_region(grid: &Grid) -> bool {
    let total = grid.letter_count();
    let Some(seed) = grid.occupied_positions().next() else {
        log::trace!("connectivity: board is empty");
        return false;
    };

    let mut visited = HashSet::with_capacity(total);
    let reached = traverse(grid, seed, &mut visited).len();
    if reached != total {
        log::trace!("connectivity: reached {reached} of {total} letters from {seed}");
    }
    reached == total
}

/// Returns every group of orthogonally connected letters.
///
/// Groups are ordered by the row-major position of their first tile, and the
/// positions inside a group are listed in depth-first visit order. A board with
/// no letters yields no groups.
///
/// # Examples
///
/// ```
/// use letterlace_core::{Grid, Position};
/// use letterlace_validator::connected_regions;
///
/// let grid: Grid = "ab..\n....\n..c.\n..d.".parse()?;
/// let regions = connected_regions(&grid);
///
/// assert_eq!(regions.len(), 2);
/// assert_eq!(regions[1], [Position::new(2, 2), Position::new(3, 2)]);
/// # Ok::<(), letterlace_core::GridParseError>(())
/// ```
#[must_use]
pub fn connected_regions(grid: &Grid) -> Vec<Vec<Position>> {
    let mut visited = HashSet::with_capacity(grid.letter_count());
    let mut regions = vec![];
    for pos in grid.occupied_positions() {
        if visited.contains(&grid[pos].id()) {
            continue;
        }
        regions.push(traverse(grid, pos, &mut visited));
    }
    regions
}

fn traverse(grid: &Grid, seed: Position, visited: &mut HashSet<TileId>) -> Vec<Position> {
    let size = grid.size();
    visited.insert(grid[seed].id());
    let mut order = vec![seed];
    let mut stack = vec![seed.neighbors(size).into_iter()];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.next() else {
            stack.pop();
            continue;
        };
        let tile = &grid[next];
        if tile.is_occupied() && visited.insert(tile.id()) {
            order.push(next);
            stack.push(next.neighbors(size).into_iter());
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_not_connected() {
        assert!(!is_single_connected_region(&Grid::new(6)));
        assert!(connected_regions(&Grid::new(6)).is_empty());
    }

    #[test]
    fn test_single_letter_is_connected() {
        assert!(is_single_connected_region(&grid("...\n.x.\n...")));
    }

    #[test]
    fn test_word_in_row_is_connected() {
        let g = grid(
            "
            cat...
            ......
            ......
            ......
            ......
            ......
            ",
        );
        assert!(is_single_connected_region(&g));
    }

    #[test]
    fn test_diagonal_letters_are_islands() {
        let g = grid("a..\n.b.\n...");
        assert!(!is_single_connected_region(&g));
        assert_eq!(connected_regions(&g).len(), 2);
    }

    #[test]
    fn test_far_apart_letters_are_islands() {
        let g = grid(
            "
            a.....
            ......
            ......
            ...b..
            ......
            ......
            ",
        );
        assert!(!is_single_connected_region(&g));
    }

    #[test]
    fn test_does_not_wrap_around_edges() {
        // (0, 0) and (0, 3) would touch if columns wrapped.
        let g = grid("a..b\n....\n....\n....");
        assert!(!is_single_connected_region(&g));
    }

    #[test]
    fn test_letters_along_every_edge() {
        let g = grid(
            "
            abcd
            e..f
            g..h
            ijkl
            ",
        );
        assert!(is_single_connected_region(&g));
        assert_eq!(connected_regions(&g)[0].len(), 12);
    }

    #[test]
    fn test_repeated_characters_count_separately() {
        let g = grid("aa.\n...\n..a");
        assert!(!is_single_connected_region(&g));
        let regions = connected_regions(&g);
        assert_eq!(regions[0], [Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(regions[1], [Position::new(2, 2)]);
    }

    #[test]
    fn test_visit_order_is_depth_first() {
        // Seed (0,0): down first to (1,0), then down to (2,0), back up and right.
        let g = grid("ab.\nc..\nd..");
        assert_eq!(
            connected_regions(&g)[0],
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
            ]
        );
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1u8..=6).prop_flat_map(|size| {
            let n = usize::from(size) * usize::from(size);
            prop::collection::vec(prop::bool::weighted(0.4), n).prop_map(move |cells| {
                let text: String = cells
                    .chunks(usize::from(size))
                    .map(|row| {
                        row.iter()
                            .map(|&filled| if filled { 'x' } else { '.' })
                            .chain(['\n'])
                            .collect::<String>()
                    })
                    .collect();
                text.parse::<Grid>().unwrap()
            })
        })
    }

    /// Counts letter groups with a union-find over row-major tile indices.
    fn count_islands_by_union_find(g: &Grid) -> usize {
        fn find(parent: &mut [usize], mut i: usize) -> usize {
            while parent[i] != i {
                parent[i] = parent[parent[i]];
                i = parent[i];
            }
            i
        }

        let size = usize::from(g.size());
        let occupied: Vec<bool> = g.tiles().iter().map(|t| t.is_occupied()).collect();
        let mut parent: Vec<usize> = (0..occupied.len()).collect();
        for i in 0..occupied.len() {
            if !occupied[i] {
                continue;
            }
            let right = (i % size + 1 < size).then_some(i + 1);
            let below = (i + size < occupied.len()).then_some(i + size);
            for j in [right, below].into_iter().flatten() {
                if occupied[j] {
                    let (a, b) = (find(&mut parent, i), find(&mut parent, j));
                    parent[a] = b;
                }
            }
        }
        (0..occupied.len())
            .filter(|&i| occupied[i] && find(&mut parent, i) == i)
            .count()
    }

    proptest! {
        #[test]
        fn connectivity_matches_union_find(g in arb_grid()) {
            let islands = count_islands_by_union_find(&g);
            prop_assert_eq!(is_single_connected_region(&g), islands == 1);
            prop_assert_eq!(connected_regions(&g).len(), islands);
        }

        #[test]
        fn regions_partition_all_letters(g in arb_grid()) {
            let regions = connected_regions(&g);
            let mut seen = HashSet::new();
            for pos in regions.iter().flatten() {
                prop_assert!(g[*pos].is_occupied());
                prop_assert!(seen.insert(*pos));
            }
            prop_assert_eq!(seen.len(), g.letter_count());
        }
    }

    #[test]
    fn test_union_find_counts_islands() {
        assert_eq!(count_islands_by_union_find(&grid("a.b\n...\nc.d")), 4);
        assert_eq!(count_islands_by_union_find(&grid("ab.\n.b.\n.bb")), 1);
        assert_eq!(count_islands_by_union_find(&Grid::new(3)), 0);
    }
}
