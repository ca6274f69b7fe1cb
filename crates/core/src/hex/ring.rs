//! Enumerating the tiles at (or within) a given distance of a tile.

use crate::hex::{Direction, Hex, DIRECTION_COUNT};
use strum::IntoEnumIterator;

/// Number of tiles in the ring at exactly distance `distance` from a tile.
pub fn ring_len_at_distance(distance: u32) -> usize {
    DIRECTION_COUNT * distance as usize
}

/// Number of tiles within `radius` steps of a tile, including the center.
/// Radius 0 means 1 tile, 1 is 7 tiles, 2 is 19, etc.
pub fn area_at_distance(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    1 + 3 * r * (r + 1)
}

impl Hex {
    /// Write the ring of tiles at exactly `distance` steps from this one into
    /// `output`. Exactly [ring_len_at_distance] tiles get written, to the front
    /// of the buffer. Does nothing for a distance of 0.
    ///
    /// The ring starts `distance` steps south-west of the center, then walks
    /// `distance` steps in each direction, in direction order. This traces
    /// each side of the hexagon once.
    ///
    /// ## Panics
    ///
    /// If `output` is too small to hold the ring.
    pub fn ring_at_distance(self, distance: u32, output: &mut [Hex]) {
        if distance == 0 {
            return;
        }
        let len = ring_len_at_distance(distance);
        assert!(
            output.len() >= len,
            "Ring at distance {} has {} tiles, but buffer only holds {}",
            distance,
            len,
            output.len()
        );

        let side = distance as usize;
        let mut tile = self + Hex::SOUTH_WEST * distance as i32;
        for (i, dir) in Direction::iter().enumerate() {
            for slot in &mut output[i * side..(i + 1) * side] {
                *slot = tile;
                tile = tile.adjacent(dir);
            }
        }
    }

    /// Write every tile within `distance` steps of this one (excluding this
    /// one) into `output`, ring by ring, starting with the innermost ring.
    /// Exactly `area_at_distance(distance) - 1` tiles get written.
    ///
    /// ## Panics
    ///
    /// If `output` is too small to hold all the rings.
    pub fn neighbors_at_distance(self, distance: u32, output: &mut [Hex]) {
        let len = area_at_distance(distance) - 1;
        assert!(
            output.len() >= len,
            "Area at distance {} has {} tiles, but buffer only holds {}",
            distance,
            len,
            output.len()
        );

        for ring in 1..=distance {
            // The area *inside* a ring is exactly how many tiles come before
            // it, minus the center
            let start = area_at_distance(ring - 1) - 1;
            let end = area_at_distance(ring) - 1;
            self.ring_at_distance(ring, &mut output[start..end]);
        }
    }

    /// Allocating version of [Self::ring_at_distance]
    pub fn ring(self, distance: u32) -> Vec<Hex> {
        let mut output = vec![self; ring_len_at_distance(distance)];
        self.ring_at_distance(distance, &mut output);
        output
    }

    /// Allocating version of [Self::neighbors_at_distance]
    pub fn neighbors_within(self, distance: u32) -> Vec<Hex> {
        let mut output = vec![self; area_at_distance(distance) - 1];
        self.neighbors_at_distance(distance, &mut output);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexSet;

    fn hexes(pairs: &[(i32, i32)]) -> Vec<Hex> {
        pairs.iter().map(|&(q, r)| Hex::new(q, r)).collect()
    }

    #[test]
    fn test_lens() {
        assert_eq!(ring_len_at_distance(0), 0);
        assert_eq!(ring_len_at_distance(1), 6);
        assert_eq!(ring_len_at_distance(10), 60);
        assert_eq!(area_at_distance(0), 1);
        assert_eq!(area_at_distance(1), 7);
        assert_eq!(area_at_distance(2), 19);
        assert_eq!(area_at_distance(3), 37);
        for d in 1..50 {
            assert_eq!(
                area_at_distance(d) - area_at_distance(d - 1),
                ring_len_at_distance(d)
            );
        }
    }

    #[test]
    fn test_ring_at_distance_1() {
        let mut output = [Hex::ZERO; 6];
        Hex::ZERO.ring_at_distance(1, &mut output);
        assert_eq!(
            output.to_vec(),
            hexes(&[(-1, 1), (0, 1), (1, 0), (1, -1), (0, -1), (-1, 0)])
        );
    }

    #[test]
    fn test_ring_at_distance_10() {
        let ring = Hex::ZERO.ring(10);
        assert_eq!(ring.len(), 60);
        // Corners of the hexagon, one at the start of each side
        assert_eq!(ring[0], Hex::new(-10, 10));
        assert_eq!(ring[10], Hex::new(0, 10));
        assert_eq!(ring[20], Hex::new(10, 0));
        assert_eq!(ring[30], Hex::new(10, -10));
        assert_eq!(ring[40], Hex::new(0, -10));
        assert_eq!(ring[50], Hex::new(-10, 0));
        // Spot check along each side
        assert_eq!(ring[3], Hex::new(-7, 10));
        assert_eq!(ring[14], Hex::new(4, 6));
        assert_eq!(ring[25], Hex::new(10, -5));
        assert_eq!(ring[37], Hex::new(3, -10));
        assert_eq!(ring[44], Hex::new(-4, -6));
        assert_eq!(ring[59], Hex::new(-10, 9));
    }

    #[test]
    fn test_ring_properties() {
        let center = Hex::new(-3, 8);
        for d in 1..=12 {
            let ring = center.ring(d);
            let unique: HexSet = ring.iter().copied().collect();
            assert_eq!(unique.len(), ring.len(), "duplicate tiles in ring {d}");
            for (i, tile) in ring.iter().enumerate() {
                assert_eq!(center.distance_to(*tile), d);
                let next = ring[(i + 1) % ring.len()];
                assert_eq!(tile.distance_to(next), 1);
            }
        }
    }

    #[test]
    fn test_ring_at_distance_0() {
        let mut output = [Hex::EAST; 3];
        Hex::ZERO.ring_at_distance(0, &mut output);
        assert_eq!(output, [Hex::EAST; 3]);
        assert!(Hex::ZERO.ring(0).is_empty());
    }

    #[test]
    fn test_ring_oversized_buffer() {
        let mut output = [Hex::EAST; 8];
        Hex::ZERO.ring_at_distance(1, &mut output);
        assert_eq!(output[..6], Hex::ZERO.ring(1)[..]);
        assert_eq!(output[6..], [Hex::EAST, Hex::EAST]);
    }

    #[test]
    #[should_panic(expected = "buffer only holds 5")]
    fn test_ring_small_buffer() {
        let mut output = [Hex::ZERO; 5];
        Hex::ZERO.ring_at_distance(1, &mut output);
    }

    #[test]
    fn test_neighbors_at_distance() {
        let mut output = vec![Hex::ZERO; area_at_distance(2) - 1];
        Hex::ZERO.neighbors_at_distance(2, &mut output);
        assert_eq!(
            output,
            hexes(&[
                (-1, 1),
                (0, 1),
                (1, 0),
                (1, -1),
                (0, -1),
                (-1, 0),
                (-2, 2),
                (-1, 2),
                (0, 2),
                (1, 1),
                (2, 0),
                (2, -1),
                (2, -2),
                (1, -2),
                (0, -2),
                (-1, -1),
                (-2, 0),
                (-2, 1),
            ])
        );
    }

    #[test]
    fn test_neighbors_within() {
        let center = Hex::new(6, -1);
        for d in 0..=8 {
            let area = center.neighbors_within(d);
            assert_eq!(area.len(), area_at_distance(d) - 1);
            let unique: HexSet = area.iter().copied().collect();
            assert_eq!(unique.len(), area.len());
            assert!(!unique.contains(&center));
            assert!(area.iter().all(|tile| center.distance_to(*tile) <= d));
        }
    }
}
