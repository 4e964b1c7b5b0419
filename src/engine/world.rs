//! Fixed-size 2D boolean world, stored flat in row-major order

/// The simulation grid. Dimensions are fixed for the lifetime of a run;
/// cells outside the grid always read as dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl World {
    /// Creates an all-dead world
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell state at (x, y); out-of-range coordinates read as dead
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            false
        }
    }

    /// Sets a cell; out-of-range coordinates are ignored
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = alive;
        }
    }

    /// Count of live cells among the 8 neighbors of (x, y)
    ///
    /// Zero-padding boundary: neighbors outside the grid count as dead,
    /// there is no wraparound.
    #[inline]
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && self.get(nx as usize, ny as usize) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of live cells in the whole grid
    pub fn live_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rows in top-to-bottom order, for renderers
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Row-major bit-packing of the grid, MSB first within each byte
    ///
    /// Two worlds with identical cell contents produce identical bytes,
    /// which is what makes the content hash a pure function of state.
    pub fn pack_bits(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; (self.cells.len() + 7) / 8];
        for (i, &alive) in self.cells.iter().enumerate() {
            if alive {
                bytes[i / 8] |= 0x80 >> (i % 8);
            }
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_reads_dead() {
        let mut world = World::new(4, 4);
        world.set(3, 3, true);
        assert!(world.get(3, 3));
        assert!(!world.get(4, 3));
        assert!(!world.get(3, 4));
    }

    #[test]
    fn test_out_of_range_set_ignored() {
        let mut world = World::new(4, 4);
        world.set(10, 10, true);
        assert_eq!(world.live_cell_count(), 0);
    }

    #[test]
    fn test_live_neighbors_at_corner() {
        let mut world = World::new(4, 4);
        world.set(0, 1, true);
        world.set(1, 0, true);
        world.set(1, 1, true);
        // corner has only 3 in-bounds neighbors, all live
        assert_eq!(world.live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_pack_bits_bit_positions() {
        let mut world = World::new(4, 2);
        world.set(0, 0, true); // bit 0 -> 0x80
        world.set(3, 1, true); // bit 7 -> 0x01
        assert_eq!(world.pack_bits(), vec![0x81]);
    }

    #[test]
    fn test_pack_bits_length_rounds_up() {
        let world = World::new(3, 3);
        assert_eq!(world.pack_bits().len(), 2);
    }
}
