//! Playfield geometry and small enumerated tags

use serde::{Deserialize, Serialize};

/// A 4-way facing / movement direction.
///
/// The discriminants match the scan-code table order, which is also the
/// input resolution priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    pub const COUNT: u32 = 4;

    /// All directions in priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Map a raw value onto a direction. Used for randomized headings.
    pub fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Up,
            _ => Direction::Down,
        }
    }

    /// Unit step along (x, y) for this direction. +y is the far depth edge.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// A logical input key. The four movement keys share their index with the
/// matching [`Direction`]; `Action` is the fifth latch slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum Key {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
    Action = 4,
}

impl Key {
    pub const COUNT: usize = 5;

    /// All keys, movement keys first, in latch-slot order.
    pub const ALL: [Key; 5] = [Key::Left, Key::Right, Key::Up, Key::Down, Key::Action];

    /// Latch slot for this key.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Key::index`]. An out-of-range index is a caller
    /// contract breach, not a runtime condition.
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "key index {index} out of range");
        Self::ALL[index]
    }

    /// The movement direction this key maps to, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Action => None,
        }
    }
}

/// Board geometry: a `width` x `height` field of `cell`-sized glyphs.
///
/// `x` runs along the lane axis (0..width), `y` along the fall/depth axis
/// (0..height). Depth bounds are half-open: a fly whose footprint reaches
/// `height` has crossed the far edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    /// Movement / glyph cell size in pixels.
    pub cell: i32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
            cell: 8,
        }
    }
}

impl Playfield {
    /// Near edge of the depth axis.
    pub fn min_depth(&self) -> f32 {
        0.0
    }

    /// Far edge of the depth axis (exclusive).
    pub fn max_depth(&self) -> f32 {
        self.height as f32
    }

    /// Is a fly with its footprint at `depth` still inside the field?
    pub fn depth_in_bounds(&self, depth: f32) -> bool {
        depth >= self.min_depth() && depth + (self.cell as f32) < self.max_depth()
    }

    /// Number of spawnable lane cells, keeping one cell of margin on
    /// each side wall.
    pub fn spawn_lanes(&self) -> i32 {
        self.width / self.cell - 2
    }

    /// Cell-aligned lane x for a spawn slot in `0..spawn_lanes()`.
    pub fn lane_x(&self, slot: i32) -> i32 {
        slot * self.cell + self.cell
    }

    /// One clamped movement step from (x, y). Returns the new position;
    /// a step that would leave the field returns the input unchanged.
    pub fn clamped_step(&self, x: i32, y: i32, dir: Direction) -> (i32, i32) {
        let (dx, dy) = dir.delta();
        let nx = x + dx * self.cell;
        let ny = y + dy * self.cell;
        if nx < 0 || nx > self.width - 2 * self.cell {
            return (x, y);
        }
        if ny < 0 || ny > self.height - 2 * self.cell {
            return (x, y);
        }
        (nx, ny)
    }

    /// Centered starting position for the player.
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_index_wraps() {
        assert_eq!(Direction::from_index(0), Direction::Left);
        assert_eq!(Direction::from_index(3), Direction::Down);
        assert_eq!(Direction::from_index(4), Direction::Left);
        assert_eq!(Direction::from_index(7), Direction::Down);
    }

    #[test]
    fn test_key_index_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_index(key.index()), key);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_key_from_bad_index_panics() {
        let _ = Key::from_index(Key::COUNT);
    }

    #[test]
    fn test_movement_keys_map_to_directions() {
        assert_eq!(Key::Left.direction(), Some(Direction::Left));
        assert_eq!(Key::Down.direction(), Some(Direction::Down));
        assert_eq!(Key::Action.direction(), None);
    }

    #[test]
    fn test_depth_bounds_half_open() {
        let field = Playfield::default();
        assert!(field.depth_in_bounds(0.0));
        assert!(field.depth_in_bounds(191.0));
        assert!(!field.depth_in_bounds(192.0));
        assert!(!field.depth_in_bounds(-0.5));
    }

    #[test]
    fn test_spawn_lane_stays_inside_walls() {
        let field = Playfield::default();
        assert_eq!(field.spawn_lanes(), 38);
        assert_eq!(field.lane_x(0), 8);
        let last = field.lane_x(field.spawn_lanes() - 1);
        assert!(last + field.cell < field.width);
    }

    #[test]
    fn test_clamped_step_blocks_at_edges() {
        let field = Playfield::default();
        // Free movement in the interior
        assert_eq!(field.clamped_step(160, 100, Direction::Left), (152, 100));
        assert_eq!(field.clamped_step(160, 100, Direction::Down), (160, 108));
        // Blocked at each wall
        assert_eq!(field.clamped_step(0, 100, Direction::Left), (0, 100));
        assert_eq!(
            field.clamped_step(field.width - 2 * field.cell, 100, Direction::Right),
            (field.width - 2 * field.cell, 100)
        );
        assert_eq!(field.clamped_step(160, 0, Direction::Up), (160, 0));
        assert_eq!(
            field.clamped_step(160, field.height - 2 * field.cell, Direction::Down),
            (160, field.height - 2 * field.cell)
        );
    }
}
