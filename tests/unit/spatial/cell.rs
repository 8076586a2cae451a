//! Tests for cell stepping, direction bits and passage masks

#[cfg(test)]
mod tests {
    use mazebuilder::spatial::{Cell, Direction, Passages};

    // Tests steps off the top-left corner are rejected
    // Verified by replacing checked_sub with wrapping_sub
    #[test]
    fn test_step_rejects_negative_coordinates() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::South), Some(Cell::new(1, 0)));
        assert_eq!(origin.step(Direction::East), Some(Cell::new(0, 1)));
    }

    // Tests direction_to only recognises edge-sharing cells
    #[test]
    fn test_direction_to() {
        let cell = Cell::new(2, 2);
        assert_eq!(cell.direction_to(Cell::new(1, 2)), Some(Direction::North));
        assert_eq!(cell.direction_to(Cell::new(3, 2)), Some(Direction::South));
        assert_eq!(cell.direction_to(Cell::new(2, 3)), Some(Direction::East));
        assert_eq!(cell.direction_to(Cell::new(2, 1)), Some(Direction::West));
        assert_eq!(cell.direction_to(Cell::new(3, 3)), None);
        assert_eq!(cell.direction_to(cell), None);
        assert_eq!(cell.direction_to(Cell::new(2, 4)), None);
    }

    // Tests the bit layout North=8, South=4, East=2, West=1
    // Verified by swapping the East and West bits
    #[test]
    fn test_direction_bits() {
        assert_eq!(Direction::North.bit(), 8);
        assert_eq!(Direction::South.bit(), 4);
        assert_eq!(Direction::East.bit(), 2);
        assert_eq!(Direction::West.bit(), 1);
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(
                direction.opposite().is_horizontal(),
                direction.is_horizontal()
            );
        }
    }

    // Tests opening edges accumulates bits and never closes others
    // Verified by assigning instead of or-ing in open
    #[test]
    fn test_passages_open_accumulates() {
        let mut passages = Passages::CLOSED;
        assert_eq!(passages.count(), 0);

        passages.open(Direction::North);
        passages.open(Direction::West);
        passages.open(Direction::North);

        assert_eq!(passages.bits(), 0b1001);
        assert_eq!(passages.count(), 2);
        assert!(passages.is_open(Direction::North));
        assert!(!passages.is_open(Direction::East));
        assert_eq!(
            passages.directions().collect::<Vec<_>>(),
            vec![Direction::North, Direction::West]
        );
    }

    #[test]
    fn test_from_bits_masks_high_nibble() {
        let passages = Passages::from_bits(0b1111_0110);
        assert_eq!(passages.bits(), 0b0110);
        assert_eq!(passages, Passages::from_bits(0b0110));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
    }
}
