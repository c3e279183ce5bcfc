use rand::Rng;

use crate::{Coords, TermInt};

pub struct Fruit {
    pos: Coords,
}

impl Fruit {
    pub fn spawn<R: Rng + ?Sized>(rows: TermInt, cols: TermInt, rng: &mut R) -> Self {
        let mut fruit = Fruit { pos: (1, 1) };
        fruit.relocate(rows, cols, rng);
        fruit
    }

    #[cfg(test)]
    pub(crate) fn at(pos: Coords) -> Self {
        Fruit { pos }
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    /// Picks any interior cell. The snake's body is not avoided, so a fruit
    /// can land underneath it.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rows: TermInt, cols: TermInt, rng: &mut R) {
        let x = rng.gen_range(1..=cols - 2);
        let y = rng.gen_range(1..=rows - 2);
        self.pos = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_relocate_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut fruit = Fruit::spawn(20, 30, &mut rng);

        for _ in 0..2000 {
            fruit.relocate(20, 30, &mut rng);
            let (x, y) = fruit.pos();
            assert!((1..=28).contains(&x), "x out of range: {}", x);
            assert!((1..=18).contains(&y), "y out of range: {}", y);
        }
    }

    #[test]
    fn test_relocate_reaches_corners() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut fruit = Fruit::at((2, 2));
        let mut seen_min = (false, false);
        let mut seen_max = (false, false);

        for _ in 0..500 {
            fruit.relocate(6, 5, &mut rng);
            let (x, y) = fruit.pos();
            seen_min = (seen_min.0 || x == 1, seen_min.1 || y == 1);
            seen_max = (seen_max.0 || x == 3, seen_max.1 || y == 4);
        }

        assert_eq!(seen_min, (true, true));
        assert_eq!(seen_max, (true, true));
    }

    #[test]
    fn test_single_cell_interior() {
        let mut rng = StdRng::seed_from_u64(1);
        let fruit = Fruit::spawn(3, 3, &mut rng);
        assert_eq!(fruit.pos(), (1, 1));
    }
}
