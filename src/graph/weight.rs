use oorandom::Rand64;

use crate::graph::{Cost, GraphError};

/// Closed range [min, max] arc costs are drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeightRange {
    min: Cost,
    max: Cost,
}

impl WeightRange {
    pub fn new(min: Cost, max: Cost) -> Result<Self, GraphError> {
        if min > max {
            return Err(GraphError::InvalidCostRange { min, max });
        }
        Ok(WeightRange { min, max })
    }

    pub fn contains(&self, cost: Cost) -> bool {
        (self.min..=self.max).contains(&cost)
    }

    /// Draws a cost uniformly from the closed range.
    pub fn sample(&self, rng: &mut Rand64) -> Cost {
        // span is at most u64::MAX, so min + offset never leaves the i64 range.
        let span = (self.max as i128 - self.min as i128) as u128;
        let offset = if span >= u64::MAX as u128 {
            rng.rand_u64()
        } else {
            rng.rand_range(0..(span as u64 + 1))
        };
        (self.min as i128 + offset as i128) as Cost
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        WeightRange { min: 1, max: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng64;

    #[test]
    fn inverted_range_errors() {
        assert_eq!(
            WeightRange::new(10, 1),
            Err(GraphError::InvalidCostRange { min: 10, max: 1 }),
            "A range with min > max was accepted."
        );
    }

    #[test]
    fn sample_stays_in_range() {
        let range = WeightRange::new(-3, 3).unwrap();
        let mut rng = rng64(1);
        let mut seen = [false; 7];

        for _ in 0..1000 {
            let cost = range.sample(&mut rng);
            assert!(range.contains(cost), "Cost {} is out of range.", cost);
            seen[(cost + 3) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "Not every cost of a tiny range was drawn.");
    }

    #[test]
    fn single_value_range_works() {
        let range = WeightRange::new(5, 5).unwrap();
        let mut rng = rng64(1);

        assert_eq!(range.sample(&mut rng), 5);
    }

    #[test]
    fn full_range_does_not_overflow() {
        let range = WeightRange::new(Cost::MIN, Cost::MAX).unwrap();
        let mut rng = rng64(3);

        for _ in 0..100 {
            range.sample(&mut rng);
        }
    }
}
