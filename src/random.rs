use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniformly distributed floats in `[0, 1)`.
///
/// The game core never talks to `rand` directly, so tests and replays can
/// substitute a scripted sequence.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Draws an integer in `[0, upper)` as `floor(next_unit() * upper)`.
///
/// Out-of-range values from a misbehaving source are clamped rather than
/// producing an off-board coordinate.
pub fn random_index<S: RandomSource + ?Sized>(source: &mut S, upper: u16) -> i32 {
    debug_assert!(upper > 0);

    let scaled = (source.next_unit() * f64::from(upper)).floor();
    let last = i32::from(upper) - 1;
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else if scaled >= f64::from(upper) {
        last
    } else {
        scaled as i32
    }
}

/// Adapter from any `rand` generator to a [`RandomSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: equal seeds give equal games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source cycling through `values`. An empty list behaves like
    /// [`ScriptedSource::constant(0.0)`](ScriptedSource::constant).
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        let values = if values.is_empty() { vec![0.0] } else { values };
        Self { values, cursor: 0 }
    }

    /// A source that always yields `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Builds the sequence that makes `place_food` pick `cells` in order on a
    /// board of `upper` cells per side, one `(x, y)` pair per cell.
    #[must_use]
    pub fn for_cells(cells: &[(u16, u16)], upper: u16) -> Self {
        let upper = f64::from(upper.max(1));
        let values = cells
            .iter()
            .flat_map(|&(x, y)| [(f64::from(x) + 0.5) / upper, (f64::from(y) + 0.5) / upper])
            .collect();
        Self::new(values)
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, RngSource, ScriptedSource, random_index};

    #[test]
    fn seeded_sources_agree() {
        let mut left = RngSource::seeded(99);
        let mut right = RngSource::seeded(99);

        for _ in 0..32 {
            assert_eq!(left.next_unit().to_bits(), right.next_unit().to_bits());
        }
    }

    #[test]
    fn rng_source_stays_in_unit_interval() {
        let mut source = RngSource::seeded(5);
        for _ in 0..1_000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn random_index_floors_and_clamps() {
        let mut source = ScriptedSource::new(vec![0.0, 0.999, 0.5, 1.0, -0.25, f64::NAN]);

        assert_eq!(random_index(&mut source, 20), 0);
        assert_eq!(random_index(&mut source, 20), 19);
        assert_eq!(random_index(&mut source, 20), 10);
        assert_eq!(random_index(&mut source, 20), 19);
        assert_eq!(random_index(&mut source, 20), 0);
        assert_eq!(random_index(&mut source, 20), 0);
    }

    #[test]
    fn scripted_source_wraps_around() {
        let mut source = ScriptedSource::new(vec![0.1, 0.2]);

        let drawn: Vec<f64> = (0..5).map(|_| source.next_unit()).collect();

        assert_eq!(drawn, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
        assert_eq!(source.draws(), 5);
    }

    #[test]
    fn for_cells_maps_back_to_the_requested_cells() {
        let mut source = ScriptedSource::for_cells(&[(3, 17), (19, 0)], 20);

        assert_eq!(random_index(&mut source, 20), 3);
        assert_eq!(random_index(&mut source, 20), 17);
        assert_eq!(random_index(&mut source, 20), 19);
        assert_eq!(random_index(&mut source, 20), 0);
    }
}
