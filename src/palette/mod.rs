//! Palette state: the displayed colours, the kept set and the requested count.

use indexmap::IndexSet;
use rand::Rng;

pub mod color;

pub use color::Color;

/// Pinned colours, iterated in the order they were first kept.
pub type KeptSet = IndexSet<Color>;

#[derive(Debug, Clone)]
pub struct PaletteController {
    palette: Vec<Color>,
    kept: KeptSet,
    requested_count: usize,
    max_colors: usize,
}

impl PaletteController {
    /// Creates an empty controller. Call [`regenerate`](Self::regenerate) to
    /// fill the first palette.
    pub fn new(max_colors: usize, requested_count: usize) -> Self {
        debug_assert!((1..=max_colors).contains(&requested_count));
        Self {
            palette: Vec::with_capacity(max_colors),
            kept: KeptSet::new(),
            requested_count,
            max_colors,
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn kept(&self) -> &KeptSet {
        &self.kept
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    pub fn is_kept(&self, color: Color) -> bool {
        self.kept.contains(&color)
    }

    /// `n` must lie in `1..=max_colors`; the count selector only offers those.
    pub fn set_requested_count(&mut self, n: usize) {
        self.set_requested_count_with(n, &mut rand::rng());
    }

    pub fn set_requested_count_with<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        debug_assert!((1..=self.max_colors).contains(&n));
        self.requested_count = n;
        self.regenerate_with(rng);
    }

    pub fn regenerate(&mut self) {
        self.regenerate_with(&mut rand::rng());
    }

    /// Kept colours first, in insertion order, then fresh random colours up
    /// to the requested count. When more colours are kept than requested the
    /// palette is the first `requested_count` kept colours and the rest are
    /// left out of this palette (they stay kept).
    pub fn regenerate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.requested_count;
        self.palette.clear();
        self.palette.extend(self.kept.iter().take(n).copied());
        let fresh = n - self.palette.len();
        self.palette
            .extend(std::iter::repeat_with(|| Color::random_with(&mut *rng)).take(fresh));

        tracing::debug!(
            count = n,
            kept = self.kept.len(),
            fresh,
            "regenerated palette"
        );
    }

    /// Updates kept membership only. The displayed palette changes on the
    /// next regeneration.
    pub fn toggle_keep(&mut self, color: Color, checked: bool) {
        if checked {
            self.kept.insert(color);
        } else {
            self.kept.shift_remove(&color);
        }
        tracing::debug!(%color, checked, kept = self.kept.len(), "toggled keep");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let ctl = PaletteController::new(12, 6);
        assert!(ctl.palette().is_empty());
        assert!(ctl.kept().is_empty());
        assert_eq!(ctl.requested_count(), 6);
        assert_eq!(ctl.max_colors(), 12);
    }

    #[test]
    fn test_length_matches_every_count() {
        let mut rng = rng();
        let mut ctl = PaletteController::new(12, 1);
        for n in 1..=12 {
            ctl.set_requested_count_with(n, &mut rng);
            assert_eq!(ctl.palette().len(), n);
        }
        for n in (1..=12).rev() {
            ctl.set_requested_count_with(n, &mut rng);
            assert_eq!(ctl.palette().len(), n);
        }
    }

    #[test]
    fn test_two_regenerations_differ() {
        let mut ctl = PaletteController::new(12, 3);
        ctl.regenerate();
        let first = ctl.palette().to_vec();
        ctl.regenerate();
        let second = ctl.palette().to_vec();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
        assert_ne!(first, second);
    }

    #[test]
    fn test_kept_survive_count_increase() {
        let mut rng = rng();
        let mut ctl = PaletteController::new(12, 2);
        ctl.regenerate_with(&mut rng);
        ctl.toggle_keep(hex("#111111"), true);
        ctl.toggle_keep(hex("#222222"), true);

        ctl.set_requested_count_with(5, &mut rng);
        let p = ctl.palette();
        assert_eq!(p.len(), 5);
        assert_eq!(p[0], hex("#111111"));
        assert_eq!(p[1], hex("#222222"));
    }

    #[test]
    fn test_kept_survive_regenerate() {
        let mut rng = rng();
        let mut ctl = PaletteController::new(12, 4);
        ctl.regenerate_with(&mut rng);
        let pinned = ctl.palette()[2];
        ctl.toggle_keep(pinned, true);

        for _ in 0..10 {
            ctl.regenerate_with(&mut rng);
            assert_eq!(ctl.palette()[0], pinned);
            assert_eq!(ctl.palette().len(), 4);
        }
    }

    #[test]
    fn test_excess_kept_truncates() {
        let mut rng = rng();
        let kept: Vec<Color> = (1..=6u8).map(|i| Color::rgb(i, i, i)).collect();
        let mut ctl = PaletteController::new(12, 6);
        for c in &kept {
            ctl.toggle_keep(*c, true);
        }

        ctl.set_requested_count_with(4, &mut rng);
        assert_eq!(ctl.palette(), &kept[..4]);
        // dropped colours stay kept
        assert_eq!(ctl.kept().len(), 6);

        ctl.set_requested_count_with(6, &mut rng);
        assert_eq!(ctl.palette(), &kept[..]);
    }

    #[test]
    fn test_toggle_does_not_touch_palette() {
        let mut rng = rng();
        let mut ctl = PaletteController::new(12, 3);
        ctl.regenerate_with(&mut rng);
        let before = ctl.palette().to_vec();

        ctl.toggle_keep(before[1], true);
        assert_eq!(ctl.palette(), &before[..]);
        assert!(ctl.is_kept(before[1]));

        ctl.toggle_keep(before[1], false);
        assert_eq!(ctl.palette(), &before[..]);
        assert!(!ctl.is_kept(before[1]));
    }

    #[test]
    fn test_unkeep_preserves_insertion_order() {
        let mut ctl = PaletteController::new(12, 3);
        ctl.toggle_keep(hex("#AAAAAA"), true);
        ctl.toggle_keep(hex("#BBBBBB"), true);
        ctl.toggle_keep(hex("#CCCCCC"), true);
        ctl.toggle_keep(hex("#AAAAAA"), false);
        // re-keeping moves it to the back
        ctl.toggle_keep(hex("#AAAAAA"), true);

        ctl.regenerate();
        assert_eq!(
            ctl.palette(),
            &[hex("#BBBBBB"), hex("#CCCCCC"), hex("#AAAAAA")]
        );
    }

    #[test]
    fn test_keep_twice_is_idempotent() {
        let mut ctl = PaletteController::new(12, 2);
        ctl.toggle_keep(hex("#123456"), true);
        ctl.toggle_keep(hex("#123456"), true);
        assert_eq!(ctl.kept().len(), 1);
        ctl.regenerate();
        assert_eq!(ctl.palette()[0], hex("#123456"));
    }
}
