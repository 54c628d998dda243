use winit::dpi::PhysicalSize;

/// Displayed size of the drawable plus the pixel density it is shown at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplaySize {
    pub logical_width: f64,
    pub logical_height: f64,
    pub scale_factor: f64,

    /// Physical size reported by the window, when known. The host has already
    /// floored it, and re-deriving it from `logical * scale` can lose a pixel
    /// to round-off (`1601 / 1.25 * 1.25 < 1601`).
    window_physical: Option<PhysicalSize<u32>>,
}

impl DisplaySize {
    #[inline]
    pub const fn new(logical_width: f64, logical_height: f64, scale_factor: f64) -> Self {
        Self {
            logical_width,
            logical_height,
            scale_factor,
            window_physical: None,
        }
    }

    /// Derives the displayed size from a window's physical size and scale.
    /// [`DisplaySize::physical`] returns `size` unchanged.
    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let logical = size.to_logical::<f64>(scale_factor);
        Self {
            window_physical: Some(size),
            ..Self::new(logical.width, logical.height, scale_factor)
        }
    }

    /// Backing-store size for this display:
    /// `floor(logical * scale)` per axis, or the window's own physical size
    /// when built with [`DisplaySize::from_physical`]. Non-finite or negative
    /// inputs map to 0.
    pub fn physical(&self) -> PhysicalSize<u32> {
        if let Some(size) = self.window_physical {
            return size;
        }
        PhysicalSize::new(
            scaled_floor(self.logical_width, self.scale_factor),
            scaled_floor(self.logical_height, self.scale_factor),
        )
    }
}

fn scaled_floor(logical: f64, scale: f64) -> u32 {
    let px = logical * scale;
    if !px.is_finite() || px <= 0.0 {
        return 0;
    }
    px.floor().min(u32::MAX as f64) as u32
}

/// Physical pixel size of the render target.
///
/// `sync` is the only mutator; it reassigns the size only when the computed
/// size differs, so repeated calls with unchanged inputs are no-ops.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BackingStore {
    size: PhysicalSize<u32>,
}

impl BackingStore {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    /// Recomputes the size for `display`. Returns `true` if it changed.
    pub fn sync(&mut self, display: DisplaySize) -> bool {
        let wanted = display.physical();
        if wanted == self.size {
            return false;
        }
        self.size = wanted;
        true
    }

    /// Width and height as shader-facing floats.
    pub fn resolution(&self) -> [f32; 2] {
        [self.size.width as f32, self.size.height as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_is_floor_of_scaled_logical() {
        assert_eq!(DisplaySize::new(800.0, 600.0, 2.0).physical(), PhysicalSize::new(1600, 1200));
        assert_eq!(DisplaySize::new(100.5, 33.3, 1.5).physical(), PhysicalSize::new(150, 49));
        assert_eq!(DisplaySize::new(333.0, 10.0, 1.0).physical(), PhysicalSize::new(333, 10));
    }

    #[test]
    fn floor_is_exact_just_below_an_integer() {
        let display = DisplaySize::new(799.9999995, 600.0, 1.0);
        assert_eq!(display.physical(), PhysicalSize::new(799, 600));
    }

    #[test]
    fn window_size_survives_the_logical_round_trip() {
        for (w, scale) in [(1601u32, 1.25), (1367, 1.1), (2559, 1.75), (1, 3.0)] {
            let size = PhysicalSize::new(w, w + 1);
            let display = DisplaySize::from_physical(size, scale);

            assert_eq!(display.physical(), size, "w={w} scale={scale}");
            assert!((display.logical_width - w as f64 / scale).abs() < 1e-9);
            assert_eq!(display.scale_factor, scale);
        }
    }

    #[test]
    fn window_size_feeds_the_backing_store() {
        let mut backing = BackingStore::new(PhysicalSize::new(1600, 1200));
        let display = DisplaySize::from_physical(PhysicalSize::new(1601, 1201), 1.25);

        assert!(backing.sync(display));
        assert_eq!(backing.size(), PhysicalSize::new(1601, 1201));
        assert!(!backing.sync(display));
    }

    #[test]
    fn degenerate_inputs_collapse_to_zero() {
        assert_eq!(DisplaySize::new(-5.0, 10.0, 1.0).physical().width, 0);
        assert_eq!(DisplaySize::new(f64::NAN, 10.0, 1.0).physical().width, 0);
        assert_eq!(DisplaySize::new(10.0, 10.0, 0.0).physical(), PhysicalSize::new(0, 0));
    }

    #[test]
    fn sync_only_mutates_on_change() {
        let mut backing = BackingStore::default();
        let display = DisplaySize::new(800.0, 600.0, 2.0);

        assert!(backing.sync(display));
        assert_eq!(backing.size(), PhysicalSize::new(1600, 1200));

        assert!(!backing.sync(display));
        assert!(!backing.sync(display));
        assert_eq!(backing.size(), PhysicalSize::new(1600, 1200));

        assert!(backing.sync(DisplaySize::new(800.0, 600.0, 1.0)));
        assert_eq!(backing.size(), PhysicalSize::new(800, 600));
    }

    #[test]
    fn empty_and_resolution() {
        let backing = BackingStore::new(PhysicalSize::new(0, 720));
        assert!(backing.is_empty());

        let backing = BackingStore::new(PhysicalSize::new(1600, 1200));
        assert!(!backing.is_empty());
        assert_eq!(backing.resolution(), [1600.0, 1200.0]);
    }
}
