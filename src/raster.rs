use palette::{LinSrgba, Mix};

/// A dense linear-RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<LinSrgba<f32>>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![LinSrgba::new(0.0, 0.0, 0.0, 0.0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<LinSrgba<f32>> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, pixel: LinSrgba<f32>) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

/// Raster cache for dense point glyphs.
///
/// The expensive part of repainting a scatter cell during a drag is
/// re-blending every deselected point. That base raster only changes
/// when the composited point set does, so the cache keeps the points
/// it was built from and rebuilds on any difference; each brush-move
/// only re-blends the selected overlay on a copy.
#[derive(Debug, Default)]
pub struct CompositingCache {
    base: Option<Raster>,
    base_points: Vec<(i32, i32)>,
}

impl CompositingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cached base raster. Required when the row set
    /// changes; a selection change alone must not call this.
    pub fn invalidate(&mut self) {
        self.base = None;
        self.base_points.clear();
    }

    pub fn base(&self) -> Option<&Raster> {
        self.base.as_ref()
    }

    /// Composites all points in their deselected color, then the
    /// selected rows on top, returning the finished raster.
    ///
    /// The base pass accumulates coverage: repeated hits at the same
    /// pixel blend over what is already there. The overlay pass blends
    /// each selected pixel against the *base* value, so repeated
    /// selected hits are idempotent and stay equally bright at any
    /// density.
    #[allow(clippy::too_many_arguments)]
    pub fn composite(
        &mut self,
        points: &[(i32, i32)],
        selected: &[usize],
        width: usize,
        height: usize,
        deselected: LinSrgba<f32>,
        highlight: LinSrgba<f32>,
        opacity: f32,
    ) -> Raster {
        let stale = match &self.base {
            None => true,
            Some(base) => {
                self.base_points != points
                    || base.width() != width
                    || base.height() != height
            }
        };

        if stale {
            if self.base.is_some() {
                log::warn!(
                    "base raster stale; rebuilding for {} points",
                    points.len()
                );
            }
            let mut base = Raster::new(width, height);
            for &(x, y) in points {
                if let Some(dst) = base.get(x, y) {
                    base.set(x, y, dst.mix(deselected, opacity));
                }
            }
            self.base = Some(base);
            self.base_points = points.to_vec();
        }

        let base = self.base.as_ref().expect("base raster was just built");
        let mut out = base.clone();
        for &row in selected {
            let Some(&(x, y)) = points.get(row) else {
                continue;
            };
            if let Some(under) = base.get(x, y) {
                out.set(x, y, under.mix(highlight, opacity));
            }
        }
        out
    }
}
