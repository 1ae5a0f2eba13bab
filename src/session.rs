use std::time::Instant;

use iced_core::{Point, Rectangle, Size};

use data::config::to_lin_srgba;
use data::{CategoryAggregate, DataSet, GraphConfig, Row, Selection};

use crate::brush;
use crate::coords::ScaledCoordinateCache;
use crate::glyph::{BoxSelection, GlyphHighlight, GlyphInput, GlyphSpec};
use crate::interaction::{PointerCoalescer, ScrollbarState};
use crate::raster::{CompositingCache, Raster};
use crate::scale::Scale;

/// An in-flight brush gesture: which scatter cell it started in and
/// where the pointer has been.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushDrag {
    pub dim_i: usize,
    pub dim_j: usize,
    pub cell: Rectangle,
    pub origin: Point,
    pub current: Point,
}

impl BrushDrag {
    fn rectangle(&self) -> Rectangle {
        Rectangle::new(
            self.origin,
            Size::new(
                self.current.x - self.origin.x,
                self.current.y - self.origin.y,
            ),
        )
    }
}

/// Owns all mutable engine state for one scatter matrix: the dataset,
/// its scales, the coordinate and compositing caches, the selection
/// and the active drag.
///
/// There is exactly one writer; every mutation goes through `&mut
/// self`, so two sessions never share caches and a session is safe to
/// drive from tests without global setup.
#[derive(Debug)]
pub struct MatrixSession {
    config: GraphConfig,
    dataset: DataSet,
    cell_extent: f32,
    scales: Vec<Scale>,
    coords: ScaledCoordinateCache,
    compositing: CompositingCache,
    selection: Selection,
    coalescer: PointerCoalescer,
    drag: Option<BrushDrag>,
    scrollbar: ScrollbarState,
}

impl MatrixSession {
    /// Creates an empty session whose cells are `cell_extent` pixels
    /// square.
    pub fn new(config: GraphConfig, cell_extent: f32) -> Self {
        let coalescer = PointerCoalescer::new(config.coalesce_interval_ms);
        Self {
            config,
            dataset: DataSet::default(),
            cell_extent,
            scales: Vec::new(),
            coords: ScaledCoordinateCache::default(),
            compositing: CompositingCache::new(),
            selection: Selection::default(),
            coalescer,
            drag: None,
            scrollbar: ScrollbarState::default(),
        }
    }

    pub fn with_rows(config: GraphConfig, cell_extent: f32, rows: Vec<Row>) -> Self {
        let mut session = Self::new(config, cell_extent);
        session.set_rows(rows);
        session
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn scales(&self) -> &[Scale] {
        &self.scales
    }

    pub fn coords(&self) -> &ScaledCoordinateCache {
        &self.coords
    }

    pub fn is_brushing(&self) -> bool {
        self.drag.is_some()
    }

    /// Replaces the row set. Scales are rebuilt from the new domains,
    /// both caches are refreshed, and the selection is cleared since
    /// its indices no longer mean anything.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.dataset = DataSet::new(rows);
        self.scales = (0..self.dataset.dimension_count())
            .filter_map(|d| self.dataset.domain(d))
            .map(|domain| Scale::from_domain(domain, (0.0, self.cell_extent)))
            .collect();
        self.coords = ScaledCoordinateCache::build(&self.dataset, &self.scales);
        self.compositing.invalidate();
        self.selection.deselect_all();
        self.drag = None;
        log::debug!(
            "row set replaced: {} rows, {} dimensions",
            self.dataset.len(),
            self.dataset.dimension_count()
        );
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    pub fn select_percentage(&mut self, percentage: f32) {
        self.selection.select_percentage(percentage);
    }

    /// Begins a brush gesture in the cell comparing `dim_i` against
    /// `dim_j`.
    pub fn brush_started(
        &mut self,
        dim_i: usize,
        dim_j: usize,
        cell: Rectangle,
        position: Point,
    ) {
        self.coalescer.clear();
        self.drag = Some(BrushDrag {
            dim_i,
            dim_j,
            cell,
            origin: position,
            current: position,
        });
        log::debug!("brush started in cell ({dim_i}, {dim_j}) at {position:?}");
    }

    /// Feeds a pointer position into the active gesture. Positions
    /// arriving faster than the coalesce interval are deferred; the
    /// selection is recomputed only for emitted ones. Returns whether
    /// the selection changed.
    pub fn brush_moved(&mut self, position: Point, now: Instant) -> bool {
        if self.drag.is_none() {
            return false;
        }
        match self.coalescer.push(position, now) {
            Some(position) => {
                self.apply_brush_position(position);
                true
            }
            None => false,
        }
    }

    /// Ends the gesture, applying any pending coalesced position first
    /// so the final pointer sample is never dropped.
    pub fn brush_ended(&mut self) {
        if let Some(position) = self.coalescer.flush() {
            self.apply_brush_position(position);
        }
        self.drag = None;
    }

    fn apply_brush_position(&mut self, position: Point) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.current = position;
        let (rectangle, dim_i, dim_j, cell) = (drag.rectangle(), drag.dim_i, drag.dim_j, drag.cell);

        self.coords.ensure(&self.dataset, &self.scales);
        let selected = brush::select(rectangle, dim_i, dim_j, cell, &self.coords);
        self.selection.set_indices(selected);
    }

    pub fn scrollbar(&self) -> &ScrollbarState {
        &self.scrollbar
    }

    /// Tries to start a scrollbar drag at `position` within `track`,
    /// using the configured handle tolerance.
    pub fn scrollbar_grabbed(&mut self, position: Point, track: Rectangle, touch: bool) -> bool {
        self.scrollbar
            .grab(position, track, self.config.handle_tolerance, touch)
            .is_some()
    }

    /// Tracks an active scrollbar drag; the bar's selected span drives
    /// the percentage selection.
    pub fn scrollbar_moved(&mut self, position: Point, track: Rectangle) {
        if !self.scrollbar.is_dragging() {
            return;
        }
        self.scrollbar.pointer_moved(position, track);
        self.selection
            .select_percentage(self.scrollbar.max - self.scrollbar.min);
    }

    pub fn scrollbar_released(&mut self) {
        self.scrollbar.released();
    }

    /// Selected row indices, synthesized per group when the selection
    /// is only a percentage.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.resolve(self.dataset.rows())
    }

    /// Per-category aggregates under the current selection, in
    /// first-appearance order.
    pub fn aggregates(&self) -> Vec<CategoryAggregate> {
        data::aggregate(self.dataset.rows(), &self.selected_indices())
    }

    /// Highlight geometry for one glyph, honoring the per-kind style
    /// table. An invisible glyph highlights nothing.
    pub fn highlights(&self, spec: GlyphSpec) -> Vec<GlyphHighlight> {
        if !self.config.styles[spec.kind()].visible {
            return Vec::new();
        }

        let aggregates = self.aggregates();
        let values: Vec<f32> = self.dataset.rows().iter().map(Row::value).collect();
        let mut flags = vec![false; values.len()];
        for row in self.selected_indices() {
            if let Some(flag) = flags.get_mut(row) {
                *flag = true;
            }
        }

        let input = GlyphInput {
            aggregates: &aggregates,
            values: &values,
            selection: BoxSelection::Flags(&flags),
        };
        spec.highlight(&input)
    }

    /// Composites the scatter cell comparing `dim_i` against `dim_j`
    /// into a raster, reusing the cached all-deselected base.
    pub fn composite_cell(&mut self, dim_i: usize, dim_j: usize) -> Raster {
        self.coords.ensure(&self.dataset, &self.scales);
        let xs = self.coords.dimension(dim_i);
        let ys = self.coords.dimension(dim_j);
        let points: Vec<(i32, i32)> = xs.iter().copied().zip(ys.iter().copied()).collect();

        let extent = self.cell_extent.ceil() as usize + 1;
        self.compositing.composite(
            &points,
            &self.selected_indices(),
            extent,
            extent,
            to_lin_srgba(self.config.deselected),
            to_lin_srgba(self.config.selected),
            self.config.overlay_opacity,
        )
    }
}
