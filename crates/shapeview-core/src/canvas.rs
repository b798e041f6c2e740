//! Canvas state and the shape editing state machine.

use crate::config::{CanvasConfig, RotationPolicy};
use crate::error::{CanvasError, CanvasResult};
use crate::events::{CanvasEvent, CanvasObserver};
use crate::shapes::{ItemId, ShapeItem, ShapeKind, TintColor};
use kurbo::Point;
use std::fmt;

/// What a [`Canvas::set_tint`] call recolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TintTarget {
    /// The focused item (the current item or the sole selected item).
    Item(ItemId),
    /// Every selected item.
    Selection(Vec<ItemId>),
    /// The tint used for items created from now on.
    Default,
}

/// The editing engine behind a shape view.
///
/// Owns the placed items in z-order, the single item being drawn (if any),
/// the selection, and the rotate-tool toggle. Every call made in a state
/// where it does not apply is ignored; only malformed indexes are errors.
pub struct Canvas {
    /// Items in insertion (z) order, back to front.
    items: Vec<ShapeItem>,
    /// The item currently being drawn.
    current: Option<ItemId>,
    /// Selected items in selection order.
    selection: Vec<ItemId>,
    default_tint: TintColor,
    rotate_tool_enabled: bool,
    config: CanvasConfig,
    observer: Option<Box<dyn CanvasObserver>>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("items", &self.items)
            .field("current", &self.current)
            .field("selection", &self.selection)
            .field("default_tint", &self.default_tint)
            .field("rotate_tool_enabled", &self.rotate_tool_enabled)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Create an empty canvas with default configuration.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create an empty canvas with custom configuration.
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            items: Vec::new(),
            current: None,
            selection: Vec::new(),
            default_tint: config.default_tint,
            rotate_tool_enabled: config.rotate_tool_enabled,
            config,
            observer: None,
        }
    }

    /// Register the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn CanvasObserver>) {
        self.observer = Some(observer);
    }

    /// Remove and return the registered observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn CanvasObserver>> {
        self.observer.take()
    }

    fn notify(&mut self, event: CanvasEvent) {
        log::debug!("Canvas event {}: {:?}", event.name(), event);
        if let Some(mut observer) = self.observer.take() {
            observer.on_event(self, &event);
            self.observer = Some(observer);
        }
    }

    // --- Accessors ---

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Items in z-order.
    pub fn items(&self) -> &[ShapeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID.
    pub fn item(&self, id: ItemId) -> Option<&ShapeItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut ShapeItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Position of an item in z-order.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// The item being drawn, if any.
    pub fn current_item(&self) -> Option<&ShapeItem> {
        self.current.and_then(|id| self.item(id))
    }

    /// Whether an item is being drawn.
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Selected item IDs in selection order.
    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    /// Selected items in selection order.
    pub fn selected_items(&self) -> Vec<&ShapeItem> {
        self.selection.iter().filter_map(|&id| self.item(id)).collect()
    }

    /// Positions of the selected items, ascending.
    pub fn selected_item_indexes(&self) -> Vec<usize> {
        let mut indexes: Vec<usize> = self
            .selection
            .iter()
            .filter_map(|&id| self.index_of(id))
            .collect();
        indexes.sort_unstable();
        indexes
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(&id)
    }

    /// The single item edits are addressed to: the current item, else the
    /// sole selected item.
    pub fn focus_item(&self) -> Option<&ShapeItem> {
        self.current_item().or_else(|| match self.selection.as_slice() {
            [only] => self.item(*only),
            _ => None,
        })
    }

    /// Tint applied to newly created items.
    pub fn default_tint(&self) -> TintColor {
        self.default_tint
    }

    pub fn rotate_tool_enabled(&self) -> bool {
        self.rotate_tool_enabled
    }

    pub fn set_rotate_tool_enabled(&mut self, enabled: bool) {
        self.rotate_tool_enabled = enabled;
    }

    /// Whether rotation input is currently honored.
    pub fn rotation_allowed(&self) -> bool {
        match self.config.rotation_policy {
            RotationPolicy::Always => true,
            RotationPolicy::RotateToolGated => self.rotate_tool_enabled,
        }
    }

    // --- Drawing ---

    /// Start drawing a new item of `kind`.
    ///
    /// Returns the new item's ID, or `None` if another item is still being
    /// drawn. Any existing selection is cleared first.
    pub fn generate(&mut self, kind: ShapeKind) -> Option<ItemId> {
        if let Some(current) = self.current {
            log::debug!("Ignoring generate({:?}): item {} is still drawing", kind, current);
            return None;
        }

        self.deselect_all();

        let item = ShapeItem::new(kind, self.default_tint);
        let id = item.id();
        self.items.push(item);
        self.current = Some(id);
        self.notify(CanvasEvent::DidStart(id));
        Some(id)
    }

    /// Feed one control point to the current item.
    ///
    /// Fixed-arity items finish on their last point; unbounded items keep
    /// drawing. Returns `false` if nothing is being drawn.
    pub fn supply_point(&mut self, point: Point) -> bool {
        let Some(id) = self.current else {
            log::debug!("Ignoring point {:?}: nothing is drawing", point);
            return false;
        };
        let Some(item) = self.item_mut(id) else {
            return false;
        };

        item.push_point(point);
        if item.is_complete() {
            item.finish();
            log::info!("Finished {:?} item {}", item.kind(), id);
            self.current = None;
            self.notify(CanvasEvent::DidFinish(id));
        } else {
            self.notify(CanvasEvent::DidModify(id));
        }
        true
    }

    /// Finish the current unbounded item with the points it has.
    ///
    /// Returns `false` if there is no current item of an unbounded kind.
    pub fn finish(&mut self) -> bool {
        let Some(id) = self.current else {
            log::debug!("Ignoring finish: nothing is drawing");
            return false;
        };
        if !self.current_item().is_some_and(|item| item.kind().is_unbounded()) {
            log::debug!("Ignoring finish: item {} completes on its own", id);
            return false;
        }

        self.notify(CanvasEvent::Finishing(id));
        if let Some(item) = self.item_mut(id) {
            item.finish();
            log::info!("Finished {:?} item {} on request", item.kind(), id);
        }
        self.current = None;
        self.notify(CanvasEvent::DidFinish(id));
        true
    }

    /// Discard the current item entirely.
    ///
    /// Returns `false` if nothing is being drawn.
    pub fn cancel(&mut self) -> bool {
        self.cancel_current().is_some()
    }

    fn cancel_current(&mut self) -> Option<ShapeItem> {
        let id = self.current.take()?;
        let index = self.index_of(id)?;
        let item = self.items.remove(index);
        log::info!("Cancelled {:?} item {}", item.kind(), id);
        self.notify(CanvasEvent::DidCancel(item.clone()));
        Some(item)
    }

    // --- Selection ---

    fn check_indexes(&self, indexes: &[usize]) -> CanvasResult<()> {
        let len = self.items.len();
        match indexes.iter().find(|&&index| index >= len) {
            Some(&index) => {
                log::warn!("Rejecting index batch {:?}: {} is out of range", indexes, index);
                Err(CanvasError::IndexOutOfRange { index, len })
            }
            None => Ok(()),
        }
    }

    /// Add the items at `indexes` to the selection.
    ///
    /// Ignored while an item is being drawn.
    pub fn select(&mut self, indexes: &[usize]) -> CanvasResult<()> {
        self.check_indexes(indexes)?;
        if self.current.is_some() {
            log::debug!("Ignoring select: an item is drawing");
            return Ok(());
        }

        let mut added = Vec::new();
        for &index in indexes {
            let id = self.items[index].id();
            if !self.selection.contains(&id) {
                self.selection.push(id);
                added.push(id);
            }
        }
        if !added.is_empty() {
            self.notify(CanvasEvent::DidSelect(added));
        }
        Ok(())
    }

    /// Remove the items at `indexes` from the selection.
    pub fn deselect(&mut self, indexes: &[usize]) -> CanvasResult<()> {
        self.check_indexes(indexes)?;
        let ids: Vec<ItemId> = indexes.iter().map(|&i| self.items[i].id()).collect();
        self.deselect_ids(&ids);
        Ok(())
    }

    /// Select every finished item.
    pub fn select_all(&mut self) {
        if self.current.is_some() {
            log::debug!("Ignoring select_all: an item is drawing");
            return;
        }
        let all: Vec<usize> = (0..self.items.len()).collect();
        // Indexes come straight from the item list, so they are in range.
        let _ = self.select(&all);
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        let ids = self.selection.clone();
        self.deselect_ids(&ids);
    }

    fn deselect_ids(&mut self, ids: &[ItemId]) {
        let mut removed = Vec::new();
        for id in ids {
            if let Some(pos) = self.selection.iter().position(|s| s == id) {
                removed.push(self.selection.remove(pos));
            }
        }
        if !removed.is_empty() {
            self.notify(CanvasEvent::DidDeselect(removed));
        }
    }

    /// Index of the topmost finished item under a view point.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let tolerance = self.config.hit_tolerance;
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(_, item)| item.is_finished() && item.hit_test(point, tolerance))
            .map(|(index, _)| index)
    }

    // --- Editing ---

    /// Remove the items at `indexes`.
    ///
    /// The index set is validated as a whole before anything changes, and
    /// refers to positions at call time. A current item among them is
    /// cancelled first. Returns the removed items in z-order.
    pub fn remove_items(&mut self, indexes: &[usize]) -> CanvasResult<Vec<ShapeItem>> {
        self.check_indexes(indexes)?;

        let ids: Vec<ItemId> = indexes.iter().map(|&i| self.items[i].id()).collect();
        let mut removed = Vec::with_capacity(ids.len());

        if let Some(current) = self.current {
            if ids.contains(&current) {
                removed.extend(self.cancel_current());
            }
        }

        self.selection.retain(|id| !ids.contains(id));
        let mut kept = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            if ids.contains(&item.id()) {
                removed.push(item);
            } else {
                kept.push(item);
            }
        }
        self.items = kept;

        log::info!("Removed {} item(s)", removed.len());
        Ok(removed)
    }

    /// Set the absolute rotation of a finished item, in radians.
    ///
    /// The stored angle is normalized into `[0, 2π)`. Returns `false` if the
    /// angle is not finite, the item is missing or still drawing, or rotation
    /// is switched off.
    pub fn rotate(&mut self, id: ItemId, angle: f64) -> bool {
        if !angle.is_finite() {
            log::debug!("Ignoring rotate: angle {} is not finite", angle);
            return false;
        }
        if !self.rotation_allowed() {
            log::debug!("Ignoring rotate: rotate tool is off");
            return false;
        }
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        if !item.is_finished() {
            log::debug!("Ignoring rotate: item {} is still drawing", id);
            return false;
        }

        item.set_rotation_angle(angle);
        self.notify(CanvasEvent::DidModify(id));
        self.notify(CanvasEvent::DidRotate(id));
        true
    }

    /// Close a continuous modification of a finished item.
    pub fn end_modify(&mut self, id: ItemId) -> bool {
        if !self.item(id).is_some_and(|item| item.is_finished()) {
            return false;
        }
        self.notify(CanvasEvent::DidEndModify(id));
        true
    }

    /// Recolor whatever edits currently address.
    ///
    /// The focused item wins; otherwise every selected item; otherwise the
    /// default tint for future items.
    pub fn set_tint(&mut self, tint: TintColor) -> TintTarget {
        if let Some(id) = self.focus_item().map(|item| item.id()) {
            self.set_item_tint(id, tint);
            return TintTarget::Item(id);
        }
        if !self.selection.is_empty() {
            let ids = self.selection.clone();
            for &id in &ids {
                self.set_item_tint(id, tint);
            }
            return TintTarget::Selection(ids);
        }
        self.default_tint = tint;
        TintTarget::Default
    }

    /// Recolor one item. Returns `false` if it does not exist.
    pub fn set_item_tint(&mut self, id: ItemId, tint: TintColor) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                item.set_tint(tint);
                true
            }
            None => false,
        }
    }
}
