//! Canvas notifications and the observer that receives them.

use crate::canvas::Canvas;
use crate::shapes::{ItemId, ShapeItem};

/// Notifications emitted by the canvas, in the order its state changed.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A new item became the current item.
    DidStart(ItemId),
    /// An unbounded item is about to be finished on request.
    Finishing(ItemId),
    /// An item stopped drawing and is now editable only by rotation/tint.
    DidFinish(ItemId),
    /// The current item was discarded. Carries the removed item.
    DidCancel(ShapeItem),
    /// An item's geometry or rotation changed.
    DidModify(ItemId),
    /// A continuous modification (e.g. dragging a rotation dial) ended.
    DidEndModify(ItemId),
    /// An item's rotation changed.
    DidRotate(ItemId),
    /// Items added to the selection by one call.
    DidSelect(Vec<ItemId>),
    /// Items removed from the selection by one call.
    DidDeselect(Vec<ItemId>),
}

impl CanvasEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            CanvasEvent::DidStart(_) => "did_start",
            CanvasEvent::Finishing(_) => "finishing",
            CanvasEvent::DidFinish(_) => "did_finish",
            CanvasEvent::DidCancel(_) => "did_cancel",
            CanvasEvent::DidModify(_) => "did_modify",
            CanvasEvent::DidEndModify(_) => "did_end_modify",
            CanvasEvent::DidRotate(_) => "did_rotate",
            CanvasEvent::DidSelect(_) => "did_select",
            CanvasEvent::DidDeselect(_) => "did_deselect",
        }
    }
}

/// Receives canvas notifications synchronously.
///
/// The canvas finishes each state transition before notifying, so the
/// observer sees consistent state through the `canvas` it is handed.
pub trait CanvasObserver {
    fn on_event(&mut self, canvas: &Canvas, event: &CanvasEvent);
}

impl<F> CanvasObserver for F
where
    F: FnMut(&Canvas, &CanvasEvent),
{
    fn on_event(&mut self, canvas: &Canvas, event: &CanvasEvent) {
        self(canvas, event)
    }
}
