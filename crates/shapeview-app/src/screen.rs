//! Headless screen adapter: the widget state a shape screen shows, kept in
//! sync with the canvas through its notifications.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use shapeview_core::geometry::{normalize_angle, to_degrees, to_radians};
use shapeview_core::{
    describe, Canvas, CanvasError, CanvasEvent, CanvasObserver, ShapeItem, ShapeRegistry,
    TintColor,
};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use thiserror::Error;

/// Which screen layout is being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenFlavor {
    /// Button strip, rotation slider, info label.
    #[default]
    Touch,
    /// Shape popup, vertical rotation slider gated by a checkbox, color well.
    Desktop,
}

impl ScreenFlavor {
    /// Dial position in degrees for an item's rotation.
    pub fn dial_degrees(self, rotation_angle: f64) -> f64 {
        match self {
            ScreenFlavor::Touch => to_degrees(normalize_angle(-rotation_angle)),
            ScreenFlavor::Desktop => {
                let angle = if rotation_angle > 0.0 {
                    rotation_angle
                } else {
                    TAU + rotation_angle
                };
                360.0 - to_degrees(angle)
            }
        }
    }
}

/// Errors from screen actions.
#[derive(Debug, Error, PartialEq)]
pub enum ScreenError {
    #[error("No shape at picker index {0}")]
    UnknownShape(usize),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// User input a screen forwards to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Shape picker entry chosen.
    PickShape(usize),
    /// Finish button.
    Finish,
    /// Cancel the shape being drawn.
    Cancel,
    /// Remove button.
    RemoveSelected,
    /// Rotation dial moved to a value in degrees.
    SlideRotation(f64),
    /// Rotation dial released.
    ReleaseRotation,
    /// Rotate tool checkbox.
    ToggleRotateTool(bool),
    /// Color well changed.
    PickColor(TintColor),
    /// Pointer tap on the canvas.
    Tap(Point),
    /// Selection toggle at a point. Ignored while a shape is being drawn.
    Select(Point),
}

/// State of the rotation dial.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDial {
    pub enabled: bool,
    /// Degrees in `[0, 360]`.
    pub degrees: f64,
}

/// Everything the screen shows besides the canvas itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenModel {
    /// Picker titles in presentation order.
    pub shape_names: Vec<&'static str>,
    pub finish_enabled: bool,
    pub remove_enabled: bool,
    pub rotation: RotationDial,
    pub rotate_tool_checked: bool,
    /// Measurement text of the focused item.
    pub info_text: String,
    /// Color well (desktop only).
    pub tint_well: Option<TintColor>,
}

impl ScreenModel {
    pub fn new(registry: &ShapeRegistry) -> Self {
        Self {
            shape_names: registry.all_names(),
            finish_enabled: false,
            remove_enabled: false,
            rotation: RotationDial::default(),
            rotate_tool_checked: true,
            info_text: String::new(),
            tint_well: None,
        }
    }

    /// Re-read canvas state into the widgets.
    pub fn refresh(&mut self, canvas: &Canvas, flavor: ScreenFlavor) {
        self.finish_enabled = canvas
            .current_item()
            .is_some_and(|item| item.kind().is_unbounded());
        self.remove_enabled = !canvas.selection().is_empty();
        self.rotate_tool_checked = canvas.rotate_tool_enabled();

        match canvas.focus_item() {
            Some(item) => {
                self.rotation = Self::dial_for(canvas, item, flavor);
                self.info_text = describe(item);
                self.tint_well = Self::well(flavor, item.tint());
            }
            None => {
                self.rotation = RotationDial::default();
                self.info_text.clear();
                self.tint_well = Self::well(flavor, canvas.default_tint());
            }
        }
    }

    fn dial_for(canvas: &Canvas, item: &ShapeItem, flavor: ScreenFlavor) -> RotationDial {
        // The dial only follows a selected item, never one being drawn
        if !item.is_finished() {
            return RotationDial::default();
        }
        let enabled = match flavor {
            ScreenFlavor::Touch => true,
            ScreenFlavor::Desktop => canvas.rotate_tool_enabled(),
        };
        RotationDial {
            enabled,
            degrees: flavor.dial_degrees(item.rotation_angle()),
        }
    }

    fn well(flavor: ScreenFlavor, tint: TintColor) -> Option<TintColor> {
        (flavor == ScreenFlavor::Desktop).then_some(tint)
    }
}

/// Canvas observer that refreshes a shared [`ScreenModel`].
struct ModelRefresher {
    model: Rc<RefCell<ScreenModel>>,
    flavor: ScreenFlavor,
}

impl CanvasObserver for ModelRefresher {
    fn on_event(&mut self, canvas: &Canvas, event: &CanvasEvent) {
        match event {
            CanvasEvent::DidEndModify(_) => {}
            CanvasEvent::DidRotate(_) if self.flavor == ScreenFlavor::Touch => {}
            _ => self.model.borrow_mut().refresh(canvas, self.flavor),
        }
    }
}

/// A shape screen: the canvas, its picker, and the widget model.
pub struct Screen {
    canvas: Canvas,
    registry: ShapeRegistry,
    flavor: ScreenFlavor,
    model: Rc<RefCell<ScreenModel>>,
}

impl Screen {
    pub fn new(canvas: Canvas, registry: ShapeRegistry, flavor: ScreenFlavor) -> Self {
        let model = Rc::new(RefCell::new(ScreenModel::new(&registry)));
        let mut screen = Self {
            canvas,
            registry,
            flavor,
            model,
        };
        screen.canvas.set_observer(Box::new(ModelRefresher {
            model: screen.model.clone(),
            flavor,
        }));
        screen.refresh();
        screen
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn flavor(&self) -> ScreenFlavor {
        self.flavor
    }

    /// Snapshot of the widget state.
    pub fn model(&self) -> ScreenModel {
        self.model.borrow().clone()
    }

    fn refresh(&mut self) {
        self.model.borrow_mut().refresh(&self.canvas, self.flavor);
    }

    /// Apply one user action.
    pub fn handle(&mut self, action: ScreenAction) -> Result<(), ScreenError> {
        log::debug!("Screen action: {:?}", action);
        match action {
            ScreenAction::PickShape(index) => {
                let kind = self
                    .registry
                    .kind_for(index)
                    .ok_or(ScreenError::UnknownShape(index))?;
                self.canvas.generate(kind);
            }
            ScreenAction::Finish => {
                self.canvas.finish();
            }
            ScreenAction::Cancel => {
                self.canvas.cancel();
            }
            ScreenAction::RemoveSelected => {
                let indexes = self.canvas.selected_item_indexes();
                self.canvas.remove_items(&indexes)?;
                self.refresh();
            }
            ScreenAction::SlideRotation(degrees) => {
                if let [id] = self.canvas.selection() {
                    let id = *id;
                    self.canvas.rotate(id, to_radians(-degrees));
                }
            }
            ScreenAction::ReleaseRotation => {
                if let [id] = self.canvas.selection() {
                    let id = *id;
                    self.canvas.end_modify(id);
                }
            }
            ScreenAction::ToggleRotateTool(enabled) => {
                self.canvas.set_rotate_tool_enabled(enabled);
                self.refresh();
            }
            ScreenAction::PickColor(tint) => {
                let target = self.canvas.set_tint(tint);
                log::debug!("Tint {} applied to {:?}", tint.to_hex(), target);
                self.refresh();
            }
            ScreenAction::Tap(point) => self.tap(point),
            ScreenAction::Select(point) => {
                if self.canvas.is_drawing() {
                    log::debug!("Ignoring select at {:?}: a shape is drawing", point);
                } else {
                    self.toggle_selection_at(point);
                }
            }
        }
        Ok(())
    }

    /// A tap feeds the shape being drawn, otherwise toggles selection of
    /// the item under the pointer. Tapping empty space clears the selection.
    fn tap(&mut self, point: Point) {
        if self.canvas.is_drawing() {
            self.canvas.supply_point(point);
        } else {
            self.toggle_selection_at(point);
        }
    }

    fn toggle_selection_at(&mut self, point: Point) {
        let Some(index) = self.canvas.hit_test(point) else {
            self.canvas.deselect_all();
            return;
        };
        let id = self.canvas.items()[index].id();
        // hit_test only returns indexes inside the item list
        let result = if self.canvas.is_selected(id) {
            self.canvas.deselect(&[index])
        } else {
            self.canvas.select(&[index])
        };
        if let Err(err) = result {
            log::warn!("Tap selection failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeview_core::{CanvasConfig, RotationPolicy};

    const EPS: f64 = 1e-9;

    fn screen(flavor: ScreenFlavor) -> Screen {
        Screen::new(Canvas::new(), ShapeRegistry::standard(), flavor)
    }

    fn tap(screen: &mut Screen, x: f64, y: f64) {
        screen.handle(ScreenAction::Tap(Point::new(x, y))).unwrap();
    }

    /// Draw a horizontal line at `y` and return to idle.
    fn draw_line(screen: &mut Screen, y: f64) {
        screen.handle(ScreenAction::PickShape(0)).unwrap();
        tap(screen, 0.0, y);
        tap(screen, 100.0, y);
    }

    #[test]
    fn test_initial_model() {
        let screen = screen(ScreenFlavor::Desktop);
        let model = screen.model();
        assert_eq!(model.shape_names.len(), 9);
        assert!(!model.finish_enabled);
        assert!(!model.remove_enabled);
        assert!(!model.rotation.enabled);
        assert_eq!(model.tint_well, Some(TintColor::black()));
        assert_eq!(model.info_text, "");
    }

    #[test]
    fn test_finish_button_follows_unbounded_item() {
        let mut screen = screen(ScreenFlavor::Touch);
        screen.handle(ScreenAction::PickShape(1)).unwrap();
        assert!(screen.model().finish_enabled);
        tap(&mut screen, 0.0, 0.0);
        tap(&mut screen, 30.0, 40.0);
        assert_eq!(screen.model().info_text, "[ 1] 50.0\n");

        screen.handle(ScreenAction::Finish).unwrap();
        let model = screen.model();
        assert!(!model.finish_enabled);
        assert_eq!(model.info_text, "");

        screen.handle(ScreenAction::PickShape(4)).unwrap();
        assert!(!screen.model().finish_enabled);
    }

    #[test]
    fn test_unknown_shape() {
        let mut screen = screen(ScreenFlavor::Touch);
        assert_eq!(
            screen.handle(ScreenAction::PickShape(99)),
            Err(ScreenError::UnknownShape(99))
        );
        assert!(screen.canvas().is_empty());
    }

    #[test]
    fn test_tap_selects_and_remove() {
        let mut screen = screen(ScreenFlavor::Touch);
        draw_line(&mut screen, 0.0);
        draw_line(&mut screen, 50.0);

        tap(&mut screen, 50.0, 1.0);
        let model = screen.model();
        assert!(model.remove_enabled);
        assert!(model.rotation.enabled);
        assert_eq!(model.info_text, "[ 1] 100.0\n");

        tap(&mut screen, 50.0, 51.0);
        assert!(!screen.model().rotation.enabled);

        screen.handle(ScreenAction::RemoveSelected).unwrap();
        assert!(screen.canvas().is_empty());
        assert!(!screen.model().remove_enabled);
    }

    #[test]
    fn test_select_never_feeds_drawing_shape() {
        let mut screen = screen(ScreenFlavor::Touch);
        draw_line(&mut screen, 0.0);
        screen.handle(ScreenAction::PickShape(1)).unwrap();
        tap(&mut screen, 10.0, 10.0);

        screen
            .handle(ScreenAction::Select(Point::new(50.0, 0.0)))
            .unwrap();
        let drawing = screen.canvas().current_item().unwrap();
        assert_eq!(drawing.point_count(), 1);
        assert!(screen.canvas().selection().is_empty());

        screen.handle(ScreenAction::Finish).unwrap();
        screen
            .handle(ScreenAction::Select(Point::new(50.0, 0.0)))
            .unwrap();
        assert_eq!(screen.canvas().selection().len(), 1);
    }

    #[test]
    fn test_unrotated_dial_reads_positive_zero() {
        let mut screen = screen(ScreenFlavor::Touch);
        draw_line(&mut screen, 0.0);
        tap(&mut screen, 50.0, 0.0);
        let dial = screen.model().rotation;
        assert!(dial.enabled);
        assert_eq!(format!("{:.1}", dial.degrees), "0.0");
    }

    #[test]
    fn test_tap_empty_space_clears_selection() {
        let mut screen = screen(ScreenFlavor::Touch);
        draw_line(&mut screen, 0.0);
        tap(&mut screen, 50.0, 0.0);
        assert_eq!(screen.canvas().selection().len(), 1);
        tap(&mut screen, 50.0, 300.0);
        assert!(screen.canvas().selection().is_empty());
    }

    #[test]
    fn test_slide_rotation_round_trips_through_dial() {
        for flavor in [ScreenFlavor::Touch, ScreenFlavor::Desktop] {
            let mut screen = screen(flavor);
            draw_line(&mut screen, 0.0);
            tap(&mut screen, 50.0, 0.0);

            screen.handle(ScreenAction::SlideRotation(30.0)).unwrap();
            let item = &screen.canvas().items()[0];
            assert!((item.rotation_angle() - (TAU - to_radians(30.0))).abs() < EPS);
            assert!((screen.model().rotation.degrees - 30.0).abs() < 1e-6, "{flavor:?}");
            screen.handle(ScreenAction::ReleaseRotation).unwrap();
        }
    }

    #[test]
    fn test_desktop_rotate_tool_gating() {
        let config = CanvasConfig {
            rotation_policy: RotationPolicy::RotateToolGated,
            ..CanvasConfig::default()
        };
        let mut screen = Screen::new(
            Canvas::with_config(config),
            ShapeRegistry::standard(),
            ScreenFlavor::Desktop,
        );
        draw_line(&mut screen, 0.0);
        tap(&mut screen, 50.0, 0.0);
        assert!(screen.model().rotation.enabled);

        screen.handle(ScreenAction::ToggleRotateTool(false)).unwrap();
        let model = screen.model();
        assert!(!model.rotation.enabled);
        assert!(!model.rotate_tool_checked);

        screen.handle(ScreenAction::SlideRotation(90.0)).unwrap();
        assert_eq!(screen.canvas().items()[0].rotation_angle(), 0.0);
    }

    #[test]
    fn test_pick_color_updates_well() {
        let red = TintColor::new(255, 0, 0, 255);
        let mut screen = screen(ScreenFlavor::Desktop);
        screen.handle(ScreenAction::PickColor(red)).unwrap();
        assert_eq!(screen.model().tint_well, Some(red));
        assert_eq!(screen.canvas().default_tint(), red);

        draw_line(&mut screen, 0.0);
        assert_eq!(screen.canvas().items()[0].tint(), red);
    }

    #[test]
    fn test_dial_degrees() {
        assert!(ScreenFlavor::Touch.dial_degrees(0.0).abs() < EPS);
        assert!(ScreenFlavor::Touch.dial_degrees(0.0).is_sign_positive());
        assert!((ScreenFlavor::Desktop.dial_degrees(0.0)).abs() < EPS);
        let quarter = TAU - to_radians(90.0);
        assert!((ScreenFlavor::Touch.dial_degrees(quarter) - 90.0).abs() < 1e-6);
        assert!((ScreenFlavor::Desktop.dial_degrees(quarter) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_cancel_clears_drawing() {
        let mut screen = screen(ScreenFlavor::Touch);
        screen.handle(ScreenAction::PickShape(8)).unwrap();
        tap(&mut screen, 1.0, 1.0);
        screen.handle(ScreenAction::Cancel).unwrap();
        assert!(screen.canvas().is_empty());
        assert!(!screen.model().finish_enabled);
    }
}
