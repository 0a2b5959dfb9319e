//! Normalized pointer gestures and the viewer controller.
//!
//! Host toolkits disagree on wheel directions, modifier flags, and
//! event object shapes, so the platform adapter translates its native
//! events into the fixed [`ViewerEvent`] vocabulary before they reach
//! the core. The [`ViewerController`] is the single place where
//! gestures become transform mutations and point captures.

use crate::data::ImageInfo;
use crate::mapper::to_image_point;
use crate::model::{ImagePoint, PointAnnotationStore};
use crate::viewport::{ROTATE_STEP_DEGREES, Viewport, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// A pointer gesture in the core's fixed vocabulary.
///
/// Coordinates are device (surface) pixels. Wheel direction is
/// normalized by the adapter: wheel-up always arrives as [`ScrollIn`]
/// (zoom in), regardless of what the platform reports.
///
/// [`ScrollIn`]: ViewerEvent::ScrollIn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// Primary button pressed.
    PointerDown { x: f64, y: f64 },
    /// Pointer moved with the primary button held.
    PointerDrag { x: f64, y: f64 },
    /// Primary button released.
    PointerUp { x: f64, y: f64 },
    /// Pointer moved with no button held.
    PointerMove { x: f64, y: f64 },
    /// Primary button double-clicked: reset to fit-to-window.
    DoubleClick,
    /// Wheel step toward zoom-in, anchored at the pointer.
    ScrollIn { x: f64, y: f64 },
    /// Wheel step toward zoom-out, anchored at the pointer.
    ScrollOut { x: f64, y: f64 },
    /// Modified wheel step: rotate clockwise about the pointer.
    RotateCw { x: f64, y: f64 },
    /// Modified wheel step: rotate counter-clockwise about the pointer.
    RotateCcw { x: f64, y: f64 },
    /// Secondary button released: capture the point under the pointer.
    ConfirmPoint { x: f64, y: f64 },
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The transform changed; redraw through the rendering surface.
    Redraw,
    /// Pointer readout for the status display; `None` means the
    /// pointer is off the image and a placeholder should be shown.
    Status(Option<ImagePoint>),
    /// A point resolved under the pointer. The host prompts for a name
    /// and completes with [`ViewerController::confirm_pending`] (or
    /// drops it with [`ViewerController::cancel_pending`]).
    PointPending(ImagePoint),
    /// Nothing to do.
    Ignored,
}

/// Per-image interaction state: viewport, captured points, drag anchor.
///
/// Created once per open image (the no-image state is simply "no
/// controller"); every method runs synchronously on the event thread,
/// so each mutation is atomic relative to the next query. The surface
/// extent is re-queried per event, never cached across resizes.
#[derive(Debug, Clone)]
pub struct ViewerController {
    image: ImageInfo,
    viewport: Viewport,
    store: PointAnnotationStore,
    drag_anchor: Option<(f64, f64)>,
    dragging: bool,
    pending: Option<ImagePoint>,
}

impl ViewerController {
    /// Create a controller for a newly opened image, fitted to the
    /// given surface extent.
    pub fn new(image: ImageInfo, surface_width: f64, surface_height: f64) -> Self {
        let mut viewport = Viewport::new();
        viewport.fit_to_window(
            image.width_f(),
            image.height_f(),
            surface_width,
            surface_height,
        );
        Self {
            image,
            viewport,
            store: PointAnnotationStore::new(),
            drag_anchor: None,
            dragging: false,
            pending: None,
        }
    }

    /// Handle one gesture against the current surface extent.
    pub fn handle(
        &mut self,
        event: ViewerEvent,
        surface_width: f64,
        surface_height: f64,
    ) -> EventOutcome {
        match event {
            ViewerEvent::PointerDown { x, y } => {
                self.drag_anchor = Some((x, y));
                self.dragging = false;
                EventOutcome::Ignored
            }
            ViewerEvent::PointerDrag { x, y } => match self.drag_anchor {
                Some((ax, ay)) => {
                    self.viewport.translate(x - ax, y - ay);
                    self.drag_anchor = Some((x, y));
                    self.dragging = true;
                    EventOutcome::Redraw
                }
                // Drag without a preceding press (focus lost mid-gesture).
                None => EventOutcome::Ignored,
            },
            ViewerEvent::PointerUp { .. } => {
                // Distinguishes a completed drag from a plain click;
                // neither changes the transform on release.
                self.drag_anchor = None;
                self.dragging = false;
                EventOutcome::Ignored
            }
            ViewerEvent::PointerMove { x, y } => EventOutcome::Status(self.image_point_at(x, y)),
            ViewerEvent::DoubleClick => {
                self.viewport.fit_to_window(
                    self.image.width_f(),
                    self.image.height_f(),
                    surface_width,
                    surface_height,
                );
                EventOutcome::Redraw
            }
            ViewerEvent::ScrollIn { x, y } => {
                self.viewport.scale_at(ZOOM_IN_FACTOR, x, y);
                EventOutcome::Redraw
            }
            ViewerEvent::ScrollOut { x, y } => {
                self.viewport.scale_at(ZOOM_OUT_FACTOR, x, y);
                EventOutcome::Redraw
            }
            ViewerEvent::RotateCw { x, y } => {
                self.viewport.rotate_at(ROTATE_STEP_DEGREES, x, y);
                EventOutcome::Redraw
            }
            ViewerEvent::RotateCcw { x, y } => {
                self.viewport.rotate_at(-ROTATE_STEP_DEGREES, x, y);
                EventOutcome::Redraw
            }
            ViewerEvent::ConfirmPoint { x, y } => match self.image_point_at(x, y) {
                Some(point) => {
                    self.pending = Some(point);
                    EventOutcome::PointPending(point)
                }
                None => EventOutcome::Ignored,
            },
        }
    }

    /// Complete a pending capture with the user-supplied name (which
    /// may be empty). No-op when nothing is pending.
    pub fn confirm_pending(&mut self, name: impl Into<String>) {
        if let Some(point) = self.pending.take() {
            let name = name.into();
            log::debug!(
                "Captured point ({:.0}, {:.0}) name {:?}",
                point.x,
                point.y,
                name
            );
            self.store.add_point(point, name);
        }
    }

    /// Drop a pending capture (the user dismissed the name prompt).
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// The image this controller was created for.
    pub fn image(&self) -> ImageInfo {
        self.image
    }

    /// The current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport access for host-driven adjustments (menu
    /// items, keyboard shortcuts).
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The captured points, in capture order.
    pub fn store(&self) -> &PointAnnotationStore {
        &self.store
    }

    fn image_point_at(&self, x: f64, y: f64) -> Option<ImagePoint> {
        to_image_point(
            x,
            y,
            &self.viewport,
            self.image.width_f(),
            self.image.height_f(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn controller() -> ViewerController {
        // 800x600 image fitted into a 400x300 surface: scale 0.5,
        // zero offsets.
        ViewerController::new(ImageInfo::new(800, 600), 400.0, 300.0)
    }

    #[test]
    fn test_new_controller_fits_image_to_surface() {
        let c = controller();
        let coeffs = c.viewport().matrix().coefficients();
        assert!(approx_eq(coeffs[0], 0.5));
        assert!(approx_eq(coeffs[2], 0.0));
        assert!(approx_eq(coeffs[5], 0.0));
    }

    #[test]
    fn test_drag_sequence_pans_by_pointer_delta() {
        let mut c = controller();
        assert_eq!(
            c.handle(ViewerEvent::PointerDown { x: 100.0, y: 100.0 }, 400.0, 300.0),
            EventOutcome::Ignored
        );
        assert_eq!(
            c.handle(ViewerEvent::PointerDrag { x: 130.0, y: 90.0 }, 400.0, 300.0),
            EventOutcome::Redraw
        );
        let coeffs = c.viewport().matrix().coefficients();
        assert!(approx_eq(coeffs[2], 30.0));
        assert!(approx_eq(coeffs[5], -10.0));

        // Second drag step is relative to the previous position.
        c.handle(ViewerEvent::PointerDrag { x: 135.0, y: 95.0 }, 400.0, 300.0);
        let coeffs = c.viewport().matrix().coefficients();
        assert!(approx_eq(coeffs[2], 35.0));
        assert!(approx_eq(coeffs[5], -5.0));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut c = controller();
        let saved = *c.viewport();
        assert_eq!(
            c.handle(ViewerEvent::PointerDrag { x: 10.0, y: 10.0 }, 400.0, 300.0),
            EventOutcome::Ignored
        );
        assert_eq!(*c.viewport(), saved);
    }

    #[test]
    fn test_double_click_refits_after_pan_and_zoom() {
        let mut c = controller();
        c.handle(ViewerEvent::ScrollIn { x: 10.0, y: 10.0 }, 400.0, 300.0);
        c.handle(ViewerEvent::PointerDown { x: 0.0, y: 0.0 }, 400.0, 300.0);
        c.handle(ViewerEvent::PointerDrag { x: 50.0, y: 60.0 }, 400.0, 300.0);

        assert_eq!(
            c.handle(ViewerEvent::DoubleClick, 400.0, 300.0),
            EventOutcome::Redraw
        );
        let coeffs = c.viewport().matrix().coefficients();
        assert!(approx_eq(coeffs[0], 0.5));
        assert!(approx_eq(coeffs[2], 0.0));
        assert!(approx_eq(coeffs[5], 0.0));
    }

    #[test]
    fn test_scroll_zoom_keeps_pointer_anchored() {
        let mut c = controller();
        let before = match c.handle(ViewerEvent::PointerMove { x: 120.0, y: 80.0 }, 400.0, 300.0) {
            EventOutcome::Status(Some(p)) => p,
            other => panic!("expected on-image readout, got {:?}", other),
        };

        c.handle(ViewerEvent::ScrollIn { x: 120.0, y: 80.0 }, 400.0, 300.0);

        let after = match c.handle(ViewerEvent::PointerMove { x: 120.0, y: 80.0 }, 400.0, 300.0) {
            EventOutcome::Status(Some(p)) => p,
            other => panic!("expected on-image readout, got {:?}", other),
        };
        assert!(approx_eq(before.x, after.x));
        assert!(approx_eq(before.y, after.y));
    }

    #[test]
    fn test_pointer_off_image_reports_placeholder_status() {
        let mut c = ViewerController::new(ImageInfo::new(100, 100), 400.0, 300.0);
        // Fit centers the 100x100 image; the far corner of the surface
        // is outside it.
        let outcome = c.handle(ViewerEvent::PointerMove { x: 399.0, y: 1.0 }, 400.0, 300.0);
        assert_eq!(outcome, EventOutcome::Status(None));
    }

    #[test]
    fn test_confirm_point_flow_appends_named_point() {
        let mut c = controller();
        let pending = match c.handle(ViewerEvent::ConfirmPoint { x: 200.0, y: 150.0 }, 400.0, 300.0)
        {
            EventOutcome::PointPending(p) => p,
            other => panic!("expected pending point, got {:?}", other),
        };
        assert!(approx_eq(pending.x, 400.0));
        assert!(approx_eq(pending.y, 300.0));

        c.confirm_pending("trig station");
        assert_eq!(c.store().len(), 1);
        assert_eq!(c.store().points()[0].name, "trig station");
    }

    #[test]
    fn test_cancelled_capture_stores_nothing() {
        let mut c = controller();
        c.handle(ViewerEvent::ConfirmPoint { x: 200.0, y: 150.0 }, 400.0, 300.0);
        c.cancel_pending();
        c.confirm_pending("late");
        assert!(c.store().is_empty());
    }

    #[test]
    fn test_confirm_point_outside_image_is_ignored() {
        let mut c = ViewerController::new(ImageInfo::new(100, 100), 400.0, 300.0);
        let outcome = c.handle(ViewerEvent::ConfirmPoint { x: 399.0, y: 1.0 }, 400.0, 300.0);
        assert_eq!(outcome, EventOutcome::Ignored);
        c.confirm_pending("ghost");
        assert!(c.store().is_empty());
    }

    #[test]
    fn test_rotate_steps_cancel() {
        let mut c = controller();
        let saved = c.viewport().matrix().coefficients();
        c.handle(ViewerEvent::RotateCw { x: 50.0, y: 50.0 }, 400.0, 300.0);
        c.handle(ViewerEvent::RotateCcw { x: 50.0, y: 50.0 }, 400.0, 300.0);
        let coeffs = c.viewport().matrix().coefficients();
        for (a, b) in coeffs.iter().zip(saved.iter()) {
            assert!(approx_eq(*a, *b));
        }
    }
}
