// src/ui/layouts/triangle.rs
//! Two-child container split along the diagonal

use alloc::boxed::Box;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, trace};

use super::config::TriangleLayoutConfig;
use super::{LayoutError, LayoutResult};
use crate::ui::clip::ClipToRegion;
use crate::ui::components::Divider;
use crate::ui::core::{
    Drawable, Measurable, TouchEvent, TouchPoint, TouchResult, Touchable, TriangleSide,
};
use crate::ui::geometry::{TriangleGeometry, TrianglePath};
use crate::ui::measure::{LayoutParams, MeasureSpec, child_measure_spec, resolve_size};
use crate::ui::styling::Padding;

/// Receiver for taps on either half of a [`TriangleLayout`].
///
/// Each callback gets the child shown in the tapped half.
pub trait TriangleClickListener<L, R> {
    fn on_left_triangle_click(&mut self, view: &L);
    fn on_right_triangle_click(&mut self, view: &R);
}

/// A child together with its layout parameters and last measured size.
struct ChildSlot<C> {
    view: C,
    params: LayoutParams,
    measured: Size,
}

impl<C: Measurable> ChildSlot<C> {
    fn new(view: C, params: LayoutParams) -> Self {
        Self {
            view,
            params,
            measured: Size::zero(),
        }
    }

    /// Measure against the parent's specs; returns the size including margins.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, padding: Padding) -> Size {
        let margin = self.params.margin;
        let width_spec = child_measure_spec(
            width,
            padding.horizontal() + margin.horizontal(),
            self.params.width,
        );
        let height_spec = child_measure_spec(
            height,
            padding.vertical() + margin.vertical(),
            self.params.height,
        );

        self.measured = self.view.measure(width_spec, height_spec);
        Size::new(
            self.measured.width + margin.horizontal(),
            self.measured.height + margin.vertical(),
        )
    }

    fn place(&mut self, padding: Padding) {
        let margin = self.params.margin;
        let top_left = Point::new(
            (padding.left + margin.left) as i32,
            (padding.top + margin.top) as i32,
        );
        self.view.set_bounds(Rectangle::new(top_left, self.measured));
    }

    /// Measure to exactly `size`, leaving the slot's margins untouched.
    fn measure_exact(&mut self, size: Size) {
        let width = MeasureSpec::Exactly(size.width);
        let height = MeasureSpec::Exactly(size.height);
        self.measured = self.view.measure(width, height);
    }
}

/// Gesture tracking between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    Pressed(TouchPoint),
}

/// Container showing two children in complementary right triangles
///
/// The left child is clipped to the upper-left half of its measured
/// rectangle, the right child to the lower-right half of its own, and a
/// diagonal divider is drawn over both. A tap is routed to the
/// [`TriangleClickListener`] for the half that contains it; when both halves
/// contain the point (on the shared diagonal) the left half wins.
///
/// Child bounds, geometry and touch coordinates are all relative to the
/// container's top-left corner; [`layout`](Self::layout) sets where that
/// corner sits on the display.
///
/// # Pass order
/// [`measure`](Self::measure) recomputes the triangle geometry and must run
/// before [`layout`](Self::layout), drawing and touch handling whenever the
/// container or its children change size.
///
/// # Examples
/// ```ignore
/// let mut layout = TriangleLayout::new(
///     Panel::new("Left", LEFT_PANEL_COLOR),
///     LayoutParams::fixed(120, 120),
///     Panel::new("Right", RIGHT_PANEL_COLOR),
///     LayoutParams::fixed(120, 120),
/// )
/// .with_padding(Padding::all(4));
///
/// layout.set_click_listener(Toaster);
/// layout.measure(MeasureSpec::AtMost(320), MeasureSpec::AtMost(240));
/// layout.layout(Point::new(20, 20));
/// layout.draw(&mut display)?;
/// ```
pub struct TriangleLayout<L, R> {
    left: ChildSlot<L>,
    right: ChildSlot<R>,
    divider: ChildSlot<Divider>,
    padding: Padding,
    config: TriangleLayoutConfig,
    origin: Point,
    measured: Size,
    left_geometry: TriangleGeometry,
    right_geometry: TriangleGeometry,
    gesture: GestureState,
    listener: Option<Box<dyn TriangleClickListener<L, R>>>,
    dirty: bool,
}

impl<C> TriangleLayout<C, C>
where
    C: Measurable + Drawable,
{
    /// Build a layout from a declared child list.
    ///
    /// The first child goes to the left half, the second to the right.
    ///
    /// # Errors
    /// [`LayoutError::ChildCount`] unless exactly two children are given.
    pub fn from_children(children: Vec<(C, LayoutParams)>) -> LayoutResult<Self> {
        let found = children.len();
        if found != 2 {
            return Err(LayoutError::ChildCount { found });
        }

        let mut children = children.into_iter();
        match (children.next(), children.next()) {
            (Some((left, left_params)), Some((right, right_params))) => {
                Ok(Self::new(left, left_params, right, right_params))
            }
            _ => Err(LayoutError::ChildCount { found }),
        }
    }
}

impl<L, R> TriangleLayout<L, R>
where
    L: Measurable + Drawable,
    R: Measurable + Drawable,
{
    /// Create a layout with its two content children.
    ///
    /// The divider is created here and shares the left child's layout
    /// parameters.
    pub fn new(left: L, left_params: LayoutParams, right: R, right_params: LayoutParams) -> Self {
        let config = TriangleLayoutConfig::default();
        let divider = Divider::new(config.divider_color(), config.divider_stroke_px);

        Self {
            left: ChildSlot::new(left, left_params),
            right: ChildSlot::new(right, right_params),
            divider: ChildSlot::new(divider, left_params),
            padding: Padding::default(),
            config,
            origin: Point::zero(),
            measured: Size::zero(),
            left_geometry: TriangleGeometry::default(),
            right_geometry: TriangleGeometry::default(),
            gesture: GestureState::Idle,
            listener: None,
            dirty: true,
        }
    }

    /// Set the padding between the container edge and its children.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self.dirty = true;
        self
    }

    /// Replace the tap slop and divider styling.
    pub fn with_config(mut self, config: TriangleLayoutConfig) -> Self {
        self.config = config;
        self.divider.view = Divider::new(config.divider_color(), config.divider_stroke_px);
        self.dirty = true;
        self
    }

    /// Register the click listener, replacing any previous one.
    pub fn set_click_listener<T>(&mut self, listener: T)
    where
        T: TriangleClickListener<L, R> + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn left(&self) -> &L {
        &self.left.view
    }

    pub fn left_mut(&mut self) -> &mut L {
        &mut self.left.view
    }

    pub fn right(&self) -> &R {
        &self.right.view
    }

    pub fn right_mut(&mut self) -> &mut R {
        &mut self.right.view
    }

    pub fn divider(&self) -> &Divider {
        &self.divider.view
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Size resolved by the last [`measure`](Self::measure).
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn left_geometry(&self) -> &TriangleGeometry {
        &self.left_geometry
    }

    pub fn right_geometry(&self) -> &TriangleGeometry {
        &self.right_geometry
    }

    /// Measure both children and resolve the container's size.
    ///
    /// The desired size fits the larger child on each axis (margins
    /// included) plus padding, then is resolved against `width` and
    /// `height`. The divider is then sized exactly to the left child so it
    /// runs along the left half's hypotenuse; it does not affect the result.
    /// Triangle geometry is rebuilt from the new child sizes before
    /// returning.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let padding = self.padding;
        let left = self.left.measure(width, height, padding);
        let right = self.right.measure(width, height, padding);

        let desired = Size::new(
            left.width.max(right.width) + padding.horizontal(),
            left.height.max(right.height) + padding.vertical(),
        );
        let measured = Size::new(
            resolve_size(desired.width, width),
            resolve_size(desired.height, height),
        );
        if measured != self.measured {
            self.measured = measured;
            self.dirty = true;
        }

        self.divider.measure_exact(self.left.measured);
        self.update_geometry();

        debug!(
            "Triangle layout measured {}x{} (left {}x{}, right {}x{})",
            measured.width,
            measured.height,
            self.left.measured.width,
            self.left.measured.height,
            self.right.measured.width,
            self.right.measured.height
        );

        measured
    }

    /// Position the container at `origin` and place its children.
    pub fn layout(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.dirty = true;
        }

        let padding = self.padding;
        self.left.place(padding);
        self.right.place(padding);
        self.divider.place(padding);
    }

    /// Which half contains `point`, checking the left half first.
    ///
    /// Points outside the container's measured size hit nothing, even where
    /// an oversized child's triangle would reach them.
    pub fn hit_test(&self, point: TouchPoint) -> Option<TriangleSide> {
        if !self.contains_point(point) {
            return None;
        }

        let p = point.to_point();
        if self.left_geometry.contains(p) {
            Some(TriangleSide::Left)
        } else if self.right_geometry.contains(p) {
            Some(TriangleSide::Right)
        } else {
            None
        }
    }

    fn update_geometry(&mut self) {
        let origin = Point::new(self.padding.left as i32, self.padding.top as i32);
        let left =
            TriangleGeometry::from_path(TrianglePath::upper_left(origin, self.left.measured));
        let right =
            TriangleGeometry::from_path(TrianglePath::lower_right(origin, self.right.measured));

        if left != self.left_geometry || right != self.right_geometry {
            self.left_geometry = left;
            self.right_geometry = right;
            self.dirty = true;
        }
    }

    fn dispatch_tap(&mut self, point: TouchPoint) -> TouchResult {
        let side = self.hit_test(point);
        let Some(listener) = self.listener.as_mut() else {
            trace!("Tap at ({}, {}) with no listener", point.x, point.y);
            return TouchResult::Handled;
        };

        match side {
            Some(TriangleSide::Left) => {
                debug!("Left triangle clicked at ({}, {})", point.x, point.y);
                listener.on_left_triangle_click(&self.left.view);
                TouchResult::Clicked(TriangleSide::Left)
            }
            Some(TriangleSide::Right) => {
                debug!("Right triangle clicked at ({}, {})", point.x, point.y);
                listener.on_right_triangle_click(&self.right.view);
                TouchResult::Clicked(TriangleSide::Right)
            }
            None => {
                trace!("Tap at ({}, {}) outside both triangles", point.x, point.y);
                TouchResult::Handled
            }
        }
    }
}

impl<L, R> Drawable for TriangleLayout<L, R>
where
    L: Measurable + Drawable,
    R: Measurable + Drawable,
{
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut translated = display.translated(self.origin);
        let mut local = translated.clipped(&Rectangle::new(Point::zero(), self.measured));

        self.left
            .view
            .draw(&mut local.clipped_to_region(self.left_geometry.region))?;
        self.right
            .view
            .draw(&mut local.clipped_to_region(self.right_geometry.region))?;

        // Divider last so it stays visible over both halves
        self.divider.view.draw(&mut local)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, self.measured)
    }

    fn is_dirty(&self) -> bool {
        self.dirty
            || self.left.view.is_dirty()
            || self.right.view.is_dirty()
            || self.divider.view.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.left.view.mark_clean();
        self.right.view.mark_clean();
        self.divider.view.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl<L, R> Touchable for TriangleLayout<L, R>
where
    L: Measurable + Drawable,
    R: Measurable + Drawable,
{
    fn contains_point(&self, point: TouchPoint) -> bool {
        Rectangle::new(Point::zero(), self.measured).contains(point.to_point())
    }

    /// Every event is consumed, whether or not a callback fires.
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) => {
                self.gesture = GestureState::Pressed(point);
                TouchResult::Handled
            }
            TouchEvent::Drag(_) => TouchResult::Handled,
            TouchEvent::Release(point) => {
                match core::mem::replace(&mut self.gesture, GestureState::Idle) {
                    GestureState::Pressed(start)
                        if start.is_within(point, self.config.tap_slop_px) =>
                    {
                        self.dispatch_tap(point)
                    }
                    GestureState::Pressed(start) => {
                        trace!(
                            "Drag from ({}, {}) to ({}, {}) ignored",
                            start.x,
                            start.y,
                            point.x,
                            point.y
                        );
                        TouchResult::Handled
                    }
                    GestureState::Idle => TouchResult::Handled,
                }
            }
        }
    }
}
