const TOOLTIP_OFFSET_X: f64 = 10.0;
const TOOLTIP_OFFSET_Y: f64 = 10.0;
const TOOLTIP_DROP_BELOW: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub page_x: f64,
    pub page_y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelSize {
    pub width: f64,
    pub height: f64,
}

/// Places the label up-right of the pointer, flipping left at the right edge and
/// dropping below the pointer at the top edge.
pub fn tooltip_position(pointer: Pointer, size: LabelSize, viewport_width: f64) -> (f64, f64) {
    let mut x = pointer.page_x + TOOLTIP_OFFSET_X;
    let mut y = pointer.page_y - TOOLTIP_OFFSET_Y;

    if x + size.width > viewport_width {
        x = pointer.page_x - size.width - TOOLTIP_OFFSET_X;
    }

    if y - size.height < 0.0 {
        y = pointer.page_y + TOOLTIP_DROP_BELOW;
    }

    (x, y)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    text: Option<String>,
    visible: bool,
    anchor: Option<(Pointer, f64)>,
    x: f64,
    y: f64,
}

impl TooltipState {
    /// Returns `false` when the hovered element carries no label.
    pub fn show(
        &mut self,
        label: Option<&str>,
        pointer: Pointer,
        size: LabelSize,
        viewport_width: f64,
    ) -> bool {
        let Some(label) = label.filter(|label| !label.is_empty()) else {
            return false;
        };

        self.text = Some(label.to_string());
        self.visible = true;
        self.move_to(pointer, size, viewport_width);
        true
    }

    pub fn move_to(&mut self, pointer: Pointer, size: LabelSize, viewport_width: f64) {
        if !self.visible {
            return;
        }

        self.anchor = Some((pointer, viewport_width));
        let (x, y) = tooltip_position(pointer, size, viewport_width);
        self.x = x;
        self.y = y;
    }

    /// Places the label again at the last pointer, using the size of the text as rendered.
    /// The size passed to `show` is read before the new text is in the document.
    pub fn remeasure(&mut self, size: LabelSize) -> bool {
        let Some((pointer, viewport_width)) = self.anchor.filter(|_| self.visible) else {
            return false;
        };

        let placed = tooltip_position(pointer, size, viewport_width);
        if placed == (self.x, self.y) {
            return false;
        }
        (self.x, self.y) = placed;
        true
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
