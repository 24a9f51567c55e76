//! Single-row drawer layout
//!
//! The parameters row is laid out left to right as:
//! label, custom-curve toggle, active source field, duration field.

/// Width reserved for the row label
pub const LABEL_WIDTH: f32 = 125.0;
/// Width of the custom-curve toggle
pub const TOGGLE_WIDTH: f32 = 15.0;
/// Width of the duration field
pub const DURATION_WIDTH: f32 = 50.0;
/// Gap between the toggle, source and duration fields
pub const PADDING: f32 = 2.0;
/// Horizontal space taken by gaps and insets
const GUTTER: f32 = 6.0;

/// Axis-aligned rectangle in panel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Which editor occupies the source slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveField {
    /// Dropdown of named eases
    EaseSelector,
    /// Curve editor
    CurveEditor,
}

impl ActiveField {
    pub fn for_custom(custom: bool) -> Self {
        if custom {
            ActiveField::CurveEditor
        } else {
            ActiveField::EaseSelector
        }
    }
}

/// A hit-testable region of the row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerField {
    Label,
    Toggle,
    Source(ActiveField),
    Duration,
}

/// Computed rectangles for one parameters row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerLayout {
    pub label: Rect,
    pub toggle: Rect,
    pub source: Rect,
    pub duration: Rect,
    pub active: ActiveField,
}

impl DrawerLayout {
    /// Lay out a row inside `row`.
    ///
    /// The source field takes whatever width is left. On rows narrower than
    /// the fixed widths it goes negative and is reported as-is.
    pub fn compute(row: Rect, active: ActiveField) -> Self {
        let remaining = row.width - LABEL_WIDTH - TOGGLE_WIDTH - DURATION_WIDTH - GUTTER;

        let label = Rect::new(row.x, row.y, LABEL_WIDTH, row.height);
        let toggle = Rect::new(row.x + LABEL_WIDTH, row.y, TOGGLE_WIDTH, row.height);
        let source = Rect::new(toggle.right() + PADDING, row.y, remaining, row.height);
        let duration = Rect::new(source.right() + PADDING, row.y, DURATION_WIDTH, row.height);

        Self {
            label,
            toggle,
            source,
            duration,
            active,
        }
    }

    /// Field under a point, if any
    pub fn hit_test(&self, x: f32, y: f32) -> Option<DrawerField> {
        if self.toggle.contains(x, y) {
            Some(DrawerField::Toggle)
        } else if self.duration.contains(x, y) {
            Some(DrawerField::Duration)
        } else if self.source.width > 0.0 && self.source.contains(x, y) {
            Some(DrawerField::Source(self.active))
        } else if self.label.contains(x, y) {
            Some(DrawerField::Label)
        } else {
            None
        }
    }
}
