pub const DETAILS_MAX_HEIGHT_PX: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandOrigin {
    Hover,
    Click,
}

/// Expansion state for the service cards. At most one card is open at a time.
#[derive(Clone, Debug)]
pub struct ServiceCards {
    count: usize,
    expanded: Option<(usize, ExpandOrigin)>,
}

impl ServiceCards {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            expanded: None,
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded.map(|(index, _)| index)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded() == Some(index)
    }

    pub fn hover_enter(&mut self, index: usize) {
        if index >= self.count || self.expanded == Some((index, ExpandOrigin::Click)) {
            return;
        }
        self.expand(index, ExpandOrigin::Hover);
    }

    pub fn hover_leave(&mut self, index: usize) {
        if self.expanded == Some((index, ExpandOrigin::Hover)) {
            self.collapse_all();
        }
    }

    /// Toggles `index`. A card opened by a hover that a touch tap emulated stays open
    /// and becomes pinned instead of closing.
    pub fn click(&mut self, index: usize) {
        if index >= self.count {
            return;
        }

        match self.expanded {
            Some((open, ExpandOrigin::Click)) if open == index => self.collapse_all(),
            _ => self.expand(index, ExpandOrigin::Click),
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    fn expand(&mut self, index: usize, origin: ExpandOrigin) {
        self.collapse_all();
        self.expanded = Some((index, origin));
    }
}
