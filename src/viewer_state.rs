// src/viewer_state.rs
//
// DOM-free decision logic for the image viewer: index arithmetic, input
// mapping and the click-to-close policy. The component only wires browser
// events to these functions.

use std::ops::Deref;

/// Move `current` by `delta` inside a list of `len` images.
///
/// The remainder is truncated (it keeps the sign of the dividend), so a
/// negative result means we stepped off the front and land on the last image.
/// An empty list has nowhere to go and always yields 0.
pub fn change_image(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = (current as i64 + delta as i64) % len as i64;
    if next < 0 {
        len - 1
    } else {
        next as usize
    }
}

/// Starting index for a freshly mounted viewer. It is not clamped; the first
/// step brings an out-of-range index back through the same modulo.
pub fn initial_index(requested: Option<usize>) -> usize {
    requested.unwrap_or(0)
}

/// Previous/next controls only make sense with something to move to.
pub fn shows_navigation(len: usize) -> bool {
    len > 1
}

/// Alt text of the image at `index`, or `""` when there is none.
pub fn alt_text_at<S: Deref<Target = str>>(alt: Option<&[Option<S>]>, index: usize) -> &str {
    alt.and_then(|list| list.get(index))
        .and_then(|text| text.as_ref())
        .map(|text| &**text)
        .unwrap_or("")
}

/// Caption to render under the image at `index`, if any.
pub fn caption_at<S: Deref<Target = str>>(
    alt: Option<&[Option<S>]>,
    index: usize,
    disable_caption: bool,
) -> Option<&str> {
    if disable_caption {
        return None;
    }
    Some(alt_text_at(alt, index)).filter(|text| !text.is_empty())
}

/// What a keydown on the document asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Previous,
    Next,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(KeyCommand::Close),
            "ArrowLeft" | "h" => Some(KeyCommand::Previous),
            "ArrowRight" | "l" => Some(KeyCommand::Next),
            _ => None,
        }
    }

    /// Navigation step for this command; `None` for `Close`.
    pub fn delta(self) -> Option<isize> {
        match self {
            KeyCommand::Close => None,
            KeyCommand::Previous => Some(-1),
            KeyCommand::Next => Some(1),
        }
    }
}

/// Every wheel event is exactly one step: down goes back, anything else forward.
pub fn wheel_step(delta_y: f64) -> isize {
    if delta_y > 0.0 {
        -1
    } else {
        1
    }
}

/// Which part of the viewer a click started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickZone {
    Backdrop,
    Slide,
    Image,
    Elsewhere,
}

impl ClickZone {
    /// Classify a click target from identity checks against the viewer's own elements.
    pub fn classify(is_backdrop: bool, is_slide: bool, is_image: bool) -> Self {
        if is_image {
            ClickZone::Image
        } else if is_slide {
            ClickZone::Slide
        } else if is_backdrop {
            ClickZone::Backdrop
        } else {
            ClickZone::Elsewhere
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClosePolicy {
    pub close_on_click_outside: bool,
    pub close_on_click_inside: bool,
}

impl ClosePolicy {
    pub fn closes_on(&self, zone: ClickZone) -> bool {
        match zone {
            ClickZone::Backdrop | ClickZone::Slide => self.close_on_click_outside,
            ClickZone::Image => self.close_on_click_inside,
            ClickZone::Elsewhere => false,
        }
    }
}

/// Document listeners the viewer holds while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerPlan {
    pub keydown: bool,
    pub wheel: bool,
}

impl ListenerPlan {
    pub fn new(disable_scroll: bool) -> Self {
        Self {
            keydown: true,
            wheel: !disable_scroll,
        }
    }
}
