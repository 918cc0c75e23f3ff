//! Before/after photo comparison for the progress tracker tab.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSlot {
    Before,
    After,
}

/// One side of the comparison. `image_ref` is whatever handle the rendering
/// layer uses to show the photo (object URL, file path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPhoto {
    pub image_ref: Option<String>,
    pub date: NaiveDate,
}

impl ProgressPhoto {
    fn empty(date: NaiveDate) -> Self {
        Self {
            image_ref: None,
            date,
        }
    }
}

/// Both photos are present; the slider reveals `position` percent of the
/// before photo from the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison<'a> {
    pub before: &'a str,
    pub after: &'a str,
    pub position: Percentage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTracker {
    before: ProgressPhoto,
    after: ProgressPhoto,
    slider: Percentage,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(Timestamp::now().date())
    }
}

impl ProgressTracker {
    /// Both dates start at `today`; the slider starts centered.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            before: ProgressPhoto::empty(today),
            after: ProgressPhoto::empty(today),
            slider: Percentage::HALF,
        }
    }

    pub fn photo(&self, slot: PhotoSlot) -> &ProgressPhoto {
        match slot {
            PhotoSlot::Before => &self.before,
            PhotoSlot::After => &self.after,
        }
    }

    fn photo_mut(&mut self, slot: PhotoSlot) -> &mut ProgressPhoto {
        match slot {
            PhotoSlot::Before => &mut self.before,
            PhotoSlot::After => &mut self.after,
        }
    }

    pub fn set_photo(&mut self, slot: PhotoSlot, image_ref: impl Into<String>) {
        self.photo_mut(slot).image_ref = Some(image_ref.into());
    }

    pub fn set_date(&mut self, slot: PhotoSlot, date: NaiveDate) {
        self.photo_mut(slot).date = date;
    }

    pub fn move_slider(&mut self, position: Percentage) {
        self.slider = position;
    }

    pub fn slider(&self) -> Percentage {
        self.slider
    }

    /// Available only once both photos are set.
    pub fn comparison(&self) -> Option<Comparison<'_>> {
        match (&self.before.image_ref, &self.after.image_ref) {
            (Some(before), Some(after)) => Some(Comparison {
                before,
                after,
                position: self.slider,
            }),
            _ => None,
        }
    }
}
