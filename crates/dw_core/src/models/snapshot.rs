//! The per-tick monitor snapshot.

use serde::{Deserialize, Serialize};

use super::enums::Category;

/// A normalized severity score.
///
/// In-range values are 0-100. Numeric model outputs outside [0,1] produce
/// out-of-range scores on purpose: the normalizer does not clamp, matching
/// the backend contract's observed behavior.
pub type SeverityValue = i32;

/// One fully recomputed set of category scores.
///
/// A snapshot is display-only state: it is overwritten on every tick and
/// never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    pub drowsiness: SeverityValue,
    pub phone: SeverityValue,
    pub drinking: SeverityValue,
    pub smoking: SeverityValue,
}

impl MonitorSnapshot {
    /// Get the score for a category.
    pub fn get(&self, category: Category) -> SeverityValue {
        match category {
            Category::Drowsiness => self.drowsiness,
            Category::Phone => self.phone,
            Category::Drinking => self.drinking,
            Category::Smoking => self.smoking,
        }
    }

    /// Set the score for a category.
    pub fn set(&mut self, category: Category, value: SeverityValue) {
        match category {
            Category::Drowsiness => self.drowsiness = value,
            Category::Phone => self.phone = value,
            Category::Drinking => self.drinking = value,
            Category::Smoking => self.smoking = value,
        }
    }

    /// Iterate categories with their scores, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, SeverityValue)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_roundtrip() {
        let mut snapshot = MonitorSnapshot::default();
        snapshot.set(Category::Phone, 60);

        assert_eq!(snapshot.get(Category::Phone), 60);
        assert_eq!(snapshot.get(Category::Drowsiness), 0);
    }

    #[test]
    fn iter_covers_all_categories() {
        let snapshot = MonitorSnapshot::default();
        assert_eq!(snapshot.iter().count(), 4);
    }
}
