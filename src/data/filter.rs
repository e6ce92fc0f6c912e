use super::dataset::TypedDataset;
use super::model::{DataPoint, ValueKind};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Filter placement mode
// ---------------------------------------------------------------------------

/// Where matching points land in a filtered dataset.
///
/// Both modes return a dataset as long as the input, pre-filled with empty
/// `Integer` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every match is written through [`TypedDataset::set`] at index
    /// `len`, one past the last slot. `set` refuses each of those writes,
    /// so the result is all placeholders whatever the input holds.
    #[default]
    PastEnd,
    /// Every match keeps its original index, kind included.
    InPlace,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

impl TypedDataset {
    /// Build a same-length dataset holding the points of `kind`, placed per
    /// [`FilterMode::default`].
    pub fn filter_by_kind(&self, kind: ValueKind) -> Option<TypedDataset> {
        self.filter_by_kind_with(kind, FilterMode::default()).ok()
    }

    /// Build a same-length dataset holding the points of `kind`.
    ///
    /// A match whose copy cannot be allocated is skipped, not fatal.
    pub fn filter_by_kind_with(
        &self,
        kind: ValueKind,
        mode: FilterMode,
    ) -> Result<TypedDataset> {
        let mut filtered = TypedDataset::try_new(self.len())?;
        let target = filtered.len();

        let mut matched = 0usize;
        let mut written = 0usize;
        for (index, value) in self.iter_values().filter(|(_, v)| v.kind() == kind) {
            matched += 1;
            let copy = match DataPoint::try_new(kind, value.as_raw()) {
                Ok(copy) => copy,
                Err(e) => {
                    log::debug!("skipping match at slot {index}: {e}");
                    continue;
                }
            };
            let landed = match mode {
                FilterMode::PastEnd => filtered.set(target, &copy),
                FilterMode::InPlace => filtered.seed(index, copy),
            };
            if landed {
                written += 1;
            }
        }

        log::debug!(
            "filtered {} slots for {kind} ({mode:?}): {matched} matched, {written} written",
            self.len()
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Value;

    /// [Integer(10), Integer(20), Float(30.0), Text("x")], with the float
    /// and text slots seeded directly.
    fn mixed() -> TypedDataset {
        let mut ds = TypedDataset::new(4).unwrap();
        ds.set(0, &DataPoint::from(Value::Integer(10)));
        ds.set(1, &DataPoint::from(Value::Integer(20)));
        ds.seed(2, DataPoint::from(Value::Float(30.0)));
        ds.seed(3, DataPoint::from(Value::Text("x".into())));
        ds
    }

    #[test]
    fn no_match_leaves_placeholders() {
        let mut ds = TypedDataset::new(3).unwrap();
        ds.set(0, &DataPoint::from(Value::Integer(10)));
        ds.set(1, &DataPoint::from(Value::Integer(20)));

        let filtered = ds.filter_by_kind(ValueKind::Text).unwrap();
        assert_eq!(filtered.len(), 3);
        assert!(filtered.slots().iter().all(|p| p.is_empty() && p.kind() == ValueKind::Integer));
    }

    #[test]
    fn default_mode_drops_every_match() {
        let ds = mixed();
        for kind in ValueKind::ALL {
            let filtered = ds.filter_by_kind(kind).unwrap();
            assert_eq!(filtered.len(), ds.len());
            assert_eq!(filtered.iter_values().count(), 0);
            assert!(filtered.slots().iter().all(|p| p.kind() == ValueKind::Integer));
        }
    }

    #[test]
    fn in_place_keeps_original_indices() {
        let ds = mixed();
        let floats = ds.filter_by_kind_with(ValueKind::Float, FilterMode::InPlace).unwrap();
        assert_eq!(floats.len(), 4);
        assert_eq!(floats.get(2).and_then(DataPoint::as_float), Some(30.0));
        assert_eq!(floats.count_kind(ValueKind::Float), 1);

        let ints = ds.filter_by_kind_with(ValueKind::Integer, FilterMode::InPlace).unwrap();
        let kept: Vec<usize> = ints.iter_values().map(|(i, _)| i).collect();
        assert_eq!(kept, vec![0, 1]);
        assert_eq!(ints.kind_at(3), Some(ValueKind::Integer));
    }

    #[test]
    fn filtered_copy_is_independent() {
        let mut ds = mixed();
        let texts = ds.filter_by_kind_with(ValueKind::Text, FilterMode::InPlace).unwrap();
        ds.set(3, &DataPoint::from(Value::Text("changed".into())));
        assert_eq!(texts.get(3).and_then(DataPoint::as_text), Some("x"));
    }
}
