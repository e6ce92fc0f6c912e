use super::model::{DataPoint, Value, ValueKind};
use crate::error::{DatasetError, Result};

// ---------------------------------------------------------------------------
// TypedDataset – fixed-length sequence of slots
// ---------------------------------------------------------------------------

/// A fixed-length, ordered sequence of [`DataPoint`] slots.
///
/// The length is set once at construction and never changes. Every slot
/// starts out as an empty `Integer` placeholder. The dataset owns all slot
/// values; [`TypedDataset::get`] lends them out and [`TypedDataset::set`]
/// copies new ones in.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedDataset {
    slots: Box<[DataPoint]>,
}

impl TypedDataset {
    /// Allocate a dataset of `len` placeholder slots.
    ///
    /// Zero-length datasets are refused rather than represented as empty.
    pub fn try_new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(DatasetError::ZeroLength);
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(len)?;
        slots.resize_with(len, DataPoint::default);
        log::trace!("created dataset with {len} slots");
        Ok(TypedDataset {
            slots: slots.into_boxed_slice(),
        })
    }

    pub fn new(len: usize) -> Option<Self> {
        Self::try_new(len).ok()
    }

    /// Declared length (number of slots).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots, including empty placeholders.
    pub fn slots(&self) -> &[DataPoint] {
        &self.slots
    }

    /// Kind currently recorded for the slot at `index`, empty or not.
    pub fn kind_at(&self, index: usize) -> Option<ValueKind> {
        self.slots.get(index).map(DataPoint::kind)
    }

    /// Non-empty slots with their indices.
    pub fn iter_values(&self) -> impl Iterator<Item = (usize, &Value)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.value().map(|v| (i, v)))
    }

    /// Number of non-empty slots holding `kind`.
    pub fn count_kind(&self, kind: ValueKind) -> usize {
        self.iter_values().filter(|(_, v)| v.kind() == kind).count()
    }

    /// Borrow the point at `index`, if it is in range and holds a value.
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.slots.get(index).filter(|p| !p.is_empty())
    }

    /// Copy `point` into the slot at `index`, reporting why it was refused.
    ///
    /// The point must match the kind the slot currently records. Fresh
    /// slots record `Integer`, so the first write into a slot can only be
    /// an integer; float and text points into fresh slots are refused.
    /// Text points must be non-empty. The copy is allocated before the old
    /// value is dropped, so a refused write never touches the slot.
    pub fn try_set(&mut self, index: usize, point: &DataPoint) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(DatasetError::OutOfBounds { index, len })?;

        // Gate on the slot's current kind, not the point's; see doc above.
        if slot.kind() != point.kind() {
            return Err(DatasetError::KindMismatch {
                index,
                slot: slot.kind(),
                point: point.kind(),
            });
        }

        let copy = match point.value() {
            Some(Value::Text(s)) if s.is_empty() => return Err(DatasetError::EmptyText),
            Some(value) => Value::copy_from(value.as_raw())?,
            None if point.kind() == ValueKind::Text => return Err(DatasetError::EmptyText),
            None => return Err(DatasetError::EmptyPoint(point.kind())),
        };
        slot.replace(copy);
        Ok(())
    }

    /// Copy `point` into the slot at `index`.
    ///
    /// Refused writes are silent: nothing changes and the call just returns
    /// `false`. Use [`TypedDataset::try_set`] to learn why.
    pub fn set(&mut self, index: usize, point: &DataPoint) -> bool {
        match self.try_set(index, point) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("ignored write to slot {index}: {e}");
                false
            }
        }
    }

    /// Overwrite a slot wholesale, kind included. Skips the kind gate.
    pub(crate) fn seed(&mut self, index: usize, point: DataPoint) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Drop the dataset along with every value it owns.
    pub fn release(self) {
        log::trace!("releasing dataset with {} slots", self.slots.len());
    }
}
