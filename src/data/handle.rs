//! Call surface over optional handles.
//!
//! Each function accepts `None` wherever a caller might hold no dataset or
//! point. Constructors report failure by returning `None`; `set_data_point`
//! never reports anything beyond whether the write happened.

use super::dataset::TypedDataset;
use super::model::{DataPoint, RawValue, ValueKind};

/// Deep-copy `raw` into a new standalone point of `kind`.
pub fn make_data_point(kind: ValueKind, raw: RawValue<'_>) -> Option<DataPoint> {
    DataPoint::try_new(kind, raw).ok()
}

/// Same as [`make_data_point`], taking the kind as its numeric tag.
pub fn make_data_point_tagged(tag: i32, raw: RawValue<'_>) -> Option<DataPoint> {
    DataPoint::from_tag(tag, raw).ok()
}

/// A dataset of `length` placeholder slots; `None` for `length <= 0`.
pub fn make_dataset(length: i64) -> Option<TypedDataset> {
    let len = usize::try_from(length).ok()?;
    TypedDataset::new(len)
}

/// Copy `point` into `dataset` at `index`. Returns whether the write happened.
pub fn set_data_point(
    dataset: Option<&mut TypedDataset>,
    index: i64,
    point: Option<&DataPoint>,
) -> bool {
    let (Some(dataset), Some(point)) = (dataset, point) else {
        log::debug!("ignored write: missing dataset or point");
        return false;
    };
    match usize::try_from(index) {
        Ok(index) => dataset.set(index, point),
        Err(_) => {
            log::debug!("ignored write to negative index {index}");
            false
        }
    }
}

pub fn get_data_point(dataset: Option<&TypedDataset>, index: i64) -> Option<&DataPoint> {
    let index = usize::try_from(index).ok()?;
    dataset?.get(index)
}

pub fn release_dataset(dataset: Option<TypedDataset>) {
    if let Some(dataset) = dataset {
        dataset.release();
    }
}

pub fn filter_by_kind(dataset: Option<&TypedDataset>, kind: ValueKind) -> Option<TypedDataset> {
    dataset?.filter_by_kind(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_handles() {
        assert!(get_data_point(None, 0).is_none());
        assert!(filter_by_kind(None, ValueKind::Integer).is_none());
        assert!(!set_data_point(None, 0, None));
        release_dataset(None);
    }

    #[test]
    fn negative_lengths_and_indices() {
        assert!(make_dataset(0).is_none());
        assert!(make_dataset(-5).is_none());

        let mut ds = make_dataset(2);
        let point = make_data_point(ValueKind::Integer, RawValue::Integer(1));
        assert!(!set_data_point(ds.as_mut(), -1, point.as_ref()));
        assert!(get_data_point(ds.as_ref(), -1).is_none());
        assert!(set_data_point(ds.as_mut(), 1, point.as_ref()));
        assert_eq!(get_data_point(ds.as_ref(), 1).and_then(DataPoint::as_integer), Some(1));
        release_dataset(ds);
    }

    #[test]
    fn missing_point_is_ignored() {
        let mut ds = make_dataset(1);
        assert!(!set_data_point(ds.as_mut(), 0, None));
        assert!(get_data_point(ds.as_ref(), 0).is_none());
    }

    #[test]
    fn tagged_construction() {
        assert!(make_data_point_tagged(3, RawValue::Integer(1)).is_none());
        let point = make_data_point_tagged(2, RawValue::Text("hi")).unwrap();
        assert_eq!(point.as_text(), Some("hi"));
    }
}
