//! A fixed-size, in-memory container of typed data points.
//!
//! A [`TypedDataset`] holds a fixed number of [`DataPoint`] slots, each
//! tagged as integer, float or text. Points are copied in with
//! [`TypedDataset::set`], borrowed back with [`TypedDataset::get`], and a
//! dataset can be narrowed to one kind with [`TypedDataset::filter_by_kind`].
//!
//! ```
//! use typed_dataset::{DataPoint, RawValue, TypedDataset, ValueKind};
//!
//! let mut ds = TypedDataset::new(3).unwrap();
//! let point = DataPoint::try_new(ValueKind::Integer, RawValue::Integer(10)).unwrap();
//! assert!(ds.set(0, &point));
//! assert_eq!(ds.get(0).and_then(DataPoint::as_integer), Some(10));
//! ds.release();
//! ```

pub mod data;
pub mod error;

pub use data::dataset::TypedDataset;
pub use data::filter::FilterMode;
pub use data::handle::{
    filter_by_kind, get_data_point, make_data_point, make_data_point_tagged, make_dataset,
    release_dataset, set_data_point,
};
pub use data::model::{DataPoint, RawValue, Value, ValueKind};
pub use error::{DatasetError, Result};
