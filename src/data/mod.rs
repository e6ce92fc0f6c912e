//! Data layer: value types, the dataset, filtering, and the handle surface.
//!
//! Architecture:
//! ```text
//!   RawValue (borrowed)
//!        │  deep copy
//!        ▼
//!   ┌───────────┐
//!   │ DataPoint │  kind tag + owned Value
//!   └───────────┘
//!        │  set / get
//!        ▼
//!   ┌──────────────┐
//!   │ TypedDataset │  Box<[DataPoint]>, fixed length
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  same-length dataset of one kind
//!   └──────────┘
//! ```

pub mod dataset;
pub mod filter;
pub mod handle;
pub mod model;
