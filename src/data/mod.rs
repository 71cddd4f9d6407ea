/// Data layer: LAS reading, the log table, and the user's selection.
///
/// Architecture:
/// ```text
///   uploaded .las bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  UTF-8 decode → las::parse
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ LogTable  │  depth index + curves (file order)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ selection  │  CurveSelection + DepthBounds
///   └───────────┘
/// ```

pub mod las;
pub mod loader;
pub mod model;
pub mod selection;

#[cfg(test)]
pub(crate) mod fixtures;
