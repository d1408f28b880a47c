/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod composite;
pub mod dimension;
pub mod error;
pub mod namespace;
pub mod prefix;
pub mod quantity;
pub mod registry;
pub mod scope;
pub mod summary;
pub mod unit;

pub mod imperial;
pub mod si;

pub use crate::unit::{Unit, UnitRecord};
pub use composite::Composite;
pub use dimension::{BaseDimension, Dimension};
pub use error::UnitError;
pub use namespace::Namespace;
pub use prefix::SiPrefix;
pub use quantity::Quantity;
pub use registry::Registry;
pub use scope::{UnitNames, UnitScope};
pub use summary::generate_unit_summary;

pub use imperial::{imperial, Imperial};
pub use si::{si, Si};
