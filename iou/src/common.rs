pub use anyhow::{ensure, format_err, Result};
pub use approx::{AbsDiffEq, RelativeEq};
pub use bbox::{prelude::*, BoundingBox, Element};
pub use log::debug;
pub use num_traits::ToPrimitive;
pub use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};
