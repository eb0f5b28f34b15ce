pub use num_traits::{Num, NumCast, ToPrimitive};
pub use std::fmt::{self, Display, Formatter};
