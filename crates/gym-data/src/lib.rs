
// Dates and billing cycles
pub mod datetime;
pub use datetime::{CycleMonth, CycleMonthError};

// Models
mod members;
pub use members::*;

mod validation;
pub use validation::*;

// Derived views
pub mod view;
pub use view::{compute_stats, filter_by_status, search, select, MemberView, Stats, StatusFilter};
