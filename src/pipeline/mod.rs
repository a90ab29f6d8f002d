// Category pipeline — the fixed table of skill categories and the driver
// that runs every category for one job type.

pub mod categories;
pub mod run;
