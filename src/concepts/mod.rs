pub mod isl;
pub mod path;
pub mod switch_id;
