pub mod calendar;
pub mod machine;
pub mod order;
