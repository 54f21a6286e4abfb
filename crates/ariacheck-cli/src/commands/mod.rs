pub mod check;
pub mod known;
