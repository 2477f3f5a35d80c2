pub mod dihybrid;
pub mod interactive;
pub mod monohybrid;
