pub mod evaluate;
pub mod family;
pub mod show;
