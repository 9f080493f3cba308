pub mod catalog;
pub mod countdown;
pub mod currency;
pub mod proposal;
