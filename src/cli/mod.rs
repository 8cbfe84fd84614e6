pub mod currencies;
pub mod history;
pub mod setup;
pub mod swap;
pub mod top;
pub mod ui;
