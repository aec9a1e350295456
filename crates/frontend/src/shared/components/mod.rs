pub mod pagination_controls;
pub mod search_input;
pub mod stock_level_bar;
pub mod tab_bar;
pub mod ui;
