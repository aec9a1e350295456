pub mod components;
pub mod context;
pub mod data;
pub mod icons;
pub mod page_frame;
pub mod storage;
