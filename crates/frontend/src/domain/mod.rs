pub mod a100_items;
pub mod a101_inventory_product;
