pub mod a101_inventory_product;
pub mod a102_product_batch;
pub mod a103_stock_movement;
pub mod a104_linked_invoice;
pub mod a105_stock_distribution;
