pub mod mock_inventory;
