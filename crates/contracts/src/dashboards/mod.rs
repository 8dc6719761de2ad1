pub mod d400_inventory_by_store;
pub mod d401_revenue_over_time;
pub mod d402_customer_pareto;
