pub mod a001_brand;
pub mod a002_category;
pub mod a003_product;
pub mod a004_store;
pub mod a005_stock;
pub mod a006_customer;
pub mod a007_staff;
pub mod a008_order;
pub mod a009_order_item;
