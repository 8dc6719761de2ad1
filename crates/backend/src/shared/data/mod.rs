pub mod db;
pub mod integer_date;
pub mod seed;
