pub mod order_status;
pub mod report_period;
