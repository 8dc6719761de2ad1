use serde::{Deserialize, Serialize};

/// Order lifecycle status, stored and transmitted as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderStatus {
    Pending,
    Processing,
    Rejected,
    Completed,
}

impl OrderStatus {
    pub fn code(&self) -> i32 {
        match self {
            OrderStatus::Pending => 1,
            OrderStatus::Processing => 2,
            OrderStatus::Rejected => 3,
            OrderStatus::Completed => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Completed => "Completed",
        }
    }

    pub fn all() -> [OrderStatus; 4] {
        [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Rejected,
            OrderStatus::Completed,
        ]
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::all().into_iter().find(|s| i64::from(s.code()) == code)
    }

    /// Statuses whose order lines count as revenue
    pub fn counts_as_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Rejected)
    }
}

impl TryFrom<i64> for OrderStatus {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| {
            format!(
                "order_status must be one of: 1 (Pending), 2 (Processing), 3 (Rejected), 4 (Completed); got {}",
                code
            )
        })
    }
}

impl From<OrderStatus> for i64 {
    fn from(status: OrderStatus) -> Self {
        i64::from(status.code())
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_json() {
        let status: OrderStatus = serde_json::from_str("4").unwrap();
        assert_eq!(status, OrderStatus::Completed);
        assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "1");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = serde_json::from_str::<OrderStatus>("7").unwrap_err();
        assert!(err.to_string().contains("order_status must be one of"));
    }

    #[test]
    fn test_rejected_orders_do_not_count() {
        assert!(!OrderStatus::Rejected.counts_as_revenue());
        assert!(OrderStatus::Completed.counts_as_revenue());
    }
}
