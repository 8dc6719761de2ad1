/// Trait implemented by every aggregate root of the store schema.
///
/// Carries the human readable name that API messages are built from.
pub trait AggregateRoot {
    /// Singular human readable name (e.g. "Product")
    fn element_name() -> &'static str;

    /// Message for a lookup that found nothing
    fn not_found_message() -> String {
        format!("{} not found", Self::element_name())
    }

    /// Message for a referenced row that does not exist
    fn missing_reference_message(id: impl std::fmt::Display) -> String {
        format!("{} with ID '{}' does not exist.", Self::element_name(), id)
    }

    /// Message for an insert whose key is already taken
    fn duplicate_message(key_field: &str, id: impl std::fmt::Display) -> String {
        format!(
            "{} with {} '{}' already exists.",
            Self::element_name(),
            key_field,
            id
        )
    }

    /// Message returned by a successful delete
    fn deleted_message(label: &str, id: impl std::fmt::Display) -> String {
        format!(
            "{} {} (ID: {}) was deleted successfully.",
            Self::element_name(),
            label,
            id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Wheel;

    impl AggregateRoot for Wheel {
        fn element_name() -> &'static str {
            "Wheel"
        }
    }

    #[test]
    fn test_messages_use_element_name() {
        assert_eq!(Wheel::not_found_message(), "Wheel not found");
        assert_eq!(
            Wheel::missing_reference_message(7),
            "Wheel with ID '7' does not exist."
        );
        assert_eq!(
            Wheel::duplicate_message("wheel_id", 7),
            "Wheel with wheel_id '7' already exists."
        );
        assert_eq!(
            Wheel::deleted_message("Front", 7),
            "Wheel Front (ID: 7) was deleted successfully."
        );
    }
}
