use serde::{Deserialize, Serialize};

/// Represents a user identifier (Firebase UID).
/// Used to isolate pantry data between owners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves an owner from a raw identity, `None` when it is blank.
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|id| !id.is_empty())
            .map(Self::new)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    #[error("quantity.malformed")]
    Malformed(String),
    #[error("quantity.not_positive")]
    NotPositive,
    #[error("quantity.overflow")]
    Overflow,
}

/// A strictly positive, finite amount of a product.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Quantity(f64);

impl Quantity {
    pub fn new(value: f64) -> Result<Self, QuantityError> {
        if !value.is_finite() {
            return Err(QuantityError::Malformed(value.to_string()));
        }
        if value <= 0.0 {
            return Err(QuantityError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Parses user input, accepting either `,` or `.` as decimal separator.
    ///
    /// `"2,5"` and `"2.5"` are both 2.5. Input mixing both separators, blank input
    /// and anything that is not a finite number is rejected.
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || (trimmed.contains(',') && trimmed.contains('.')) {
            return Err(QuantityError::Malformed(input.to_string()));
        }

        let value: f64 = trimmed
            .replace(',', ".")
            .parse()
            .map_err(|_| QuantityError::Malformed(input.to_string()))?;

        Self::new(value)
    }

    /// Constructor for amounts already persisted in the repository (no validation).
    pub fn from_repository(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Adds two quantities, failing when the sum is no longer finite.
    pub fn checked_add(self, other: Quantity) -> Result<Quantity, QuantityError> {
        let sum = self.0 + other.0;
        if !sum.is_finite() {
            return Err(QuantityError::Overflow);
        }
        Ok(Quantity(sum))
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_string() {
        let user_id = UserId::new("firebase-uid-123".to_string());
        assert_eq!(user_id.as_str(), "firebase-uid-123");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("test-user");
        assert_eq!(format!("{}", user_id), "test-user");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        let user_id_1 = UserId::new("same-user");
        let user_id_2 = UserId::new("same-user");
        let user_id_3 = UserId::new("different-user");

        assert_eq!(user_id_1, user_id_2);
        assert_ne!(user_id_1, user_id_3);
    }

    #[test]
    fn should_resolve_owner_only_when_identity_present() {
        assert_eq!(UserId::resolve(Some(" uid-1 ")), Some(UserId::new("uid-1")));
        assert_eq!(UserId::resolve(Some("   ")), None);
        assert_eq!(UserId::resolve(None), None);
    }

    #[test]
    fn should_parse_comma_and_dot_separators_to_same_value() {
        let with_comma = Quantity::parse("2,5").unwrap();
        let with_dot = Quantity::parse("2.5").unwrap();

        assert_eq!(with_comma, with_dot);
        assert_eq!(with_comma.value(), 2.5);
    }

    #[test]
    fn should_parse_whole_numbers_with_surrounding_whitespace() {
        assert_eq!(Quantity::parse(" 400 ").unwrap().value(), 400.0);
    }

    #[test]
    fn should_reject_malformed_quantity_instead_of_defaulting() {
        for input in ["", "   ", "abc", "1,000.5", "2,,5", "inf", "NaN"] {
            let result = Quantity::parse(input);
            assert!(
                matches!(result, Err(QuantityError::Malformed(_))),
                "expected {input:?} to be malformed"
            );
        }
    }

    #[test]
    fn should_reject_zero_and_negative_quantities() {
        assert_eq!(Quantity::parse("0"), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::parse("-1,5"), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::new(-3.0), Err(QuantityError::NotPositive));
    }

    #[test]
    fn should_add_quantities() {
        let total = Quantity::new(300.0)
            .unwrap()
            .checked_add(Quantity::new(400.0).unwrap())
            .unwrap();

        assert_eq!(total.value(), 700.0);
    }

    #[test]
    fn should_reject_sum_that_overflows() {
        let huge = Quantity::parse("1e308").unwrap();

        assert_eq!(huge.checked_add(huge), Err(QuantityError::Overflow));
    }
}
