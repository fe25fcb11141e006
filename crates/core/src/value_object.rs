//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two separately constructed instances holding the same
//! values are interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (same values means equal)
/// - **Entity**: has identity (same id means the same entity)
///
/// An account holder's position (`owner` + `balance`) is modelled as a value
/// object; the bank that registers it is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Position {
///     owner: String,
///     balance: BigDecimal,
/// }
///
/// impl ValueObject for Position {}
///
/// let a = Position { owner: "John Doe".into(), balance: BigDecimal::from(10) };
/// let b = Position { owner: "John Doe".into(), balance: BigDecimal::from(10) };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
