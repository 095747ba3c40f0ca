//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity; two instances holding the same values are
/// interchangeable. In this workspace item names, status tiers and summaries
/// are value objects, while inventory records are entities keyed by name.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Summary { total_units: u64, unique_products: usize }
///
/// impl ValueObject for Summary {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
