//! Row representation.

/// One line of a delimited file, split into its fields in order.
///
/// No arity is enforced; the two-column read checks its own requirement.
pub type Row = Vec<String>;
