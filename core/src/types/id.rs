use nutype::nutype;

/// Identifier of an indexed graph element.
///
/// Zero is reserved by producers as "no value" and cannot be constructed.
#[nutype(
    new_unchecked,
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ElementId(u64);

#[cfg(test)]
mod tests;
