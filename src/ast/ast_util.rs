use super::ast::Loc;
use core::hash::{Hash, Hasher};

// Locations are carried along for diagnostics only and must not make two otherwise identical
// trees compare as different, e.g. a parsed document and the document parsed from its output.
impl PartialEq for Loc {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Loc {}

impl Hash for Loc {
    #[inline]
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

/// Checks whether a string matches the grammar of a GraphQL Name, `/[_A-Za-z][_0-9A-Za-z]*/`.
///
/// [Reference](https://spec.graphql.org/October2021/#Name)
#[inline]
pub fn is_valid_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b'_' | b'a'..=b'z' | b'A'..=b'Z') => {
            bytes.all(|byte| matches!(byte, b'_' | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'))
        }
        _ => false,
    }
}
