//! Class declaration parsing.
//!
//! A declaration is the textual form `"Name"` or
//! `"Name < Base1, Base2, ..."`. Whitespace around the name and around
//! each base is ignored. Absence of a `<` clause means the class declares
//! no bases.

use classforge_core::RegistrationError;

/// A parsed class declaration: the class name plus its base names in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    bases: Vec<String>,
}

impl Declaration {
    /// Parse a declaration string.
    ///
    /// Fails with [`RegistrationError::MalformedDeclaration`] if the class
    /// name is empty or not an identifier, or if any base name in a
    /// present base clause is empty or not an identifier.
    pub fn parse(decl: &str) -> Result<Self, RegistrationError> {
        let malformed = |detail: &str| RegistrationError::MalformedDeclaration {
            decl: decl.to_string(),
            detail: detail.to_string(),
        };

        let (name_part, base_clause) = match decl.split_once('<') {
            Some((name, bases)) => (name, Some(bases)),
            None => (decl, None),
        };

        let name = name_part.trim();
        if name.is_empty() {
            return Err(malformed("empty class name"));
        }
        if !is_identifier(name) {
            return Err(malformed("class name is not an identifier"));
        }

        let mut bases = Vec::new();
        if let Some(clause) = base_clause {
            for base in clause.split(',') {
                let base = base.trim();
                if base.is_empty() {
                    return Err(malformed("empty base class name"));
                }
                if !is_identifier(base) {
                    return Err(malformed("base class name is not an identifier"));
                }
                bases.push(base.to_string());
            }
        }

        Ok(Self {
            name: name.to_string(),
            bases,
        })
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base names, left to right.
    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    /// Consume the declaration, yielding name and bases.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.name, self.bases)
    }
}

/// An identifier starts with a letter or underscore and continues with
/// letters, digits, or underscores.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_name() {
        let decl = Declaration::parse("Widget").unwrap();
        assert_eq!(decl.name(), "Widget");
        assert!(decl.bases().is_empty());
    }

    #[test]
    fn parse_trims_whitespace() {
        let decl = Declaration::parse("  Widget  ").unwrap();
        assert_eq!(decl.name(), "Widget");
    }

    #[test]
    fn parse_single_base() {
        let decl = Declaration::parse("Button < Widget").unwrap();
        assert_eq!(decl.name(), "Button");
        assert_eq!(decl.bases(), ["Widget"]);
    }

    #[test]
    fn parse_multiple_bases_keeps_order() {
        let decl = Declaration::parse("Sprite < Drawable , Updatable,Serializable").unwrap();
        assert_eq!(decl.bases(), ["Drawable", "Updatable", "Serializable"]);
    }

    #[test]
    fn parse_rejects_empty_name() {
        let err = Declaration::parse("  < Base").unwrap_err();
        assert!(matches!(err, RegistrationError::MalformedDeclaration { .. }));
        let err = Declaration::parse("").unwrap_err();
        assert!(matches!(err, RegistrationError::MalformedDeclaration { .. }));
    }

    #[test]
    fn parse_rejects_empty_base() {
        let err = Declaration::parse("D <").unwrap_err();
        assert!(matches!(err, RegistrationError::MalformedDeclaration { .. }));
        let err = Declaration::parse("D < A,, B").unwrap_err();
        assert!(matches!(err, RegistrationError::MalformedDeclaration { .. }));
        let err = Declaration::parse("D < A, ").unwrap_err();
        assert!(matches!(err, RegistrationError::MalformedDeclaration { .. }));
    }

    #[test]
    fn parse_rejects_non_identifiers() {
        assert!(Declaration::parse("1Widget").is_err());
        assert!(Declaration::parse("Wid get").is_err());
        assert!(Declaration::parse("D < Ba se").is_err());
        assert!(Declaration::parse("D < A < B").is_err());
    }

    #[test]
    fn underscores_are_identifiers() {
        let decl = Declaration::parse("_Hidden < _base_1").unwrap();
        assert_eq!(decl.name(), "_Hidden");
        assert_eq!(decl.bases(), ["_base_1"]);
    }
}
