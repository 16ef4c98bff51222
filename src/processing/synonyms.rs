//! Static synonym resolution for skill terms

use crate::config::LanguageProfile;
use std::collections::HashMap;

/// Bidirectional lookup over a static canonical -> alternates table.
/// Two terms are synonymous if they are equal, one is a canonical key whose
/// set contains the other, or both live in the same set. No fuzzy matching.
pub struct SynonymResolver {
    table: HashMap<String, Vec<String>>,
}

impl SynonymResolver {
    pub fn new(profile: &LanguageProfile) -> Self {
        Self {
            table: profile.synonyms.clone(),
        }
    }

    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        self.table.iter().any(|(canonical, alternates)| {
            let in_group =
                |term: &str| term == canonical || alternates.iter().any(|alt| alt == term);
            in_group(a) && in_group(b)
        })
    }

    /// All surface forms of the group `term` belongs to (canonical first),
    /// or `None` if the term is not in the table.
    pub fn surface_forms(&self, term: &str) -> Option<Vec<&str>> {
        self.table.iter().find_map(|(canonical, alternates)| {
            if canonical == term || alternates.iter().any(|alt| alt == term) {
                let mut forms = vec![canonical.as_str()];
                forms.extend(alternates.iter().map(|alt| alt.as_str()));
                Some(forms)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn resolver() -> SynonymResolver {
        SynonymResolver::new(&Config::default().language)
    }

    #[test]
    fn test_equal_terms() {
        assert!(resolver().are_synonyms("python", "python"));
    }

    #[test]
    fn test_canonical_to_alternate() {
        let r = resolver();
        assert!(r.are_synonyms("cloud", "aws"));
        assert!(r.are_synonyms("aws", "cloud"));
    }

    #[test]
    fn test_co_members() {
        assert!(resolver().are_synonyms("aws", "azure"));
    }

    #[test]
    fn test_unrelated_terms() {
        assert!(!resolver().are_synonyms("python", "aws"));
    }

    #[test]
    fn test_surface_forms() {
        let r = resolver();
        let forms = r.surface_forms("postgres").expect("postgres is known");
        assert!(forms.contains(&"sql"));
        assert!(forms.contains(&"mysql"));
        assert!(r.surface_forms("cobol").is_none());
    }
}
