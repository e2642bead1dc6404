//! Cause-to-concept eligibility table.

use crate::models::TerminationCause;

/// Citation used when a fixed-term contract is broken early.
pub const FIXED_TERM_BREACH_ARTICLES: &str =
    "Art. 229, 224, 244 (Indemnización por ruptura anticipada de plazo fijo)";

/// Which settlement concepts a termination cause gives rise to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptEligibility {
    /// Pay in lieu of notice.
    pub notice: bool,
    /// Seniority indemnity.
    pub indemnity: bool,
    /// Prorated vacation.
    pub vacation: bool,
    /// Proportional aguinaldo.
    pub bonus: bool,
    /// Statute citation reported with the settlement.
    pub articles: &'static str,
}

/// Looks up the eligible concepts for `cause`.
///
/// Vacation and bonus are payable under every cause; notice and indemnity
/// depend on it.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::concept_eligibility;
/// use severance_engine::models::TerminationCause;
///
/// let eligibility = concept_eligibility(TerminationCause::JustifiedDismissal);
/// assert!(!eligibility.indemnity);
/// assert!(eligibility.vacation);
/// ```
pub fn concept_eligibility(cause: TerminationCause) -> ConceptEligibility {
    let (notice, indemnity, articles) = match cause {
        TerminationCause::UnjustifiedDismissal => (true, true, "Arts. 87, 91, 224, 244"),
        TerminationCause::JustifiedDismissal => {
            (false, false, "Arts. 81, 224, 244 (Sin indemnización)")
        }
        TerminationCause::JustifiedResignation => (
            true,
            true,
            "Arts. 84, 224, 244 (Equivale a despido injustificado)",
        ),
        TerminationCause::VoluntaryResignation => (false, false, "Arts. 224, 244"),
        TerminationCause::MutualAgreement => (false, false, "Art. 78, 224, 244"),
        TerminationCause::WorkAbandonment => (false, false, "Arts. 81, 224, 244"),
        TerminationCause::DeathInService => (
            false,
            true,
            "Art. 79, 224, 244 (50% Indemnización para herederos)",
        ),
        TerminationCause::FixedTermCompletion => {
            (false, false, "Arts. 224, 244 (Fin de contrato a plazo)")
        }
    };

    ConceptEligibility {
        notice,
        indemnity,
        vacation: true,
        bonus: true,
        articles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CAUSES: [TerminationCause; 8] = [
        TerminationCause::UnjustifiedDismissal,
        TerminationCause::JustifiedDismissal,
        TerminationCause::JustifiedResignation,
        TerminationCause::VoluntaryResignation,
        TerminationCause::MutualAgreement,
        TerminationCause::WorkAbandonment,
        TerminationCause::DeathInService,
        TerminationCause::FixedTermCompletion,
    ];

    /// CE-001: vacation and bonus under every cause
    #[test]
    fn test_vacation_and_bonus_always_eligible() {
        for cause in ALL_CAUSES {
            let e = concept_eligibility(cause);
            assert!(e.vacation, "{:?}", cause);
            assert!(e.bonus, "{:?}", cause);
        }
    }

    /// CE-002: unjustified dismissal gives notice and indemnity
    #[test]
    fn test_unjustified_dismissal() {
        let e = concept_eligibility(TerminationCause::UnjustifiedDismissal);
        assert!(e.notice);
        assert!(e.indemnity);
        assert_eq!(e.articles, "Arts. 87, 91, 224, 244");
    }

    #[test]
    fn test_justified_resignation_equals_unjustified_dismissal() {
        let e = concept_eligibility(TerminationCause::JustifiedResignation);
        assert!(e.notice);
        assert!(e.indemnity);
        assert!(e.articles.contains("Equivale a despido injustificado"));
    }

    /// CE-003: justified dismissal citation omits indemnity articles
    #[test]
    fn test_justified_dismissal_has_no_indemnity() {
        let e = concept_eligibility(TerminationCause::JustifiedDismissal);
        assert!(!e.notice);
        assert!(!e.indemnity);
        assert!(!e.articles.contains("91"));
        assert!(e.articles.contains("Sin indemnización"));
    }

    #[test]
    fn test_death_in_service_gives_indemnity_without_notice() {
        let e = concept_eligibility(TerminationCause::DeathInService);
        assert!(!e.notice);
        assert!(e.indemnity);
        assert!(e.articles.starts_with("Art. 79"));
    }

    #[test]
    fn test_causes_without_notice_or_indemnity() {
        for cause in [
            TerminationCause::VoluntaryResignation,
            TerminationCause::MutualAgreement,
            TerminationCause::WorkAbandonment,
            TerminationCause::FixedTermCompletion,
        ] {
            let e = concept_eligibility(cause);
            assert!(!e.notice, "{:?}", cause);
            assert!(!e.indemnity, "{:?}", cause);
        }
    }

    #[test]
    fn test_every_citation_includes_vacation_and_bonus_articles() {
        for cause in ALL_CAUSES {
            let articles = concept_eligibility(cause).articles;
            assert!(articles.contains("224"), "{:?}", cause);
            assert!(articles.contains("244"), "{:?}", cause);
        }
    }
}
