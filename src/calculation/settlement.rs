//! Settlement orchestration.
//!
//! [`calculate_settlement`] validates a termination scenario and runs every
//! calculation step in order, collecting the per-concept amounts, the
//! itemized lines, the totals and the audit trace into a single
//! [`TerminationResult`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineLimits;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Concept, ContractType, Deductions, LegalityWarning,
    LegalityWarningKind, LineKind, Seniority, SettlementLine, SettlementTotals, TerminationInput,
    TerminationResult,
};

use super::bonus::{BONUS_ARTICLE, calculate_bonus};
use super::concepts::{ConceptEligibility, FIXED_TERM_BREACH_ARTICLES, concept_eligibility};
use super::deductions::{MISSING_NOTICE_ARTICLE, calculate_deductions};
use super::family_allowance::{FAMILY_ALLOWANCE_ARTICLE, calculate_family_allowance};
use super::indemnity::{
    INDEMNITY_ARTICLE, IndemnityBranch, MultiplierReason, STABILITY_YEARS, calculate_indemnity,
};
use super::notice::{NOTICE_ARTICLE, calculate_notice};
use super::overtime::{OVERTIME_ARTICLE, calculate_overtime};
use super::report::format_guaranies;
use super::seniority::calculate_seniority;
use super::social_security::{SOCIAL_SECURITY_ARTICLE, calculate_social_security};
use super::vacation::{VACATION_ARTICLE, calculate_vacation};
use super::validation::validate_input;
use super::wage_base::determine_daily_wage;

/// Advisory attached to the unjustified dismissal of a pregnant worker.
pub const PREGNANCY_WARNING: &str = "⚠️ DESPIDO NULO: La trabajadora embarazada tiene derecho a REINTEGRO. Este cálculo es solo si acepta la indemnización.";

/// Advisory attached to the unjustified dismissal of a worker with ten or
/// more years of service.
pub const STABILITY_WARNING: &str = "⚠️ ESTABILIDAD ESPECIAL: Trabajador con 10+ años tiene derecho a REINTEGRO. Este cálculo es solo si acepta la indemnización.";

/// Audit warning code for accrued vacation paid without the penalty.
pub const VACATION_PENALTY_NOT_APPLIED: &str = "VACATION_PENALTY_NOT_APPLIED";

/// Audit warning code for seniority close to the stability threshold.
pub const NEAR_STABILITY: &str = "NEAR_STABILITY";

/// Calculates the settlement for a termination scenario with the default
/// engine limits.
///
/// # Errors
///
/// Returns a validation error before any computation when the scenario is
/// invalid; see [`validate_input`](super::validate_input).
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_settlement;
/// use severance_engine::models::{TerminationCause, TerminationInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut input = TerminationInput::new(
///     NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     TerminationCause::UnjustifiedDismissal,
///     Decimal::ZERO,
///     Decimal::from(2_680_373),
/// );
/// input.last_6_months_wages = vec![Decimal::from(3_000_000); 6];
///
/// let result = calculate_settlement(&input).unwrap();
/// assert_eq!(result.daily_wage, Decimal::from(100_000));
/// assert_eq!(result.notice, Some(Decimal::from(6_000_000)));
/// assert_eq!(result.indemnity, Some(Decimal::from(12_000_000)));
/// assert_eq!(
///     result.totals.total_net,
///     result.totals.total_gross - result.totals.total_deductions
/// );
/// ```
pub fn calculate_settlement(input: &TerminationInput) -> EngineResult<TerminationResult> {
    calculate_settlement_with_limits(input, &EngineLimits::default())
}

/// Calculates the settlement using the probation period in `limits`.
pub fn calculate_settlement_with_limits(
    input: &TerminationInput,
    limits: &EngineLimits,
) -> EngineResult<TerminationResult> {
    validate_input(input)?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Seniority
    let seniority = calculate_seniority(input.hire_date, input.termination_date)?;
    steps.push(seniority_step(input, &seniority, step_number));
    step_number += 1;

    // Daily wage base
    let wage = determine_daily_wage(
        &input.last_6_months_wages,
        input.last_fixed_monthly_wage,
        step_number,
    );
    let daily_wage = wage.daily_wage;
    steps.push(wage.audit_step);
    step_number += 1;

    // Contract, eligibility and probation
    let (effective_contract_type, tacit_renewal) = detect_tacit_renewal(input);
    let eligibility = concept_eligibility(input.cause);
    let probation_period = seniority.total_days <= limits.probation_days;
    steps.push(eligibility_step(
        input,
        &eligibility,
        effective_contract_type,
        tacit_renewal,
        probation_period,
        step_number,
    ));
    step_number += 1;
    debug!(
        cause = input.cause.as_str(),
        total_days = seniority.total_days,
        probation_period,
        tacit_renewal,
        "Eligibility resolved"
    );

    let legality_warning = assess_legality(input, &seniority);

    // Notice
    let mut notice = None;
    if eligibility.notice && !probation_period && effective_contract_type == ContractType::Indefinite
    {
        let result = calculate_notice(&seniority, daily_wage, step_number);
        notice = Some(result.amount);
        steps.push(result.audit_step);
        step_number += 1;
    }

    // Indemnity
    let mut articles = eligibility.articles.to_string();
    let mut indemnity = None;
    let mut fixed_term_indemnity = None;
    let mut fixed_term_remaining_days = None;
    let mut indemnity_doubled = false;
    let mut employer_closure = false;
    let mut maternity_stability = false;
    let mut death_in_service = false;
    if eligibility.indemnity && !probation_period {
        let result = calculate_indemnity(
            input,
            &seniority,
            daily_wage,
            effective_contract_type,
            step_number,
        );
        match result.branch {
            IndemnityBranch::DeathInService => {
                indemnity = Some(result.amount);
                death_in_service = true;
            }
            IndemnityBranch::FixedTermBreach => {
                fixed_term_indemnity = Some(result.amount);
                fixed_term_remaining_days = result.remaining_days;
                articles = FIXED_TERM_BREACH_ARTICLES.to_string();
            }
            IndemnityBranch::Seniority => {
                indemnity = Some(result.amount);
                indemnity_doubled = result.has_multiplier(MultiplierReason::StabilityProtection);
                employer_closure = result.has_multiplier(MultiplierReason::EmployerClosure);
                maternity_stability =
                    input.maternity_stability && input.is_unjustified_dismissal();
            }
            IndemnityBranch::NotApplicable => {}
        }
        steps.push(result.audit_step);
        step_number += 1;
    }

    // Vacation
    let mut vacation = None;
    let mut vacation_doubled = false;
    if eligibility.vacation {
        let result = calculate_vacation(
            &seniority,
            daily_wage,
            input.prior_vacation_days_owed,
            input.apply_vacation_penalty,
            step_number,
        );
        vacation = Some(result.amount);
        vacation_doubled = result.doubled;
        steps.push(result.audit_step);
        step_number += 1;
    }
    if input.is_unjustified_dismissal()
        && input.accrued_unused_vacation
        && !input.apply_vacation_penalty
    {
        warnings.push(AuditWarning {
            code: VACATION_PENALTY_NOT_APPLIED.to_string(),
            message: "Vacaciones causadas no gozadas pagadas en forma simple: no se solicitó el pago doble por despido injustificado".to_string(),
            severity: "medium".to_string(),
        });
    }
    if input.near_stability {
        warnings.push(AuditWarning {
            code: NEAR_STABILITY.to_string(),
            message: format!(
                "Antigüedad de {} años y {} meses, próxima a la estabilidad de {} años",
                seniority.years, seniority.months, STABILITY_YEARS
            ),
            severity: "low".to_string(),
        });
    }

    // Bonus
    let mut bonus = None;
    if eligibility.bonus {
        let result = calculate_bonus(&input.annual_remunerations, step_number);
        bonus = Some(result.amount);
        steps.push(result.audit_step);
        step_number += 1;
    }

    // Wages owed
    let prior_year_bonus = (input.prior_year_bonus_owed > Decimal::ZERO)
        .then_some(input.prior_year_bonus_owed);
    let unpaid_days_wages = (input.unpaid_days_final_month > Decimal::ZERO).then(|| {
        input.last_fixed_monthly_wage / input.worker_type.daily_divisor()
            * input.unpaid_days_final_month
    });
    let worker_type = unpaid_days_wages.map(|_| input.worker_type);
    let pending_wages = input.pending_wages;
    steps.push(wages_owed_step(
        input,
        prior_year_bonus,
        unpaid_days_wages,
        step_number,
    ));
    step_number += 1;

    // Overtime
    let overtime = calculate_overtime(input.last_fixed_monthly_wage, &input.overtime, step_number);
    steps.push(overtime.audit_step);
    step_number += 1;
    let overtime = overtime.breakdown;

    // Family allowance
    let family = calculate_family_allowance(
        input.last_fixed_monthly_wage,
        input.minimum_wage,
        input.dependent_children,
        step_number,
    );
    steps.push(family.audit_step);
    step_number += 1;
    let family_allowance = family.allowance;

    // Deductions
    let deductions_result = calculate_deductions(input, &seniority, daily_wage, step_number);
    steps.push(deductions_result.audit_step);
    step_number += 1;

    // Social security
    let social = calculate_social_security(
        input.last_fixed_monthly_wage,
        overtime.total,
        input.social_security_enrolled,
        input.domestic_regime,
        seniority.total_months(),
        step_number,
    );
    steps.push(social.audit_step);

    let deductions = Deductions {
        missing_notice: deductions_result.missing_notice,
        advances: deductions_result.advances,
        social_security: social.contributions.worker_share,
    };

    let mut lines = Vec::new();

    // Income lines
    if let Some(amount) = indemnity {
        let mut badges = Vec::new();
        if indemnity_doubled {
            badges.push("Doble".to_string());
        }
        if employer_closure {
            badges.push("Cierre".to_string());
        }
        if death_in_service {
            badges.push("50% herederos".to_string());
        }
        let article = if death_in_service {
            "Art. 79"
        } else {
            INDEMNITY_ARTICLE
        };
        lines.push(income(Concept::Indemnity, "Indemnización", amount, badges, Some(article)));
    }
    if let Some(amount) = fixed_term_indemnity {
        let badges = fixed_term_remaining_days
            .map(|days| vec![format!("{} días restantes", days)])
            .unwrap_or_default();
        lines.push(income(
            Concept::FixedTermIndemnity,
            "Indemnización por ruptura de plazo fijo",
            amount,
            badges,
            Some("Art. 229"),
        ));
    }
    if let Some(amount) = notice {
        lines.push(income(Concept::Notice, "Preaviso", amount, vec![], Some(NOTICE_ARTICLE)));
    }
    if let Some(amount) = vacation {
        let badges = if vacation_doubled {
            vec!["Doble".to_string()]
        } else {
            vec![]
        };
        lines.push(income(
            Concept::Vacation,
            "Vacaciones",
            amount,
            badges,
            Some(VACATION_ARTICLE),
        ));
    }
    if let Some(amount) = bonus {
        lines.push(income(Concept::Bonus, "Aguinaldo", amount, vec![], Some(BONUS_ARTICLE)));
    }
    if let Some(amount) = prior_year_bonus {
        lines.push(income(
            Concept::PriorYearBonus,
            "Aguinaldo pendiente año anterior",
            amount,
            vec![],
            Some(BONUS_ARTICLE),
        ));
    }
    if let Some(amount) = unpaid_days_wages {
        lines.push(income(
            Concept::UnpaidDays,
            "Salario días trabajados",
            amount,
            vec![],
            None,
        ));
    }
    if pending_wages > Decimal::ZERO {
        lines.push(income(
            Concept::PendingWages,
            "Conceptos pendientes",
            pending_wages,
            vec![],
            None,
        ));
    }
    if overtime.total > Decimal::ZERO {
        let parts = [
            ("Diurnas", overtime.day),
            ("Nocturnas", overtime.night),
            ("Feriados", overtime.holiday),
            ("Nocturnas regulares", overtime.regular_night),
        ];
        let badges = parts
            .iter()
            .filter(|(_, amount)| *amount > Decimal::ZERO)
            .map(|(label, amount)| format!("{} {}", label, format_guaranies(*amount)))
            .collect();
        lines.push(income(
            Concept::Overtime,
            "Horas extras y recargos",
            overtime.total,
            badges,
            Some(OVERTIME_ARTICLE),
        ));
    }
    if family_allowance.amount > Decimal::ZERO {
        lines.push(income(
            Concept::FamilyAllowance,
            "Bonificación familiar",
            family_allowance.amount,
            vec![format!("Hijos: {}", family_allowance.children_applied)],
            Some(FAMILY_ALLOWANCE_ARTICLE),
        ));
    }
    if let Some(amount) = social.retroactive_claim {
        lines.push(income(
            Concept::SocialSecurityClaim,
            "Reclamo IPS retroactivo (empleador)",
            amount,
            vec![],
            Some(SOCIAL_SECURITY_ARTICLE),
        ));
    }

    // Deduction lines
    if let Some(amount) = deductions.missing_notice {
        lines.push(deduction(
            Concept::MissingNotice,
            "Descuento por falta de preaviso (Art. 90)",
            amount,
            Some(MISSING_NOTICE_ARTICLE),
        ));
    }
    if let Some(amount) = deductions.advances {
        lines.push(deduction(Concept::Advances, "Anticipos/Préstamos", amount, None));
    }
    if deductions.social_security > Decimal::ZERO {
        lines.push(deduction(
            Concept::SocialSecurityContribution,
            "Aporte IPS trabajador",
            deductions.social_security,
            Some(SOCIAL_SECURITY_ARTICLE),
        ));
    }

    let totals = calculate_totals(&lines);
    debug!(
        total_gross = %totals.total_gross,
        total_deductions = %totals.total_deductions,
        total_net = %totals.total_net,
        lines = lines.len(),
        "Settlement calculated"
    );

    Ok(TerminationResult {
        daily_wage,
        daily_wage_source: wage.source,
        monthly_wage_equivalent: wage.monthly_wage_equivalent,
        seniority,
        effective_contract_type,
        tacit_renewal,
        probation_period,
        articles,
        notice,
        indemnity,
        indemnity_doubled,
        employer_closure,
        maternity_stability,
        near_stability: input.near_stability,
        death_in_service,
        fixed_term_indemnity,
        fixed_term_remaining_days,
        vacation,
        vacation_doubled,
        bonus,
        prior_year_bonus,
        unpaid_days_wages,
        worker_type,
        pending_wages,
        overtime,
        family_allowance,
        social_security: social.contributions,
        social_security_retroactive_claim: social.retroactive_claim,
        deductions,
        legality_warning,
        lines,
        totals,
        audit_trace: AuditTrace { steps, warnings },
    })
}

/// A fixed-term contract that ran past its end date becomes indefinite.
///
/// Returns the effective contract type and whether tacit renewal happened.
pub fn detect_tacit_renewal(input: &TerminationInput) -> (ContractType, bool) {
    match (input.contract_type, input.contract_end_date) {
        (ContractType::FixedTerm, Some(end)) if input.termination_date > end => {
            (ContractType::Indefinite, true)
        }
        (contract_type, _) => (contract_type, false),
    }
}

/// Returns the legality advisory for an unjustified dismissal, if any.
///
/// Ten-year stability takes precedence over maternity stability when both
/// apply.
pub fn assess_legality(input: &TerminationInput, seniority: &Seniority) -> Option<LegalityWarning> {
    if !input.is_unjustified_dismissal() {
        return None;
    }

    if seniority.years >= STABILITY_YEARS {
        Some(LegalityWarning {
            kind: LegalityWarningKind::Stability10Years,
            message: STABILITY_WARNING.to_string(),
        })
    } else if input.maternity_stability {
        Some(LegalityWarning {
            kind: LegalityWarningKind::Pregnancy,
            message: PREGNANCY_WARNING.to_string(),
        })
    } else {
        None
    }
}

/// Sums the lines into gross, deductions and net.
pub fn calculate_totals(lines: &[SettlementLine]) -> SettlementTotals {
    let total_gross: Decimal = lines
        .iter()
        .filter(|l| l.kind == LineKind::Income)
        .map(|l| l.amount)
        .sum();
    let total_deductions: Decimal = lines
        .iter()
        .filter(|l| l.kind == LineKind::Deduction)
        .map(|l| l.amount)
        .sum();

    SettlementTotals {
        total_gross,
        total_deductions,
        total_net: total_gross - total_deductions,
    }
}

fn income(
    concept: Concept,
    label: &str,
    amount: Decimal,
    badges: Vec<String>,
    article_ref: Option<&str>,
) -> SettlementLine {
    SettlementLine {
        kind: LineKind::Income,
        concept,
        label: label.to_string(),
        amount,
        badges,
        article_ref: article_ref.map(str::to_string),
    }
}

fn deduction(
    concept: Concept,
    label: &str,
    amount: Decimal,
    article_ref: Option<&str>,
) -> SettlementLine {
    SettlementLine {
        kind: LineKind::Deduction,
        concept,
        label: label.to_string(),
        amount,
        badges: vec![],
        article_ref: article_ref.map(str::to_string),
    }
}

fn seniority_step(input: &TerminationInput, seniority: &Seniority, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "seniority".to_string(),
        rule_name: "Seniority".to_string(),
        article_ref: "Art. 91".to_string(),
        input: serde_json::json!({
            "hire_date": input.hire_date.to_string(),
            "termination_date": input.termination_date.to_string()
        }),
        output: serde_json::json!({
            "years": seniority.years,
            "months": seniority.months,
            "total_days": seniority.total_days,
            "days_since_anniversary": seniority.days_since_anniversary
        }),
        reasoning: format!(
            "{} years {} months ({} days), {} days since last anniversary",
            seniority.years, seniority.months, seniority.total_days, seniority.days_since_anniversary
        ),
    }
}

fn eligibility_step(
    input: &TerminationInput,
    eligibility: &ConceptEligibility,
    effective_contract_type: ContractType,
    tacit_renewal: bool,
    probation_period: bool,
    step_number: u32,
) -> AuditStep {
    let contract_str = match effective_contract_type {
        ContractType::Indefinite => "indefinite",
        ContractType::FixedTerm => "fixed_term",
    };

    let mut reasoning = format!(
        "Cause {}: notice {}, indemnity {}, vacation {}, bonus {}",
        input.cause.as_str(),
        eligibility.notice,
        eligibility.indemnity,
        eligibility.vacation,
        eligibility.bonus
    );
    if tacit_renewal {
        reasoning.push_str("; fixed-term contract continued past its end date, treated as indefinite");
    }
    if probation_period {
        reasoning.push_str("; within probation period, notice and indemnity suppressed");
    }

    AuditStep {
        step_number,
        rule_id: "concept_eligibility".to_string(),
        rule_name: "Concept Eligibility".to_string(),
        article_ref: eligibility.articles.to_string(),
        input: serde_json::json!({
            "cause": input.cause.as_str(),
            "contract_end_date": input.contract_end_date.map(|d| d.to_string())
        }),
        output: serde_json::json!({
            "notice": eligibility.notice,
            "indemnity": eligibility.indemnity,
            "vacation": eligibility.vacation,
            "bonus": eligibility.bonus,
            "effective_contract_type": contract_str,
            "tacit_renewal": tacit_renewal,
            "probation_period": probation_period
        }),
        reasoning,
    }
}

fn wages_owed_step(
    input: &TerminationInput,
    prior_year_bonus: Option<Decimal>,
    unpaid_days_wages: Option<Decimal>,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "wages_owed".to_string(),
        rule_name: "Wages Owed".to_string(),
        article_ref: BONUS_ARTICLE.to_string(),
        input: serde_json::json!({
            "prior_year_bonus_owed": input.prior_year_bonus_owed.normalize().to_string(),
            "unpaid_days_final_month": input.unpaid_days_final_month.normalize().to_string(),
            "daily_divisor": input.worker_type.daily_divisor().to_string(),
            "pending_wages": input.pending_wages.normalize().to_string()
        }),
        output: serde_json::json!({
            "prior_year_bonus": prior_year_bonus.map(|b| b.round_dp(2).to_string()),
            "unpaid_days_wages": unpaid_days_wages.map(|w| w.round_dp(2).to_string()),
            "pending_wages": input.pending_wages.round_dp(2).to_string()
        }),
        reasoning: format!(
            "Unpaid days at monthly wage / {}, prior-year bonus and pending wages added verbatim",
            input.worker_type.daily_divisor()
        ),
    }
}
