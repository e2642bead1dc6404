//! Printable settlement report.
//!
//! Amounts are rounded to whole guaraníes and grouped with dots, the way
//! settlements are printed in Paraguay (`1.234.567 Gs.`).

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    ContractType, SettlementLine, TerminationCause, TerminationInput, TerminationResult,
};

const MISSING: &str = "—";

/// Formats an amount as whole guaraníes with dot thousands separators.
///
/// Halves round away from zero.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::format_guaranies;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_guaranies(Decimal::new(12345675, 1)), "1.234.568");
/// assert_eq!(format_guaranies(Decimal::from(999)), "999");
/// ```
pub fn format_guaranies(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "0".to_string();
    }

    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Spanish label for a termination cause.
pub fn cause_label(cause: TerminationCause) -> &'static str {
    match cause {
        TerminationCause::UnjustifiedDismissal => "Despido injustificado",
        TerminationCause::JustifiedDismissal => "Despido justificado",
        TerminationCause::JustifiedResignation => "Renuncia justificada",
        TerminationCause::VoluntaryResignation => "Renuncia voluntaria",
        TerminationCause::MutualAgreement => "Mutuo acuerdo",
        TerminationCause::WorkAbandonment => "Abandono de trabajo",
        TerminationCause::DeathInService => "Fallecimiento del trabajador",
        TerminationCause::FixedTermCompletion => "Fin de contrato a plazo",
    }
}

/// Spanish label for a contract type.
pub fn contract_label(contract_type: ContractType) -> &'static str {
    match contract_type {
        ContractType::Indefinite => "Indefinido",
        ContractType::FixedTerm => "Plazo fijo",
    }
}

/// A settlement rendered as plain text.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::{SettlementReport, calculate_settlement};
/// use severance_engine::models::{TerminationCause, TerminationInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = TerminationInput::new(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     TerminationCause::MutualAgreement,
///     Decimal::from(3_000_000),
///     Decimal::from(2_798_309),
/// );
/// let result = calculate_settlement(&input).unwrap();
/// let text = SettlementReport::new(&input, &result).to_string();
/// assert!(text.contains("Total Neto a cobrar"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SettlementReport<'a> {
    input: &'a TerminationInput,
    result: &'a TerminationResult,
}

impl<'a> SettlementReport<'a> {
    /// Creates a report for a scenario and its settlement.
    pub fn new(input: &'a TerminationInput, result: &'a TerminationResult) -> Self {
        Self { input, result }
    }

    fn write_line(f: &mut fmt::Formatter<'_>, line: &SettlementLine) -> fmt::Result {
        write!(f, "  {}", line.label)?;
        if !line.badges.is_empty() {
            write!(f, " [{}]", line.badges.join(", "))?;
        }
        writeln!(f, ": {} Gs.", format_guaranies(line.amount))
    }
}

impl fmt::Display for SettlementReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.input;
        let result = self.result;
        let worker = input.worker.clone().unwrap_or_default();
        let field = |value: &Option<String>| -> String {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(MISSING)
                .to_string()
        };

        writeln!(f, "LIQUIDACIÓN LABORAL")?;
        writeln!(f)?;
        writeln!(f, "Datos del trabajador")?;
        writeln!(f, "  Nombre: {}", field(&worker.name))?;
        writeln!(f, "  Cargo: {}", field(&worker.role))?;
        writeln!(f, "  Empresa: {}", field(&worker.employer))?;
        writeln!(f, "  Fecha de ingreso: {}", input.hire_date)?;
        writeln!(f, "  Fecha de salida: {}", input.termination_date)?;
        writeln!(f, "  Tipo de contrato: {}", contract_label(input.contract_type))?;
        writeln!(f, "  Causa: {}", cause_label(input.cause))?;
        writeln!(
            f,
            "  Antigüedad: {} años, {} meses ({} días)",
            result.seniority.years, result.seniority.months, result.seniority.total_days
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "Total Neto a cobrar: {} Gs.",
            format_guaranies(result.totals.total_net)
        )?;
        writeln!(
            f,
            "Total Bruto: {} Gs.",
            format_guaranies(result.totals.total_gross)
        )?;
        writeln!(
            f,
            "Deducciones: {} Gs.",
            format_guaranies(result.totals.total_deductions)
        )?;

        if let Some(warning) = &result.legality_warning {
            writeln!(f)?;
            writeln!(f, "Alerta legal: {}", warning.message)?;
        }
        if result.probation_period {
            writeln!(f)?;
            writeln!(f, "Periodo prueba: sin preaviso ni indemnización")?;
        }
        if result.tacit_renewal {
            writeln!(f)?;
            writeln!(
                f,
                "Renovación tácita: el contrato a plazo continuó tras su vencimiento"
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Detalle de ingresos")?;
        let mut any = false;
        for line in result.income_lines() {
            Self::write_line(f, line)?;
            any = true;
        }
        if !any {
            writeln!(f, "  Sin conceptos")?;
        }

        writeln!(f)?;
        writeln!(f, "Deducciones")?;
        let mut any = false;
        for line in result.deduction_lines() {
            Self::write_line(f, line)?;
            any = true;
        }
        if !any {
            writeln!(f, "  Sin deducciones")?;
        }

        writeln!(f)?;
        let articles = if result.articles.is_empty() {
            "N/D"
        } else {
            result.articles.as_str()
        };
        writeln!(f, "Artículos aplicados: {}", articles)
    }
}

/// Renders the printable report for a scenario and its settlement.
pub fn render_report(input: &TerminationInput, result: &TerminationResult) -> String {
    SettlementReport::new(input, result).to_string()
}
