//! Procedural deadline (plazo) templates.
//!
//! A deadline template describes how long a procedural step may take,
//! either as free text ("10 días hábiles") or as structured fields. The
//! due-date calculator consumes the rendered text.

use serde::{Deserialize, Serialize};

/// Whether day-based durations count business or calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationKind {
    /// Skip weekends and holidays.
    #[default]
    #[serde(alias = "habiles")]
    Business,
    /// Count every calendar day.
    #[serde(alias = "corridos", alias = "calendario")]
    Calendar,
}

impl DurationKind {
    /// Interprets a stored label; anything but a business-day label means
    /// calendar days.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::models::DurationKind;
    ///
    /// assert_eq!(DurationKind::from_label("hábiles"), DurationKind::Business);
    /// assert_eq!(DurationKind::from_label("corridos"), DurationKind::Calendar);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "habiles" | "hábiles" | "business" => DurationKind::Business,
            _ => DurationKind::Calendar,
        }
    }
}

/// A stored deadline definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadlineTemplate {
    /// Procedural action the deadline applies to.
    pub action: Option<String>,
    /// Legal article establishing the deadline.
    pub article: Option<String>,
    /// Explicit free-text duration; wins over the structured fields.
    pub duration_text: Option<String>,
    /// Structured amount.
    pub number: Option<u32>,
    /// Structured unit ("días", "meses", "horas").
    pub unit: Option<String>,
    /// Stored duration kind label ("habiles", "corridos").
    pub kind: Option<String>,
}

/// Text shown when a template carries no duration at all.
pub const NO_DURATION_TEXT: &str = "Sin duracion";

impl DeadlineTemplate {
    /// Renders the duration text for this template.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::models::DeadlineTemplate;
    ///
    /// let template = DeadlineTemplate {
    ///     number: Some(5),
    ///     unit: Some("días".to_string()),
    ///     kind: Some("habiles".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(template.render_duration(), "5 días (habiles)");
    /// ```
    pub fn render_duration(&self) -> String {
        if let Some(explicit) = non_blank(self.duration_text.as_deref()) {
            return explicit.to_string();
        }

        let unit = non_blank(self.unit.as_deref());
        let kind = non_blank(self.kind.as_deref());

        match (self.number, unit) {
            (Some(number), Some(unit)) => match kind {
                Some(kind) => format!("{} {} ({})", number, unit, kind),
                None => format!("{} {}", number, unit),
            },
            (Some(number), None) => match kind {
                Some(kind) => format!("{} ({})", number, kind),
                None => number.to_string(),
            },
            (None, _) => NO_DURATION_TEXT.to_string(),
        }
    }

    /// Duration kind stored on the template, business days when unset.
    pub fn duration_kind(&self) -> DurationKind {
        non_blank(self.kind.as_deref())
            .map(DurationKind::from_label)
            .unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_text_wins() {
        let template = DeadlineTemplate {
            duration_text: Some("  3 días hábiles ".to_string()),
            number: Some(10),
            unit: Some("días".to_string()),
            ..Default::default()
        };
        assert_eq!(template.render_duration(), "3 días hábiles");
    }

    #[test]
    fn test_number_and_unit_without_kind() {
        let template = DeadlineTemplate {
            number: Some(2),
            unit: Some("meses".to_string()),
            ..Default::default()
        };
        assert_eq!(template.render_duration(), "2 meses");
    }

    #[test]
    fn test_number_with_kind_only() {
        let template = DeadlineTemplate {
            number: Some(6),
            kind: Some("corridos".to_string()),
            ..Default::default()
        };
        assert_eq!(template.render_duration(), "6 (corridos)");
    }

    #[test]
    fn test_number_alone() {
        let template = DeadlineTemplate {
            number: Some(6),
            unit: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(template.render_duration(), "6");
    }

    #[test]
    fn test_empty_template_has_no_duration() {
        let template = DeadlineTemplate {
            duration_text: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(template.render_duration(), NO_DURATION_TEXT);
    }

    #[test]
    fn test_duration_kind_defaults_to_business() {
        assert_eq!(
            DeadlineTemplate::default().duration_kind(),
            DurationKind::Business
        );
        let template = DeadlineTemplate {
            kind: Some("Corridos".to_string()),
            ..Default::default()
        };
        assert_eq!(template.duration_kind(), DurationKind::Calendar);
    }

    #[test]
    fn test_duration_kind_deserializes_spanish_aliases() {
        let kind: DurationKind = serde_json::from_str("\"habiles\"").unwrap();
        assert_eq!(kind, DurationKind::Business);
        let kind: DurationKind = serde_json::from_str("\"corridos\"").unwrap();
        assert_eq!(kind, DurationKind::Calendar);
        let kind: DurationKind = serde_json::from_str("\"calendar\"").unwrap();
        assert_eq!(kind, DurationKind::Calendar);
    }
}
