//! Load-time checks for locale data.
//!
//! Static keys are verified here so that, at generation time, only dynamic
//! keys (such as a state abbreviation) can be missing.

use std::collections::HashSet;
use std::sync::LazyLock;

use fauxgen_core::template::{namespace_of, references};
use fauxgen_core::{LocaleTag, LocaleValue, NumericRange};
use regex::Regex;

use crate::store::LocaleStore;

/// Keys every locale must resolve, directly or through fallback.
pub const REQUIRED_KEYS: &[&str] = &[
    "name.first_name",
    "name.last_name",
    "name.name",
    "name.prefix",
    "name.suffix",
    "address.building_number",
    "address.city",
    "address.country",
    "address.country_code",
    "address.default_country",
    "address.full_address",
    "address.postcode",
    "address.secondary_address",
    "address.state",
    "address.state_abbr",
    "address.street_address",
    "address.street_name",
    "phone_number.formats",
    "cell_phone.formats",
    "id_number.invalid",
    "internet.domain_suffix",
    "internet.domain_word",
    "internet.free_email",
    "internet.safe_domain",
];

/// Digits in a zip code.
pub const ZIP_WIDTH: usize = 5;

/// NANP area code (NPA): no N11, middle digit never 9.
pub const NANP_AREA_CODE: &str = r"^(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9])$";
/// NANP central office (exchange) code (NXX): no N11.
pub const NANP_EXCHANGE_CODE: &str = r"^(?:[2-9]1[02-9]|[2-9][02-9]1|[2-9][02-9]{2})$";

static AREA_CODE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(NANP_AREA_CODE).ok());
static EXCHANGE_CODE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(NANP_EXCHANGE_CODE).ok());

const ZIP_RANGES_PREFIX: &str = "address.zip_ranges.";
const AREA_CODE_KEY: &str = "phone_number.area_code";
const EXCHANGE_CODE_KEY: &str = "phone_number.exchange_code";

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            IssueSeverity::Error => self.errors.push(issue),
            IssueSeverity::Warning => self.warnings.push(issue),
        }
    }

    /// Returns true when any issue carries `code`.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|issue| issue.code == code)
    }
}

/// Validate every loaded locale against its fallback chain.
pub fn validate_store(store: &LocaleStore) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !store.contains(store.default_locale()) {
        report.push(ValidationIssue::new(
            IssueSeverity::Error,
            "missing_default_locale",
            store.default_locale().as_str(),
            format!("default locale '{}' is not loaded", store.default_locale()),
            None,
        ));
    }

    let locales: Vec<LocaleTag> = store.locales().cloned().collect();
    for locale in &locales {
        validate_fallback(store, locale, &mut report);
        validate_required_keys(store, locale, &mut report);
        validate_leaves(store, locale, &mut report);
        validate_cycles(store, locale, &mut report);
    }

    report
}

fn validate_fallback(store: &LocaleStore, locale: &LocaleTag, report: &mut ValidationReport) {
    let Some((_, entry)) = store.entry(locale) else {
        return;
    };
    if let Some(fallback) = &entry.fallback
        && !store.contains(fallback)
    {
        report.push(ValidationIssue::new(
            IssueSeverity::Warning,
            "unknown_fallback",
            locale.as_str(),
            format!("fallback locale '{fallback}' is not loaded"),
            Some("lookups continue with the language parent and the default locale".to_string()),
        ));
    }
}

fn validate_required_keys(store: &LocaleStore, locale: &LocaleTag, report: &mut ValidationReport) {
    for key in REQUIRED_KEYS {
        match store.resolve(Some(locale), key) {
            Ok(LocaleValue::Table(_)) => report.push(ValidationIssue::new(
                IssueSeverity::Error,
                "missing_required_key",
                issue_path(locale, key),
                "required key resolves to a table, expected text or list",
                None,
            )),
            Ok(_) => {}
            Err(_) => report.push(ValidationIssue::new(
                IssueSeverity::Error,
                "missing_required_key",
                issue_path(locale, key),
                "required key is missing from the locale and its fallbacks",
                Some(format!("add '{key}' to the default locale")),
            )),
        }
    }
}

fn validate_leaves(store: &LocaleStore, locale: &LocaleTag, report: &mut ValidationReport) {
    let Some((_, entry)) = store.entry(locale) else {
        return;
    };

    entry.root.for_each_leaf("", &mut |key, value| {
        let candidates = value.candidates();
        if candidates.is_empty() {
            report.push(ValidationIssue::new(
                IssueSeverity::Warning,
                "empty_list",
                issue_path(locale, key),
                "list has no candidates",
                None,
            ));
            return;
        }

        if key.starts_with(ZIP_RANGES_PREFIX) {
            for raw in candidates {
                if let Err(err) = NumericRange::parse(raw, ZIP_WIDTH) {
                    report.push(ValidationIssue::new(
                        IssueSeverity::Error,
                        "invalid_zip_range",
                        issue_path(locale, key),
                        err.to_string(),
                        Some("use 'LOW-HIGH' with five-digit bounds".to_string()),
                    ));
                }
            }
            return;
        }

        let nanp = match key {
            AREA_CODE_KEY => Some(&*AREA_CODE_RE),
            EXCHANGE_CODE_KEY => Some(&*EXCHANGE_CODE_RE),
            _ => None,
        };
        if let Some(rule) = nanp {
            for code in candidates {
                let valid = rule.as_ref().is_some_and(|re| re.is_match(code));
                if !valid {
                    report.push(ValidationIssue::new(
                        IssueSeverity::Error,
                        "invalid_nanp_code",
                        issue_path(locale, key),
                        format!("'{code}' is not a valid NANP code"),
                        None,
                    ));
                }
            }
            return;
        }

        for template in candidates {
            let refs = match references(template, namespace_of(key)) {
                Ok(refs) => refs,
                Err(err) => {
                    report.push(ValidationIssue::new(
                        IssueSeverity::Error,
                        "invalid_template",
                        issue_path(locale, key),
                        err.to_string(),
                        None,
                    ));
                    continue;
                }
            };
            for reference in refs {
                let message = match store.resolve(Some(locale), &reference) {
                    Ok(LocaleValue::Table(_)) => format!("'{reference}' resolves to a table"),
                    Ok(_) => continue,
                    Err(_) => format!("'{reference}' does not resolve"),
                };
                report.push(ValidationIssue::new(
                    IssueSeverity::Error,
                    "unresolved_reference",
                    issue_path(locale, key),
                    message,
                    None,
                ));
            }
        }
    });
}

fn validate_cycles(store: &LocaleStore, locale: &LocaleTag, report: &mut ValidationReport) {
    let Some((_, entry)) = store.entry(locale) else {
        return;
    };

    let mut keys = Vec::new();
    entry
        .root
        .for_each_leaf("", &mut |key, _| keys.push(key.to_string()));

    let mut done = HashSet::new();
    for key in keys {
        let mut stack = Vec::new();
        if let Some(cycle) = find_cycle(store, locale, &key, &mut stack, &mut done) {
            report.push(ValidationIssue::new(
                IssueSeverity::Error,
                "reference_cycle",
                issue_path(locale, &key),
                cycle.join(" -> "),
                Some("template references must not loop back".to_string()),
            ));
            return;
        }
    }
}

fn find_cycle(
    store: &LocaleStore,
    locale: &LocaleTag,
    key: &str,
    stack: &mut Vec<String>,
    done: &mut HashSet<String>,
) -> Option<Vec<String>> {
    if done.contains(key) {
        return None;
    }
    if let Some(start) = stack.iter().position(|seen| seen == key) {
        let mut cycle = stack[start..].to_vec();
        cycle.push(key.to_string());
        return Some(cycle);
    }

    stack.push(key.to_string());
    if let Ok(value) = store.resolve(Some(locale), key) {
        for template in value.candidates() {
            let Ok(refs) = references(template, namespace_of(key)) else {
                continue;
            };
            for reference in refs {
                if let Some(cycle) = find_cycle(store, locale, &reference, stack, done) {
                    return Some(cycle);
                }
            }
        }
    }
    stack.pop();
    done.insert(key.to_string());
    None
}

fn issue_path(locale: &LocaleTag, key: &str) -> String {
    format!("{locale}/{key}")
}
