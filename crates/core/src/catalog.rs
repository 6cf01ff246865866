//! Project type and budget categories offered by the contact form.
//!
//! The server accepts any non-blank value for both fields; the catalog only
//! supplies display labels (for emails and the form itself). Unknown values
//! are shown verbatim.

use serde::Serialize;

/// One selectable option: the stored value and its French display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> CategoryOption {
    CategoryOption { value, label }
}

/// Project types offered by the form, in display order.
pub const PROJECT_TYPES: &[CategoryOption] = &[
    option("saas", "SaaS complet"),
    option("web-app", "Application web"),
    option("landing", "Landing page"),
    option("ecommerce", "Site e-commerce"),
    option("vitrine", "Site vitrine"),
    option("autre", "Autre"),
];

/// Budget ranges offered by the form, in display order.
pub const BUDGETS: &[CategoryOption] = &[
    option("150-250k", "150k - 250k FCFA"),
    option("250-500k", "250k - 500k FCFA"),
    option("500k-1m", "500k - 1M FCFA"),
    option("1m+", "Plus de 1M FCFA"),
    option("non-defini", "Non défini"),
];

fn label_in<'a>(options: &[CategoryOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map_or(value, |o| o.label)
}

/// Display label for a project type, or the value itself if it is not listed.
pub fn project_type_label(value: &str) -> &str {
    label_in(PROJECT_TYPES, value)
}

/// Display label for a budget range, or the value itself if it is not listed.
pub fn budget_label(value: &str) -> &str {
    label_in(BUDGETS, value)
}
