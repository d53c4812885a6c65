//! # Report Formatter
//!
//! Deterministic text rendering of a [`CardRecord`].
//!
//! ## Overview
//!
//! The formatter walks the record and emits an ordered sequence of labeled
//! sections, each headed by a title line and a dashed underline of the same
//! length, with one blank line between sections. A section only appears when
//! at least one of its fields is present, and every field line is gated on
//! that field being present — absent booleans print nothing, present
//! booleans print `Yes`/`No`.
//!
//! Rendering is a pure function of the record: equal records produce
//! byte-identical reports.

use std::fmt::Display;

use crate::types::{AdditionalBrand, CardRecord};

/// Fixed reply when there is no record to render.
pub const NO_BIN_DATA: &str = "No BIN data available";

/// Render a card record as a human-readable text report.
///
/// An absent record yields the fixed [`NO_BIN_DATA`] string.
#[must_use]
pub fn format_bin_data(card: Option<&CardRecord>) -> String {
    let Some(card) = card else {
        return NO_BIN_DATA.to_string();
    };

    let mut report = Report::default();
    report.section("Card Details", card_details(card));
    report.section("Product Information", product_information(card));
    report.section("Bank Information", bank_information(card));
    report.section("Country Information", country_information(card));
    report.section("Authentication", authentication(card));
    report.section("Technical Details", technical_details(card));
    report.section("Additional Features", additional_features(card));
    report.section("Currency & Access", currency_and_access(card));
    report.section("Additional Card Brands", additional_card_brands(card));
    report.section("Cost Information", cost_information(card));
    report.finish()
}

// ── Report assembly ──────────────────────────────────────────────────

/// Accumulates section lines; skips sections with no present fields.
#[derive(Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn section(&mut self, title: &str, fields: Vec<String>) {
        if fields.is_empty() {
            return;
        }
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let heading = format!("{title}:");
        let underline = "-".repeat(heading.len());
        self.lines.push(heading);
        self.lines.push(underline);
        self.lines.extend(fields);
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn push_value<T: Display>(lines: &mut Vec<String>, label: &str, value: Option<T>) {
    if let Some(value) = value {
        lines.push(format!("{label}: {value}"));
    }
}

fn push_flag(lines: &mut Vec<String>, label: &str, value: Option<bool>) {
    if let Some(value) = value {
        lines.push(format!("{label}: {}", yes_no(value)));
    }
}

// ── Sections ─────────────────────────────────────────────────────────

fn card_details(card: &CardRecord) -> Vec<String> {
    let mut lines = Vec::new();
    push_value(&mut lines, "Brand", card.card_brand.as_deref());
    push_value(&mut lines, "Type", card.card_type.as_deref());
    push_flag(&mut lines, "Prepaid", card.prepaid);
    push_flag(&mut lines, "Virtual Card", card.virtual_card);
    push_value(&mut lines, "Funding Source", card.funding_source.as_deref());
    push_value(&mut lines, "Card Segment Type", card.card_segment_type.as_deref());
    push_value(&mut lines, "Combo Card", card.combo_card.as_deref());
    lines
}

fn product_information(card: &CardRecord) -> Vec<String> {
    let Some(product) = card.product.as_ref() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    push_value(&mut lines, "Product", product.product_name.as_deref());
    push_value(&mut lines, "Product ID", product.product_id.as_deref());
    lines
}

fn bank_information(card: &CardRecord) -> Vec<String> {
    let Some(bank) = card.bank.as_ref() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    push_value(&mut lines, "Bank", bank.name.as_deref());
    push_value(&mut lines, "Clean Name", bank.clean_name.as_deref());
    push_value(&mut lines, "Phone", bank.phone.as_deref());
    push_value(&mut lines, "URL", bank.url.as_deref());
    lines
}

fn country_information(card: &CardRecord) -> Vec<String> {
    let Some(country) = card.country.as_ref() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    push_value(&mut lines, "Country", country.name.as_deref());
    push_value(&mut lines, "Country Code", country.alpha2.as_deref());
    push_value(&mut lines, "Numeric Code", country.numeric.as_deref());
    lines
}

fn authentication(card: &CardRecord) -> Vec<String> {
    let Some(auth) = card.authentication.as_ref() else {
        return Vec::new();
    };
    let mut lines =
        vec![format!("Authentication Required: {}", yes_no(auth.authentication_required))];
    push_value(&mut lines, "Authentication Name", auth.authentication_name.as_deref());
    lines
}

fn technical_details(card: &CardRecord) -> Vec<String> {
    let mut lines = Vec::new();
    // The range line needs both bounds; a lone bound renders nothing.
    if let (Some(min), Some(max)) = (card.bin_min.as_deref(), card.bin_max.as_deref()) {
        lines.push(format!("BIN Range: {min} - {max}"));
    }
    push_value(&mut lines, "BIN Length", card.bin_length);
    push_value(&mut lines, "Pagos BIN Length", card.pagos_bin_length);
    push_value(
        &mut lines,
        "Card Number Length",
        card.number.as_ref().and_then(|number| number.length),
    );
    push_value(&mut lines, "PAN or Token", card.pan_or_token.as_deref());
    push_value(&mut lines, "Correlation ID", card.correlation_id.as_deref());
    lines
}

fn additional_features(card: &CardRecord) -> Vec<String> {
    let mut lines = Vec::new();
    push_flag(&mut lines, "Level 2", card.level2);
    push_flag(&mut lines, "Level 3", card.level3);
    push_flag(&mut lines, "ALM", card.alm);
    push_flag(&mut lines, "Account Updater", card.account_updater);
    push_flag(&mut lines, "Domestic Only", card.domestic_only);
    push_flag(&mut lines, "Gambling Blocked", card.gambling_blocked);
    push_flag(&mut lines, "Reloadable", card.reloadable);
    push_flag(&mut lines, "Issuer Supports Tokenization", card.issuer_supports_tokenization);
    push_flag(&mut lines, "Shared BIN", card.shared_bin);
    lines
}

fn currency_and_access(card: &CardRecord) -> Vec<String> {
    let mut lines = Vec::new();
    push_value(&mut lines, "Issuer Currency", card.issuer_currency.as_deref());
    push_value(&mut lines, "Multi Account Access", card.multi_account_access_indicator.as_deref());
    lines
}

fn additional_card_brands(card: &CardRecord) -> Vec<String> {
    let Some(brands) = card.additional_card_brands.as_deref() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    for brand in brands {
        push_brand_block(&mut lines, brand);
    }
    lines
}

/// A nameless entry is skipped wholesale, sub-fields included.
fn push_brand_block(lines: &mut Vec<String>, brand: &AdditionalBrand) {
    let Some(name) = brand.card_brand.as_deref() else {
        return;
    };
    lines.push(format!("- {name}"));
    push_value(lines, "  Product", brand.card_brand_product.as_deref());
    push_value(lines, "  Bank", brand.card_brand_bank_name.as_deref());
    push_flag(lines, "  E-commerce Enabled", brand.ecom_enabled);
    push_flag(lines, "  Bill Pay Enabled", brand.billpay_enabled);
}

fn cost_information(card: &CardRecord) -> Vec<String> {
    let Some(interchange) = card.cost.as_ref().and_then(|cost| cost.interchange.as_ref()) else {
        return Vec::new();
    };
    let mut lines = vec![format!("Regulated: {}", yes_no(interchange.regulated))];
    push_value(&mut lines, "Regulated Name", interchange.regulated_name.as_deref());
    push_value(&mut lines, "Notes", interchange.notes.as_deref());
    // Fee schedules (domestic/inter/intra) are deliberately not rendered.
    lines
}

// ── Tests ────────────────────────────────────────────────────────────
