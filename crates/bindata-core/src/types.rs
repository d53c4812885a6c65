//! # Domain Types
//!
//! Card metadata returned by a BIN lookup.
//!
//! Every record here is an immutable value type created fresh from one
//! provider response and discarded after rendering. Almost every attribute
//! is optional: the provider omits whatever it does not know, and absence is
//! meaningful downstream (an absent boolean is *not* the same as `false` —
//! the formatter only prints fields that are present).
//!
//! Field names follow the provider's wire schema (`card_brand`, `bin_min`,
//! `pagos_bin_length`, …) so the model reads the same as the JSON it mirrors.

// ── Lookup outcome ───────────────────────────────────────────────────

/// Tagged outcome of a BIN lookup against the provider.
///
/// `NotFound` covers a 2xx response whose `card` object is missing or empty;
/// transport and decode failures are reported separately via
/// [`LookupError`](crate::error::LookupError).
#[derive(Debug, Clone, PartialEq)]
pub enum BinLookup {
    /// The provider returned a usable card record.
    Found(CardRecord),
    /// The provider answered, but had no data for this BIN.
    NotFound,
}

// ── Card record ──────────────────────────────────────────────────────

/// Root card metadata record for one BIN.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardRecord {
    /// Card brand (e.g. `"VISA"`).
    pub card_brand: Option<String>,
    /// Card type (wire field `type`), e.g. `"CREDIT"`.
    pub card_type: Option<String>,
    pub prepaid: Option<bool>,
    pub virtual_card: Option<bool>,
    pub funding_source: Option<String>,
    pub card_segment_type: Option<String>,
    pub combo_card: Option<String>,
    /// Lower bound of the BIN range this record covers.
    pub bin_min: Option<String>,
    /// Upper bound of the BIN range this record covers.
    pub bin_max: Option<String>,
    pub bin_length: Option<u32>,
    pub pagos_bin_length: Option<u32>,
    /// Whether the number is a PAN or a network token.
    pub pan_or_token: Option<String>,
    pub correlation_id: Option<String>,
    pub issuer_currency: Option<String>,
    pub multi_account_access_indicator: Option<String>,
    pub issuer_supports_tokenization: Option<bool>,
    /// Whether this BIN is shared between multiple issuers.
    pub shared_bin: Option<bool>,
    pub domestic_only: Option<bool>,
    pub gambling_blocked: Option<bool>,
    pub reloadable: Option<bool>,
    /// Level 2 interchange data support.
    pub level2: Option<bool>,
    /// Level 3 interchange data support.
    pub level3: Option<bool>,
    /// Account-level management support.
    pub alm: Option<bool>,
    pub account_updater: Option<bool>,
    pub number: Option<NumberInfo>,
    pub product: Option<ProductInfo>,
    pub bank: Option<BankInfo>,
    pub country: Option<CountryInfo>,
    pub authentication: Option<AuthenticationInfo>,
    pub cost: Option<CostInfo>,
    /// Co-badge networks, in provider order.
    pub additional_card_brands: Option<Vec<AdditionalBrand>>,
}

// ── Nested records ───────────────────────────────────────────────────

/// Card number attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberInfo {
    /// Full card number length in digits.
    pub length: Option<u32>,
}

/// Card product attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductInfo {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
}

/// Issuing bank attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BankInfo {
    pub name: Option<String>,
    /// Normalized display name without legal suffixes.
    pub clean_name: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
}

/// Issuing country attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountryInfo {
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2: Option<String>,
    /// ISO 3166-1 numeric code.
    pub numeric: Option<String>,
}

/// Cardholder authentication attributes.
///
/// Only constructed when the provider states `authentication_required`; a
/// payload that omits the flag yields an absent sub-record instead of a
/// guessed default.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationInfo {
    pub authentication_required: bool,
    /// Authentication scheme name (e.g. `"3DS"`).
    pub authentication_name: Option<String>,
}

/// Cost attributes. Carries the interchange chain when the provider
/// includes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostInfo {
    pub interchange: Option<InterchangeInfo>,
}

/// Interchange regulation and fee attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct InterchangeInfo {
    /// Whether the issuer is interchange-regulated. Missing on the wire
    /// means unregulated.
    pub regulated: bool,
    pub regulated_name: Option<String>,
    pub notes: Option<String>,
    /// Parsed but not rendered; retained for API consumers.
    pub domestic: Option<FeeSchedule>,
    pub inter: Option<FeeSchedule>,
    pub intra: Option<FeeSchedule>,
}

/// One interchange fee schedule (domestic, inter- or intra-regional).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeeSchedule {
    pub cap_region_shortname: Option<String>,
    pub cap_advalorem_amount: Option<String>,
    pub cap_type_name: Option<String>,
    pub cap_fixed_amount: Option<String>,
    pub cap_type_qualifier_currency: Option<String>,
    pub cap_type_qualifier_text: Option<String>,
    pub cap_type_qualifier_lower: Option<String>,
    pub cap_type_qualifier_upper: Option<String>,
}

/// A co-badge network carried on the same card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdditionalBrand {
    pub card_brand: Option<String>,
    /// BIN bounds for the co-badge; parsed but not rendered.
    pub bin_min: Option<String>,
    pub bin_max: Option<String>,
    pub card_brand_product: Option<String>,
    pub card_brand_bank_name: Option<String>,
    pub ecom_enabled: Option<bool>,
    pub billpay_enabled: Option<bool>,
}

// ── Tests ────────────────────────────────────────────────────────────
