//! Wire schema for the Parrot `/bins` response and its mapping into the
//! domain model.
//!
//! Every wire field is optional: the parse boundary never fails on a missing
//! field. The mapping applies the provider's sub-object semantics — an
//! absent or empty JSON sub-object becomes an absent sub-record, the
//! cost/interchange chain is only built level by level where the payload
//! actually carries it, `regulated` defaults to `false`, and a missing
//! `authentication_required` drops the whole authentication sub-record
//! rather than inventing a value for it.

use bindata_core::{
    error::LookupError,
    types::{
        AdditionalBrand, AuthenticationInfo, BankInfo, BinLookup, CardRecord, CostInfo,
        CountryInfo, FeeSchedule, InterchangeInfo, NumberInfo, ProductInfo,
    },
};
use serde::Deserialize;

// ── Parsing ──────────────────────────────────────────────────────────

/// Parse a `/bins` response body into a lookup outcome.
///
/// A missing or empty `card` object is a well-formed "no data" answer, not
/// an error.
pub(crate) fn parse_body(body: &str) -> Result<BinLookup, LookupError> {
    let response: RawResponse = serde_json::from_str(body)
        .map_err(|err| LookupError::MalformedPayload(err.to_string()))?;

    let Some(card) = response.card.filter(|fields| !fields.is_empty()) else {
        return Ok(BinLookup::NotFound);
    };

    let raw: RawCard = serde_json::from_value(serde_json::Value::Object(card))
        .map_err(|err| LookupError::MalformedPayload(err.to_string()))?;

    Ok(BinLookup::Found(map_card(raw)))
}

// ── Wire DTOs ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawResponse {
    // Kept as a raw map first so an empty `card` object can be told apart
    // from a populated one before field extraction.
    card: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCard {
    number: Option<RawNumber>,
    bin_length: Option<u32>,
    pagos_bin_length: Option<u32>,
    bin_min: Option<String>,
    bin_max: Option<String>,
    pan_or_token: Option<String>,
    virtual_card: Option<bool>,
    level2: Option<bool>,
    level3: Option<bool>,
    alm: Option<bool>,
    account_updater: Option<bool>,
    domestic_only: Option<bool>,
    gambling_blocked: Option<bool>,
    issuer_currency: Option<String>,
    reloadable: Option<bool>,
    additional_card_brands: Option<Vec<RawAdditionalBrand>>,
    card_brand: Option<String>,
    card_segment_type: Option<String>,
    combo_card: Option<String>,
    #[serde(rename = "type")]
    card_type: Option<String>,
    funding_source: Option<String>,
    prepaid: Option<bool>,
    product: Option<RawProduct>,
    bank: Option<RawBank>,
    country: Option<RawCountry>,
    authentication: Option<RawAuthentication>,
    cost: Option<RawCost>,
    correlation_id: Option<String>,
    issuer_supports_tokenization: Option<bool>,
    multi_account_access_indicator: Option<String>,
    shared_bin: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawNumber {
    length: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProduct {
    product_id: Option<String>,
    product_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBank {
    name: Option<String>,
    phone: Option<String>,
    url: Option<String>,
    clean_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCountry {
    alpha2: Option<String>,
    numeric: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAuthentication {
    authentication_required: Option<bool>,
    authentication_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCost {
    interchange: Option<RawInterchange>,
}

#[derive(Debug, Default, Deserialize)]
struct RawInterchange {
    regulated: Option<bool>,
    regulated_name: Option<String>,
    domestic: Option<RawFeeSchedule>,
    inter: Option<RawFeeSchedule>,
    intra: Option<RawFeeSchedule>,
    notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFeeSchedule {
    cap_region_shortname: Option<String>,
    cap_advalorem_amount: Option<String>,
    cap_type_name: Option<String>,
    cap_fixed_amount: Option<String>,
    cap_type_qualifier_currency: Option<String>,
    cap_type_qualifier_text: Option<String>,
    cap_type_qualifier_lower: Option<String>,
    cap_type_qualifier_upper: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAdditionalBrand {
    card_brand: Option<String>,
    bin_max: Option<String>,
    bin_min: Option<String>,
    card_brand_product: Option<String>,
    card_brand_bank_name: Option<String>,
    ecom_enabled: Option<bool>,
    billpay_enabled: Option<bool>,
}

// ── Mapping ──────────────────────────────────────────────────────────

fn map_card(raw: RawCard) -> CardRecord {
    CardRecord {
        card_brand: raw.card_brand,
        card_type: raw.card_type,
        prepaid: raw.prepaid,
        virtual_card: raw.virtual_card,
        funding_source: raw.funding_source,
        card_segment_type: raw.card_segment_type,
        combo_card: raw.combo_card,
        bin_min: raw.bin_min,
        bin_max: raw.bin_max,
        bin_length: raw.bin_length,
        pagos_bin_length: raw.pagos_bin_length,
        pan_or_token: raw.pan_or_token,
        correlation_id: raw.correlation_id,
        issuer_currency: raw.issuer_currency,
        multi_account_access_indicator: raw.multi_account_access_indicator,
        issuer_supports_tokenization: raw.issuer_supports_tokenization,
        shared_bin: raw.shared_bin,
        domestic_only: raw.domestic_only,
        gambling_blocked: raw.gambling_blocked,
        reloadable: raw.reloadable,
        level2: raw.level2,
        level3: raw.level3,
        alm: raw.alm,
        account_updater: raw.account_updater,
        number: raw.number.and_then(map_number),
        product: raw.product.and_then(map_product),
        bank: raw.bank.and_then(map_bank),
        country: raw.country.and_then(map_country),
        authentication: raw.authentication.and_then(map_authentication),
        cost: raw.cost.and_then(map_cost),
        additional_card_brands: raw
            .additional_card_brands
            .filter(|brands| !brands.is_empty())
            .map(|brands| brands.into_iter().map(map_additional_brand).collect()),
    }
}

fn map_number(raw: RawNumber) -> Option<NumberInfo> {
    raw.length.is_some().then(|| NumberInfo { length: raw.length })
}

fn map_product(raw: RawProduct) -> Option<ProductInfo> {
    if raw.product_id.is_none() && raw.product_name.is_none() {
        return None;
    }
    Some(ProductInfo { product_id: raw.product_id, product_name: raw.product_name })
}

fn map_bank(raw: RawBank) -> Option<BankInfo> {
    if raw.name.is_none() && raw.clean_name.is_none() && raw.phone.is_none() && raw.url.is_none() {
        return None;
    }
    Some(BankInfo { name: raw.name, clean_name: raw.clean_name, phone: raw.phone, url: raw.url })
}

fn map_country(raw: RawCountry) -> Option<CountryInfo> {
    if raw.name.is_none() && raw.alpha2.is_none() && raw.numeric.is_none() {
        return None;
    }
    Some(CountryInfo { name: raw.name, alpha2: raw.alpha2, numeric: raw.numeric })
}

/// Without `authentication_required` there is no safe default, so the whole
/// sub-record is dropped.
fn map_authentication(raw: RawAuthentication) -> Option<AuthenticationInfo> {
    raw.authentication_required.map(|required| AuthenticationInfo {
        authentication_required: required,
        authentication_name: raw.authentication_name,
    })
}

fn map_cost(raw: RawCost) -> Option<CostInfo> {
    // A cost object without an interchange key carries nothing.
    let interchange = raw.interchange?;
    Some(CostInfo { interchange: map_interchange(interchange) })
}

fn map_interchange(raw: RawInterchange) -> Option<InterchangeInfo> {
    if raw.regulated.is_none()
        && raw.regulated_name.is_none()
        && raw.notes.is_none()
        && raw.domestic.is_none()
        && raw.inter.is_none()
        && raw.intra.is_none()
    {
        return None;
    }
    Some(InterchangeInfo {
        regulated: raw.regulated.unwrap_or(false),
        regulated_name: raw.regulated_name,
        notes: raw.notes,
        domestic: raw.domestic.and_then(map_fee_schedule),
        inter: raw.inter.and_then(map_fee_schedule),
        intra: raw.intra.and_then(map_fee_schedule),
    })
}

fn map_fee_schedule(raw: RawFeeSchedule) -> Option<FeeSchedule> {
    if raw.cap_region_shortname.is_none()
        && raw.cap_advalorem_amount.is_none()
        && raw.cap_type_name.is_none()
        && raw.cap_fixed_amount.is_none()
        && raw.cap_type_qualifier_currency.is_none()
        && raw.cap_type_qualifier_text.is_none()
        && raw.cap_type_qualifier_lower.is_none()
        && raw.cap_type_qualifier_upper.is_none()
    {
        return None;
    }
    Some(FeeSchedule {
        cap_region_shortname: raw.cap_region_shortname,
        cap_advalorem_amount: raw.cap_advalorem_amount,
        cap_type_name: raw.cap_type_name,
        cap_fixed_amount: raw.cap_fixed_amount,
        cap_type_qualifier_currency: raw.cap_type_qualifier_currency,
        cap_type_qualifier_text: raw.cap_type_qualifier_text,
        cap_type_qualifier_lower: raw.cap_type_qualifier_lower,
        cap_type_qualifier_upper: raw.cap_type_qualifier_upper,
    })
}

// List entries are kept as-is, nameless ones included; the formatter owns
// the decision to skip them.
fn map_additional_brand(raw: RawAdditionalBrand) -> AdditionalBrand {
    AdditionalBrand {
        card_brand: raw.card_brand,
        bin_min: raw.bin_min,
        bin_max: raw.bin_max,
        card_brand_product: raw.card_brand_product,
        card_brand_bank_name: raw.card_brand_bank_name,
        ecom_enabled: raw.ecom_enabled,
        billpay_enabled: raw.billpay_enabled,
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> BinLookup {
        parse_body(&value.to_string()).unwrap()
    }

    fn expect_card(value: serde_json::Value) -> CardRecord {
        match parse(value) {
            BinLookup::Found(card) => card,
            BinLookup::NotFound => panic!("expected a card record"),
        }
    }

    #[test]
    fn empty_body_is_not_found() {
        assert_eq!(parse(json!({})), BinLookup::NotFound);
    }

    #[test]
    fn empty_card_object_is_not_found() {
        assert_eq!(parse(json!({"card": {}})), BinLookup::NotFound);
        assert_eq!(parse(json!({"card": null})), BinLookup::NotFound);
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = parse_body("not json").unwrap_err();
        assert!(matches!(err, LookupError::MalformedPayload(_)));
    }

    #[test]
    fn scalar_fields_map_through() {
        let card = expect_card(json!({
            "card": {
                "card_brand": "VISA",
                "type": "CREDIT",
                "prepaid": false,
                "funding_source": "DEBIT",
                "bin_min": "411111",
                "bin_max": "411999",
                "bin_length": 6,
                "pagos_bin_length": 8,
                "pan_or_token": "pan",
                "issuer_currency": "USD",
                "shared_bin": true
            }
        }));

        assert_eq!(card.card_brand.as_deref(), Some("VISA"));
        assert_eq!(card.card_type.as_deref(), Some("CREDIT"));
        assert_eq!(card.prepaid, Some(false));
        assert_eq!(card.funding_source.as_deref(), Some("DEBIT"));
        assert_eq!(card.bin_length, Some(6));
        assert_eq!(card.pagos_bin_length, Some(8));
        assert_eq!(card.shared_bin, Some(true));
        assert!(card.virtual_card.is_none());
        assert!(card.bank.is_none());
    }

    #[test]
    fn empty_sub_objects_become_absent_records() {
        let card = expect_card(json!({
            "card": {
                "card_brand": "VISA",
                "number": {},
                "product": {},
                "bank": {},
                "country": {},
                "authentication": {}
            }
        }));

        assert!(card.number.is_none());
        assert!(card.product.is_none());
        assert!(card.bank.is_none());
        assert!(card.country.is_none());
        assert!(card.authentication.is_none());
    }

    #[test]
    fn populated_sub_objects_map_through() {
        let card = expect_card(json!({
            "card": {
                "number": {"length": 16},
                "product": {"product_id": "F", "product_name": "Classic"},
                "bank": {"name": "Example Bank", "url": "https://example.test"},
                "country": {"name": "United States", "alpha2": "US", "numeric": "840"}
            }
        }));

        assert_eq!(card.number, Some(NumberInfo { length: Some(16) }));
        let product = card.product.unwrap();
        assert_eq!(product.product_id.as_deref(), Some("F"));
        assert_eq!(product.product_name.as_deref(), Some("Classic"));
        let bank = card.bank.unwrap();
        assert_eq!(bank.name.as_deref(), Some("Example Bank"));
        assert!(bank.phone.is_none());
        let country = card.country.unwrap();
        assert_eq!(country.alpha2.as_deref(), Some("US"));
    }

    #[test]
    fn missing_authentication_required_drops_the_sub_record() {
        let card = expect_card(json!({
            "card": {
                "card_brand": "VISA",
                "authentication": {"authentication_name": "3DS"}
            }
        }));
        assert!(card.authentication.is_none());
    }

    #[test]
    fn authentication_required_is_read_directly() {
        let card = expect_card(json!({
            "card": {
                "authentication": {"authentication_required": true, "authentication_name": "3DS"}
            }
        }));
        let auth = card.authentication.unwrap();
        assert!(auth.authentication_required);
        assert_eq!(auth.authentication_name.as_deref(), Some("3DS"));
    }

    #[test]
    fn missing_regulated_defaults_to_false() {
        let card = expect_card(json!({
            "card": {
                "cost": {"interchange": {"notes": "uncapped"}}
            }
        }));
        let interchange = card.cost.unwrap().interchange.unwrap();
        assert!(!interchange.regulated);
        assert_eq!(interchange.notes.as_deref(), Some("uncapped"));
    }

    #[test]
    fn cost_chain_is_built_level_by_level() {
        // Empty cost object: no cost record at all.
        let card = expect_card(json!({"card": {"card_brand": "VISA", "cost": {}}}));
        assert!(card.cost.is_none());

        // Cost with an empty interchange: cost present, interchange absent.
        let card =
            expect_card(json!({"card": {"card_brand": "VISA", "cost": {"interchange": {}}}}));
        assert_eq!(card.cost, Some(CostInfo { interchange: None }));

        // Explicit regulated=false is a populated interchange, not an empty one.
        let card = expect_card(
            json!({"card": {"cost": {"interchange": {"regulated": false}}}}),
        );
        let interchange = card.cost.unwrap().interchange.unwrap();
        assert!(!interchange.regulated);
    }

    #[test]
    fn fee_schedules_parse_but_empty_ones_drop() {
        let card = expect_card(json!({
            "card": {
                "cost": {
                    "interchange": {
                        "regulated": true,
                        "domestic": {
                            "cap_region_shortname": "US",
                            "cap_fixed_amount": "0.21",
                            "cap_type_qualifier_currency": "USD"
                        },
                        "inter": {}
                    }
                }
            }
        }));

        let interchange = card.cost.unwrap().interchange.unwrap();
        assert!(interchange.regulated);
        let domestic = interchange.domestic.unwrap();
        assert_eq!(domestic.cap_region_shortname.as_deref(), Some("US"));
        assert_eq!(domestic.cap_fixed_amount.as_deref(), Some("0.21"));
        assert!(interchange.inter.is_none());
        assert!(interchange.intra.is_none());
    }

    #[test]
    fn additional_brands_preserve_provider_order() {
        let card = expect_card(json!({
            "card": {
                "additional_card_brands": [
                    {"card_brand": "A"},
                    {"card_brand": "B", "ecom_enabled": true, "bin_min": "400000"}
                ]
            }
        }));

        let brands = card.additional_card_brands.unwrap();
        assert_eq!(brands.len(), 2);
        assert_eq!(brands[0].card_brand.as_deref(), Some("A"));
        assert_eq!(brands[1].card_brand.as_deref(), Some("B"));
        assert_eq!(brands[1].ecom_enabled, Some(true));
        assert_eq!(brands[1].bin_min.as_deref(), Some("400000"));
    }

    #[test]
    fn empty_brand_list_is_absent() {
        let card =
            expect_card(json!({"card": {"card_brand": "VISA", "additional_card_brands": []}}));
        assert!(card.additional_card_brands.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let card = expect_card(json!({
            "card": {
                "card_brand": "VISA",
                "networkfees": {"assessment": "0.13"},
                "future_field": 42
            }
        }));
        assert_eq!(card.card_brand.as_deref(), Some("VISA"));
    }

    #[test]
    fn identical_payloads_parse_to_equal_models() {
        let payload = json!({
            "card": {
                "card_brand": "VISA",
                "bank": {"name": "Example Bank"},
                "authentication": {"authentication_required": true},
                "additional_card_brands": [{"card_brand": "STAR", "billpay_enabled": false}]
            }
        });
        assert_eq!(parse(payload.clone()), parse(payload));
    }
}
