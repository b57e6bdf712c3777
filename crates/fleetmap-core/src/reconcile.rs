//! The one typed seam between the untyped placemark field bag and the
//! record types. Field lookup is exact and case-sensitive; a missing field
//! is never an error — strings default to `""` and counts to 0.

use crate::record::{ShippingLocation, Terminal};
use placemark::Placemark;

/// Separator between the terminal number and its label in the raw shipping
/// `Trm` field, e.g. `"22 - CAMBRIDGE"`.
const TERMINAL_SOURCE_SEPARATOR: &str = " - ";

/// Build a [`Terminal`] from a placemark. `ordinal` is 1-based within the
/// batch and becomes the synthetic string id.
pub fn terminal_from_placemark(mark: &Placemark, ordinal: usize) -> Terminal {
    Terminal {
        id: ordinal.to_string(),
        name: mark.name.clone(),
        terminal_number: text_field(mark, "Term"),
        address: text_field(mark, "Address"),
        city: text_field(mark, "City"),
        state: text_field(mark, "ST"),
        zip: text_field(mark, "ZIP"),
        phone: text_field(mark, "Phone"),
        manager: text_field(mark, "Manager"),
        drivers: count_field(mark, "Drivers"),
        shop: count_field(mark, "Shop"),
        other: count_field(mark, "Other"),
        total: count_field(mark, "Total"),
        opened: text_field(mark, "Opened"),
        shop_bays: text_field(mark, "Shop Bays"),
        facility_type: text_field(mark, "Facility Type"),
        primary_shippers: text_field(mark, "Primary Shippers"),
        position: mark.coord.into(),
    }
}

/// Build a [`ShippingLocation`] from a placemark. The terminal source is
/// the portion of the raw `Trm` field before `" - "`; an absent separator
/// keeps the whole value, and an absent field defaults to `""`.
pub fn shipping_from_placemark(mark: &Placemark, ordinal: usize) -> ShippingLocation {
    let raw_source = text_field(mark, "Trm");
    let terminal_source = raw_source
        .split(TERMINAL_SOURCE_SEPARATOR)
        .next()
        .unwrap_or("")
        .to_string();

    ShippingLocation {
        id: ordinal.to_string(),
        name: mark.name.clone(),
        terminal_source,
        city: text_field(mark, "City"),
        state: text_field(mark, "State"),
        count: count_field(mark, "Count"),
        position: mark.coord.into(),
    }
}

fn text_field(mark: &Placemark, name: &str) -> String {
    mark.field(name).unwrap_or("").to_string()
}

fn count_field(mark: &Placemark, name: &str) -> u32 {
    parse_count(mark.field(name).unwrap_or(""))
}

/// Parse the leading non-negative integer of a string, ignoring leading
/// whitespace and trailing junk (`"12 bays"` -> 12). Empty or non-numeric
/// input coerces to 0.
pub fn parse_count(raw: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
