use crate::domain::property::Property;

pub const NONE_FOUND: &str = "<none found>";

pub fn type_header(property_type: &str) -> String {
    format!("Type: {}", property_type.trim().to_uppercase())
}

/// Upper-cases the first letter of every whitespace-delimited word and
/// lower-cases the rest. Whitespace is kept as-is.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut start_of_word = true;

    for c in text.chars() {
        if c.is_whitespace() {
            start_of_word = true;
            result.push(c);
        } else if start_of_word {
            result.extend(c.to_uppercase());
            start_of_word = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

fn unit_prefix(unit_number: Option<&str>) -> String {
    unit_number
        .map(|unit| format!("unit #{} at ", unit))
        .unwrap_or_default()
}

fn bedroom_phrase(count: u32) -> String {
    if count == 1 {
        format!("{} bedroom", count)
    } else {
        format!("{} bedrooms", count)
    }
}

fn pool_suffix(has_pool: bool) -> &'static str {
    if has_pool {
        " plus pool"
    } else {
        ""
    }
}

/// Whole dollars, half away from zero, no separators. Negative zero is
/// printed as `$0`.
fn whole_dollars(price_usd: f64) -> String {
    format!("${:.0}", price_usd.round() + 0.0)
}

/// One numbered report line, e.g.
/// ` 1) Property 9999: unit #9 at 99 Gretzky Way T6V7H3 in Toronto (1 bedroom plus pool): $99999.`
pub fn listing_line(rank: usize, property: &Property) -> String {
    let address = property.address();
    format!(
        " {}) Property {}: {}{} {} {} in {} ({}{}): {}.",
        rank,
        property.property_id(),
        unit_prefix(address.unit_number()),
        address.street_number(),
        title_case(address.street_name()),
        address.postal_code().to_uppercase(),
        title_case(address.city()),
        bedroom_phrase(property.number_of_bedrooms()),
        pool_suffix(property.has_swimming_pool()),
        whole_dollars(property.price_usd()),
    )
}
