use crate::model::{Classification, VenueRecord};
use crate::overrides::OverrideTable;

/// Classify one record into exactly one outcome.
///
/// Decision list, first match wins:
/// 1. id in the override table → `Resolved` with the curated values
/// 2. "online" anywhere in address + postcode → `Ignored`
/// 3. trimmed address starts with a digit → `NeedsSearch`
/// 4. trimmed address contains a comma → `Resolved`, split on the first comma
/// 5. otherwise → `Resolved`, whole address as the name, empty address
///
/// Pure and total: absent fields read as `""`, no input can make it fail.
pub fn classify(record: &VenueRecord, overrides: &OverrideTable) -> Classification {
    if let Some(entry) = overrides.get(record.id()) {
        return Classification::Resolved {
            name: entry.name.clone(),
            address: entry.address.clone(),
        };
    }

    if is_online(record) {
        return Classification::Ignored;
    }

    let address = record.get("address").trim();

    if address.starts_with(|c: char| c.is_ascii_digit()) {
        // "316 High Road": an address with no embedded venue name.
        return Classification::NeedsSearch;
    }

    if let Some((name, rest)) = address.split_once(',') {
        // "Jamboree, 6 St Chad's Pl, London" → name before the first comma,
        // everything after it is the address. The name portion is accepted
        // as-is; the override table is the correction channel for rows
        // where this guesses wrong.
        return Classification::Resolved {
            name: name.trim().to_string(),
            address: rest.trim().to_string(),
        };
    }

    // "Vaulty Towers": a name with no address at all.
    Classification::Resolved {
        name: address.to_string(),
        address: String::new(),
    }
}

/// A venue is online-only when "online" appears anywhere in the combined
/// address + postcode text, case-insensitively.
fn is_online(record: &VenueRecord) -> bool {
    let text = format!("{} {}", record.get("address"), record.get("postcode"));
    text.to_lowercase().contains("online")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
