//! The AND-composed filter pipeline over display records.

use crate::models::display::DisplayRecord;
use crate::models::map_filter::MapFilter;

/// Narrows classified records by the active filter parts.
///
/// Inactive parts pass everything through; active parts compose as a logical
/// AND, so application order only changes intermediate sizes, never the
/// result. An active number filter whose string does not parse matches no
/// record.
pub fn apply_filters(mut records: Vec<DisplayRecord>, filter: &MapFilter) -> Vec<DisplayRecord> {
    if !filter.status.is_empty() {
        records.retain(|record| filter.status.contains(&record.status));
    }

    let selected_types = filter.flattened_types();
    if !selected_types.is_empty() {
        records.retain(|record| selected_types.contains(record.device_type.as_str()));
    }

    if filter.number_active() {
        let number = filter.parsed_number();
        records.retain(|record| number.is_some() && record.device_number == number);
    }

    records
}
