use crate::models::FilterOptions;

/// Radius slider bounds in miles
pub const RADIUS_MIN: u16 = 1;
pub const RADIUS_MAX: u16 = 20;

/// One tag list within the filter record
///
/// Categories are isolated: the same literal string can live in two lists
/// and toggling it in one never touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagList {
    ServiceTypes,
    Methadone,
    Suboxone,
    Lais,
    Housing,
    Food,
    MentalHealth,
    CaseManagement,
    InsuranceOptions,
}

/// A single update against the filter record
///
/// Scalar fields are replaced outright; tag lists are toggled by value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    ZipCode(String),
    Address(String),
    UseCurrentLocation(bool),
    Radius(u16),
    Toggle {
        list: TagList,
        value: String,
        checked: bool,
    },
}

/// Apply one update to the filter record
///
/// Radius is clamped to the slider bounds here, on the client side; the
/// server does not re-validate it.
pub fn apply_update(filters: &mut FilterOptions, update: FilterUpdate) {
    match update {
        FilterUpdate::ZipCode(zip_code) => filters.location.zip_code = zip_code,
        FilterUpdate::Address(address) => filters.location.address = address,
        FilterUpdate::UseCurrentLocation(enabled) => {
            filters.location.use_current_location = enabled;
        }
        FilterUpdate::Radius(miles) => {
            filters.radius = Some(miles.clamp(RADIUS_MIN, RADIUS_MAX));
        }
        FilterUpdate::Toggle {
            list,
            value,
            checked,
        } => toggle_tag(tag_list_mut(filters, list), value, checked),
    }
}

fn tag_list_mut(filters: &mut FilterOptions, list: TagList) -> &mut Vec<String> {
    match list {
        TagList::ServiceTypes => &mut filters.service_types,
        TagList::Methadone => &mut filters.medication_types.methadone,
        TagList::Suboxone => &mut filters.medication_types.suboxone,
        TagList::Lais => &mut filters.medication_types.lais,
        TagList::Housing => &mut filters.additional_services.housing,
        TagList::Food => &mut filters.additional_services.food,
        TagList::MentalHealth => &mut filters.additional_services.mental_health,
        TagList::CaseManagement => &mut filters.additional_services.case_management,
        TagList::InsuranceOptions => &mut filters.insurance_options,
    }
}

/// Checked appends the value if absent; unchecked removes every occurrence
fn toggle_tag(tags: &mut Vec<String>, value: String, checked: bool) {
    if checked {
        if !tags.contains(&value) {
            tags.push(value);
        }
    } else {
        tags.retain(|tag| tag != &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(list: TagList, value: &str, checked: bool) -> FilterUpdate {
        FilterUpdate::Toggle {
            list,
            value: value.to_string(),
            checked,
        }
    }

    #[test]
    fn test_toggle_adds_once() {
        let mut filters = FilterOptions::default();

        apply_update(&mut filters, toggle(TagList::ServiceTypes, "Peer Support", true));
        apply_update(&mut filters, toggle(TagList::ServiceTypes, "Peer Support", true));

        assert_eq!(filters.service_types, vec!["Peer Support"]);
    }

    #[test]
    fn test_toggle_on_then_off_restores_list() {
        let mut filters = FilterOptions::default();
        apply_update(&mut filters, toggle(TagList::Methadone, "Maintenance", true));
        let before = filters.medication_types.methadone.clone();

        apply_update(&mut filters, toggle(TagList::Methadone, "Detox", true));
        apply_update(&mut filters, toggle(TagList::Methadone, "Detox", false));

        assert_eq!(filters.medication_types.methadone, before);
    }

    #[test]
    fn test_untoggle_missing_value_is_safe() {
        let mut filters = FilterOptions::default();

        apply_update(&mut filters, toggle(TagList::InsuranceOptions, "Medicaid", false));

        assert!(filters.insurance_options.is_empty());
    }

    #[test]
    fn test_categories_are_isolated() {
        // The same literal string in two lists is removed independently.
        let mut filters = FilterOptions::default();
        apply_update(&mut filters, toggle(TagList::Food, "Weekdays", true));
        apply_update(&mut filters, toggle(TagList::Housing, "Weekdays", true));

        apply_update(&mut filters, toggle(TagList::Food, "Weekdays", false));

        assert!(filters.additional_services.food.is_empty());
        assert_eq!(filters.additional_services.housing, vec!["Weekdays"]);
    }

    #[test]
    fn test_replace_updates() {
        let mut filters = FilterOptions::default();

        apply_update(&mut filters, FilterUpdate::ZipCode("10001".to_string()));
        apply_update(&mut filters, FilterUpdate::Address("1 Main St".to_string()));
        apply_update(&mut filters, FilterUpdate::UseCurrentLocation(true));

        assert_eq!(filters.location.zip_code, "10001");
        assert_eq!(filters.location.address, "1 Main St");
        assert!(filters.location.use_current_location);
    }

    #[test]
    fn test_radius_clamped_to_slider_bounds() {
        let mut filters = FilterOptions::default();

        apply_update(&mut filters, FilterUpdate::Radius(0));
        assert_eq!(filters.radius, Some(RADIUS_MIN));

        apply_update(&mut filters, FilterUpdate::Radius(50));
        assert_eq!(filters.radius, Some(RADIUS_MAX));

        apply_update(&mut filters, FilterUpdate::Radius(5));
        assert_eq!(filters.radius, Some(5));
    }
}
