use sqlx::{Postgres, QueryBuilder};

use crate::models::FilterOptions;

/// Columns returned for every directory search
pub const SEARCH_BASE_SQL: &str = "SELECT id, name, service_type, methadone_type, \
     zip_code, radius, address, phone FROM services WHERE 1=1";

/// Build the directory search query for the given filters
///
/// Predicates are conjunctive and only added for fields that are present,
/// so the all-empty filter matches every row. Every value is bound as a
/// parameter; filter values never reach the SQL text. Results are ordered
/// by name so repeated searches are stable.
pub fn build_search_query(filters: &FilterOptions) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SEARCH_BASE_SQL);

    if !filters.service_types.is_empty() {
        builder.push(" AND service_type = ANY(");
        builder.push_bind(filters.service_types.clone());
        builder.push(")");
    }

    if !filters.medication_types.methadone.is_empty() {
        builder.push(" AND methadone_type = ANY(");
        builder.push_bind(filters.medication_types.methadone.clone());
        builder.push(")");
    }

    if !filters.location.zip_code.is_empty() {
        builder.push(" AND zip_code = ");
        builder.push_bind(filters.location.zip_code.clone());
    }

    if let Some(radius) = filters.radius {
        builder.push(" AND radius <= ");
        builder.push_bind(i32::from(radius));
    }

    builder.push(" ORDER BY name");
    builder
}
