//! Property repository for listing CRUD and filtered search.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{NewProperty, Property, UpdateProperty};
use crate::types::PropertyFilter;
use crate::{PgConnection, PgError, PgResult, schema};

/// Applies the optional [`PropertyFilter`] conditions to a boxed query.
///
/// Written as a macro because the listing query and the count query box to
/// different select types.
macro_rules! apply_property_filter {
    ($query:expr, $filter:expr) => {{
        let mut query = $query;
        if let Some(pattern) = $filter.query_pattern() {
            query = query.filter(
                dsl::title
                    .ilike(pattern.clone())
                    .or(dsl::description.ilike(pattern.clone()))
                    .or(dsl::street_address.ilike(pattern)),
            );
        }
        if let Some(min_price) = $filter.min_price {
            query = query.filter(dsl::price.ge(min_price));
        }
        if let Some(max_price) = $filter.max_price {
            query = query.filter(dsl::price.le(max_price));
        }
        if let Some(kind) = $filter.kind {
            query = query.filter(dsl::kind.eq(kind));
        }
        if let Some(status) = $filter.status {
            query = query.filter(dsl::status.eq(status));
        }
        if let Some(min_bedrooms) = $filter.min_bedrooms {
            query = query.filter(dsl::bedrooms.ge(min_bedrooms));
        }
        if let Some(min_bathrooms) = $filter.min_bathrooms {
            query = query.filter(dsl::bathrooms.ge(min_bathrooms));
        }
        if let Some(pattern) = $filter.city_pattern() {
            query = query.filter(dsl::city.ilike(pattern));
        }
        if let Some(pattern) = $filter.state_region_pattern() {
            query = query.filter(dsl::state_region.ilike(pattern));
        }
        query
    }};
}

/// Repository for property listing database operations.
///
/// Handles listing lifecycle management plus the filtered, paginated search
/// used by the public listing endpoints.
pub trait PropertyRepository {
    /// Creates a new property listing.
    fn create_property(
        &mut self,
        new_property: NewProperty,
    ) -> impl Future<Output = PgResult<Property>> + Send;

    /// Finds a listing by its unique identifier.
    ///
    /// Soft-deleted listings are excluded.
    fn find_property_by_id(
        &mut self,
        property_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Property>>> + Send;

    /// Updates a listing with new information.
    ///
    /// Applies partial updates; only fields set to `Some(value)` are modified.
    /// Ownership must be checked by the caller before invoking this.
    fn update_property(
        &mut self,
        property_id: Uuid,
        updates: UpdateProperty,
    ) -> impl Future<Output = PgResult<Property>> + Send;

    /// Soft deletes a listing by setting the deletion timestamp.
    ///
    /// Returns `None` if the listing was not found.
    fn delete_property(
        &mut self,
        property_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Property>>> + Send;

    /// Searches listings with the given filters, most recent first.
    fn search_properties(
        &mut self,
        filter: &PropertyFilter,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Property>>> + Send;

    /// Counts listings matching the given filters.
    ///
    /// Pairs with [`Self::search_properties`] to produce page totals.
    fn count_properties(
        &mut self,
        filter: &PropertyFilter,
    ) -> impl Future<Output = PgResult<i64>> + Send;

    /// Lists the listings owned by one account, most recent first.
    fn list_properties_by_owner(
        &mut self,
        owner_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Property>>> + Send;

    /// Counts the listings owned by one account.
    fn count_properties_by_owner(
        &mut self,
        owner_id: Uuid,
    ) -> impl Future<Output = PgResult<i64>> + Send;
}

impl PropertyRepository for PgConnection {
    async fn create_property(&mut self, mut new_property: NewProperty) -> PgResult<Property> {
        use schema::properties;

        new_property.title = new_property.title.trim().to_owned();

        diesel::insert_into(properties::table)
            .values(&new_property)
            .returning(Property::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_property_by_id(&mut self, property_id: Uuid) -> PgResult<Option<Property>> {
        use schema::properties::{self, dsl};

        properties::table
            .filter(dsl::id.eq(property_id))
            .filter(dsl::deleted_at.is_null())
            .select(Property::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_property(
        &mut self,
        property_id: Uuid,
        mut updates: UpdateProperty,
    ) -> PgResult<Property> {
        use schema::properties::{self, dsl};

        if let Some(title) = updates.title.as_mut() {
            *title = title.trim().to_owned();
        }

        diesel::update(properties::table.filter(dsl::id.eq(property_id)))
            .set(&updates)
            .returning(Property::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_property(&mut self, property_id: Uuid) -> PgResult<Option<Property>> {
        use schema::properties::{self, dsl};

        diesel::update(properties::table.filter(dsl::id.eq(property_id)))
            .set(dsl::deleted_at.eq(Some(jiff_diesel::Timestamp::from(Timestamp::now()))))
            .returning(Property::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn search_properties(
        &mut self,
        filter: &PropertyFilter,
        pagination: Pagination,
    ) -> PgResult<Vec<Property>> {
        use schema::properties::{self, dsl};

        let query = properties::table
            .select(Property::as_select())
            .into_boxed();
        let query = apply_property_filter!(query, filter);

        query
            .filter(dsl::deleted_at.is_null())
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_properties(&mut self, filter: &PropertyFilter) -> PgResult<i64> {
        use schema::properties::{self, dsl};

        let query = properties::table.count().into_boxed();
        let query = apply_property_filter!(query, filter);

        query
            .filter(dsl::deleted_at.is_null())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_properties_by_owner(
        &mut self,
        owner_id: Uuid,
        pagination: Pagination,
    ) -> PgResult<Vec<Property>> {
        use schema::properties::{self, dsl};

        properties::table
            .filter(dsl::owner_id.eq(owner_id))
            .filter(dsl::deleted_at.is_null())
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Property::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_properties_by_owner(&mut self, owner_id: Uuid) -> PgResult<i64> {
        use schema::properties::{self, dsl};

        properties::table
            .filter(dsl::owner_id.eq(owner_id))
            .filter(dsl::deleted_at.is_null())
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }
}
