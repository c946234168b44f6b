//! SeaORM adapter for the six record tables.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::entities::{amenities, cities, place_amenity, places, reviews, states, users};
use crate::models::{ModelClass, Record};

pub mod dto;

// Adapter functions return DbErr; callers convert to StorageError via From<DbErr>.

pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    class: ModelClass,
) -> Result<Vec<Record>, sea_orm::DbErr> {
    let records = match class {
        ModelClass::State => into_records(states::Entity::find().all(conn).await?),
        ModelClass::City => into_records(cities::Entity::find().all(conn).await?),
        ModelClass::User => into_records(users::Entity::find().all(conn).await?),
        ModelClass::Place => into_records(places::Entity::find().all(conn).await?),
        ModelClass::Review => into_records(reviews::Entity::find().all(conn).await?),
        ModelClass::Amenity => into_records(amenities::Entity::find().all(conn).await?),
    };
    Ok(records)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    class: ModelClass,
    id: &str,
) -> Result<Option<Record>, sea_orm::DbErr> {
    let id = id.to_owned();
    let record = match class {
        ModelClass::State => states::Entity::find_by_id(id).one(conn).await?.map(Record::from),
        ModelClass::City => cities::Entity::find_by_id(id).one(conn).await?.map(Record::from),
        ModelClass::User => users::Entity::find_by_id(id).one(conn).await?.map(Record::from),
        ModelClass::Place => places::Entity::find_by_id(id).one(conn).await?.map(Record::from),
        ModelClass::Review => reviews::Entity::find_by_id(id).one(conn).await?.map(Record::from),
        ModelClass::Amenity => amenities::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(Record::from),
    };
    Ok(record)
}

pub async fn count<C: ConnectionTrait>(conn: &C, class: ModelClass) -> Result<u64, sea_orm::DbErr> {
    match class {
        ModelClass::State => states::Entity::find().count(conn).await,
        ModelClass::City => cities::Entity::find().count(conn).await,
        ModelClass::User => users::Entity::find().count(conn).await,
        ModelClass::Place => places::Entity::find().count(conn).await,
        ModelClass::Review => reviews::Entity::find().count(conn).await,
        ModelClass::Amenity => amenities::Entity::find().count(conn).await,
    }
}

/// Insert the record, or overwrite every column if a row with its id exists.
pub async fn upsert<C: ConnectionTrait>(conn: &C, record: &Record) -> Result<(), sea_orm::DbErr> {
    let exists = find_by_id(conn, record.class(), record.id()).await?.is_some();
    match record {
        Record::State(m) => write(conn, dto::state_active(m), exists).await,
        Record::City(m) => write(conn, dto::city_active(m), exists).await,
        Record::User(m) => write(conn, dto::user_active(m), exists).await,
        Record::Place(m) => write(conn, dto::place_active(m), exists).await,
        Record::Review(m) => write(conn, dto::review_active(m), exists).await,
        Record::Amenity(m) => write(conn, dto::amenity_active(m), exists).await,
    }
}

/// Delete the record's row. Returns the number of rows removed (0 or 1).
pub async fn delete<C: ConnectionTrait>(conn: &C, record: &Record) -> Result<u64, sea_orm::DbErr> {
    let id = record.id().to_owned();
    let res = match record.class() {
        ModelClass::State => states::Entity::delete_by_id(id).exec(conn).await?,
        ModelClass::City => cities::Entity::delete_by_id(id).exec(conn).await?,
        ModelClass::User => users::Entity::delete_by_id(id).exec(conn).await?,
        ModelClass::Place => places::Entity::delete_by_id(id).exec(conn).await?,
        ModelClass::Review => reviews::Entity::delete_by_id(id).exec(conn).await?,
        ModelClass::Amenity => amenities::Entity::delete_by_id(id).exec(conn).await?,
    };
    Ok(res.rows_affected)
}

/// Link a place to an amenity; linking twice is a no-op.
pub async fn link_amenity<C: ConnectionTrait>(
    conn: &C,
    place_id: &str,
    amenity_id: &str,
) -> Result<(), sea_orm::DbErr> {
    let existing = place_amenity::Entity::find_by_id((place_id.to_owned(), amenity_id.to_owned()))
        .one(conn)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    place_amenity::ActiveModel {
        place_id: sea_orm::Set(place_id.to_owned()),
        amenity_id: sea_orm::Set(amenity_id.to_owned()),
    }
    .insert(conn)
    .await?;
    Ok(())
}

pub async fn unlink_amenity<C: ConnectionTrait>(
    conn: &C,
    place_id: &str,
    amenity_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = place_amenity::Entity::delete_many()
        .filter(place_amenity::Column::PlaceId.eq(place_id))
        .filter(place_amenity::Column::AmenityId.eq(amenity_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Amenities linked to a place.
pub async fn find_place_amenities<C: ConnectionTrait>(
    conn: &C,
    place_id: &str,
) -> Result<Vec<amenities::Model>, sea_orm::DbErr> {
    amenities::Entity::find()
        .inner_join(place_amenity::Entity)
        .filter(place_amenity::Column::PlaceId.eq(place_id))
        .all(conn)
        .await
}

fn into_records<M: Into<Record>>(models: Vec<M>) -> Vec<Record> {
    models.into_iter().map(Into::into).collect()
}

async fn write<C, A>(conn: &C, active: A, exists: bool) -> Result<(), sea_orm::DbErr>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if exists {
        active.update(conn).await?;
    } else {
        active.insert(conn).await?;
    }
    Ok(())
}
