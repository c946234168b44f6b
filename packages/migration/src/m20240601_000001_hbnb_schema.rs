use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum States {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
}

#[derive(Iden)]
enum Cities {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    StateId,
    Name,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Email,
    Password,
    FirstName,
    LastName,
}

#[derive(Iden)]
enum Places {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    CityId,
    UserId,
    Name,
    Description,
    NumberRooms,
    NumberBathrooms,
    MaxGuest,
    PriceByNight,
    Latitude,
    Longitude,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    PlaceId,
    UserId,
    Text,
}

#[derive(Iden)]
enum Amenities {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
}

#[derive(Iden)]
enum PlaceAmenity {
    #[iden = "place_amenity"]
    Table,
    PlaceId,
    AmenityId,
}

const ID_LEN: u32 = 60;
const NAME_LEN: u32 = 128;
const TEXT_LEN: u32 = 1024;

/// Common `id`, `created_at`, `updated_at` columns shared by every record table.
fn base_columns<T: Iden + 'static>(table: &mut TableCreateStatement, id: T, created: T, updated: T) {
    table
        .col(
            ColumnDef::new(id)
                .string_len(ID_LEN)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(created).date_time().not_null())
        .col(ColumnDef::new(updated).date_time().not_null());
}

fn cascade_fk(
    name: &str,
    from_table: impl IntoIden + 'static,
    from_col: impl IntoIden + 'static,
    to_table: impl IntoIden + 'static,
    to_col: impl IntoIden + 'static,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(from_table, from_col)
        .to(to_table, to_col)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // states
        let mut states = Table::create();
        states.table(States::Table).if_not_exists();
        base_columns(&mut states, States::Id, States::CreatedAt, States::UpdatedAt);
        states.col(ColumnDef::new(States::Name).string_len(NAME_LEN).not_null());
        manager.create_table(states.to_owned()).await?;

        // cities
        let mut cities = Table::create();
        cities.table(Cities::Table).if_not_exists();
        base_columns(&mut cities, Cities::Id, Cities::CreatedAt, Cities::UpdatedAt);
        cities
            .col(ColumnDef::new(Cities::StateId).string_len(ID_LEN).not_null())
            .col(ColumnDef::new(Cities::Name).string_len(NAME_LEN).not_null())
            .foreign_key(&mut cascade_fk(
                "fk_cities_state_id",
                Cities::Table,
                Cities::StateId,
                States::Table,
                States::Id,
            ));
        manager.create_table(cities.to_owned()).await?;

        // users
        let mut users = Table::create();
        users.table(Users::Table).if_not_exists();
        base_columns(&mut users, Users::Id, Users::CreatedAt, Users::UpdatedAt);
        users
            .col(ColumnDef::new(Users::Email).string_len(NAME_LEN).not_null())
            .col(ColumnDef::new(Users::Password).string_len(NAME_LEN).not_null())
            .col(ColumnDef::new(Users::FirstName).string_len(NAME_LEN).null())
            .col(ColumnDef::new(Users::LastName).string_len(NAME_LEN).null());
        manager.create_table(users.to_owned()).await?;

        // places
        let mut places = Table::create();
        places.table(Places::Table).if_not_exists();
        base_columns(&mut places, Places::Id, Places::CreatedAt, Places::UpdatedAt);
        places
            .col(ColumnDef::new(Places::CityId).string_len(ID_LEN).not_null())
            .col(ColumnDef::new(Places::UserId).string_len(ID_LEN).not_null())
            .col(ColumnDef::new(Places::Name).string_len(NAME_LEN).not_null())
            .col(ColumnDef::new(Places::Description).string_len(TEXT_LEN).null())
            .col(
                ColumnDef::new(Places::NumberRooms)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(Places::NumberBathrooms)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(Places::MaxGuest)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(Places::PriceByNight)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(ColumnDef::new(Places::Latitude).float().null())
            .col(ColumnDef::new(Places::Longitude).float().null())
            .foreign_key(&mut cascade_fk(
                "fk_places_city_id",
                Places::Table,
                Places::CityId,
                Cities::Table,
                Cities::Id,
            ))
            .foreign_key(&mut cascade_fk(
                "fk_places_user_id",
                Places::Table,
                Places::UserId,
                Users::Table,
                Users::Id,
            ));
        manager.create_table(places.to_owned()).await?;

        // reviews
        let mut reviews = Table::create();
        reviews.table(Reviews::Table).if_not_exists();
        base_columns(&mut reviews, Reviews::Id, Reviews::CreatedAt, Reviews::UpdatedAt);
        reviews
            .col(ColumnDef::new(Reviews::PlaceId).string_len(ID_LEN).not_null())
            .col(ColumnDef::new(Reviews::UserId).string_len(ID_LEN).not_null())
            .col(ColumnDef::new(Reviews::Text).string_len(TEXT_LEN).not_null())
            .foreign_key(&mut cascade_fk(
                "fk_reviews_place_id",
                Reviews::Table,
                Reviews::PlaceId,
                Places::Table,
                Places::Id,
            ))
            .foreign_key(&mut cascade_fk(
                "fk_reviews_user_id",
                Reviews::Table,
                Reviews::UserId,
                Users::Table,
                Users::Id,
            ));
        manager.create_table(reviews.to_owned()).await?;

        // amenities
        let mut amenities = Table::create();
        amenities.table(Amenities::Table).if_not_exists();
        base_columns(
            &mut amenities,
            Amenities::Id,
            Amenities::CreatedAt,
            Amenities::UpdatedAt,
        );
        amenities.col(ColumnDef::new(Amenities::Name).string_len(NAME_LEN).not_null());
        manager.create_table(amenities.to_owned()).await?;

        // place_amenity (many-to-many link)
        manager
            .create_table(
                Table::create()
                    .table(PlaceAmenity::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlaceAmenity::PlaceId)
                            .string_len(ID_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlaceAmenity::AmenityId)
                            .string_len(ID_LEN)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_place_amenity")
                            .col(PlaceAmenity::PlaceId)
                            .col(PlaceAmenity::AmenityId),
                    )
                    .foreign_key(&mut cascade_fk(
                        "fk_place_amenity_place_id",
                        PlaceAmenity::Table,
                        PlaceAmenity::PlaceId,
                        Places::Table,
                        Places::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_place_amenity_amenity_id",
                        PlaceAmenity::Table,
                        PlaceAmenity::AmenityId,
                        Amenities::Table,
                        Amenities::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children before parents so foreign keys never dangle mid-drop.
        manager
            .drop_table(Table::drop().table(PlaceAmenity::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Places::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Amenities::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cities::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(States::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
