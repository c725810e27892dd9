use crate::constants::LOST_STATUS;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Username)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).text().not_null())
                    .col(
                        ColumnDef::new(Users::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LostItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LostItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LostItems::OwnerName).text().null())
                    .col(ColumnDef::new(LostItems::ItemDesc).text().null())
                    .col(ColumnDef::new(LostItems::LastSeenLocation).text().null())
                    .col(
                        ColumnDef::new(LostItems::Status)
                            .text()
                            .null()
                            .default(LOST_STATUS),
                    )
                    .to_owned(),
            )
            .await?;

        // `found_location` replaces the older `contact_info` column. Existing tables keep
        // whatever layout they were created with.
        manager
            .create_table(
                Table::create()
                    .table(FoundItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoundItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoundItems::FinderName).text().null())
                    .col(ColumnDef::new(FoundItems::ItemDesc).text().null())
                    .col(ColumnDef::new(FoundItems::FoundLocation).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoundItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LostItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
    PasswordHash,
    IsAdmin,
}

#[derive(Iden)]
enum LostItems {
    Table,
    Id,
    OwnerName,
    ItemDesc,
    LastSeenLocation,
    Status,
}

#[derive(Iden)]
enum FoundItems {
    Table,
    Id,
    FinderName,
    ItemDesc,
    FoundLocation,
}
