use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::Name).string().not_null())
                    .col(
                        ColumnDef::new(Items::CheckedOut)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Items::PersonId).integer().null())
                    .col(ColumnDef::new(Items::Created).big_integer().not_null())
                    .col(ColumnDef::new(Items::Updated).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_items_person_id")
                            .from(Items::Table, Items::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // n_items counts by holder
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_person_id")
                    .table(Items::Table)
                    .col(Items::PersonId)
                    .to_owned(),
            )
            .await?;

        // Listing and recent checkouts sort newest-updated first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_updated")
                    .table(Items::Table)
                    .col(Items::Updated)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    CheckedOut,
    PersonId,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
}
