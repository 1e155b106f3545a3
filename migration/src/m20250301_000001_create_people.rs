use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Firstname).string().not_null())
                    .col(ColumnDef::new(People::Lastname).string().not_null())
                    .col(ColumnDef::new(People::Created).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Listing sorts newest-created first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_people_created")
                    .table(People::Table)
                    .col(People::Created)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Firstname,
    Lastname,
    Created,
}
