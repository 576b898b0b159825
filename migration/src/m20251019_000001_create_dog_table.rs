use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dog::Table)
                    .if_not_exists()
                    .col(pk_auto(Dog::Id))
                    .col(string(Dog::Name))
                    .col(string(Dog::Description))
                    .col(string(Dog::Breed))
                    .col(integer(Dog::Age))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dog {
    Table,
    Id,
    Name,
    Description,
    Breed,
    Age,
}
