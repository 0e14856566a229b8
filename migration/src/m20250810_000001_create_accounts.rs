use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The unique key on email is the authority for uniqueness; the
        // application-level existence check is only a friendlier fast path.
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::Firstname).string().not_null())
                    .col(ColumnDef::new(Accounts::Lastname).string().not_null())
                    .col(ColumnDef::new(Accounts::Middlename).string().null())
                    .col(
                        ColumnDef::new(Accounts::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::Contact).string().not_null())
                    .col(ColumnDef::new(Accounts::AccountType).string().not_null())
                    .col(ColumnDef::new(Accounts::Block).string().null())
                    .col(ColumnDef::new(Accounts::HouseId).string().null())
                    .col(ColumnDef::new(Accounts::Status).string().not_null())
                    .col(ColumnDef::new(Accounts::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Accounts::PasswordHash).string().null())
                    .col(ColumnDef::new(Accounts::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Accounts::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_accounts_email")
                    .table(Accounts::Table)
                    .col(Accounts::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_accounts_block_house")
                    .table(Accounts::Table)
                    .col(Accounts::Block)
                    .col(Accounts::HouseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Firstname,
    Lastname,
    Middlename,
    Email,
    Contact,
    AccountType,
    Block,
    HouseId,
    Status,
    CreatedBy,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}
