use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::AccountId).string().not_null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::Purpose).string().not_null())
                    .col(ColumnDef::new(Payments::Method).string().not_null())
                    .col(ColumnDef::new(Payments::Reference).string().null())
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_account")
                    .table(Payments::Table)
                    .col(Payments::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::AccountId).string().not_null())
                    .col(ColumnDef::new(Reports::Category).string().not_null())
                    .col(ColumnDef::new(Reports::Description).string().not_null())
                    .col(ColumnDef::new(Reports::Block).string().null())
                    .col(ColumnDef::new(Reports::HouseId).string().null())
                    .col(ColumnDef::new(Reports::Status).string().not_null())
                    .col(ColumnDef::new(Reports::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reports_account")
                    .table(Reports::Table)
                    .col(Reports::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Emergencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Emergencies::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Emergencies::AccountId).string().not_null())
                    .col(ColumnDef::new(Emergencies::EmergencyType).string().not_null())
                    .col(ColumnDef::new(Emergencies::Description).string().not_null())
                    .col(ColumnDef::new(Emergencies::Location).string().null())
                    .col(ColumnDef::new(Emergencies::Status).string().not_null())
                    .col(
                        ColumnDef::new(Emergencies::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_emergencies_account")
                    .table(Emergencies::Table)
                    .col(Emergencies::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServiceRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceRequests::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequests::AccountId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequests::RequestType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRequests::Details).string().not_null())
                    .col(ColumnDef::new(ServiceRequests::Status).string().not_null())
                    .col(
                        ColumnDef::new(ServiceRequests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_requests_account")
                    .table(ServiceRequests::Table)
                    .col(ServiceRequests::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Constructions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Constructions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Constructions::AccountId).string().not_null())
                    .col(ColumnDef::new(Constructions::Project).string().not_null())
                    .col(ColumnDef::new(Constructions::Block).string().not_null())
                    .col(ColumnDef::new(Constructions::HouseId).string().not_null())
                    .col(ColumnDef::new(Constructions::StartDate).string().null())
                    .col(ColumnDef::new(Constructions::EndDate).string().null())
                    .col(
                        ColumnDef::new(Constructions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_constructions_block")
                    .table(Constructions::Table)
                    .col(Constructions::Block)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).string().not_null())
                    .col(ColumnDef::new(Notifications::Audience).string().not_null())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_audience")
                    .table(Notifications::Table)
                    .col(Notifications::Audience)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Constructions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Emergencies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    AccountId,
    Amount,
    Purpose,
    Method,
    Reference,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    AccountId,
    Category,
    Description,
    Block,
    HouseId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Emergencies {
    Table,
    Id,
    AccountId,
    EmergencyType,
    Description,
    Location,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ServiceRequests {
    Table,
    Id,
    AccountId,
    RequestType,
    Details,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Constructions {
    Table,
    Id,
    AccountId,
    Project,
    Block,
    HouseId,
    StartDate,
    EndDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    Title,
    Message,
    Audience,
    CreatedAt,
}
