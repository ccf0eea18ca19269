use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_organization_table::Organization,
    m20260301_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::OrganizerId))
                    .col(integer(Event::OrganizationId))
                    .col(string(Event::Name))
                    .col(text_null(Event::Description))
                    .col(date(Event::Date))
                    .col(string_null(Event::Time))
                    .col(string(Event::Venue))
                    .col(string_null(Event::Category))
                    .col(integer_null(Event::Capacity))
                    .col(string(Event::Status).default("pending"))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Event::ApprovedAt))
                    .col(timestamp_null(Event::RejectedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organizer_id")
                            .from(Event::Table, Event::OrganizerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organization_id")
                            .from(Event::Table, Event::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_organization_id")
                    .table(Event::Table)
                    .col(Event::OrganizationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    OrganizerId,
    OrganizationId,
    Name,
    Description,
    Date,
    Time,
    Venue,
    Category,
    Capacity,
    Status,
    CreatedAt,
    ApprovedAt,
    RejectedAt,
}
