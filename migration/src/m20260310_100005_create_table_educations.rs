use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Educations::Degree)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Educations::School)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Location).text())
                    .col(ColumnDef::new(Educations::StartDate).string_len(50))
                    .col(ColumnDef::new(Educations::EndDate).string_len(50))
                    .col(ColumnDef::new(Educations::Description).text())
                    .col(
                        ColumnDef::new(Educations::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Educations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Degree,
    School,
    Location,
    StartDate,
    EndDate,
    Description,
    Order,
    CreatedAt,
    UpdatedAt,
}
