use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Abouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Abouts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Abouts::Key).string_len(100).not_null())
                    .col(ColumnDef::new(Abouts::Title).text())
                    .col(ColumnDef::new(Abouts::Content).text().not_null())
                    .col(
                        ColumnDef::new(Abouts::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Abouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Abouts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Section labels are addressed by key from the public site
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_abouts_key_unique
                ON abouts (key);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_abouts_key_unique;")
            .await?;

        manager
            .drop_table(Table::drop().table(Abouts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Abouts {
    Table,
    Id,
    Key,
    Title,
    Content,
    Order,
    CreatedAt,
    UpdatedAt,
}
