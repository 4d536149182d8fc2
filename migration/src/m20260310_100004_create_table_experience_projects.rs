use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceProjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::ExperienceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::Name)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::TeamSize)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::Responsibilities)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    // Child rows die with their experience; handlers never cascade by hand
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_projects_experience_id")
                            .from(ExperienceProjects::Table, ExperienceProjects::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experience_projects_experience_id
                ON experience_projects (experience_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_experience_projects_experience_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(ExperienceProjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExperienceProjects {
    Table,
    Id,
    ExperienceId,
    Name,
    Description,
    Technologies,
    TeamSize,
    Responsibilities,
    Order,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
}
