//! Migration: categories, exams and questions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Categories::Title).string().not_null())
                    .col(ColumnDef::new(Categories::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Exams::Title).string().not_null())
                    .col(ColumnDef::new(Exams::Description).string().not_null())
                    .col(
                        ColumnDef::new(Exams::MaxPoints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Exams::QuestionCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Exams::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Exams::CategoryId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exams_category_id")
                            .from(Exams::Table, Exams::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_exams_category_id_active")
                    .table(Exams::Table)
                    .col(Exams::CategoryId)
                    .col(Exams::Active)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Questions::Content).text().not_null())
                    .col(ColumnDef::new(Questions::Image).string().null())
                    .col(ColumnDef::new(Questions::Option1).string().not_null())
                    .col(ColumnDef::new(Questions::Option2).string().not_null())
                    .col(ColumnDef::new(Questions::Option3).string().not_null())
                    .col(ColumnDef::new(Questions::Option4).string().not_null())
                    .col(ColumnDef::new(Questions::Answer).string().not_null())
                    .col(ColumnDef::new(Questions::ExamId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_exam_id")
                            .from(Questions::Table, Questions::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_questions_exam_id")
                    .table(Questions::Table)
                    .col(Questions::ExamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Title,
    Description,
}

#[derive(Iden)]
enum Exams {
    Table,
    Id,
    Title,
    Description,
    MaxPoints,
    QuestionCount,
    Active,
    CategoryId,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Content,
    Image,
    #[iden = "option1"]
    Option1,
    #[iden = "option2"]
    Option2,
    #[iden = "option3"]
    Option3,
    #[iden = "option4"]
    Option4,
    Answer,
    ExamId,
}
