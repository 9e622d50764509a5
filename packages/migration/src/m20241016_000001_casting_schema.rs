use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Movies {
    Table,
    Id,
    Title,
    ReleaseDate,
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum MovieGenres {
    Table,
    MovieId,
    GenreId,
}

#[derive(Iden)]
enum Actors {
    Table,
    Id,
    Name,
    Surname,
    Dob,
    Gender,
}

#[derive(Iden)]
enum Interpretations {
    Table,
    Id,
    MovieId,
    ActorId,
    Character,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // movies
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(120).not_null())
                    .col(ColumnDef::new(Movies::ReleaseDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        // genres
        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Genres::Name)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // movie_genres (plain link table)
        manager
            .create_table(
                Table::create()
                    .table(MovieGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieGenres::MovieId).integer().not_null())
                    .col(ColumnDef::new(MovieGenres::GenreId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(MovieGenres::MovieId)
                            .col(MovieGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genres_movie_id")
                            .from(MovieGenres::Table, MovieGenres::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genres_genre_id")
                            .from(MovieGenres::Table, MovieGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // actors
        manager
            .create_table(
                Table::create()
                    .table(Actors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Actors::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Actors::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Actors::Surname).string_len(120).not_null())
                    .col(ColumnDef::new(Actors::Dob).date().not_null())
                    .col(ColumnDef::new(Actors::Gender).string_len(10).null())
                    .to_owned(),
            )
            .await?;

        // interpretations (actor plays character in movie)
        manager
            .create_table(
                Table::create()
                    .table(Interpretations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interpretations::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Interpretations::MovieId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Interpretations::ActorId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Interpretations::Character)
                            .string_len(120)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interpretations_movie_id")
                            .from(Interpretations::Table, Interpretations::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interpretations_actor_id")
                            .from(Interpretations::Table, Interpretations::ActorId)
                            .to(Actors::Table, Actors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_interpretations_movie_id")
                    .table(Interpretations::Table)
                    .col(Interpretations::MovieId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_interpretations_movie_id")
                    .table(Interpretations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Interpretations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Actors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieGenres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await?;

        Ok(())
    }
}
