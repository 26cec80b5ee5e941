use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait, sea_query::Expr,
};

use crate::{
    entities::movie,
    error::StoreError,
    models::{NewMovie, UNREVIEWED},
    ranking,
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies, lowest rating first. Ties keep insertion order.
    pub async fn list_all(&self) -> Result<Vec<movie::Model>, StoreError> {
        Ok(ordered(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<movie::Model, StoreError> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(StoreError::NotFound(id))
    }

    pub async fn insert(&self, new: NewMovie) -> Result<i32, StoreError> {
        let title = new.title.clone();
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(Some(0.0)),
            ranking: Set(Some(0)),
            review: Set(Some(UNREVIEWED.to_string())),
            img_url: Set(new.img_url),
        };

        let inserted = model.insert(&self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::Conflict(title),
            _ => StoreError::Database(err),
        })?;

        tracing::info!(id = inserted.id, title = %inserted.title, "movie added");
        Ok(inserted.id)
    }

    /// Sets the personal rating and review, leaving every other column alone.
    pub async fn update(&self, id: i32, rating: f64, review: String) -> Result<(), StoreError> {
        let res = movie::Entity::update_many()
            .col_expr(movie::Column::Rating, Expr::value(Some(rating)))
            .col_expr(movie::Column::Review, Expr::value(Some(review)))
            .filter(movie::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::info!(id, rating, "movie reviewed");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::info!(id, "movie deleted");
        Ok(())
    }

    /// Recomputes every ranking and persists them in a single transaction.
    ///
    /// Returns the movies in the order they were ranked (lowest rating first).
    pub async fn rank_all(&self) -> Result<Vec<movie::Model>, StoreError> {
        let txn = self.db.begin().await?;

        let mut movies = ordered(&txn).await?;
        ranking::assign(&mut movies);

        for m in &movies {
            movie::Entity::update_many()
                .col_expr(movie::Column::Ranking, Expr::value(m.ranking))
                .filter(movie::Column::Id.eq(m.id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(movies = movies.len(), "rankings rewritten");
        Ok(movies)
    }
}

async fn ordered<C: ConnectionTrait>(conn: &C) -> Result<Vec<movie::Model>, sea_orm::DbErr> {
    movie::Entity::find()
        .order_by_asc(movie::Column::Rating)
        .order_by_asc(movie::Column::Id)
        .all(conn)
        .await
}
