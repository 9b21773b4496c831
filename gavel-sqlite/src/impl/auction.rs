use crate::Db;
use crate::types::{AuctionId, Timestamp};
use gavel_core::{
    models::{AuctionRecord, AuctionStatus},
    ports::AuctionRepository,
};

/// Flat row shape for the `auction` table.
///
/// Status and condition come back as their stored labels and are parsed into
/// the domain enums on conversion; a label no variant recognizes is a decode
/// error, not a silent default.
#[derive(sqlx::FromRow)]
struct AuctionRow {
    id: AuctionId,
    product_name: String,
    category: String,
    description: String,
    condition: String,
    status: String,
    created_at: Timestamp,
}

impl AuctionRow {
    fn into_record(self) -> Result<AuctionRecord<Timestamp, AuctionId>, sqlx::Error> {
        Ok(AuctionRecord {
            id: self.id,
            product_name: self.product_name,
            category: self.category,
            description: self.description,
            condition: self
                .condition
                .parse()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            status: self
                .status
                .parse()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            created_at: self.created_at,
        })
    }
}

impl AuctionRepository for Db {
    async fn insert_auction(
        &self,
        record: AuctionRecord<Timestamp, AuctionId>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            insert into
                auction (id, product_name, category, description, condition, status, created_at)
            values
                ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id)
        .bind(&record.product_name)
        .bind(&record.category)
        .bind(&record.description)
        .bind(record.condition.as_str())
        .bind(record.status.as_str())
        .bind(record.created_at)
        .execute(&self.writer)
        .await?;

        Ok(())
    }

    async fn get_auction(
        &self,
        auction_id: AuctionId,
    ) -> Result<Option<AuctionRecord<Timestamp, AuctionId>>, sqlx::Error> {
        let row: Option<AuctionRow> = sqlx::query_as(
            r#"
            select
                id, product_name, category, description, condition, status, created_at
            from
                auction
            where
                id = $1
            "#,
        )
        .bind(auction_id)
        .fetch_optional(&self.reader)
        .await?;

        row.map(AuctionRow::into_record).transpose()
    }

    async fn update_auction_status(
        &self,
        auction_id: AuctionId,
        expected: AuctionStatus,
        new: AuctionStatus,
    ) -> Result<u64, sqlx::Error> {
        // The status predicate makes the transition atomic: of any number of
        // racing callers, exactly one sees a nonzero row count.
        let result = sqlx::query(
            r#"
            update
                auction
            set
                status = $1
            where
                id = $2
            and
                status = $3
            "#,
        )
        .bind(new.as_str())
        .bind(auction_id)
        .bind(expected.as_str())
        .execute(&self.writer)
        .await?;

        Ok(result.rows_affected())
    }

    async fn query_active_older_than(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<AuctionRecord<Timestamp, AuctionId>>, sqlx::Error> {
        let rows: Vec<AuctionRow> = sqlx::query_as(
            r#"
            select
                id, product_name, category, description, condition, status, created_at
            from
                auction
            where
                status = $1
            and
                created_at <= $2
            order by
                created_at
            "#,
        )
        .bind(AuctionStatus::Active.as_str())
        .bind(cutoff)
        .fetch_all(&self.reader)
        .await?;

        rows.into_iter().map(AuctionRow::into_record).collect()
    }
}
