//! Watched-content queries.

use std::collections::{HashMap, HashSet};

use fbl_core::enums::TitleOrder;
use fbl_core::errors::CoreError;
use fbl_core::watched::WatchedContentSource;

use crate::CmsDb;
use crate::error::DatabaseError;
use crate::helpers::{get_id, placeholders};

impl CmsDb {
    /// Node ids flagged with `flag_id` by account `uid`, ordered by node title.
    ///
    /// Flags on nodes with no `node_field_data` row are kept; SQLite sorts
    /// their NULL titles first. A node with several translations appears once.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or an `entity_id` is not numeric.
    pub async fn fetch_flagged_content(
        &self,
        flag_id: &str,
        uid: u64,
        order: TitleOrder,
    ) -> Result<Vec<u64>, DatabaseError> {
        let uid = i64::try_from(uid)
            .map_err(|_| DatabaseError::Query(format!("account id {uid} out of range")))?;
        let sql = format!(
            "SELECT f.entity_id FROM flagging AS f \
             LEFT JOIN node_field_data AS n ON f.entity_id = n.nid \
             WHERE f.flag_id = ?1 AND f.uid = ?2 \
             ORDER BY n.title {}",
            order.as_sql()
        );

        let mut rows = self
            .conn()
            .query(&sql, libsql::params![flag_id, uid])
            .await?;

        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            let id = get_id(&row, 0)?;
            if seen.insert(id) {
                ids.push(id);
            }
        }

        tracing::debug!(flag_id, uid, count = ids.len(), "fetched flagged content");
        Ok(ids)
    }

    /// Titles for the given node ids. Unknown ids are absent from the map.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn node_titles(&self, ids: &[u64]) -> Result<HashMap<u64, String>, DatabaseError> {
        let mut titles = HashMap::new();
        if ids.is_empty() {
            return Ok(titles);
        }

        let params = ids
            .iter()
            .map(|id| {
                i64::try_from(*id)
                    .map(libsql::Value::Integer)
                    .map_err(|_| DatabaseError::Query(format!("node id {id} out of range")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let sql = format!(
            "SELECT nid, title FROM node_field_data WHERE nid IN ({}) ORDER BY nid, langcode",
            placeholders(params.len())
        );

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        while let Some(row) = rows.next().await? {
            let nid = get_id(&row, 0)?;
            let title = row.get::<String>(1)?;
            titles.entry(nid).or_insert(title);
        }
        Ok(titles)
    }
}

impl WatchedContentSource for CmsDb {
    async fn fetch_flagged_content(
        &self,
        flag_id: &str,
        uid: u64,
        order: TitleOrder,
    ) -> Result<Vec<u64>, CoreError> {
        Ok(Self::fetch_flagged_content(self, flag_id, uid, order).await?)
    }
}
