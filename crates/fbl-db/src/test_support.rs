//! Fixture schema mirroring the CMS tables this crate reads.

use crate::CmsDb;

const SCHEMA: &str = "
CREATE TABLE flagging (
    id INTEGER PRIMARY KEY,
    flag_id TEXT NOT NULL,
    entity_type TEXT,
    entity_id TEXT,
    uid INTEGER NOT NULL
);
CREATE TABLE node_field_data (
    nid INTEGER NOT NULL,
    vid INTEGER NOT NULL,
    type TEXT NOT NULL,
    langcode TEXT NOT NULL,
    title TEXT NOT NULL,
    PRIMARY KEY (nid, langcode)
);
";

/// In-memory database with the CMS tables created and empty.
pub async fn cms_db() -> CmsDb {
    let db = CmsDb::open_local(":memory:").await.unwrap();
    db.conn().execute_batch(SCHEMA).await.unwrap();
    db
}

pub async fn add_node(db: &CmsDb, nid: i64, title: &str) {
    db.conn()
        .execute(
            "INSERT INTO node_field_data (nid, vid, type, langcode, title) \
             VALUES (?1, ?1, 'page', 'en', ?2)",
            libsql::params![nid, title],
        )
        .await
        .unwrap();
}

pub async fn flag(db: &CmsDb, flag_id: &str, uid: i64, entity_id: &str) {
    db.conn()
        .execute(
            "INSERT INTO flagging (flag_id, entity_type, entity_id, uid) \
             VALUES (?1, 'node', ?2, ?3)",
            libsql::params![flag_id, entity_id, uid],
        )
        .await
        .unwrap();
}
