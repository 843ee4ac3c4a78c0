#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use yarukoto::db::db::Db;
    use yarukoto::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("yarukoto.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl MigrationTestContext {
        /// Zero-length file, which SQLite treats as an empty database.
        fn touch(&self) {
            std::fs::File::create(&self.db_path).unwrap();
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        ctx.touch();
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        ctx.touch();
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let versions: Vec<u32> = history.iter().map(|m| m.version).collect();
        assert_eq!(versions, vec![1, 2]);
        assert_eq!(history[0].name, "create_tasks");
        assert!(manager.is_migration_applied(&conn, 2).unwrap());
        assert!(!manager.is_migration_applied(&conn, 3).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        ctx.touch();
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();

        init_with_migrations(&mut conn).unwrap();
        let version = get_db_version(&conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), version);
        assert_eq!(MigrationManager::new().get_migration_history(&conn).unwrap().len(), version as usize);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_has_expected_tables(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        for table in ["tasks", "users", "migrations"] {
            let count: i64 = db
                .conn
                .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [table], |row| row.get(0))
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_inspection_does_not_create_database(ctx: &mut MigrationTestContext) {
        assert!(Db::open_without_migrations(&ctx.db_path).is_err());
        assert!(!ctx.db_path.exists());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_corrupt_file_is_an_error(ctx: &mut MigrationTestContext) {
        std::fs::write(&ctx.db_path, "this is a text file, not a database\n".repeat(64)).unwrap();

        let version = Db::open_without_migrations(&ctx.db_path).and_then(|conn| get_db_version(&conn));
        assert!(version.is_err());
        let pending = Db::open_without_migrations(&ctx.db_path).and_then(|conn| needs_migration(&conn));
        assert!(pending.is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_untracked_database_reports_version_zero(ctx: &mut MigrationTestContext) {
        ctx.touch();
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        conn.execute("CREATE TABLE notes (body TEXT)", []).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(MigrationManager::new().get_migration_history(&conn).is_err());
    }
}
