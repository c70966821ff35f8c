#[cfg(test)]
mod tests {
    use taskman::db::db::{Db, DbTarget};
    use taskman::db::schema::ensure_schema;
    use taskman::db::tasks::Tasks;
    use taskman::libs::config::Config;
    use taskman::libs::task::TaskFilter;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SchemaTestContext {
        config: Config,
        _temp_dir: TempDir,
    }

    impl TestContext for SchemaTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config {
                data_dir: temp_dir.path().to_path_buf(),
                db_name: "taskman.db".to_string(),
                test_db_name: "taskman_test.db".to_string(),
            };
            SchemaTestContext { config, _temp_dir: temp_dir }
        }
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_ensure_schema_is_idempotent(ctx: &mut SchemaTestContext) {
        let db = Db::open(&ctx.config, DbTarget::Test).unwrap();
        ensure_schema(&db.conn);
        ensure_schema(&db.conn);

        // The table is usable after repeated initialization.
        let mut tasks = Tasks::new(db);
        tasks.insert("Still works", "Schema was not disturbed").unwrap();
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 1);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_constraints_reject_blank_fields(ctx: &mut SchemaTestContext) {
        let tasks = Tasks::open(&ctx.config, DbTarget::Test).unwrap();

        // Writes that bypass the repository still cannot store blank
        // names or descriptions.
        for sql in [
            "INSERT INTO tasks (name, description, created_on) VALUES ('', 'x', DATE('now'))",
            "INSERT INTO tasks (name, description, created_on) VALUES ('   ', 'x', DATE('now'))",
            "INSERT INTO tasks (name, description, created_on) VALUES ('x', '', DATE('now'))",
        ] {
            assert!(tasks.conn.execute(sql, []).is_err());
        }
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_constraints_bound_field_length(ctx: &mut SchemaTestContext) {
        let tasks = Tasks::open(&ctx.config, DbTarget::Test).unwrap();

        let long_name = "n".repeat(31);
        let long_description = "d".repeat(101);
        assert!(tasks
            .conn
            .execute(
                "INSERT INTO tasks (name, description, created_on) VALUES (?1, 'x', DATE('now'))",
                [&long_name],
            )
            .is_err());
        assert!(tasks
            .conn
            .execute(
                "INSERT INTO tasks (name, description, created_on) VALUES ('x', ?1, DATE('now'))",
                [&long_description],
            )
            .is_err());

        // The boundary values themselves are fine.
        assert!(tasks
            .conn
            .execute(
                "INSERT INTO tasks (name, description, created_on) VALUES (?1, ?2, DATE('now'))",
                [&"n".repeat(30), &"d".repeat(100)],
            )
            .is_ok());
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_constraints_close_the_status_set(ctx: &mut SchemaTestContext) {
        let tasks = Tasks::open(&ctx.config, DbTarget::Test).unwrap();

        assert!(tasks
            .conn
            .execute(
                "INSERT INTO tasks (name, description, status, created_on) VALUES ('x', 'y', 'paused', DATE('now'))",
                [],
            )
            .is_err());
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_status_defaults_to_not_started(ctx: &mut SchemaTestContext) {
        let mut tasks = Tasks::open(&ctx.config, DbTarget::Test).unwrap();

        tasks
            .conn
            .execute("INSERT INTO tasks (name, description, created_on) VALUES ('x', 'y', DATE('now'))", [])
            .unwrap();

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all[0].status, taskman::libs::task::TaskStatus::NotStarted);
    }
}
