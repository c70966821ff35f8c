#[cfg(test)]
mod tests {
    use taskman::db::db::DbTarget;
    use taskman::db::tasks::Tasks;
    use taskman::libs::config::Config;
    use taskman::libs::task::{TaskError, TaskFilter, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        config: Config,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config {
                data_dir: temp_dir.path().to_path_buf(),
                db_name: "taskman.db".to_string(),
                test_db_name: "taskman_test.db".to_string(),
            };
            TaskTestContext { config, _temp_dir: temp_dir }
        }
    }

    fn open_tasks(ctx: &TaskTestContext) -> Tasks {
        Tasks::open(&ctx.config, DbTarget::Test).unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_sets_status_and_date(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        let id = tasks.insert("Write report", "Quarterly summary for the team").unwrap();

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].name, "Write report");
        assert_eq!(all[0].description, "Quarterly summary for the team");
        assert_eq!(all[0].status, TaskStatus::NotStarted);
        assert_eq!(all[0].created_on, chrono::Local::now().date_naive());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_trims_whitespace(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        tasks.insert("  Buy milk  ", "  Two liters  ").unwrap();

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all[0].name, "Buy milk");
        assert_eq!(all[0].description, "Two liters");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_rejects_empty_fields(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        for (name, description) in [("", "x"), ("x", ""), ("   ", "x"), ("x", "   "), ("", "")] {
            let err = tasks.insert(name, description).unwrap_err();
            assert!(matches!(err, TaskError::EmptyField));
        }

        // Nothing was written on any of the failed attempts.
        assert!(tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        let id = tasks.insert("Refactor parser", "Split lexer from parser").unwrap();
        tasks.set_status(id, TaskStatus::Done).unwrap();

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all[0].status, TaskStatus::Done);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status_unknown_id(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        let id = tasks.insert("Only task", "Stays untouched").unwrap();
        let err = tasks.set_status(999_999, TaskStatus::Done).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(999_999)));

        // The existing row was not affected.
        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].status, TaskStatus::NotStarted);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        let id = tasks.insert("Temporary", "Will be removed").unwrap();
        tasks.delete(id).unwrap();

        assert!(tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_unknown_id(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        let id = tasks.insert("Keep me", "Not the delete target").unwrap();
        let err = tasks.delete(999_999).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(999_999)));

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_not_reused_after_delete(ctx: &mut TaskTestContext) {
        let mut tasks = open_tasks(ctx);

        let _first = tasks.insert("First", "first").unwrap();
        let second = tasks.insert("Second", "second").unwrap();
        tasks.delete(second).unwrap();

        let third = tasks.insert("Third", "third").unwrap();
        assert!(third > second);
    }
}
